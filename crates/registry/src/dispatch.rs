//! Factory dispatch.
//!
//! # Resolution Order
//!
//! 1. The registry found in the environment, by the rendering's runtime type.
//! 2. The rendering's own [`crate::Rendering::default_factory`], unless
//!    disabled by [`DispatchConfig::self_describing_fallback`].
//!
//! A registry entry always wins over a self-describing factory. Dispatch
//! performs no caching and no retries; factory errors propagate as-is.

use std::rc::Rc;

use tracing::trace;

use crate::{
	BindingError, BuildContext, DispatchConfigKey, Element, Environment, FactoryRef,
	HostContext, LifecycleGuard, RenderingRef,
};

/// Builds a bound, guarded element for `rendering`.
///
/// The returned element carries a [`LifecycleGuard`] that stays inert until
/// the element is first attached. The caller must eventually detach it
/// permanently or call [`Element::destroy`]; otherwise its teardown never runs.
pub fn build_element(
	rendering: RenderingRef,
	environment: &Environment,
	host: &HostContext,
	container: Option<&Element>,
) -> Result<Element, BindingError> {
	let rendering_type = rendering.rendering_type();
	let factory = resolve_factory(&rendering, environment)?;
	if factory.rendering_type() != rendering_type {
		return Err(BindingError::FactoryTypeMismatch {
			factory_type: factory.rendering_type(),
			rendering_type,
		});
	}

	let ctx = BuildContext {
		environment,
		host,
		container,
	};
	let mut element = factory.build_any(&rendering, &ctx)?;

	let expected = rendering.compatibility_key();
	let bound = element.compatibility_key();
	if bound.as_ref() != Some(&expected) {
		return Err(BindingError::UnboundElement {
			rendering_type,
			expected,
			bound,
		});
	}

	if !element.install_guard(LifecycleGuard::new(rendering_type.name())) {
		trace!(rendering = %rendering_type, "keeping lifecycle guard installed by factory");
	}
	Ok(element)
}

/// [`build_element`] with the host taken from the container the element
/// will be placed in.
pub fn build_element_in(
	rendering: RenderingRef,
	environment: &Environment,
	container: &Element,
) -> Result<Element, BindingError> {
	build_element(rendering, environment, container.host(), Some(container))
}

fn resolve_factory(
	rendering: &RenderingRef,
	environment: &Environment,
) -> Result<FactoryRef, BindingError> {
	let rendering_type = rendering.rendering_type();
	let registry = environment.registry();
	if let Some(factory) = registry.get_factory_for(rendering_type) {
		trace!(rendering = %rendering_type, source = "registry", "factory resolved");
		return Ok(Rc::clone(factory));
	}

	if environment.get::<DispatchConfigKey>().self_describing_fallback
		&& let Some(factory) = rendering.default_factory()
	{
		trace!(rendering = %rendering_type, source = "self-describing", "factory resolved");
		return Ok(factory);
	}

	Err(BindingError::NoFactoryFound { rendering_type })
}
