use std::marker::PhantomData;
use std::rc::Rc;

use trellis_primitives::RenderingType;

use crate::rendering::downcast_rendering;
use crate::{BindingError, Element, Environment, HostContext, Rendering, RenderingRef};

/// Everything a factory receives besides the rendering itself.
#[derive(Clone, Copy)]
pub struct BuildContext<'a> {
	pub environment: &'a Environment,
	pub host: &'a HostContext,
	/// Element the new element will be placed in, if known.
	pub container: Option<&'a Element>,
}

/// Builds display elements for exactly one rendering type.
///
/// The returned element must already be bound (see [`Element::bind`]) to the
/// rendering it was built for. Dispatch verifies this and rejects the element
/// with [`BindingError::UnboundElement`] otherwise.
pub trait Factory: 'static {
	type Rendering: Rendering;

	fn build(
		&self,
		rendering: Rc<Self::Rendering>,
		ctx: &BuildContext<'_>,
	) -> Result<Element, BindingError>;
}

/// Type-erased [`Factory`] as stored in a [`crate::Registry`].
pub trait AnyFactory {
	fn rendering_type(&self) -> RenderingType;

	/// Narrows `rendering` to the factory's type and builds it.
	fn build_any(
		&self,
		rendering: &RenderingRef,
		ctx: &BuildContext<'_>,
	) -> Result<Element, BindingError>;
}

impl<F: Factory> AnyFactory for F {
	fn rendering_type(&self) -> RenderingType {
		RenderingType::of::<F::Rendering>()
	}

	fn build_any(
		&self,
		rendering: &RenderingRef,
		ctx: &BuildContext<'_>,
	) -> Result<Element, BindingError> {
		let typed = downcast_rendering::<F::Rendering>(rendering).ok_or_else(|| {
			BindingError::FactoryTypeMismatch {
				factory_type: RenderingType::of::<F::Rendering>(),
				rendering_type: rendering.rendering_type(),
			}
		})?;
		self.build(typed, ctx)
	}
}

pub type FactoryRef = Rc<dyn AnyFactory>;

/// Factory backed by a closure.
pub struct FnFactory<R, F> {
	build: F,
	_rendering: PhantomData<fn() -> R>,
}

impl<R, F> Factory for FnFactory<R, F>
where
	R: Rendering,
	F: Fn(Rc<R>, &BuildContext<'_>) -> Result<Element, BindingError> + 'static,
{
	type Rendering = R;

	fn build(&self, rendering: Rc<R>, ctx: &BuildContext<'_>) -> Result<Element, BindingError> {
		(self.build)(rendering, ctx)
	}
}

/// Wraps a closure as a factory for `R`.
pub fn factory_fn<R, F>(build: F) -> FactoryRef
where
	R: Rendering,
	F: Fn(Rc<R>, &BuildContext<'_>) -> Result<Element, BindingError> + 'static,
{
	Rc::new(FnFactory {
		build,
		_rendering: PhantomData,
	})
}
