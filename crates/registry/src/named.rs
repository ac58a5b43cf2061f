use std::rc::Rc;

use trellis_primitives::CompatibilityKey;

use crate::{FactoryRef, Rendering, RenderingRef, decorative_factory};

/// Gives a rendering an instance name, so several renderings of the same type
/// can occupy distinct slots of one container.
///
/// `Named` is self-describing: without a registry entry of its own it is
/// displayed by the factory of the wrapped rendering.
#[derive(Debug, Clone)]
pub struct Named {
	wrapped: RenderingRef,
	name: String,
}

impl Named {
	pub fn new(wrapped: impl Rendering, name: impl Into<String>) -> Self {
		Self::from_ref(Rc::new(wrapped), name)
	}

	pub fn from_ref(wrapped: RenderingRef, name: impl Into<String>) -> Self {
		Self {
			wrapped,
			name: name.into(),
		}
	}

	pub fn wrapped(&self) -> &RenderingRef {
		&self.wrapped
	}

	pub fn name(&self) -> &str {
		&self.name
	}
}

impl Rendering for Named {
	fn compatibility_key(&self) -> CompatibilityKey {
		CompatibilityKey::named(
			&self.wrapped.compatibility_key(),
			&format!("Named({})", self.name),
		)
	}

	fn default_factory(&self) -> Option<FactoryRef> {
		Some(decorative_factory(|named: &Named, env| {
			(Rc::clone(&named.wrapped), env.clone())
		}))
	}
}
