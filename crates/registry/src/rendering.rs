use std::any::Any;
use std::fmt;
use std::rc::Rc;

use trellis_primitives::{CompatibilityKey, RenderingType};

use crate::FactoryRef;

/// Shared handle to an immutable rendering.
pub type RenderingRef = Rc<dyn Rendering>;

/// An immutable description of what a display element should show.
pub trait Rendering: Any + fmt::Debug {
	/// Runtime type identity used for registry dispatch.
	///
	/// The provided implementation is the only correct one; overriding it
	/// makes dispatch resolve a factory that cannot downcast the rendering.
	fn rendering_type(&self) -> RenderingType {
		RenderingType::of::<Self>()
	}

	/// Identity of the slot this rendering occupies.
	///
	/// Defaults to the type identity alone. Renderings that appear several
	/// times in one container override this to add an instance name.
	fn compatibility_key(&self) -> CompatibilityKey {
		CompatibilityKey::new(self.rendering_type(), None)
	}

	/// Factory used when no registry entry exists for this rendering's type.
	fn default_factory(&self) -> Option<FactoryRef> {
		None
	}
}

/// Returns true if `a` may replace `b` in the same display element.
pub fn compatible(a: &dyn Rendering, b: &dyn Rendering) -> bool {
	a.compatibility_key() == b.compatibility_key()
}

pub(crate) fn downcast_rendering<R: Rendering>(rendering: &RenderingRef) -> Option<Rc<R>> {
	let any: Rc<dyn Any> = rendering.clone();
	any.downcast::<R>().ok()
}

pub(crate) fn downcast_ref<'a, R: Rendering>(
	rendering: &'a (dyn Rendering + 'static),
) -> Option<&'a R> {
	(rendering as &dyn Any).downcast_ref::<R>()
}
