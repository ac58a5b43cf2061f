use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Opaque handle to the host that owns the display tree.
///
/// Factories receive it to create host-specific views; elements remember the
/// host they were built with so nested dispatch can reuse it.
#[derive(Clone)]
pub struct HostContext {
	inner: Rc<dyn Any>,
}

impl HostContext {
	pub fn new<T: Any>(host: T) -> Self {
		Self {
			inner: Rc::new(host),
		}
	}

	/// A host with no payload, for headless use.
	pub fn detached() -> Self {
		Self::new(())
	}

	/// Returns the host payload if it is a `T`.
	pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
		self.inner.downcast_ref::<T>()
	}

	/// Returns true if both handles point at the same host.
	pub fn same_host(&self, other: &HostContext) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}
}

impl fmt::Debug for HostContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HostContext").finish_non_exhaustive()
	}
}
