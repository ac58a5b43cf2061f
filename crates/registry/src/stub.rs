use tracing::trace;

use crate::{
	BindingError, DetachKind, Element, Environment, HostContext, RenderingRef, build_element,
};

/// Single-slot placeholder that keeps showing whatever rendering it is given.
///
/// Compatible renderings update the current element in place. Anything else
/// builds a replacement through dispatch; the old element is permanently
/// detached (or destroyed, if the stub was never attached) and dropped.
pub struct ElementStub {
	host: HostContext,
	actual: Option<Element>,
	attached: bool,
}

impl ElementStub {
	pub fn new(host: HostContext) -> Self {
		Self {
			host,
			actual: None,
			attached: false,
		}
	}

	pub fn actual(&self) -> Option<&Element> {
		self.actual.as_ref()
	}

	pub fn actual_mut(&mut self) -> Option<&mut Element> {
		self.actual.as_mut()
	}

	pub fn is_attached(&self) -> bool {
		self.attached
	}

	pub fn attach(&mut self) {
		self.attached = true;
		if let Some(actual) = &mut self.actual {
			actual.attach();
		}
	}

	pub fn detach(&mut self, kind: DetachKind) {
		self.attached = false;
		if let Some(actual) = &mut self.actual {
			actual.detach(kind);
		}
	}

	/// Shows `rendering`, replacing the current element if incompatible.
	pub fn show(
		&mut self,
		rendering: RenderingRef,
		environment: &Environment,
	) -> Result<&mut Element, BindingError> {
		let incoming = rendering.compatibility_key();
		let reuse = self
			.actual
			.as_ref()
			.and_then(Element::compatibility_key)
			.is_some_and(|current| current == incoming);

		if reuse && let Some(actual) = self.actual.as_mut() {
			actual.show_rendering(rendering, environment)?;
		} else {
			let mut replacement = build_element(rendering, environment, &self.host, None)?;
			if let Some(mut old) = self.actual.take() {
				trace!(old = ?old.compatibility_key(), new = %incoming, "replacing stub element");
				if self.attached {
					old.detach(DetachKind::Permanent);
				} else {
					old.destroy();
				}
			}
			if self.attached {
				replacement.attach();
			}
			self.actual = Some(replacement);
		}
		self.actual.as_mut().ok_or(BindingError::Unbound)
	}

	/// Removes the current element, leaving its lifecycle to the caller.
	pub fn take(&mut self) -> Option<Element> {
		self.actual.take()
	}
}
