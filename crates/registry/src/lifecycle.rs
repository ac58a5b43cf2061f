//! Destruction-lifecycle guard installed on every dispatched element.
//!
//! # State Machine
//!
//! ```text
//! Pending --attach--> Armed --detach(Permanent)--> Released
//!    |                  |
//!    +-----destroy------+-------destroy----------> Released
//! ```
//!
//! - `Pending` is inert: detach events are ignored until the element has been
//!   attached to a live tree at least once.
//! - `Armed` survives temporary detachment (e.g. a hidden back-stack entry).
//! - `Released` is terminal. Teardown callbacks have run exactly once and
//!   every further event is ignored.
//!
//! The guard cannot observe a detachment that never happens. An element that
//! is neither permanently detached nor explicitly destroyed never runs its
//! teardown; that obligation sits with the owning container.

use std::fmt;

/// Lifecycle state of a [`LifecycleGuard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
	Pending,
	Armed,
	Released,
}

/// How an element left the display tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetachKind {
	/// The element may be attached again later.
	Temporary,
	/// The element will never be attached again.
	Permanent,
}

type Teardown = Box<dyn FnOnce()>;

pub struct LifecycleGuard {
	owner: &'static str,
	state: GuardState,
	attached: bool,
	teardown: Vec<Teardown>,
}

impl LifecycleGuard {
	/// Creates a pending guard. `owner` names the element for diagnostics.
	pub fn new(owner: &'static str) -> Self {
		Self {
			owner,
			state: GuardState::Pending,
			attached: false,
			teardown: Vec::new(),
		}
	}

	pub fn state(&self) -> GuardState {
		self.state
	}

	pub fn owner(&self) -> &'static str {
		self.owner
	}

	pub fn is_attached(&self) -> bool {
		self.attached
	}

	pub fn is_released(&self) -> bool {
		self.state == GuardState::Released
	}

	/// Registers work to run on release. Runs immediately if already released.
	pub fn on_release(&mut self, teardown: impl FnOnce() + 'static) {
		if self.is_released() {
			teardown();
		} else {
			self.teardown.push(Box::new(teardown));
		}
	}

	/// The element was attached to a live display tree.
	pub fn attach(&mut self) {
		match self.state {
			GuardState::Pending => {
				tracing::trace!(owner = self.owner, "lifecycle guard armed");
				self.state = GuardState::Armed;
				self.attached = true;
			}
			GuardState::Armed => self.attached = true,
			GuardState::Released => {
				tracing::warn!(owner = self.owner, "attach after release ignored");
			}
		}
	}

	/// The element was detached from the display tree.
	pub fn detach(&mut self, kind: DetachKind) {
		match (self.state, kind) {
			(GuardState::Pending, _) | (GuardState::Released, _) => {}
			(GuardState::Armed, DetachKind::Temporary) => self.attached = false,
			(GuardState::Armed, DetachKind::Permanent) => self.release("detached"),
		}
	}

	/// Explicit early destroy, ahead of final detachment.
	pub fn destroy(&mut self) {
		if !self.is_released() {
			self.release("destroyed");
		}
	}

	fn release(&mut self, reason: &'static str) {
		self.state = GuardState::Released;
		self.attached = false;
		let teardown = std::mem::take(&mut self.teardown);
		tracing::trace!(
			owner = self.owner,
			reason,
			callbacks = teardown.len(),
			"lifecycle guard released"
		);
		for callback in teardown {
			callback();
		}
	}
}

impl Drop for LifecycleGuard {
	fn drop(&mut self) {
		if !self.teardown.is_empty() && !self.is_released() {
			tracing::debug!(
				owner = self.owner,
				state = ?self.state,
				pending = self.teardown.len(),
				"lifecycle guard dropped without release; teardown skipped"
			);
		}
	}
}

impl fmt::Debug for LifecycleGuard {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("LifecycleGuard")
			.field("owner", &self.owner)
			.field("state", &self.state)
			.field("attached", &self.attached)
			.field("teardown", &self.teardown.len())
			.finish()
	}
}
