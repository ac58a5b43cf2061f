//! Display elements produced by factories.
//!
//! An [`Element`] pairs a host-specific [`ElementView`] with the rendering it
//! is bound to, the closure that redisplays compatible renderings, and the one
//! [`LifecycleGuard`] slot that dispatch fills.

use std::any::{Any, type_name};
use std::fmt;
use std::rc::Rc;

use trellis_primitives::{CompatibilityKey, RenderingType, StateBlob};

use crate::lifecycle::{DetachKind, LifecycleGuard};
use crate::rendering::downcast_ref;
use crate::{BindingError, Environment, HostContext, Rendering, RenderingRef};

/// Host-specific node behind an [`Element`].
pub trait ElementView: Any {
	/// Snapshot of the view's volatile state.
	fn save_state(&self) -> StateBlob {
		StateBlob::empty()
	}

	/// Restores a snapshot produced by [`ElementView::save_state`].
	fn restore_state(&mut self, state: &StateBlob) {
		let _ = state;
	}
}

// Trait objects must be `'static` to downcast.
type ShowFn = Box<
	dyn FnMut(
		&mut (dyn ElementView + 'static),
		&(dyn Rendering + 'static),
		&Environment,
	) -> Result<(), BindingError>,
>;

struct Binding {
	rendering: RenderingRef,
	environment: Environment,
	show: ShowFn,
}

pub struct Element {
	host: HostContext,
	view: Box<dyn ElementView>,
	view_type: &'static str,
	binding: Option<Binding>,
	guard: Option<LifecycleGuard>,
}

impl Element {
	/// Wraps an unbound view. Factories must call [`Element::bind`] before
	/// returning it.
	pub fn new<V: ElementView>(host: HostContext, view: V) -> Self {
		Self {
			host,
			view: Box::new(view),
			view_type: type_name::<V>(),
			binding: None,
			guard: None,
		}
	}

	pub fn host(&self) -> &HostContext {
		&self.host
	}

	pub fn view<V: ElementView>(&self) -> Option<&V> {
		(&*self.view as &dyn Any).downcast_ref::<V>()
	}

	pub fn view_mut<V: ElementView>(&mut self) -> Option<&mut V> {
		(&mut *self.view as &mut dyn Any).downcast_mut::<V>()
	}

	/// Fully qualified type name of the wrapped view.
	pub fn view_type(&self) -> &'static str {
		self.view_type
	}

	/// Binds the element to `rendering` and shows it immediately.
	///
	/// `update` is called again for every compatible rendering passed to
	/// [`Element::show_rendering`]. Fails, leaving the element unbound, if
	/// the element does not wrap a `V`.
	pub fn bind<R, V>(
		&mut self,
		rendering: Rc<R>,
		environment: &Environment,
		mut update: impl FnMut(&mut V, &R, &Environment) + 'static,
	) -> Result<(), BindingError>
	where
		R: Rendering,
		V: ElementView,
	{
		if !(&*self.view as &dyn Any).is::<V>() {
			return Err(BindingError::ViewTypeMismatch {
				expected: type_name::<V>(),
				actual: self.view_type,
			});
		}
		let view_type = self.view_type;
		let mut show: ShowFn = Box::new(
			move |view: &mut (dyn ElementView + 'static),
			      rendering: &(dyn Rendering + 'static),
			      env: &Environment|
			      -> Result<(), BindingError> {
				let view = (view as &mut dyn Any).downcast_mut::<V>().ok_or_else(|| {
					BindingError::ViewTypeMismatch {
						expected: type_name::<V>(),
						actual: view_type,
					}
				})?;
				let rendering = downcast_ref::<R>(rendering).ok_or_else(|| {
					BindingError::RenderingTypeMismatch {
						expected: RenderingType::of::<R>(),
						actual: rendering.rendering_type(),
					}
				})?;
				update(view, rendering, env);
				Ok(())
			},
		);
		show(&mut *self.view, &*rendering, environment)?;
		self.binding = Some(Binding {
			rendering,
			environment: environment.clone(),
			show,
		});
		Ok(())
	}

	/// Re-binds an already bound element to an outer rendering.
	///
	/// Later updates map the outer rendering through `map` and feed the result
	/// to the previous binding. Used by decorative factories, which build the
	/// element for an inner rendering first.
	pub fn rebind<R: Rendering>(
		&mut self,
		rendering: Rc<R>,
		environment: &Environment,
		map: impl Fn(&R, &Environment) -> (RenderingRef, Environment) + 'static,
	) -> Result<(), BindingError> {
		let Binding {
			show: mut inner_show,
			..
		} = self.binding.take().ok_or(BindingError::Unbound)?;
		let show: ShowFn = Box::new(
			move |view: &mut (dyn ElementView + 'static),
			      outer: &(dyn Rendering + 'static),
			      env: &Environment|
			      -> Result<(), BindingError> {
				let outer = downcast_ref::<R>(outer).ok_or_else(|| {
					BindingError::RenderingTypeMismatch {
						expected: RenderingType::of::<R>(),
						actual: outer.rendering_type(),
					}
				})?;
				let (inner, inner_env) = map(outer, env);
				inner_show(view, &*inner, &inner_env)
			},
		);
		self.binding = Some(Binding {
			rendering,
			environment: environment.clone(),
			show,
		});
		Ok(())
	}

	/// Redisplays a compatible rendering in place.
	///
	/// The bound rendering is only replaced once the update succeeded.
	pub fn show_rendering(
		&mut self,
		rendering: RenderingRef,
		environment: &Environment,
	) -> Result<(), BindingError> {
		let binding = self.binding.as_mut().ok_or(BindingError::Unbound)?;
		let current = binding.rendering.compatibility_key();
		let incoming = rendering.compatibility_key();
		if current != incoming {
			return Err(BindingError::IncompatibleRendering { current, incoming });
		}
		(binding.show)(&mut *self.view, &*rendering, environment)?;
		binding.rendering = rendering;
		binding.environment = environment.clone();
		Ok(())
	}

	pub fn is_bound(&self) -> bool {
		self.binding.is_some()
	}

	/// The rendering currently bound to this element.
	pub fn rendering(&self) -> Option<&RenderingRef> {
		self.binding.as_ref().map(|b| &b.rendering)
	}

	/// Environment of the last shown rendering.
	pub fn environment(&self) -> Option<&Environment> {
		self.binding.as_ref().map(|b| &b.environment)
	}

	pub fn compatibility_key(&self) -> Option<CompatibilityKey> {
		self.rendering().map(|r| r.compatibility_key())
	}

	pub fn save_state(&self) -> StateBlob {
		self.view.save_state()
	}

	pub fn restore_state(&mut self, state: &StateBlob) {
		self.view.restore_state(state);
	}

	/// Fills the guard slot. Returns false, dropping `guard`, if the slot is
	/// already occupied.
	pub fn install_guard(&mut self, guard: LifecycleGuard) -> bool {
		if self.guard.is_some() {
			return false;
		}
		self.guard = Some(guard);
		true
	}

	pub fn guard(&self) -> Option<&LifecycleGuard> {
		self.guard.as_ref()
	}

	pub fn guard_mut(&mut self) -> Option<&mut LifecycleGuard> {
		self.guard.as_mut()
	}

	/// Host signal: the element joined a live display tree.
	pub fn attach(&mut self) {
		if let Some(guard) = &mut self.guard {
			guard.attach();
		}
	}

	/// Host signal: the element left the display tree.
	pub fn detach(&mut self, kind: DetachKind) {
		if let Some(guard) = &mut self.guard {
			guard.detach(kind);
		}
	}

	/// Releases the element's guard ahead of final detachment.
	pub fn destroy(&mut self) {
		if let Some(guard) = &mut self.guard {
			guard.destroy();
		}
	}
}

impl fmt::Debug for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Element")
			.field("view", &self.view_type)
			.field("rendering", &self.rendering())
			.field("guard", &self.guard)
			.finish_non_exhaustive()
	}
}
