use std::rc::Rc;

use trellis_registry::{
	BuildContext, CompatibilityKey, Element, ElementView, Environment, Registry, Rendering,
	RenderingRef, StateBlob, factory_fn,
};

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt::try_init();
}

/// A screen in a back stack, keyed by its route.
#[derive(Debug)]
pub struct Screen {
	pub route: &'static str,
}

impl Rendering for Screen {
	fn compatibility_key(&self) -> CompatibilityKey {
		CompatibilityKey::new(self.rendering_type(), Some(self.route))
	}
}

/// Scroll position survives a trip into the view-state cache; the route is
/// re-applied on every update.
#[derive(Debug, Default)]
pub struct ScreenView {
	pub route: &'static str,
	pub scroll: u32,
}

impl ElementView for ScreenView {
	fn save_state(&self) -> StateBlob {
		StateBlob::encode(&self.scroll).unwrap()
	}

	fn restore_state(&mut self, state: &StateBlob) {
		self.scroll = state.decode().unwrap();
	}
}

pub fn screen(route: &'static str) -> RenderingRef {
	Rc::new(Screen { route })
}

pub fn screen_environment() -> Environment {
	let factory = factory_fn(|screen: Rc<Screen>, ctx: &BuildContext<'_>| {
		let mut element = Element::new(ctx.host.clone(), ScreenView::default());
		element.bind(
			screen,
			ctx.environment,
			|view: &mut ScreenView, screen: &Screen, _: &Environment| view.route = screen.route,
		)?;
		Ok(element)
	});
	Environment::from(Registry::new([factory]).unwrap())
}
