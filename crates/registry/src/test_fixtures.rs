use std::cell::Cell;
use std::rc::Rc;

use trellis_primitives::StateBlob;

use crate::{
	BuildContext, Element, ElementView, Environment, FactoryRef, Registry, Rendering, factory_fn,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Home {
	pub title: String,
}

impl Home {
	pub fn new(title: &str) -> Self {
		Self {
			title: title.to_owned(),
		}
	}
}

impl Rendering for Home {}

/// Self-describing: carries its own fallback factory.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
	pub section: String,
}

impl Settings {
	pub fn new(section: &str) -> Self {
		Self {
			section: section.to_owned(),
		}
	}
}

impl Rendering for Settings {
	fn default_factory(&self) -> Option<FactoryRef> {
		Some(text_factory::<Settings>("fallback", |s| s.section.clone()))
	}
}

/// No registry entry, no fallback.
#[derive(Debug)]
pub struct Orphan;

impl Rendering for Orphan {}

/// Claims a fallback factory that builds a different type.
#[derive(Debug)]
pub struct Impostor;

impl Rendering for Impostor {
	fn default_factory(&self) -> Option<FactoryRef> {
		Some(home_factory())
	}
}

/// Distinct rendering types for registry property tests.
#[derive(Debug)]
pub struct Slot<const N: usize>;

impl<const N: usize> Rendering for Slot<N> {}

#[derive(Debug, Default)]
pub struct TextView {
	pub text: String,
	pub source: &'static str,
	pub scroll: u32,
	pub updates: u32,
	pub had_container: bool,
}

impl ElementView for TextView {
	fn save_state(&self) -> StateBlob {
		StateBlob::encode(&self.scroll).unwrap_or_default()
	}

	fn restore_state(&mut self, state: &StateBlob) {
		if let Ok(scroll) = state.decode() {
			self.scroll = scroll;
		}
	}
}

pub fn text_factory<R: Rendering>(source: &'static str, text: fn(&R) -> String) -> FactoryRef {
	factory_fn(move |rendering: Rc<R>, ctx: &BuildContext<'_>| {
		let view = TextView {
			source,
			had_container: ctx.container.is_some(),
			..TextView::default()
		};
		let mut element = Element::new(ctx.host.clone(), view);
		element.bind(
			rendering,
			ctx.environment,
			move |view: &mut TextView, rendering: &R, _env: &Environment| {
				view.text = text(rendering);
				view.updates += 1;
			},
		)?;
		Ok(element)
	})
}

pub fn home_factory() -> FactoryRef {
	text_factory::<Home>("registry", |h| h.title.clone())
}

pub fn settings_factory() -> FactoryRef {
	text_factory::<Settings>("registry", |s| s.section.clone())
}

pub fn slot_factory<const N: usize>() -> FactoryRef {
	text_factory::<Slot<N>>("registry", |_| N.to_string())
}

/// Factory that forgets to bind its element.
pub fn unbound_home_factory() -> FactoryRef {
	factory_fn(|_: Rc<Home>, ctx: &BuildContext<'_>| {
		Ok(Element::new(ctx.host.clone(), TextView::default()))
	})
}

/// Factory that binds its element to the wrong rendering.
pub fn misbound_home_factory() -> FactoryRef {
	factory_fn(|_: Rc<Home>, ctx: &BuildContext<'_>| {
		let mut element = Element::new(ctx.host.clone(), TextView::default());
		element.bind(
			Rc::new(Settings::new("wrong")),
			ctx.environment,
			|_: &mut TextView, _: &Settings, _: &Environment| {},
		)?;
		Ok(element)
	})
}

pub fn env_with(factories: Vec<FactoryRef>) -> Environment {
	Environment::from(Registry::new(factories).expect("fixture factories are unique"))
}

pub fn text_view(element: &Element) -> &TextView {
	element.view::<TextView>().expect("fixture elements hold a TextView")
}

/// Counts how often an element's guard runs its teardown.
pub fn count_teardown(element: &mut Element) -> Rc<Cell<u32>> {
	let count = Rc::new(Cell::new(0));
	let seen = Rc::clone(&count);
	element
		.guard_mut()
		.expect("dispatched elements carry a guard")
		.on_release(move || seen.set(seen.get() + 1));
	count
}
