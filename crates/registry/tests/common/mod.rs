use std::rc::Rc;

use trellis_registry::{
	BuildContext, Element, ElementView, Environment, FactoryRef, Rendering, factory_fn,
};

pub fn init_tracing() {
	let _ = tracing_subscriber::fmt::try_init();
}

#[derive(Debug)]
pub struct HomeRendering;

impl Rendering for HomeRendering {}

#[derive(Debug)]
pub struct SettingsRendering;

impl Rendering for SettingsRendering {
	fn default_factory(&self) -> Option<FactoryRef> {
		Some(label_factory::<SettingsRendering>("settings (self-described)"))
	}
}

#[derive(Debug, Default)]
pub struct Label {
	pub text: &'static str,
}

impl ElementView for Label {}

pub fn label_factory<R: Rendering>(text: &'static str) -> FactoryRef {
	factory_fn(move |rendering: Rc<R>, ctx: &BuildContext<'_>| {
		let mut element = Element::new(ctx.host.clone(), Label::default());
		element.bind(
			rendering,
			ctx.environment,
			move |label: &mut Label, _: &R, _: &Environment| label.text = text,
		)?;
		Ok(element)
	})
}
