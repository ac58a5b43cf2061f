use std::marker::PhantomData;
use std::rc::Rc;

use crate::{
	BindingError, BuildContext, Element, Environment, Factory, FactoryRef, Rendering,
	RenderingRef, build_element,
};

/// Factory for a rendering that wraps another rendering.
///
/// The outer rendering (and environment) is mapped to an inner one, the inner
/// one is dispatched normally, and the resulting element is re-bound to the
/// outer rendering so later updates keep flowing through the same mapping.
pub struct DecorativeFactory<R, M> {
	map: Rc<M>,
	_rendering: PhantomData<fn() -> R>,
}

impl<R, M> DecorativeFactory<R, M>
where
	R: Rendering,
	M: Fn(&R, &Environment) -> (RenderingRef, Environment) + 'static,
{
	pub fn new(map: M) -> Self {
		Self {
			map: Rc::new(map),
			_rendering: PhantomData,
		}
	}
}

impl<R, M> Factory for DecorativeFactory<R, M>
where
	R: Rendering,
	M: Fn(&R, &Environment) -> (RenderingRef, Environment) + 'static,
{
	type Rendering = R;

	fn build(&self, rendering: Rc<R>, ctx: &BuildContext<'_>) -> Result<Element, BindingError> {
		let (inner, inner_env) = (self.map)(&*rendering, ctx.environment);
		let mut element = build_element(inner, &inner_env, ctx.host, ctx.container)?;
		let map = Rc::clone(&self.map);
		element.rebind(rendering, ctx.environment, move |outer, env| map(outer, env))?;
		Ok(element)
	}
}

/// Shorthand for a [`DecorativeFactory`] as a [`FactoryRef`].
pub fn decorative_factory<R, M>(map: M) -> FactoryRef
where
	R: Rendering,
	M: Fn(&R, &Environment) -> (RenderingRef, Environment) + 'static,
{
	Rc::new(DecorativeFactory::new(map))
}
