use trellis_primitives::{CompatibilityKey, RenderingType};

/// Binding and dispatch failures.
///
/// Every variant is a contract violation by a registry author, a factory or
/// the calling container. None of them is retried or recovered internally.
#[derive(Debug, Clone, thiserror::Error)]
pub enum BindingError {
	/// Two factories claim the same rendering type, directly or across a merge.
	#[error("duplicate binding for rendering type {rendering_type}")]
	DuplicateBinding { rendering_type: RenderingType },

	/// Neither the registry nor the rendering itself provides a factory.
	#[error(
		"no factory found for rendering type {rendering_type}; register one or implement Rendering::default_factory"
	)]
	NoFactoryFound { rendering_type: RenderingType },

	/// A factory returned an element that is not bound to the rendering it built.
	#[error(
		"factory for {rendering_type} returned an element not bound to its rendering: expected={expected} bound={bound:?}"
	)]
	UnboundElement {
		rendering_type: RenderingType,
		expected: CompatibilityKey,
		bound: Option<CompatibilityKey>,
	},

	/// A factory was asked to build a rendering of a type it does not handle.
	#[error("factory for {factory_type} cannot build rendering type {rendering_type}")]
	FactoryTypeMismatch {
		factory_type: RenderingType,
		rendering_type: RenderingType,
	},

	/// A binding was declared for a view type the element does not wrap.
	#[error("binding expects view {expected} but the element wraps {actual}")]
	ViewTypeMismatch {
		expected: &'static str,
		actual: &'static str,
	},

	/// A binding was handed a rendering of another type under an equal key.
	#[error("binding for {expected} was handed a {actual}")]
	RenderingTypeMismatch {
		expected: RenderingType,
		actual: RenderingType,
	},

	/// An element was asked to show a rendering for a different slot.
	#[error("cannot show {incoming} in an element bound to {current}")]
	IncompatibleRendering {
		current: CompatibilityKey,
		incoming: CompatibilityKey,
	},

	/// The element has no rendering binding at all.
	#[error("element has no rendering binding")]
	Unbound,
}
