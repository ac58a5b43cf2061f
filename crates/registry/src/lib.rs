//! Rendering registry and element factory dispatch.
//!
//! # Mental Model
//!
//! 1. **Registration:** [`Factory`] implementations are collected into an
//!    immutable [`Registry`], indexed by [`RenderingType`]. Registries merge,
//!    and any type claimed twice is a [`BindingError::DuplicateBinding`].
//! 2. **Environment:** The registry travels inside an [`Environment`] together
//!    with the [`DispatchConfig`] and any host-defined values.
//! 3. **Dispatch:** [`build_element`] resolves a factory (registry first, then
//!    the rendering's own [`Rendering::default_factory`]), builds the
//!    [`Element`], verifies it is bound to the rendering and installs a
//!    [`LifecycleGuard`].
//! 4. **Update:** Bound elements redisplay compatible renderings in place via
//!    [`Element::show_rendering`]; [`ElementStub`] swaps in a freshly built
//!    element when the incoming rendering is incompatible.
//!
//! # Concurrency
//!
//! Everything here is single-threaded. Renderings, factories and elements are
//! `Rc`-based and therefore `!Send`, which confines them to the thread that
//! owns the display tree.

mod config;
mod decorative;
mod dispatch;
mod element;
mod environment;
mod error;
mod factory;
mod host;
mod lifecycle;
mod named;
mod registry;
mod rendering;
mod stub;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use config::{ConfigError, DispatchConfig, DispatchConfigKey};
pub use decorative::{DecorativeFactory, decorative_factory};
pub use dispatch::{build_element, build_element_in};
pub use element::{Element, ElementView};
pub use environment::{Environment, EnvironmentKey};
pub use error::BindingError;
pub use factory::{AnyFactory, BuildContext, Factory, FactoryRef, FnFactory, factory_fn};
pub use host::HostContext;
pub use lifecycle::{DetachKind, GuardState, LifecycleGuard};
pub use named::Named;
pub use registry::{Registry, RegistryKey};
pub use rendering::{Rendering, RenderingRef, compatible};
pub use stub::ElementStub;
pub use trellis_primitives::{CompatibilityKey, RenderingType, StateBlob};
