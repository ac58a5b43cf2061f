//! Leaf types for binding renderings to display elements.
//!
//! Nothing here knows about factories or elements. These are the identities
//! the registry dispatches on and the opaque state the view-state cache
//! persists.

/// Opaque saved-state payloads.
pub mod blob;
/// Compatibility keys that decide whether two renderings occupy the same slot.
pub mod compat;
/// Codec errors.
pub mod error;
/// Runtime type identity of renderings.
pub mod ident;

pub use blob::StateBlob;
pub use compat::CompatibilityKey;
pub use error::CodecError;
pub use ident::RenderingType;
