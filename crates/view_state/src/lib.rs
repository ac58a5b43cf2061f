//! Saved element state for containers that show one of several children.
//!
//! A back stack, tab host or panel stack keeps one child on screen and others
//! hidden but retained. [`ViewStateCache::update`] snapshots the child being
//! hidden and hands a previously saved snapshot to the child being shown, so
//! each retained slot comes back the way the user left it.
//!
//! # Invariants
//!
//! - At most one [`ViewStateFrame`] per [`CompatibilityKey`].
//! - After [`ViewStateCache::update`] every cached key belongs to the retained
//!   set of that call and none is the key of the slot now on screen.
//! - A frame is consumed by the restore that uses it; it is never applied
//!   twice.
//!
//! The cache persists as an opaque [`StateBlob`], on its own or inside a
//! [`ContainerSnapshot`] next to the container's own state.

mod cache;
mod error;
mod frame;
mod snapshot;

pub use cache::ViewStateCache;
pub use error::StateCacheError;
pub use frame::ViewStateFrame;
pub use snapshot::ContainerSnapshot;
pub use trellis_primitives::{CompatibilityKey, StateBlob};
