use trellis_primitives::{CodecError, CompatibilityKey};

#[derive(Debug, thiserror::Error)]
pub enum StateCacheError {
	/// The retained renderings passed to an update share a compatibility key.
	#[error("duplicate compatibility key in retained renderings: {key}")]
	DuplicateRetainedKey { key: CompatibilityKey },

	/// An element handed to the cache has no rendering binding, so it has no key.
	#[error("element has no rendering binding")]
	UnboundElement,

	/// A persisted snapshot holds two frames for the same key.
	#[error("duplicate frame in persisted view state: {key}")]
	DuplicateFrame { key: CompatibilityKey },

	#[error(transparent)]
	Codec(#[from] CodecError),
}
