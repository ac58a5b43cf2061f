/// Failures while moving typed values in and out of a [`crate::StateBlob`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
	#[error("failed to encode state: {0}")]
	Encode(#[source] postcard::Error),
	#[error("failed to decode state: {0}")]
	Decode(#[source] postcard::Error),
	#[error("{len} trailing bytes after decoded state")]
	TrailingBytes { len: usize },
}
