use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::CodecError;

/// Opaque saved state of a display element or container.
///
/// The binding layer never looks inside a blob; it only stores, moves and
/// persists it. Typed helpers encode values with postcard.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateBlob(Vec<u8>);

impl StateBlob {
	pub fn new(bytes: Vec<u8>) -> Self {
		Self(bytes)
	}

	pub fn empty() -> Self {
		Self::default()
	}

	/// Encodes `value` into a new blob.
	pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Self, CodecError> {
		postcard::to_stdvec(value)
			.map(Self)
			.map_err(CodecError::Encode)
	}

	/// Decodes the blob as `T`. The value must span the whole blob.
	pub fn decode<T: DeserializeOwned>(&self) -> Result<T, CodecError> {
		let (value, rest) = postcard::take_from_bytes(&self.0).map_err(CodecError::Decode)?;
		if !rest.is_empty() {
			return Err(CodecError::TrailingBytes { len: rest.len() });
		}
		Ok(value)
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	pub fn into_bytes(self) -> Vec<u8> {
		self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for StateBlob {
	fn from(bytes: Vec<u8>) -> Self {
		Self(bytes)
	}
}

impl fmt::Debug for StateBlob {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "StateBlob({} bytes)", self.0.len())
	}
}
