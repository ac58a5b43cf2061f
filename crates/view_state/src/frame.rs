use serde::{Deserialize, Serialize};
use trellis_primitives::{CompatibilityKey, StateBlob};

/// Saved state of one hidden-but-retained slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewStateFrame {
	pub key: CompatibilityKey,
	pub state: StateBlob,
}

impl ViewStateFrame {
	pub fn new(key: CompatibilityKey, state: StateBlob) -> Self {
		Self { key, state }
	}
}
