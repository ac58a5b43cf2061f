use serde::{Deserialize, Serialize};
use trellis_primitives::StateBlob;

use crate::{StateCacheError, ViewStateCache};

/// A container's own saved state together with its view-state cache, persisted
/// as a single blob.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerSnapshot {
	pub container_state: StateBlob,
	pub cache: ViewStateCache,
}

impl ContainerSnapshot {
	pub fn new(container_state: StateBlob, cache: ViewStateCache) -> Self {
		Self {
			container_state,
			cache,
		}
	}

	pub fn to_blob(&self) -> Result<StateBlob, StateCacheError> {
		Ok(StateBlob::encode(self)?)
	}

	pub fn from_blob(blob: &StateBlob) -> Result<Self, StateCacheError> {
		Ok(blob.decode()?)
	}
}
