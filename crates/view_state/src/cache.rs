use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};
use serde::{Deserialize, Serialize};
use tracing::trace;
use trellis_primitives::{CompatibilityKey, StateBlob};
use trellis_registry::{Element, RenderingRef};

use crate::{StateCacheError, ViewStateFrame};

/// Saved state of the hidden-but-retained children of one container.
///
/// Owned by its container and confined to the container's thread. Persisted
/// as a flat list of frames; order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ViewStateFrame>", into = "Vec<ViewStateFrame>")]
pub struct ViewStateCache {
	frames: HashMap<CompatibilityKey, ViewStateFrame>,
}

impl ViewStateCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Drops every frame whose key is not in `retain`.
	pub fn prune<'a>(&mut self, retain: impl IntoIterator<Item = &'a CompatibilityKey>) {
		let retain: HashSet<&CompatibilityKey> = retain.into_iter().collect();
		self.retain_keys(|key| retain.contains(key));
	}

	/// Moves saved state across a child swap.
	///
	/// `retained` lists every rendering the container keeps, shown or hidden.
	/// The incoming element receives, and thereby consumes, the frame saved
	/// for its key. The outgoing element is saved if its key is retained and
	/// differs from the incoming one. Finally the cache is pruned to the
	/// retained keys.
	///
	/// Fails without touching the cache or either element if `retained` holds
	/// duplicate keys or an element is unbound.
	pub fn update(
		&mut self,
		retained: &[RenderingRef],
		outgoing: Option<&Element>,
		incoming: &mut Element,
	) -> Result<(), StateCacheError> {
		let retained_keys = unique_keys(retained)?;
		let incoming_key = incoming
			.compatibility_key()
			.ok_or(StateCacheError::UnboundElement)?;
		let outgoing = outgoing
			.map(|element| {
				element
					.compatibility_key()
					.map(|key| (key, element))
					.ok_or(StateCacheError::UnboundElement)
			})
			.transpose()?;

		if let Some(frame) = self.frames.remove(&incoming_key) {
			trace!(key = %incoming_key, bytes = frame.state.len(), "restoring view state");
			incoming.restore_state(&frame.state);
		}

		if let Some((key, element)) = outgoing
			&& key != incoming_key
			&& retained_keys.contains(&key)
		{
			let state = element.save_state();
			trace!(key = %key, bytes = state.len(), "saving view state");
			self.frames.insert(key.clone(), ViewStateFrame::new(key, state));
		}

		self.retain_keys(|key| retained_keys.contains(key));
		Ok(())
	}

	/// Replaces the whole contents with `from`, typically a cache just read
	/// back from a persisted snapshot.
	pub fn restore(&mut self, from: ViewStateCache) {
		trace!(dropped = self.frames.len(), adopted = from.frames.len(), "adopting view state");
		self.frames = from.frames;
	}

	pub fn get(&self, key: &CompatibilityKey) -> Option<&ViewStateFrame> {
		self.frames.get(key)
	}

	pub fn contains(&self, key: &CompatibilityKey) -> bool {
		self.frames.contains_key(key)
	}

	pub fn keys(&self) -> impl Iterator<Item = &CompatibilityKey> {
		self.frames.keys()
	}

	pub fn frames(&self) -> impl Iterator<Item = &ViewStateFrame> {
		self.frames.values()
	}

	pub fn len(&self) -> usize {
		self.frames.len()
	}

	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Encodes the cache for the host's state persistence.
	pub fn to_blob(&self) -> Result<StateBlob, StateCacheError> {
		Ok(StateBlob::encode(self)?)
	}

	pub fn from_blob(blob: &StateBlob) -> Result<Self, StateCacheError> {
		Ok(blob.decode()?)
	}

	fn retain_keys(&mut self, mut keep: impl FnMut(&CompatibilityKey) -> bool) {
		let before = self.frames.len();
		self.frames.retain(|key, _| keep(key));
		let pruned = before - self.frames.len();
		if pruned > 0 {
			trace!(pruned, remaining = self.frames.len(), "pruned view state");
		}
	}
}

fn unique_keys(retained: &[RenderingRef]) -> Result<HashSet<CompatibilityKey>, StateCacheError> {
	let mut keys = HashSet::default();
	for rendering in retained {
		let key = rendering.compatibility_key();
		if !keys.insert(key.clone()) {
			return Err(StateCacheError::DuplicateRetainedKey { key });
		}
	}
	Ok(keys)
}

impl TryFrom<Vec<ViewStateFrame>> for ViewStateCache {
	type Error = StateCacheError;

	fn try_from(list: Vec<ViewStateFrame>) -> Result<Self, Self::Error> {
		let mut frames = HashMap::default();
		for frame in list {
			if frames.contains_key(&frame.key) {
				return Err(StateCacheError::DuplicateFrame { key: frame.key });
			}
			frames.insert(frame.key.clone(), frame);
		}
		Ok(Self { frames })
	}
}

impl From<ViewStateCache> for Vec<ViewStateFrame> {
	fn from(cache: ViewStateCache) -> Self {
		cache.frames.into_values().collect()
	}
}

#[cfg(test)]
mod tests;
