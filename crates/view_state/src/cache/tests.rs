use std::rc::Rc;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use trellis_primitives::CodecError;
use trellis_registry::{ElementView, Environment, HostContext, Rendering};

use super::*;

/// A tab slot, keyed by its name.
#[derive(Debug)]
struct Tab(&'static str);

impl Rendering for Tab {
	fn compatibility_key(&self) -> CompatibilityKey {
		CompatibilityKey::new(self.rendering_type(), Some(self.0))
	}
}

#[derive(Debug, Default)]
struct Pane {
	scroll: u32,
}

impl ElementView for Pane {
	fn save_state(&self) -> StateBlob {
		StateBlob::encode(&self.scroll).unwrap()
	}

	fn restore_state(&mut self, state: &StateBlob) {
		self.scroll = state.decode().unwrap();
	}
}

fn tab(name: &'static str) -> RenderingRef {
	Rc::new(Tab(name))
}

fn key(name: &'static str) -> CompatibilityKey {
	tab(name).compatibility_key()
}

fn pane(name: &'static str, scroll: u32) -> Element {
	let mut element = Element::new(HostContext::detached(), Pane { scroll });
	element.bind(
		Rc::new(Tab(name)),
		&Environment::new(),
		|_: &mut Pane, _: &Tab, _: &Environment| {},
	).unwrap();
	element
}

fn scroll(element: &Element) -> u32 {
	element.view::<Pane>().unwrap().scroll
}

fn frame(name: &'static str, bytes: Vec<u8>) -> ViewStateFrame {
	ViewStateFrame::new(key(name), StateBlob::new(bytes))
}

fn cache_of(frames: Vec<ViewStateFrame>) -> ViewStateCache {
	ViewStateCache::try_from(frames).unwrap()
}

/// Hiding A behind B saves A; showing A again restores and consumes its frame.
#[test]
fn test_hide_then_reshow_restores_once() {
	let mut cache = ViewStateCache::new();
	let a = pane("a", 12);
	let mut b = pane("b", 0);

	cache.update(&[tab("a"), tab("b")], Some(&a), &mut b).unwrap();
	assert_eq!(cache.keys().collect::<Vec<_>>(), vec![&key("a")]);

	let mut a_again = pane("a", 0);
	b.view_mut::<Pane>().unwrap().scroll = 5;
	cache.update(&[tab("a")], Some(&b), &mut a_again).unwrap();

	assert_eq!(scroll(&a_again), 12);
	assert!(cache.is_empty(), "a was consumed and b is no longer retained");
}

/// The shown slot never keeps a frame, even if it is listed as retained.
#[test]
fn test_incoming_key_never_cached() {
	let mut cache = cache_of(vec![frame("a", vec![1])]);
	let outgoing = pane("a", 3);
	let mut incoming = pane("a", 0);

	cache.update(&[tab("a")], Some(&outgoing), &mut incoming).unwrap();

	assert_eq!(scroll(&incoming), 1);
	assert!(!cache.contains(&key("a")));
}

/// Outgoing children that are no longer retained are dropped, not saved.
#[test]
fn test_unretained_outgoing_not_saved() {
	let mut cache = ViewStateCache::new();
	let outgoing = pane("a", 3);
	let mut incoming = pane("b", 0);

	cache.update(&[tab("b")], Some(&outgoing), &mut incoming).unwrap();

	assert!(cache.is_empty());
}

/// A stale frame under the outgoing key is overwritten.
#[test]
fn test_stale_frame_overwritten() {
	let mut cache = cache_of(vec![frame("a", vec![99])]);
	let outgoing = pane("a", 7);
	let mut incoming = pane("b", 0);

	cache.update(&[tab("a"), tab("b")], Some(&outgoing), &mut incoming).unwrap();

	let saved = cache.get(&key("a")).unwrap();
	assert_eq!(saved.state.decode::<u32>().unwrap(), 7);
	assert_eq!(cache.len(), 1);
}

/// Without an outgoing element the update only restores and prunes.
#[test]
fn test_update_without_outgoing() {
	let mut cache = cache_of(vec![frame("a", vec![4]), frame("b", vec![8]), frame("c", vec![1])]);
	let mut incoming = pane("b", 0);

	cache.update(&[tab("a"), tab("b")], None, &mut incoming).unwrap();

	assert_eq!(scroll(&incoming), 8);
	assert_eq!(cache.keys().collect::<Vec<_>>(), vec![&key("a")]);
}

/// Duplicate retained keys fail before anything changes.
#[test]
fn test_duplicate_retained_keys_rejected() {
	let original = cache_of(vec![frame("settings", vec![2]), frame("home", vec![3])]);
	let mut cache = original.clone();
	let outgoing = pane("home", 11);
	let mut incoming = pane("settings", 0);

	let err = cache
		.update(&[tab("settings"), tab("home"), tab("settings")], Some(&outgoing), &mut incoming)
		.unwrap_err();

	match err {
		StateCacheError::DuplicateRetainedKey { key: dup } => assert_eq!(dup, key("settings")),
		other => panic!("expected DuplicateRetainedKey, got {other:?}"),
	}
	assert_eq!(cache, original);
	assert_eq!(scroll(&incoming), 0);
}

#[test]
fn test_unbound_incoming_rejected() {
	let original = cache_of(vec![frame("a", vec![2])]);
	let mut cache = original.clone();
	let mut incoming = Element::new(HostContext::detached(), Pane::default());

	let err = cache.update(&[tab("a")], None, &mut incoming).unwrap_err();

	assert!(matches!(err, StateCacheError::UnboundElement));
	assert_eq!(cache, original);
}

#[test]
fn test_prune_keeps_only_retained() {
	let mut cache = cache_of(vec![frame("a", vec![1]), frame("b", vec![2]), frame("c", vec![3])]);
	cache.prune([&key("a"), &key("c"), &key("z")]);

	let mut keys: Vec<_> = cache.keys().cloned().collect();
	keys.sort();
	let mut expected = vec![key("a"), key("c")];
	expected.sort();
	assert_eq!(keys, expected);
}

/// Restore adopts the other cache wholesale instead of merging.
#[test]
fn test_restore_replaces_contents() {
	let mut cache = cache_of(vec![frame("a", vec![1]), frame("b", vec![2])]);
	let incoming = cache_of(vec![frame("b", vec![20]), frame("c", vec![30])]);

	cache.restore(incoming.clone());

	assert_eq!(cache, incoming);
	assert!(!cache.contains(&key("a")));
}

#[test]
fn test_duplicate_persisted_frames_rejected() {
	let err = ViewStateCache::try_from(vec![frame("a", vec![1]), frame("a", vec![2])]).unwrap_err();
	assert!(matches!(err, StateCacheError::DuplicateFrame { .. }));

	let blob = StateBlob::encode(&vec![frame("a", vec![1]), frame("a", vec![2])]).unwrap();
	assert!(matches!(ViewStateCache::from_blob(&blob), Err(StateCacheError::Codec(_))));
}

#[test]
fn test_garbage_blob_rejected() {
	let blob = StateBlob::new(vec![0xff, 0xff, 0xff]);
	assert!(matches!(ViewStateCache::from_blob(&blob), Err(StateCacheError::Codec(_))));
}

/// Junk after a valid persisted cache is an error, not silently dropped.
#[test]
fn test_blob_with_trailing_bytes_rejected() {
	let cache = cache_of(vec![frame("a", vec![1])]);
	let mut bytes = cache.to_blob().unwrap().into_bytes();
	bytes.push(0);

	let err = ViewStateCache::from_blob(&StateBlob::new(bytes)).unwrap_err();
	assert!(matches!(
		err,
		StateCacheError::Codec(CodecError::TrailingBytes { len: 1 })
	));
}

const NAMES: [&str; 6] = ["home", "inbox", "sent", "drafts", "settings", "about"];

fn arb_frames() -> impl Strategy<Value = Vec<ViewStateFrame>> {
	proptest::collection::vec(
		(0..NAMES.len(), proptest::collection::vec(any::<u8>(), 0..32)),
		0..NAMES.len(),
	)
	.prop_map(|entries| {
		let mut seen = Vec::new();
		entries
			.into_iter()
			.filter(|(idx, _)| {
				let fresh = !seen.contains(idx);
				seen.push(*idx);
				fresh
			})
			.map(|(idx, bytes)| frame(NAMES[idx], bytes))
			.collect()
	})
}

proptest! {
	/// Serialisation reproduces every key and blob, whatever the insertion order.
	#[test]
	fn prop_blob_roundtrip_ignores_order(frames in arb_frames()) {
		let forward = cache_of(frames.clone());
		let mut reversed_frames = frames.clone();
		reversed_frames.reverse();
		let reversed = cache_of(reversed_frames);

		let restored = ViewStateCache::from_blob(&forward.to_blob().unwrap()).unwrap();
		prop_assert_eq!(&restored, &forward);
		prop_assert_eq!(&restored, &reversed);
		for frame in &frames {
			prop_assert_eq!(restored.get(&frame.key), Some(frame));
		}
	}

	/// Pruning twice with the same set equals pruning once.
	#[test]
	fn prop_prune_idempotent(
		frames in arb_frames(),
		retain in proptest::collection::vec(0..NAMES.len(), 0..NAMES.len()),
	) {
		let retain: Vec<CompatibilityKey> = retain.into_iter().map(|idx| key(NAMES[idx])).collect();
		let mut once = cache_of(frames);
		once.prune(&retain);
		let mut twice = once.clone();
		twice.prune(&retain);

		prop_assert_eq!(&once, &twice);
		prop_assert!(once.keys().all(|k| retain.contains(k)));
	}
}
