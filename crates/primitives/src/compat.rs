//! Compatibility keys.
//!
//! A key is derived from a rendering's type identity and an optional instance
//! name. Two renderings are compatible, meaning one may replace the other in
//! the same display element, iff their keys are equal. The view-state cache
//! uses the same keys to address saved frames, so keys must be stable across
//! process restarts of the same binary.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::RenderingType;

/// Stable identity string for a rendering slot.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompatibilityKey(String);

impl CompatibilityKey {
	/// Separator between the base identity and an instance name.
	pub const NAME_SEPARATOR: char = '+';

	/// Derives the key for a rendering type with an optional instance name.
	///
	/// An empty name is treated as absent.
	pub fn new(ty: RenderingType, name: Option<&str>) -> Self {
		Self::from_parts(ty.name(), name)
	}

	/// Derives the key for `R` without an instance name.
	pub fn of<R: ?Sized + 'static>() -> Self {
		Self::new(RenderingType::of::<R>(), None)
	}

	/// Extends an existing key with an instance name.
	pub fn named(base: &CompatibilityKey, name: &str) -> Self {
		Self::from_parts(&base.0, Some(name))
	}

	/// Wraps an already-derived key string, e.g. one read back from storage.
	pub fn from_raw(raw: impl Into<String>) -> Self {
		Self(raw.into())
	}

	fn from_parts(base: &str, name: Option<&str>) -> Self {
		match name {
			Some(name) if !name.is_empty() => {
				Self(format!("{base}{}{name}", Self::NAME_SEPARATOR))
			}
			_ => Self(base.to_owned()),
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for CompatibilityKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Borrow<str> for CompatibilityKey {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for CompatibilityKey {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
