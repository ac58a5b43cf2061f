//! Typed, immutable environment passed down through dispatch.
//!
//! Values are addressed by marker types implementing [`EnvironmentKey`]; a
//! missing value reads as the key's default. Updating returns a new
//! environment and leaves the original untouched.

use std::any::{Any, TypeId};
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap as HashMap;

use crate::Registry;
use crate::registry::RegistryKey;

/// Marker type addressing one value in an [`Environment`].
pub trait EnvironmentKey: 'static {
	type Value: Clone + 'static;

	/// Value read when the environment holds none for this key.
	fn default_value() -> Self::Value;
}

#[derive(Clone, Default)]
pub struct Environment {
	values: Rc<HashMap<TypeId, Rc<dyn Any>>>,
}

impl Environment {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the value for `K`, or its default.
	pub fn get<K: EnvironmentKey>(&self) -> K::Value {
		self.values
			.get(&TypeId::of::<K>())
			.and_then(|value| value.downcast_ref::<K::Value>())
			.cloned()
			.unwrap_or_else(K::default_value)
	}

	/// Returns true if a value was explicitly set for `K`.
	pub fn contains<K: EnvironmentKey>(&self) -> bool {
		self.values.contains_key(&TypeId::of::<K>())
	}

	/// Returns a copy of this environment with `K` set to `value`.
	pub fn with<K: EnvironmentKey>(&self, value: K::Value) -> Self {
		let mut values = (*self.values).clone();
		values.insert(TypeId::of::<K>(), Rc::new(value));
		Self {
			values: Rc::new(values),
		}
	}

	/// Registry used by dispatch.
	pub fn registry(&self) -> Registry {
		self.get::<RegistryKey>()
	}

	pub fn with_registry(&self, registry: Registry) -> Self {
		self.with::<RegistryKey>(registry)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl From<Registry> for Environment {
	fn from(registry: Registry) -> Self {
		Environment::new().with_registry(registry)
	}
}

impl fmt::Debug for Environment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Environment")
			.field("values", &self.values.len())
			.finish()
	}
}
