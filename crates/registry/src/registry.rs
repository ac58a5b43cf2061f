//! Type-indexed factory registry.
//!
//! # Invariants
//!
//! - At most one factory per [`RenderingType`]. Construction and merging both
//!   fail with [`BindingError::DuplicateBinding`]; a later registry never
//!   shadows an earlier one.
//! - Immutable after construction. Clones share the underlying table.

use std::collections::hash_map::Entry;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap as HashMap;
use trellis_primitives::RenderingType;

use crate::{BindingError, EnvironmentKey, FactoryRef};

#[derive(Clone, Default)]
pub struct Registry {
	factories: Rc<HashMap<RenderingType, FactoryRef>>,
}

impl Registry {
	/// Registry with no entries; the identity element for merges.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Builds a registry from factories, rejecting duplicate rendering types.
	pub fn new(factories: impl IntoIterator<Item = FactoryRef>) -> Result<Self, BindingError> {
		let mut table = HashMap::default();
		for factory in factories {
			insert_unique(&mut table, factory)?;
		}
		tracing::debug!(factories = table.len(), "registry built");
		Ok(Self {
			factories: Rc::new(table),
		})
	}

	/// Unions several registries, rejecting any type owned by more than one.
	pub fn merged<'a>(registries: impl IntoIterator<Item = &'a Registry>) -> Result<Self, BindingError> {
		let mut table = HashMap::default();
		let mut sources = 0usize;
		for registry in registries {
			sources += 1;
			for factory in registry.factories.values() {
				insert_unique(&mut table, Rc::clone(factory))?;
			}
		}
		tracing::debug!(sources, factories = table.len(), "registries merged");
		Ok(Self {
			factories: Rc::new(table),
		})
	}

	/// Unions `self` with `other`.
	pub fn merge(&self, other: &Registry) -> Result<Self, BindingError> {
		Self::merged([self, other])
	}

	pub fn get_factory_for(&self, rendering_type: RenderingType) -> Option<&FactoryRef> {
		self.factories.get(&rendering_type)
	}

	pub fn contains(&self, rendering_type: RenderingType) -> bool {
		self.factories.contains_key(&rendering_type)
	}

	/// Rendering types this registry resolves, in no particular order.
	pub fn keys(&self) -> impl Iterator<Item = RenderingType> + '_ {
		self.factories.keys().copied()
	}

	pub fn len(&self) -> usize {
		self.factories.len()
	}

	pub fn is_empty(&self) -> bool {
		self.factories.is_empty()
	}
}

fn insert_unique(
	table: &mut HashMap<RenderingType, FactoryRef>,
	factory: FactoryRef,
) -> Result<(), BindingError> {
	match table.entry(factory.rendering_type()) {
		Entry::Occupied(existing) => Err(BindingError::DuplicateBinding {
			rendering_type: *existing.key(),
		}),
		Entry::Vacant(slot) => {
			slot.insert(factory);
			Ok(())
		}
	}
}

impl fmt::Debug for Registry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut names: Vec<_> = self.keys().map(|ty| ty.name()).collect();
		names.sort_unstable();
		f.debug_struct("Registry").field("keys", &names).finish()
	}
}

/// Environment slot for the dispatch [`Registry`].
pub struct RegistryKey;

impl EnvironmentKey for RegistryKey {
	type Value = Registry;

	fn default_value() -> Registry {
		Registry::empty()
	}
}
