use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Runtime type identity of a rendering.
///
/// Equality and hashing only consider the [`TypeId`]. The type name is carried
/// along for diagnostics and for deriving [`crate::CompatibilityKey`]s.
#[derive(Clone, Copy)]
pub struct RenderingType {
	id: TypeId,
	name: &'static str,
}

impl RenderingType {
	/// Returns the identity token for `R`.
	pub fn of<R: ?Sized + 'static>() -> Self {
		Self {
			id: TypeId::of::<R>(),
			name: type_name::<R>(),
		}
	}

	/// Returns the underlying [`TypeId`].
	pub fn type_id(&self) -> TypeId {
		self.id
	}

	/// Returns the fully qualified type name.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Returns true if this token identifies `R`.
	pub fn is<R: ?Sized + 'static>(&self) -> bool {
		self.id == TypeId::of::<R>()
	}
}

impl PartialEq for RenderingType {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for RenderingType {}

impl Hash for RenderingType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for RenderingType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("RenderingType").field(&self.name).finish()
	}
}

impl fmt::Display for RenderingType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}
