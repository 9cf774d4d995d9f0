use super::{Coordinates, GeometryTrait};
use std::fmt::Debug;

/// A single position, or the empty point (`None`).
#[derive(Clone, Copy, PartialEq)]
pub struct PointGeometry(pub Option<Coordinates>);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(Some(c))
	}

	#[must_use]
	pub fn empty() -> Self {
		Self(None)
	}

	#[must_use]
	pub fn coordinates(&self) -> Option<&Coordinates> {
		self.0.as_ref()
	}
}

impl GeometryTrait for PointGeometry {
	fn is_empty(&self) -> bool {
		self.0.is_none()
	}

	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinates)) {
		if let Some(c) = &self.0 {
			callback(c);
		}
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match &self.0 {
			Some(c) => c.fmt(f),
			None => f.write_str("EMPTY"),
		}
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Some(Coordinates::from(value)))
	}
}
