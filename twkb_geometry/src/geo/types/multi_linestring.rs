use super::{Coordinates, GeometryTrait, LineStringGeometry};

/// Represents a collection of line strings, each optionally tagged with an identifier.
#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry {
	pub parts: Vec<LineStringGeometry>,
	pub ids: Option<Vec<i64>>,
}

impl GeometryTrait for MultiLineStringGeometry {
	fn is_empty(&self) -> bool {
		self.parts.iter().all(LineStringGeometry::is_empty)
	}

	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinates)) {
		for line in &self.parts {
			line.for_each_coordinate(callback);
		}
	}
}

crate::impl_multi_geometry!(MultiLineStringGeometry, LineStringGeometry);
