use super::{Coordinates, Geometry, GeometryTrait};

/// A heterogeneous collection of geometries, each optionally tagged with an identifier.
#[derive(Clone, PartialEq)]
pub struct GeometryCollection {
	pub parts: Vec<Geometry>,
	pub ids: Option<Vec<i64>>,
}

impl GeometryTrait for GeometryCollection {
	fn is_empty(&self) -> bool {
		self.parts.iter().all(Geometry::is_empty)
	}

	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinates)) {
		for geometry in &self.parts {
			geometry.for_each_coordinate(callback);
		}
	}
}

crate::impl_multi_geometry!(GeometryCollection, Geometry);
