use super::{Coordinates, GeometryTrait, PolygonGeometry};

/// Represents a collection of polygons, each optionally tagged with an identifier.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry {
	pub parts: Vec<PolygonGeometry>,
	pub ids: Option<Vec<i64>>,
}

impl GeometryTrait for MultiPolygonGeometry {
	fn is_empty(&self) -> bool {
		self.parts.iter().all(PolygonGeometry::is_empty)
	}

	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinates)) {
		for polygon in &self.parts {
			polygon.for_each_coordinate(callback);
		}
	}
}

crate::impl_multi_geometry!(MultiPolygonGeometry, PolygonGeometry);
