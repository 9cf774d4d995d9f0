use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, RingGeometry};
use std::fmt::Debug;

/// A polygon: the exterior ring first, followed by any number of holes.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	#[must_use]
	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	#[must_use]
	pub fn holes(&self) -> &[RingGeometry] {
		self.0.get(1..).unwrap_or_default()
	}
}

impl GeometryTrait for PolygonGeometry {
	fn is_empty(&self) -> bool {
		self.0.iter().all(RingGeometry::is_empty)
	}

	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinates)) {
		for ring in &self.0 {
			ring.for_each_coordinate(callback);
		}
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}

	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}

	fn as_mut_vec(&mut self) -> &mut Vec<RingGeometry> {
		&mut self.0
	}

	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn exterior_and_holes() {
		let polygon = PolygonGeometry::from(&[
			vec![[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 0.0]],
			vec![[2.0, 2.0], [3.0, 2.0], [3.0, 3.0], [2.0, 2.0]],
		]);
		assert_eq!(polygon.exterior().map(|ring| ring.len()), Some(4));
		assert_eq!(polygon.holes().len(), 1);
		assert_eq!(polygon.first_coordinate(), Some(Coordinates::new(0.0, 0.0)));
	}

	#[test]
	fn empty_polygon() {
		let polygon = PolygonGeometry::new();
		assert!(GeometryTrait::is_empty(&polygon));
		assert!(polygon.exterior().is_none());
		assert!(polygon.holes().is_empty());
	}
}
