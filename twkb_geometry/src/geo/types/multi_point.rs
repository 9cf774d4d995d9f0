use super::{Coordinates, GeometryTrait, PointGeometry};

/// Represents a collection of points, each optionally tagged with an identifier.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry {
	pub parts: Vec<PointGeometry>,
	pub ids: Option<Vec<i64>>,
}

impl GeometryTrait for MultiPointGeometry {
	fn is_empty(&self) -> bool {
		self.parts.iter().all(PointGeometry::is_empty)
	}

	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinates)) {
		for point in &self.parts {
			point.for_each_coordinate(callback);
		}
	}
}

crate::impl_multi_geometry!(MultiPointGeometry, PointGeometry);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geo::CompositeGeometryTrait;
	use twkb_core::TwkbError;

	#[test]
	fn ids_must_match_parts() {
		let multi = MultiPointGeometry::from(&[[1.0, 2.0], [3.0, 4.0]]);
		let err = multi.clone().with_ids(vec![1]).unwrap_err();
		assert_eq!(
			TwkbError::kind_of(&err),
			Some(&TwkbError::InconsistentIdList { expected: 2, actual: 1 })
		);

		let multi = multi.with_ids(vec![10, 20]).unwrap();
		assert_eq!(multi.ids(), Some(&[10, 20][..]));
		assert_eq!(format!("{multi:?}"), "{10: [1.0, 2.0], 20: [3.0, 4.0]}");
	}

	#[test]
	fn mutation_drops_ids() {
		let mut multi = MultiPointGeometry::from(&[[1.0, 2.0]]).with_ids(vec![5]).unwrap();
		multi.push(PointGeometry::from([0.0, 0.0]));
		assert_eq!(multi.ids(), None);
		assert_eq!(multi.len(), 2);
	}

	#[test]
	fn empty_parts() {
		let multi = MultiPointGeometry::from_parts(vec![PointGeometry::empty()]);
		assert!(GeometryTrait::is_empty(&multi));
		assert!(GeometryTrait::is_empty(&MultiPointGeometry::new()));
	}
}
