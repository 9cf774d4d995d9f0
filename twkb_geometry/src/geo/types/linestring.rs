use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use std::fmt::Debug;

/// Represents a sequence of connected coordinates forming a line.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinates)) {
		self.0.iter().for_each(callback);
	}
}

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}

	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}

	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}

	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn line_string_from_array() {
		let line = LineStringGeometry::from(&[[0.0, 0.0], [3.0, -1.0], [1.0, 4.0]]);
		assert_eq!(line.len(), 3);
		assert_eq!(line.first_coordinate(), Some(Coordinates::new(0.0, 0.0)));
		assert_eq!(format!("{line:?}"), "[[0.0, 0.0], [3.0, -1.0], [1.0, 4.0]]");
	}

	#[test]
	fn push_and_access() {
		let mut line = LineStringGeometry::new();
		assert!(GeometryTrait::is_empty(&line));
		line.push(Coordinates::new(1.0, 1.0));
		line.push(Coordinates::new(2.0, 2.0));
		assert_eq!(line.last(), Some(&Coordinates::new(2.0, 2.0)));
		assert_eq!(line.into_inner().len(), 2);
	}
}
