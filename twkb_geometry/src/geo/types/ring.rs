use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use std::fmt::Debug;

/// A linear ring, the boundary of a polygon.
///
/// Rings built by the TWKB reader are always closed: the last coordinate repeats the first.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Returns `true` if the ring has at least one coordinate and ends where it starts.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		match (self.0.first(), self.0.last()) {
			(Some(first), Some(last)) => self.0.len() > 1 && first == last,
			_ => false,
		}
	}

	/// The coordinates without the closing duplicate.
	#[must_use]
	pub fn open_coordinates(&self) -> &[Coordinates] {
		if self.is_closed() {
			&self.0[..self.0.len() - 1]
		} else {
			&self.0
		}
	}

	/// Appends a copy of the first coordinate unless the ring is already closed.
	pub fn close(&mut self) {
		if let Some(first) = self.0.first().copied()
			&& !self.is_closed()
		{
			self.0.push(first);
		}
	}
}

impl GeometryTrait for RingGeometry {
	fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinates)) {
		self.0.iter().for_each(callback);
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
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

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(&[], false, 0)]
	#[case(&[[1.0, 1.0]], false, 1)]
	#[case(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]], false, 3)]
	#[case(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]], true, 3)]
	fn closed_and_open_coordinates(#[case] coords: &[[f64; 2]], #[case] closed: bool, #[case] open_len: usize) {
		let ring = RingGeometry::from(coords);
		assert_eq!(ring.is_closed(), closed);
		assert_eq!(ring.open_coordinates().len(), open_len);
	}

	#[test]
	fn close_appends_first_coordinate() {
		let mut ring = RingGeometry::from(&[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0]]);
		ring.close();
		assert_eq!(ring.len(), 4);
		assert_eq!(ring.last(), Some(&Coordinates::new(0.0, 0.0)));
		ring.close();
		assert_eq!(ring.len(), 4);
	}
}
