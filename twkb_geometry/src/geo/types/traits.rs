use super::Coordinates;
use std::fmt::Debug;

/// Defines the basic interface for geometric primitives, providing common functionality
/// for all geometry types.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Returns `true` if the geometry has no coordinates at all.
	///
	/// Composite geometries are empty when every one of their parts is empty.
	fn is_empty(&self) -> bool;

	/// Calls `callback` for every coordinate of the geometry, in storage order.
	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinates));

	/// Returns the first coordinate of the geometry, if there is one.
	fn first_coordinate(&self) -> Option<Coordinates> {
		let mut first = None;
		self.for_each_coordinate(&mut |c| {
			if first.is_none() {
				first = Some(*c);
			}
		});
		first
	}
}

/// Represents composite geometries that are collections of simpler elements.
/// For example, a polygon is made of rings, and a multilinestring is made of lines.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Creates a new, empty composite geometry.
	fn new() -> Self;

	/// Returns an immutable reference to the inner collection of elements.
	fn as_vec(&self) -> &Vec<Item>;

	/// Returns a mutable reference to the inner collection of elements.
	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	/// Consumes the composite geometry and returns the inner collection of elements.
	fn into_inner(self) -> Vec<Item>;

	/// Returns the number of elements contained in the composite geometry.
	fn len(&self) -> usize {
		self.as_vec().len()
	}

	/// Adds a new element to the composite geometry.
	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	/// Returns a reference to the first element, if any.
	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	/// Returns a reference to the last element, if any.
	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}
