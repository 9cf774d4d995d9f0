use super::*;
use anyhow::{Result, bail};
use std::fmt::Debug;
use twkb_core::TwkbError;

/// Any of the seven geometry kinds TWKB can carry.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		Coordinates: From<T>,
	{
		Self::Point(PointGeometry::new(Coordinates::from(value)))
	}

	pub fn new_line_string<T>(value: T) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}

	/// Creates a polygon, closing every ring that is not closed yet.
	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(closed_polygon(PolygonGeometry::from(value)))
	}

	pub fn new_multi_point<T>(value: T) -> Self
	where
		MultiPointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}

	pub fn new_multi_line_string<T>(value: T) -> Self
	where
		MultiLineStringGeometry: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}

	/// Creates a multi polygon, closing every ring that is not closed yet.
	pub fn new_multi_polygon<T>(value: T) -> Self
	where
		MultiPolygonGeometry: From<T>,
	{
		let mut multi = MultiPolygonGeometry::from(value);
		multi.parts = multi.parts.into_iter().map(closed_polygon).collect();
		Self::MultiPolygon(multi)
	}

	#[must_use]
	pub fn new_collection(parts: Vec<Geometry>) -> Self {
		Self::GeometryCollection(GeometryCollection::from_parts(parts))
	}

	/// Creates the empty geometry of the given kind.
	#[must_use]
	pub fn empty(kind: GeometryType) -> Self {
		match kind {
			GeometryType::Point => Self::Point(PointGeometry::empty()),
			GeometryType::LineString => Self::LineString(LineStringGeometry::new()),
			GeometryType::Polygon => Self::Polygon(PolygonGeometry::new()),
			GeometryType::MultiPoint => Self::MultiPoint(MultiPointGeometry::new()),
			GeometryType::MultiLineString => Self::MultiLineString(MultiLineStringGeometry::new()),
			GeometryType::MultiPolygon => Self::MultiPolygon(MultiPolygonGeometry::new()),
			GeometryType::GeometryCollection => Self::GeometryCollection(GeometryCollection::new()),
		}
	}

	#[must_use]
	pub fn geometry_type(&self) -> GeometryType {
		match self {
			Geometry::Point(_) => GeometryType::Point,
			Geometry::LineString(_) => GeometryType::LineString,
			Geometry::Polygon(_) => GeometryType::Polygon,
			Geometry::MultiPoint(_) => GeometryType::MultiPoint,
			Geometry::MultiLineString(_) => GeometryType::MultiLineString,
			Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
			Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
		}
	}

	/// `true` if the first coordinate carries a finite Z value.
	#[must_use]
	pub fn has_z(&self) -> bool {
		self.first_coordinate().is_some_and(|c| c.has_z())
	}

	/// `true` if the first coordinate carries a finite M value.
	#[must_use]
	pub fn has_m(&self) -> bool {
		self.first_coordinate().is_some_and(|c| c.has_m())
	}

	/// Number of direct children of a multi geometry or collection, 0 for everything else.
	#[must_use]
	pub fn num_children(&self) -> usize {
		match self {
			Geometry::Point(_) | Geometry::LineString(_) | Geometry::Polygon(_) => 0,
			Geometry::MultiPoint(g) => g.parts.len(),
			Geometry::MultiLineString(g) => g.parts.len(),
			Geometry::MultiPolygon(g) => g.parts.len(),
			Geometry::GeometryCollection(g) => g.parts.len(),
		}
	}

	/// The identifiers attached to the children, if any.
	#[must_use]
	pub fn ids(&self) -> Option<&[i64]> {
		match self {
			Geometry::Point(_) | Geometry::LineString(_) | Geometry::Polygon(_) => None,
			Geometry::MultiPoint(g) => g.ids(),
			Geometry::MultiLineString(g) => g.ids(),
			Geometry::MultiPolygon(g) => g.ids(),
			Geometry::GeometryCollection(g) => g.ids(),
		}
	}

	/// Attaches one identifier per child.
	///
	/// # Errors
	/// Fails with [`TwkbError::InconsistentIdList`] if the number of ids differs from the number
	/// of children. Single geometries have no children, so any non-empty list fails for them.
	pub fn with_ids(mut self, ids: Vec<i64>) -> Result<Self> {
		match &mut self {
			Geometry::Point(_) | Geometry::LineString(_) | Geometry::Polygon(_) => {
				if !ids.is_empty() {
					bail!(TwkbError::InconsistentIdList {
						expected: 0,
						actual: ids.len(),
					});
				}
			}
			Geometry::MultiPoint(g) => g.set_ids(Some(ids))?,
			Geometry::MultiLineString(g) => g.set_ids(Some(ids))?,
			Geometry::MultiPolygon(g) => g.set_ids(Some(ids))?,
			Geometry::GeometryCollection(g) => g.set_ids(Some(ids))?,
		}
		Ok(self)
	}
}

fn closed_polygon(mut polygon: PolygonGeometry) -> PolygonGeometry {
	polygon.0.iter_mut().for_each(RingGeometry::close);
	polygon
}

impl GeometryTrait for Geometry {
	fn is_empty(&self) -> bool {
		match self {
			Geometry::Point(g) => g.is_empty(),
			Geometry::LineString(g) => g.is_empty(),
			Geometry::Polygon(g) => g.is_empty(),
			Geometry::MultiPoint(g) => g.is_empty(),
			Geometry::MultiLineString(g) => g.is_empty(),
			Geometry::MultiPolygon(g) => g.is_empty(),
			Geometry::GeometryCollection(g) => g.is_empty(),
		}
	}

	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinates)) {
		match self {
			Geometry::Point(g) => g.for_each_coordinate(callback),
			Geometry::LineString(g) => g.for_each_coordinate(callback),
			Geometry::Polygon(g) => g.for_each_coordinate(callback),
			Geometry::MultiPoint(g) => g.for_each_coordinate(callback),
			Geometry::MultiLineString(g) => g.for_each_coordinate(callback),
			Geometry::MultiPolygon(g) => g.for_each_coordinate(callback),
			Geometry::GeometryCollection(g) => g.for_each_coordinate(callback),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(&self.geometry_type().to_string()).field(inner).finish()
	}
}
