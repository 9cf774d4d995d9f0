//! Construction of decoded geometries.
//!
//! The TWKB reader never builds geometries itself. It hands decoded coordinates to a
//! [`GeometryFactory`], so callers can decode straight into their own geometry model:
//! [`DefaultGeometryFactory`] builds this crate's [`Geometry`], [`GeoTypesFactory`] builds
//! [`geo_types::Geometry`].

use super::*;
use anyhow::{Result, bail};

/// Builds geometries from decoded parts.
///
/// Rings handed to [`GeometryFactory::polygon`] and [`GeometryFactory::multi_polygon`] are already
/// closed. `ids` is `Some` only when the reader is configured to export identifiers.
pub trait GeometryFactory {
	type Output;

	fn empty(&self, kind: GeometryType) -> Result<Self::Output>;
	fn point(&self, coordinates: Coordinates) -> Result<Self::Output>;
	fn line_string(&self, coordinates: Vec<Coordinates>) -> Result<Self::Output>;
	fn polygon(&self, rings: Vec<Vec<Coordinates>>) -> Result<Self::Output>;
	fn multi_point(&self, points: Vec<Coordinates>, ids: Option<Vec<i64>>) -> Result<Self::Output>;
	fn multi_line_string(&self, lines: Vec<Vec<Coordinates>>, ids: Option<Vec<i64>>) -> Result<Self::Output>;
	fn multi_polygon(&self, polygons: Vec<Vec<Vec<Coordinates>>>, ids: Option<Vec<i64>>) -> Result<Self::Output>;
	fn geometry_collection(&self, children: Vec<Self::Output>, ids: Option<Vec<i64>>) -> Result<Self::Output>;
}

/// Builds [`Geometry`] values.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultGeometryFactory;

fn polygon_from_rings(rings: Vec<Vec<Coordinates>>) -> PolygonGeometry {
	PolygonGeometry(rings.into_iter().map(RingGeometry).collect())
}

impl GeometryFactory for DefaultGeometryFactory {
	type Output = Geometry;

	fn empty(&self, kind: GeometryType) -> Result<Geometry> {
		Ok(Geometry::empty(kind))
	}

	fn point(&self, coordinates: Coordinates) -> Result<Geometry> {
		Ok(Geometry::Point(PointGeometry::new(coordinates)))
	}

	fn line_string(&self, coordinates: Vec<Coordinates>) -> Result<Geometry> {
		Ok(Geometry::LineString(LineStringGeometry(coordinates)))
	}

	fn polygon(&self, rings: Vec<Vec<Coordinates>>) -> Result<Geometry> {
		Ok(Geometry::Polygon(polygon_from_rings(rings)))
	}

	fn multi_point(&self, points: Vec<Coordinates>, ids: Option<Vec<i64>>) -> Result<Geometry> {
		let mut multi = MultiPointGeometry::from_parts(points.into_iter().map(PointGeometry::new).collect());
		multi.set_ids(ids)?;
		Ok(Geometry::MultiPoint(multi))
	}

	fn multi_line_string(&self, lines: Vec<Vec<Coordinates>>, ids: Option<Vec<i64>>) -> Result<Geometry> {
		let mut multi = MultiLineStringGeometry::from_parts(lines.into_iter().map(LineStringGeometry).collect());
		multi.set_ids(ids)?;
		Ok(Geometry::MultiLineString(multi))
	}

	fn multi_polygon(&self, polygons: Vec<Vec<Vec<Coordinates>>>, ids: Option<Vec<i64>>) -> Result<Geometry> {
		let mut multi = MultiPolygonGeometry::from_parts(polygons.into_iter().map(polygon_from_rings).collect());
		multi.set_ids(ids)?;
		Ok(Geometry::MultiPolygon(multi))
	}

	fn geometry_collection(&self, children: Vec<Geometry>, ids: Option<Vec<i64>>) -> Result<Geometry> {
		let mut collection = GeometryCollection::from_parts(children);
		collection.set_ids(ids)?;
		Ok(Geometry::GeometryCollection(collection))
	}
}

/// Builds [`geo_types::Geometry`] values.
///
/// `geo_types` has no Z/M ordinates and no identifiers; both are dropped. There is no empty
/// point in `geo_types` either, so an empty TWKB point fails to decode.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeoTypesFactory;

fn geo_line(coordinates: Vec<Coordinates>) -> geo_types::LineString<f64> {
	geo_types::LineString(coordinates.into_iter().map(geo_types::Coord::from).collect())
}

fn geo_polygon(rings: Vec<Vec<Coordinates>>) -> geo_types::Polygon<f64> {
	let mut rings = rings.into_iter().map(geo_line);
	let exterior = rings.next().unwrap_or_else(|| geo_types::LineString(Vec::new()));
	geo_types::Polygon::new(exterior, rings.collect())
}

impl GeometryFactory for GeoTypesFactory {
	type Output = geo_types::Geometry<f64>;

	fn empty(&self, kind: GeometryType) -> Result<Self::Output> {
		Ok(match kind {
			GeometryType::Point => bail!("geo_types cannot represent an empty point"),
			GeometryType::LineString => geo_types::Geometry::LineString(geo_line(Vec::new())),
			GeometryType::Polygon => geo_types::Geometry::Polygon(geo_polygon(Vec::new())),
			GeometryType::MultiPoint => geo_types::Geometry::MultiPoint(geo_types::MultiPoint(Vec::new())),
			GeometryType::MultiLineString => geo_types::Geometry::MultiLineString(geo_types::MultiLineString(Vec::new())),
			GeometryType::MultiPolygon => geo_types::Geometry::MultiPolygon(geo_types::MultiPolygon(Vec::new())),
			GeometryType::GeometryCollection => {
				geo_types::Geometry::GeometryCollection(geo_types::GeometryCollection(Vec::new()))
			}
		})
	}

	fn point(&self, coordinates: Coordinates) -> Result<Self::Output> {
		Ok(geo_types::Geometry::Point(geo_types::Point(coordinates.into())))
	}

	fn line_string(&self, coordinates: Vec<Coordinates>) -> Result<Self::Output> {
		Ok(geo_types::Geometry::LineString(geo_line(coordinates)))
	}

	fn polygon(&self, rings: Vec<Vec<Coordinates>>) -> Result<Self::Output> {
		Ok(geo_types::Geometry::Polygon(geo_polygon(rings)))
	}

	fn multi_point(&self, points: Vec<Coordinates>, _ids: Option<Vec<i64>>) -> Result<Self::Output> {
		Ok(geo_types::Geometry::MultiPoint(geo_types::MultiPoint(
			points.into_iter().map(|c| geo_types::Point(c.into())).collect(),
		)))
	}

	fn multi_line_string(&self, lines: Vec<Vec<Coordinates>>, _ids: Option<Vec<i64>>) -> Result<Self::Output> {
		Ok(geo_types::Geometry::MultiLineString(geo_types::MultiLineString(
			lines.into_iter().map(geo_line).collect(),
		)))
	}

	fn multi_polygon(&self, polygons: Vec<Vec<Vec<Coordinates>>>, _ids: Option<Vec<i64>>) -> Result<Self::Output> {
		Ok(geo_types::Geometry::MultiPolygon(geo_types::MultiPolygon(
			polygons.into_iter().map(geo_polygon).collect(),
		)))
	}

	fn geometry_collection(&self, children: Vec<Self::Output>, _ids: Option<Vec<i64>>) -> Result<Self::Output> {
		Ok(geo_types::Geometry::GeometryCollection(geo_types::GeometryCollection(
			children,
		)))
	}
}
