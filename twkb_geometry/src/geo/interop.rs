// Conversions from `geo_types`, so geometries from the wider georust ecosystem can be written
// as TWKB. Decoding into `geo_types` goes through `GeoTypesFactory`.

use super::*;

impl From<&geo_types::LineString<f64>> for LineStringGeometry {
	fn from(line: &geo_types::LineString<f64>) -> Self {
		LineStringGeometry(line.0.iter().copied().map(Coordinates::from).collect())
	}
}

impl From<&geo_types::LineString<f64>> for RingGeometry {
	fn from(line: &geo_types::LineString<f64>) -> Self {
		let mut ring = RingGeometry(line.0.iter().copied().map(Coordinates::from).collect());
		ring.close();
		ring
	}
}

impl From<&geo_types::Polygon<f64>> for PolygonGeometry {
	fn from(polygon: &geo_types::Polygon<f64>) -> Self {
		let mut rings = Vec::with_capacity(polygon.interiors().len() + 1);
		if !polygon.exterior().0.is_empty() {
			rings.push(RingGeometry::from(polygon.exterior()));
			rings.extend(polygon.interiors().iter().map(RingGeometry::from));
		}
		PolygonGeometry(rings)
	}
}

impl From<&geo_types::Geometry<f64>> for Geometry {
	fn from(geometry: &geo_types::Geometry<f64>) -> Self {
		use geo_types::Geometry as G;
		match geometry {
			G::Point(p) => Geometry::new_point(p.0),
			G::Line(l) => Geometry::LineString(LineStringGeometry(vec![l.start.into(), l.end.into()])),
			G::LineString(l) => Geometry::LineString(l.into()),
			G::Polygon(p) => Geometry::Polygon(p.into()),
			G::MultiPoint(m) => Geometry::MultiPoint(MultiPointGeometry::from_parts(
				m.0.iter().map(|p| PointGeometry::from(p.0)).collect(),
			)),
			G::MultiLineString(m) => Geometry::MultiLineString(MultiLineStringGeometry::from_parts(
				m.0.iter().map(LineStringGeometry::from).collect(),
			)),
			G::MultiPolygon(m) => {
				Geometry::MultiPolygon(MultiPolygonGeometry::from_parts(m.0.iter().map(PolygonGeometry::from).collect()))
			}
			G::GeometryCollection(c) => Geometry::new_collection(c.0.iter().map(Geometry::from).collect()),
			G::Rect(r) => Geometry::Polygon((&r.to_polygon()).into()),
			G::Triangle(t) => Geometry::Polygon((&t.to_polygon()).into()),
		}
	}
}

impl From<geo_types::Geometry<f64>> for Geometry {
	fn from(geometry: geo_types::Geometry<f64>) -> Self {
		Geometry::from(&geometry)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use geo_types::{Geometry as G, LineString, Point, Polygon, coord, line_string};

	#[test]
	fn point_and_line() {
		assert_eq!(
			Geometry::from(G::Point(Point::new(1.5, -2.5))),
			Geometry::new_point([1.5, -2.5])
		);
		let line = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 1.0)];
		assert_eq!(
			Geometry::from(G::LineString(line)),
			Geometry::new_line_string(vec![[0.0, 0.0], [1.0, 1.0]])
		);
	}

	#[test]
	fn polygon_rings_are_closed() {
		let polygon = Polygon::new(
			LineString::from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)]),
			vec![LineString::from(vec![(1.0, 1.0), (2.0, 1.0), (2.0, 2.0)])],
		);
		let Geometry::Polygon(polygon) = Geometry::from(G::Polygon(polygon)) else {
			panic!("expected a polygon");
		};
		assert_eq!(polygon.0.len(), 2);
		assert!(polygon.0.iter().all(RingGeometry::is_closed));
	}

	#[test]
	fn rect_becomes_polygon() {
		let rect = geo_types::Rect::new(coord! { x: 0.0, y: 0.0 }, coord! { x: 2.0, y: 1.0 });
		let geometry = Geometry::from(G::Rect(rect));
		assert_eq!(geometry.geometry_type(), GeometryType::Polygon);
		assert_eq!(geometry.first_coordinate(), Some(Coordinates::new(0.0, 0.0)));
	}

	#[test]
	fn empty_polygon() {
		let polygon = Polygon::new(LineString::<f64>(vec![]), vec![]);
		assert!(Geometry::from(G::Polygon(polygon)).is_empty());
	}
}
