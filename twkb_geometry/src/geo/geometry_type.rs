use super::Geometry;
use anyhow::{Result, bail};
use std::fmt::Display;
use twkb_core::TwkbError;

/// The seven geometry kinds TWKB can carry, with their wire tags.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
	Point = 1,
	LineString = 2,
	Polygon = 3,
	MultiPoint = 4,
	MultiLineString = 5,
	MultiPolygon = 6,
	GeometryCollection = 7,
}

impl GeometryType {
	pub const ALL: [GeometryType; 7] = [
		GeometryType::Point,
		GeometryType::LineString,
		GeometryType::Polygon,
		GeometryType::MultiPoint,
		GeometryType::MultiLineString,
		GeometryType::MultiPolygon,
		GeometryType::GeometryCollection,
	];

	#[must_use]
	pub fn as_u8(&self) -> u8 {
		*self as u8
	}

	/// `true` for the kinds that have direct children and may carry an id list.
	#[must_use]
	pub fn is_multi(&self) -> bool {
		matches!(
			self,
			GeometryType::MultiPoint
				| GeometryType::MultiLineString
				| GeometryType::MultiPolygon
				| GeometryType::GeometryCollection
		)
	}
}

impl TryFrom<u8> for GeometryType {
	type Error = anyhow::Error;

	fn try_from(value: u8) -> Result<Self> {
		Ok(match value {
			1 => GeometryType::Point,
			2 => GeometryType::LineString,
			3 => GeometryType::Polygon,
			4 => GeometryType::MultiPoint,
			5 => GeometryType::MultiLineString,
			6 => GeometryType::MultiPolygon,
			7 => GeometryType::GeometryCollection,
			_ => bail!(TwkbError::UnsupportedGeometryType(value)),
		})
	}
}

impl From<&Geometry> for GeometryType {
	fn from(geometry: &Geometry) -> Self {
		geometry.geometry_type()
	}
}

impl Display for GeometryType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			GeometryType::Point => "Point",
			GeometryType::LineString => "LineString",
			GeometryType::Polygon => "Polygon",
			GeometryType::MultiPoint => "MultiPoint",
			GeometryType::MultiLineString => "MultiLineString",
			GeometryType::MultiPolygon => "MultiPolygon",
			GeometryType::GeometryCollection => "GeometryCollection",
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn tags_round_trip() -> Result<()> {
		for (index, kind) in GeometryType::ALL.iter().enumerate() {
			assert_eq!(usize::from(kind.as_u8()), index + 1);
			assert_eq!(GeometryType::try_from(kind.as_u8())?, *kind);
		}
		Ok(())
	}

	#[rstest]
	#[case(0)]
	#[case(8)]
	#[case(15)]
	fn unsupported_tags(#[case] tag: u8) {
		let err = GeometryType::try_from(tag).unwrap_err();
		assert_eq!(TwkbError::kind_of(&err), Some(&TwkbError::UnsupportedGeometryType(tag)));
	}

	#[test]
	fn multi_kinds() {
		let multi: Vec<_> = GeometryType::ALL.iter().map(GeometryType::is_multi).collect();
		assert_eq!(multi, [false, false, false, true, true, true, true]);
	}

	#[test]
	fn from_geometry() {
		let multi_point = Geometry::new_multi_point(vec![[1.0, 2.0], [3.0, 4.0]]);
		assert_eq!(GeometryType::from(&multi_point), GeometryType::MultiPoint);
		assert_eq!(GeometryType::MultiPoint.to_string(), "MultiPoint");
	}
}
