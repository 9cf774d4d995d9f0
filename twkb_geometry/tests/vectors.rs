//! Known TWKB byte strings: each one must decode, and encoding the result with matching options
//! must give back the same bytes.

use anyhow::Result;
use pretty_assertions::assert_eq;
use rstest::rstest;
use twkb_core::Blob;
use twkb_geometry::*;

struct Flags {
	bbox: bool,
	size: bool,
	ids: bool,
}

const PLAIN: Flags = Flags {
	bbox: false,
	size: false,
	ids: false,
};

fn round_trip(hex: &str, precision: i32, flags: Flags) -> Result<Geometry> {
	let blob = Blob::from_hex(hex)?;
	let reader = TwkbReader::with_options(TwkbReaderOptions::default().with_export_ids(flags.ids));
	let geometry = reader.read(blob.as_slice())?;

	let writer = TwkbWriter::new(
		TwkbWriterOptions::default()
			.with_precision_xy(precision)
			.with_bbox(flags.bbox)
			.with_size(flags.size)
			.with_id_list(flags.ids),
	)?;
	assert_eq!(writer.write(&geometry)?.as_hex_compact(), hex);
	Ok(geometry)
}

#[test]
fn point() -> Result<()> {
	let geometry = round_trip("01000204", 0, PLAIN)?;
	assert_eq!(geometry, Geometry::new_point([1.0, 2.0]));
	Ok(())
}

#[test]
fn line_string() -> Result<()> {
	let geometry = round_trip("02000202020808", 0, PLAIN)?;
	assert_eq!(geometry, Geometry::new_line_string(vec![[1.0, 1.0], [5.0, 5.0]]));
	Ok(())
}

#[test]
fn line_string_with_bbox_and_size() -> Result<()> {
	let flags = Flags {
		bbox: true,
		size: true,
		ids: false,
	};
	let geometry = round_trip("020309020802080202020808", 0, flags)?;
	assert_eq!(geometry, Geometry::new_line_string(vec![[1.0, 1.0], [5.0, 5.0]]));
	Ok(())
}

#[test]
fn polygon_with_hole() -> Result<()> {
	let flags = Flags {
		bbox: true,
		size: true,
		ids: false,
	};
	let geometry = round_trip("0303170004000402040400000403000003040002020000010100", 0, flags)?;
	assert_eq!(
		geometry,
		Geometry::new_polygon(vec![
			vec![[2.0, 0.0], [2.0, 2.0], [0.0, 2.0], [0.0, 0.0], [2.0, 0.0]],
			vec![[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0], [0.0, 1.0]],
		])
	);
	Ok(())
}

#[test]
fn multi_point_with_ids() -> Result<()> {
	let flags = Flags {
		bbox: true,
		size: true,
		ids: true,
	};
	let geometry = round_trip("04070b0004020402000200020404", 0, flags)?;
	assert_eq!(
		geometry,
		Geometry::new_multi_point(vec![[0.0, 1.0], [2.0, 3.0]]).with_ids(vec![0, 1])?
	);
	Ok(())
}

#[test]
fn multi_line_string() -> Result<()> {
	let flags = Flags {
		bbox: true,
		size: true,
		ids: false,
	};
	let geometry = round_trip("05030f020802080202020208080207050404", 0, flags)?;
	assert_eq!(
		geometry,
		Geometry::new_multi_line_string(vec![vec![[1.0, 1.0], [5.0, 5.0]], vec![[1.0, 2.0], [3.0, 4.0]]])
	);
	Ok(())
}

#[test]
fn geometry_collection() -> Result<()> {
	let flags = Flags {
		bbox: false,
		size: false,
		ids: true,
	};
	let geometry = round_trip("070402000201000002020002080a0404", 0, flags)?;
	assert_eq!(
		geometry,
		Geometry::new_collection(vec![
			Geometry::new_point([0.0, 1.0]),
			Geometry::new_line_string(vec![[4.0, 5.0], [6.0, 7.0]]),
		])
		.with_ids(vec![0, 1])?
	);
	Ok(())
}

#[rstest]
#[case("0110", GeometryType::Point)]
#[case("0210", GeometryType::LineString)]
#[case("0310", GeometryType::Polygon)]
#[case("0410", GeometryType::MultiPoint)]
#[case("0510", GeometryType::MultiLineString)]
#[case("0610", GeometryType::MultiPolygon)]
#[case("0710", GeometryType::GeometryCollection)]
fn empty(#[case] hex: &str, #[case] kind: GeometryType) -> Result<()> {
	let geometry = round_trip(hex, 0, PLAIN)?;
	assert_eq!(geometry, Geometry::empty(kind));
	assert!(geometry.is_empty());
	Ok(())
}

#[test]
fn empty_with_size_and_precision() -> Result<()> {
	let flags = Flags {
		bbox: false,
		size: true,
		ids: false,
	};
	let geometry = round_trip("821200", 4, flags)?;
	assert_eq!(geometry, Geometry::empty(GeometryType::LineString));
	Ok(())
}
