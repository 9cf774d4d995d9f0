//! Encoding of geometries as TWKB.
//!
//! ```rust
//! use twkb_geometry::{Geometry, TwkbWriter, TwkbWriterOptions};
//!
//! let writer = TwkbWriter::new(TwkbWriterOptions::default().with_precision_xy(0).with_size(true)).unwrap();
//! let blob = writer.write(&Geometry::new_line_string(vec![[1.0, 1.0], [5.0, 5.0]])).unwrap();
//! assert_eq!(blob.as_hex_compact(), "020309020802080202020808");
//! ```

use super::{
	BoundingBox, CoordinateCodec, IdCounter, IdSource, SequenceLayout, TwkbHeader, TwkbWriterOptions, check_id_count,
	write_id_list,
};
use crate::geo::{Geometry, GeometryTrait, GeometryType, PolygonGeometry};
use anyhow::{Context, Result};
use log::{debug, trace, warn};
use std::sync::Arc;
use twkb_core::{
	Blob,
	io::{ValueWriter, ValueWriterBlob},
};

/// Writes geometries as TWKB.
///
/// A writer can be shared between threads. The only state it keeps across calls is the
/// [`IdCounter`] used for children that have no ids.
#[derive(Clone)]
pub struct TwkbWriter {
	options: TwkbWriterOptions,
	id_counter: Arc<IdCounter>,
	id_source: Option<Arc<dyn IdSource>>,
}

impl TwkbWriter {
	/// Creates a writer.
	///
	/// # Errors
	/// Fails with [`twkb_core::TwkbError::PrecisionOutOfRange`] if a precision is out of range.
	pub fn new(options: TwkbWriterOptions) -> Result<Self> {
		TwkbHeader::new(GeometryType::Point, options.precision_xy)?
			.with_z(options.precision_z)?
			.with_m(options.precision_m)?;
		Ok(Self {
			options,
			id_counter: Arc::new(IdCounter::default()),
			id_source: None,
		})
	}

	/// Uses `counter` for children without ids, e.g. to share it between writers.
	#[must_use]
	pub fn with_id_counter(mut self, counter: Arc<IdCounter>) -> Self {
		self.id_counter = counter;
		self
	}

	/// Asks `source` for ids before looking at the ids attached to a geometry.
	#[must_use]
	pub fn with_id_source(mut self, source: impl IdSource + 'static) -> Self {
		self.id_source = Some(Arc::new(source));
		self
	}

	pub fn options(&self) -> &TwkbWriterOptions {
		&self.options
	}

	/// Encodes a geometry.
	pub fn write(&self, geometry: &Geometry) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new();
		self.write_to(&mut writer, geometry, None)?;
		Ok(writer.into_blob())
	}

	/// Encodes a multi geometry or collection with the given ids for its direct children.
	///
	/// # Errors
	/// Fails with [`twkb_core::TwkbError::InconsistentIdList`] unless there is one id per child.
	pub fn write_with_ids(&self, geometry: &Geometry, ids: &[i64]) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new();
		self.write_to(&mut writer, geometry, Some(ids))?;
		Ok(writer.into_blob())
	}

	/// Encodes several geometries one after another.
	pub fn write_all(&self, geometries: &[Geometry]) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new();
		for geometry in geometries {
			self.write_to(&mut writer, geometry, None)?;
		}
		Ok(writer.into_blob())
	}

	/// Encodes a geometry into `writer`.
	pub fn write_to(&self, writer: &mut dyn ValueWriter, geometry: &Geometry, ids: Option<&[i64]>) -> Result<()> {
		if let Some(ids) = ids {
			check_id_count(ids, geometry.num_children())?;
		}
		let start = writer.position()?;
		self
			.write_node(writer, geometry, ids)
			.with_context(|| format!("Failed to write {}", geometry.geometry_type()))?;
		debug!(
			"wrote {} as {} bytes",
			geometry.geometry_type(),
			writer.position()? - start
		);
		Ok(())
	}

	fn header_for(&self, geometry: &Geometry) -> Result<TwkbHeader> {
		let options = &self.options;
		let mut header = TwkbHeader::new(geometry.geometry_type(), options.precision_xy)?
			.with_bbox(options.emit_bbox)
			.with_size(options.emit_size)
			.with_id_list(options.emit_id_list)
			.with_empty(geometry.is_empty());
		if options.emit_z && geometry.has_z() {
			header = header.with_z(options.precision_z)?;
		}
		if options.emit_m && geometry.has_m() {
			header = header.with_m(options.precision_m)?;
		}
		Ok(header.normalized())
	}

	fn write_node(&self, writer: &mut dyn ValueWriter, geometry: &Geometry, ids: Option<&[i64]>) -> Result<()> {
		let header = self.header_for(geometry)?;
		trace!("write {header:?}");
		header.write(writer)?;

		if header.has_size {
			let mut body = ValueWriterBlob::new();
			self.write_body(&mut body, geometry, &header, ids)?;
			let body = body.into_blob();
			writer.write_varint(body.len())?;
			writer.write_blob(&body)?;
		} else {
			self.write_body(writer, geometry, &header, ids)?;
		}
		Ok(())
	}

	fn write_body(
		&self,
		writer: &mut dyn ValueWriter,
		geometry: &Geometry,
		header: &TwkbHeader,
		ids: Option<&[i64]>,
	) -> Result<()> {
		if header.has_empty {
			return Ok(());
		}

		let mut codec = CoordinateCodec::new(header);
		if header.has_bbox {
			BoundingBox::compute(geometry, codec.scale().ordinates()).write(writer, codec.scale())?;
		}

		let collapse = self.options.collapse_repeated_points;
		match geometry {
			Geometry::Point(g) => {
				codec.write_sequence(writer, g.0.as_slice(), SequenceLayout::point())?;
			}
			Geometry::LineString(g) => {
				codec.write_sequence(writer, &g.0, SequenceLayout::line_string(collapse))?;
			}
			Geometry::Polygon(g) => write_polygon(writer, &mut codec, g, collapse)?,
			Geometry::MultiPoint(g) => {
				self.write_children_header(writer, geometry, header, ids)?;
				for point in &g.parts {
					codec.write_sequence(writer, point.0.as_slice(), SequenceLayout::point())?;
				}
			}
			Geometry::MultiLineString(g) => {
				self.write_children_header(writer, geometry, header, ids)?;
				for line in &g.parts {
					codec.write_sequence(writer, &line.0, SequenceLayout::line_string(collapse))?;
				}
			}
			Geometry::MultiPolygon(g) => {
				self.write_children_header(writer, geometry, header, ids)?;
				for polygon in &g.parts {
					write_polygon(writer, &mut codec, polygon, collapse)?;
				}
			}
			Geometry::GeometryCollection(g) => {
				self.write_children_header(writer, geometry, header, ids)?;
				for child in &g.parts {
					self.write_node(writer, child, None)?;
				}
			}
		}
		Ok(())
	}

	/// Writes the child count and, if enabled, the id list.
	fn write_children_header(
		&self,
		writer: &mut dyn ValueWriter,
		geometry: &Geometry,
		header: &TwkbHeader,
		ids: Option<&[i64]>,
	) -> Result<()> {
		let children = geometry.num_children();
		writer.write_varint(children as u64)?;
		if header.has_id_list {
			let ids = self.resolve_ids(geometry, ids)?;
			write_id_list(writer, &ids)?;
		}
		Ok(())
	}

	fn resolve_ids(&self, geometry: &Geometry, explicit: Option<&[i64]>) -> Result<Vec<i64>> {
		let children = geometry.num_children();
		if let Some(ids) = explicit {
			check_id_count(ids, children)?;
			return Ok(ids.to_vec());
		}
		if let Some(source) = &self.id_source
			&& let Some(ids) = source.ids(geometry)
		{
			check_id_count(&ids, children).context("ids from id source")?;
			return Ok(ids);
		}
		if let Some(ids) = geometry.ids() {
			check_id_count(ids, children)?;
			return Ok(ids.to_vec());
		}
		warn!(
			"{} with {children} children has no ids, numbering them from {}",
			geometry.geometry_type(),
			self.id_counter.peek()
		);
		Ok(self.id_counter.take(children))
	}
}

fn write_polygon(
	writer: &mut dyn ValueWriter,
	codec: &mut CoordinateCodec,
	polygon: &PolygonGeometry,
	collapse: bool,
) -> Result<()> {
	writer.write_varint(polygon.0.len() as u64)?;
	for ring in &polygon.0 {
		codec.write_sequence(writer, ring.open_coordinates(), SequenceLayout::ring(collapse))?;
	}
	Ok(())
}
