//! Decoding of TWKB into geometries.
//!
//! ```rust
//! use twkb_core::Blob;
//! use twkb_geometry::{Geometry, TwkbReader};
//!
//! let blob = Blob::from_hex("02 00 02 02 02 08 08").unwrap();
//! let geometry = TwkbReader::new().read(blob.as_slice()).unwrap();
//! assert_eq!(geometry, Geometry::new_line_string(vec![[1.0, 1.0], [5.0, 5.0]]));
//! ```

use super::{BoundingBox, CoordinateCodec, IdSink, TwkbHeader, TwkbReaderOptions, read_id_list};
use crate::geo::{Coordinates, DefaultGeometryFactory, Geometry, GeometryFactory, GeometryType};
use anyhow::{Context, Result, bail};
use log::{debug, trace};
use twkb_core::{
	TwkbError,
	io::{ValueReader, ValueReaderSlice},
};

/// Collections nested deeper than this are rejected.
pub const MAX_NESTING_DEPTH: usize = 64;

/// A decoded geometry together with the metadata of its header.
#[derive(Clone, Debug, PartialEq)]
pub struct TwkbRecord<G = Geometry> {
	pub header: TwkbHeader,
	/// The size prefix, if present.
	pub size: Option<u64>,
	/// The bounding box, if present.
	pub bbox: Option<BoundingBox>,
	pub geometry: G,
}

/// Reads TWKB geometries.
#[derive(Clone, Debug, Default)]
pub struct TwkbReader {
	options: TwkbReaderOptions,
}

impl TwkbReader {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_options(options: TwkbReaderOptions) -> Self {
		Self { options }
	}

	pub fn options(&self) -> &TwkbReaderOptions {
		&self.options
	}

	/// Decodes the first geometry of `data`.
	pub fn read(&self, data: &[u8]) -> Result<Geometry> {
		Ok(self.read_record(data)?.geometry)
	}

	/// Decodes the first geometry of `data` together with its header, size and bounding box.
	pub fn read_record(&self, data: &[u8]) -> Result<TwkbRecord> {
		self.read_from(&mut ValueReaderSlice::new(data), &DefaultGeometryFactory, None)
	}

	/// Decodes the first geometry of `data` with a custom factory.
	pub fn read_with<F: GeometryFactory>(&self, data: &[u8], factory: &F) -> Result<F::Output> {
		Ok(self.read_from(&mut ValueReaderSlice::new(data), factory, None)?.geometry)
	}

	/// Decodes the first geometry of `data`, reporting the ids of every multi geometry and
	/// collection to `sink`.
	pub fn read_with_sink(&self, data: &[u8], sink: &mut dyn IdSink) -> Result<Geometry> {
		Ok(self
			.read_from(&mut ValueReaderSlice::new(data), &DefaultGeometryFactory, Some(sink))?
			.geometry)
	}

	/// Decodes geometries until `data` is exhausted.
	pub fn read_all(&self, data: &[u8]) -> Result<Vec<Geometry>> {
		Ok(self.read_records(data)?.into_iter().map(|r| r.geometry).collect())
	}

	/// Decodes records until `data` is exhausted.
	pub fn read_records(&self, data: &[u8]) -> Result<Vec<TwkbRecord>> {
		let mut reader = ValueReaderSlice::new(data);
		let mut records = Vec::new();
		while reader.has_remaining() {
			let position = reader.position();
			let record = self
				.read_from(&mut reader, &DefaultGeometryFactory, None)
				.with_context(|| format!("Failed to read geometry at byte {position}"))?;
			records.push(record);
		}
		Ok(records)
	}

	/// Decodes one geometry from `reader`. The reader is left behind the geometry.
	pub fn read_from<'a, F: GeometryFactory>(
		&self,
		reader: &mut dyn ValueReader<'a>,
		factory: &F,
		sink: Option<&mut dyn IdSink>,
	) -> Result<TwkbRecord<F::Output>> {
		let start = reader.position();
		let mut context = ReadContext {
			options: &self.options,
			factory,
			sink,
		};
		let record = context.read_node(reader, 0)?;
		debug!(
			"read {} from {} bytes",
			record.header.geometry_type,
			reader.position() - start
		);
		Ok(record)
	}
}

struct ReadContext<'o, 's, F> {
	options: &'o TwkbReaderOptions,
	factory: &'o F,
	sink: Option<&'s mut dyn IdSink>,
}

impl<F: GeometryFactory> ReadContext<'_, '_, F> {
	fn read_node<'a>(&mut self, reader: &mut dyn ValueReader<'a>, depth: usize) -> Result<TwkbRecord<F::Output>> {
		if depth > MAX_NESTING_DEPTH {
			bail!("geometry collections are nested deeper than {MAX_NESTING_DEPTH} levels");
		}

		let header = TwkbHeader::read(reader)?;
		let kind = header.geometry_type;

		if !header.has_size {
			let (bbox, geometry) = self
				.read_body(reader, &header, depth)
				.with_context(|| format!("Failed to read {kind}"))?;
			return Ok(TwkbRecord {
				header,
				size: None,
				bbox,
				geometry,
			});
		}

		let size = reader.read_varint().context("Failed to read size")?;
		let mut body = reader
			.get_sub_reader(size)
			.with_context(|| format!("{kind} declares a size of {size} bytes"))?;
		let (bbox, geometry) = self
			.read_body(body.as_mut(), &header, depth)
			.with_context(|| format!("Failed to read {kind}"))?;

		// the parent reader already continues behind the declared size
		let consumed = body.position();
		if self.options.check_size && consumed != size {
			bail!(TwkbError::SizeMismatch {
				declared: size,
				consumed
			});
		}

		Ok(TwkbRecord {
			header,
			size: Some(size),
			bbox,
			geometry,
		})
	}

	fn read_body<'a>(
		&mut self,
		reader: &mut dyn ValueReader<'a>,
		header: &TwkbHeader,
		depth: usize,
	) -> Result<(Option<BoundingBox>, F::Output)> {
		let kind = header.geometry_type;
		if header.has_empty {
			trace!("{kind} is empty");
			return Ok((None, self.factory.empty(kind)?));
		}

		let mut codec = CoordinateCodec::new(header);
		let bbox = if header.has_bbox {
			Some(BoundingBox::read(reader, codec.scale())?)
		} else {
			None
		};

		let geometry = match kind {
			GeometryType::Point => self.factory.point(codec.read_coordinate(reader)?)?,
			GeometryType::LineString => {
				let count = reader.read_count()?;
				trace!("{kind} with {count} coordinates");
				self.factory.line_string(codec.read_sequence(reader, count, false)?)?
			}
			GeometryType::Polygon => self.factory.polygon(read_rings(reader, &mut codec)?)?,
			GeometryType::MultiPoint => {
				let (count, ids) = self.read_children_header(reader, header)?;
				let points = codec.read_sequence(reader, count, false)?;
				self.factory.multi_point(points, ids)?
			}
			GeometryType::MultiLineString => {
				let (count, ids) = self.read_children_header(reader, header)?;
				let mut lines = Vec::with_capacity(count);
				for _ in 0..count {
					let length = reader.read_count()?;
					lines.push(codec.read_sequence(reader, length, false)?);
				}
				self.factory.multi_line_string(lines, ids)?
			}
			GeometryType::MultiPolygon => {
				let (count, ids) = self.read_children_header(reader, header)?;
				let mut polygons = Vec::with_capacity(count);
				for _ in 0..count {
					polygons.push(read_rings(reader, &mut codec)?);
				}
				self.factory.multi_polygon(polygons, ids)?
			}
			GeometryType::GeometryCollection => {
				let (count, ids) = self.read_children_header(reader, header)?;
				let mut children = Vec::with_capacity(count);
				for index in 0..count {
					let child = self
						.read_node(reader, depth + 1)
						.with_context(|| format!("Failed to read child {index} of {kind}"))?;
					children.push(child.geometry);
				}
				self.factory.geometry_collection(children, ids)?
			}
		};
		Ok((bbox, geometry))
	}

	/// Reads the child count and the id list, hands the ids to the sink and returns them if
	/// they are to be exported.
	fn read_children_header<'a>(
		&mut self,
		reader: &mut dyn ValueReader<'a>,
		header: &TwkbHeader,
	) -> Result<(usize, Option<Vec<i64>>)> {
		let kind = header.geometry_type;
		let count = reader.read_count()?;
		reader
			.ensure_remaining(count as u64)
			.with_context(|| format!("{kind} declares {count} children"))?;
		let ids = read_id_list(reader, count, header.has_id_list)?;
		trace!("{kind} with {count} children, ids {ids:?}");

		if let Some(sink) = self.sink.as_deref_mut() {
			sink.ids_read(kind, &ids);
		}
		Ok((count, self.options.export_ids.then_some(ids)))
	}
}

fn read_rings<'a>(reader: &mut dyn ValueReader<'a>, codec: &mut CoordinateCodec) -> Result<Vec<Vec<Coordinates>>> {
	let count = reader.read_count()?;
	reader
		.ensure_remaining(count as u64)
		.with_context(|| format!("polygon declares {count} rings"))?;
	let mut rings = Vec::with_capacity(count);
	for _ in 0..count {
		let length = reader.read_count()?;
		rings.push(codec.read_sequence(reader, length, true)?);
	}
	Ok(rings)
}
