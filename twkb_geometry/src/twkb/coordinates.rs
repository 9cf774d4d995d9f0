//! Delta coding of coordinate sequences.
//!
//! Every ordinate is scaled to an integer and written as the zigzag varint of its difference to
//! the previous value of the same ordinate. The running state lives in [`CoordinateCodec`] and
//! carries over from one sequence to the next (rings of a polygon, parts of a multi geometry)
//! until the codec is reset for the next geometry.

use super::{ScaleVector, TwkbHeader};
use crate::geo::Coordinates;
use anyhow::{Context, Result};
use twkb_core::io::{ValueReader, ValueWriter};

/// How a coordinate sequence is laid out on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceLayout {
	/// Minimum number of coordinates written. Missing ones are padded.
	pub required: usize,
	/// Collapsing repeated points never reduces the sequence below `min(input, keep)`.
	pub keep: usize,
	/// Prefix the sequence with its coordinate count.
	pub with_count: bool,
	/// Drop coordinates that scale to the same integers as their predecessor.
	pub collapse: bool,
}

impl SequenceLayout {
	/// A single position without count. An empty point is padded to one coordinate.
	#[must_use]
	pub fn point() -> Self {
		Self {
			required: 1,
			keep: 1,
			with_count: false,
			collapse: false,
		}
	}

	#[must_use]
	pub fn line_string(collapse: bool) -> Self {
		Self {
			required: 0,
			keep: 2,
			with_count: true,
			collapse,
		}
	}

	#[must_use]
	pub fn ring(collapse: bool) -> Self {
		Self {
			required: 0,
			keep: 3,
			with_count: true,
			collapse,
		}
	}
}

/// Scale vector plus delta state of the geometry currently being read or written.
#[derive(Clone, Debug)]
pub struct CoordinateCodec {
	scale: ScaleVector,
	state: Vec<i64>,
}

impl CoordinateCodec {
	#[must_use]
	pub fn new(header: &TwkbHeader) -> Self {
		let scale = ScaleVector::new(header);
		let state = vec![0; scale.dimensions()];
		Self { scale, state }
	}

	#[must_use]
	pub fn scale(&self) -> &ScaleVector {
		&self.scale
	}

	/// Sets the delta state back to the origin.
	pub fn reset(&mut self) {
		self.state.fill(0);
	}

	/// Writes a coordinate sequence and returns the number of coordinates written.
	///
	/// Ordinates missing on a coordinate are written as 0. Rings are expected without their
	/// closing coordinate.
	pub fn write_sequence(
		&mut self,
		writer: &mut dyn ValueWriter,
		input: &[Coordinates],
		layout: SequenceLayout,
	) -> Result<usize> {
		let dimensions = self.scale.dimensions();
		let required = layout.required.max(input.len().min(layout.keep));
		let mut deltas: Vec<i64> = Vec::with_capacity(input.len().max(required) * dimensions);
		let mut scaled = vec![0i64; dimensions];
		let mut emitted = 0usize;

		for c in input {
			for (dim, ordinate) in self.scale.ordinates().iter().enumerate() {
				scaled[dim] = self.scale.to_integer(dim, c.ordinate(*ordinate).unwrap_or(0.0));
			}
			if layout.collapse && emitted > 0 && scaled == self.state {
				continue;
			}
			for dim in 0..dimensions {
				deltas.push(scaled[dim].wrapping_sub(self.state[dim]));
				self.state[dim] = scaled[dim];
			}
			emitted += 1;
		}

		if emitted < required {
			if emitted == 0 {
				// nothing to repeat: the first pad returns to the origin
				deltas.extend(self.state.iter().map(|v| v.wrapping_neg()));
				self.reset();
			}
			// zero deltas repeat the last coordinate
			deltas.resize(required * dimensions, 0);
			emitted = required;
		}

		if layout.with_count {
			writer.write_varint(emitted as u64)?;
		}
		for delta in deltas {
			writer.write_svarint(delta)?;
		}
		Ok(emitted)
	}

	/// Reads a single coordinate.
	pub fn read_coordinate<'a>(&mut self, reader: &mut dyn ValueReader<'a>) -> Result<Coordinates> {
		let mut c = Coordinates::new(0.0, 0.0);
		for (dim, ordinate) in self.scale.ordinates().iter().enumerate() {
			self.state[dim] = self.state[dim].wrapping_add(reader.read_svarint()?);
			c.set_ordinate(*ordinate, Some(self.scale.to_float(dim, self.state[dim])));
		}
		Ok(c)
	}

	/// Reads `count` coordinates. With `close_ring` the first coordinate is appended again unless
	/// the sequence already ends with it.
	///
	/// # Errors
	/// Fails with [`twkb_core::TwkbError::TruncatedInput`] if `count` coordinates cannot fit into the
	/// remaining input, and with [`twkb_core::TwkbError::MalformedVarint`] on broken varints.
	pub fn read_sequence<'a>(
		&mut self,
		reader: &mut dyn ValueReader<'a>,
		count: usize,
		close_ring: bool,
	) -> Result<Vec<Coordinates>> {
		let dimensions = self.scale.dimensions();
		reader
			.ensure_remaining((count as u64).saturating_mul(dimensions as u64))
			.with_context(|| format!("Failed to read {count} coordinates"))?;

		let mut coordinates = Vec::with_capacity(count + usize::from(close_ring));
		for _ in 0..count {
			coordinates.push(self.read_coordinate(reader)?);
		}

		if close_ring
			&& let (Some(first), Some(last)) = (coordinates.first().copied(), coordinates.last().copied())
			&& (coordinates.len() == 1 || first != last)
		{
			coordinates.push(first);
		}
		Ok(coordinates)
	}
}
