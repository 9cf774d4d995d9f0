//! Bounding boxes: per active ordinate the minimum and the extent, both as zigzag varints.

use super::ScaleVector;
use crate::geo::{Geometry, GeometryTrait, Ordinate};
use anyhow::{Context, Result};
use std::fmt::Debug;
use twkb_core::io::{ValueReader, ValueWriter};

/// A closed range of values. An interval that has not seen any value is empty.
#[derive(Clone, Copy, PartialEq)]
pub struct Interval {
	pub min: f64,
	pub max: f64,
}

impl Interval {
	#[must_use]
	pub fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	#[must_use]
	pub fn empty() -> Self {
		Self {
			min: f64::INFINITY,
			max: f64::NEG_INFINITY,
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.min > self.max
	}

	pub fn expand(&mut self, value: f64) {
		self.min = self.min.min(value);
		self.max = self.max.max(value);
	}
}

impl Default for Interval {
	fn default() -> Self {
		Self::empty()
	}
}

impl Debug for Interval {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.is_empty() {
			f.write_str("[]")
		} else {
			write!(f, "[{:?}, {:?}]", self.min, self.max)
		}
	}
}

/// One [`Interval`] per active ordinate, in wire order.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundingBox(pub Vec<(Ordinate, Interval)>);

impl BoundingBox {
	/// Computes the intervals of `ordinates` over all coordinates of the geometry.
	///
	/// Ordinates a coordinate lacks count as 0, the value they are encoded with.
	#[must_use]
	pub fn compute(geometry: &Geometry, ordinates: &[Ordinate]) -> Self {
		let mut intervals = vec![Interval::empty(); ordinates.len()];
		geometry.for_each_coordinate(&mut |c| {
			for (interval, ordinate) in intervals.iter_mut().zip(ordinates) {
				interval.expand(c.ordinate(*ordinate).unwrap_or(0.0));
			}
		});
		Self(ordinates.iter().copied().zip(intervals).collect())
	}

	#[must_use]
	pub fn get(&self, ordinate: Ordinate) -> Option<&Interval> {
		self.0.iter().find(|(o, _)| *o == ordinate).map(|(_, interval)| interval)
	}

	/// Writes minimum and extent per dimension. An empty interval is written as `0, 0`.
	pub fn write(&self, writer: &mut dyn ValueWriter, scale: &ScaleVector) -> Result<()> {
		for (dim, (_, interval)) in self.0.iter().enumerate() {
			let (min, max) = if interval.is_empty() {
				(0, 0)
			} else {
				(scale.to_integer(dim, interval.min), scale.to_integer(dim, interval.max))
			};
			writer.write_svarint(min)?;
			writer.write_svarint(max.wrapping_sub(min))?;
		}
		Ok(())
	}

	pub fn read<'a>(reader: &mut dyn ValueReader<'a>, scale: &ScaleVector) -> Result<Self> {
		let mut intervals = Vec::with_capacity(scale.dimensions());
		for (dim, ordinate) in scale.ordinates().iter().enumerate() {
			let min = reader.read_svarint().context("Failed to read bounding box")?;
			let extent = reader.read_svarint().context("Failed to read bounding box")?;
			intervals.push((
				*ordinate,
				Interval::new(scale.to_float(dim, min), scale.to_float(dim, min.wrapping_add(extent))),
			));
		}
		Ok(Self(intervals))
	}
}
