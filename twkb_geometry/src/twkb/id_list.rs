//! Identifiers of the children of multi geometries and collections.
//!
//! On write, ids come from (in this order) an explicit list, an [`IdSource`], the ids attached to
//! the geometry, or an [`IdCounter`]. On read, ids are taken from the list or default to the
//! ordinal position of each child, and are handed to an optional [`IdSink`].

use crate::geo::{Geometry, GeometryType};
use anyhow::{Context, Result, bail};
use std::sync::atomic::{AtomicI64, Ordering};
use twkb_core::{
	TwkbError,
	io::{ValueReader, ValueWriter},
};

/// Supplies the ids of the children of a multi geometry while it is written.
pub trait IdSource: Send + Sync {
	/// Returns one id per direct child, or `None` to fall back to the next strategy.
	fn ids(&self, geometry: &Geometry) -> Option<Vec<i64>>;
}

impl<F> IdSource for F
where
	F: Fn(&Geometry) -> Option<Vec<i64>> + Send + Sync,
{
	fn ids(&self, geometry: &Geometry) -> Option<Vec<i64>> {
		self(geometry)
	}
}

/// Receives the ids of every multi geometry and collection while it is read.
pub trait IdSink {
	fn ids_read(&mut self, geometry_type: GeometryType, ids: &[i64]);
}

impl<F> IdSink for F
where
	F: FnMut(GeometryType, &[i64]),
{
	fn ids_read(&mut self, geometry_type: GeometryType, ids: &[i64]) {
		self(geometry_type, ids);
	}
}

/// Hands out increasing ids. Shared between writers through an `Arc`.
#[derive(Debug)]
pub struct IdCounter(AtomicI64);

impl IdCounter {
	#[must_use]
	pub fn new(start: i64) -> Self {
		Self(AtomicI64::new(start))
	}

	/// Returns the next id.
	pub fn next(&self) -> i64 {
		self.0.fetch_add(1, Ordering::Relaxed)
	}

	/// Returns `count` consecutive ids.
	pub fn take(&self, count: usize) -> Vec<i64> {
		let start = self.0.fetch_add(count as i64, Ordering::Relaxed);
		(0..count as i64).map(|offset| start + offset).collect()
	}

	/// The id [`IdCounter::next`] would return.
	pub fn peek(&self) -> i64 {
		self.0.load(Ordering::Relaxed)
	}
}

/// The first id of a default counter is 1.
impl Default for IdCounter {
	fn default() -> Self {
		Self::new(1)
	}
}

/// Fails with [`TwkbError::InconsistentIdList`] unless there is one id per child.
pub fn check_id_count(ids: &[i64], children: usize) -> Result<()> {
	if ids.len() != children {
		bail!(TwkbError::InconsistentIdList {
			expected: children,
			actual: ids.len(),
		});
	}
	Ok(())
}

pub fn write_id_list(writer: &mut dyn ValueWriter, ids: &[i64]) -> Result<()> {
	for id in ids {
		writer.write_svarint(*id)?;
	}
	Ok(())
}

/// Reads `count` ids if the list is present, otherwise returns `0..count`.
pub fn read_id_list<'a>(reader: &mut dyn ValueReader<'a>, count: usize, present: bool) -> Result<Vec<i64>> {
	if !present {
		return Ok((0..count as i64).collect());
	}
	reader
		.ensure_remaining(count as u64)
		.context("Failed to read id list")?;
	(0..count).map(|_| reader.read_svarint()).collect()
}
