//! Error kinds raised by the TWKB codec.
//!
//! All fallible functions in this workspace return [`anyhow::Result`]. Codec failures are raised
//! as a [`TwkbError`] (usually via `bail!`) so that callers can recover the kind with
//! [`TwkbError::kind_of`] even after context has been attached on the way up.
//!
//! ```rust
//! use anyhow::{Context, Result, bail};
//! use twkb_core::TwkbError;
//!
//! fn decode() -> Result<()> {
//!     bail!(TwkbError::MalformedVarint)
//! }
//!
//! let err = decode().context("while reading a point").unwrap_err();
//! assert_eq!(TwkbError::kind_of(&err), Some(&TwkbError::MalformedVarint));
//! ```

use std::fmt::Display;
use thiserror::Error;

/// The failure kinds of encoding and decoding TWKB data.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TwkbError {
	/// A varint did not terminate within 10 bytes, or the input ended in the middle of it.
	#[error("malformed varint: no terminating byte within 10 bytes or input ended mid-varint")]
	MalformedVarint,

	/// A precision value lies outside of the range the header can represent.
	#[error("precision {value} for {ordinate} is out of range {min}..={max}")]
	PrecisionOutOfRange {
		ordinate: String,
		value: i32,
		min: i32,
		max: i32,
	},

	/// The header declares a geometry type tag that is not one of 1..=7.
	#[error("unsupported geometry type tag {0}")]
	UnsupportedGeometryType(u8),

	/// A count or length prefix requires more bytes than the input has left.
	#[error("truncated input: {needed} bytes needed, but only {remaining} bytes remain")]
	TruncatedInput { needed: u64, remaining: u64 },

	/// An id list does not have exactly one entry per child geometry.
	#[error("inconsistent id list: expected {expected} ids, got {actual}")]
	InconsistentIdList { expected: usize, actual: usize },

	/// The size prefix of a geometry does not match the number of bytes its content occupies.
	#[error("size mismatch: header declares {declared} bytes, but {consumed} bytes were consumed")]
	SizeMismatch { declared: u64, consumed: u64 },
}

impl TwkbError {
	/// Creates a [`TwkbError::PrecisionOutOfRange`] for the given ordinate name.
	pub fn precision_out_of_range(ordinate: impl Display, value: i32, min: i32, max: i32) -> Self {
		TwkbError::PrecisionOutOfRange {
			ordinate: ordinate.to_string(),
			value,
			min,
			max,
		}
	}

	/// Finds the [`TwkbError`] behind an [`anyhow::Error`], looking through attached context.
	#[must_use]
	pub fn kind_of(error: &anyhow::Error) -> Option<&TwkbError> {
		error.downcast_ref::<TwkbError>()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::{Context, Result, bail};

	fn fail_with(error: TwkbError) -> Result<()> {
		bail!(error)
	}

	#[test]
	fn kind_survives_context() {
		let err = fail_with(TwkbError::UnsupportedGeometryType(9))
			.context("reading header")
			.context("reading collection")
			.unwrap_err();
		assert_eq!(TwkbError::kind_of(&err), Some(&TwkbError::UnsupportedGeometryType(9)));
	}

	#[test]
	fn kind_of_foreign_error() {
		let err = anyhow::anyhow!("something else");
		assert_eq!(TwkbError::kind_of(&err), None);
	}

	#[test]
	fn display_messages() {
		assert_eq!(
			TwkbError::TruncatedInput { needed: 8, remaining: 3 }.to_string(),
			"truncated input: 8 bytes needed, but only 3 bytes remain"
		);
		assert_eq!(
			TwkbError::precision_out_of_range("XY", 9, -7, 7).to_string(),
			"precision 9 for XY is out of range -7..=7"
		);
		assert_eq!(
			TwkbError::InconsistentIdList { expected: 3, actual: 2 }.to_string(),
			"inconsistent id list: expected 3 ids, got 2"
		);
	}
}
