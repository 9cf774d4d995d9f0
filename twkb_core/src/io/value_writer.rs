//! This module defines the `ValueWriter` trait for writing the values TWKB is made of.
//!
//! # Overview
//!
//! Implementations only provide the underlying [`std::io::Write`] and the current position; the
//! trait adds single bytes, varints, zigzag varints and raw byte runs on top.
//!
//! # Examples
//!
//! ```rust
//! use twkb_core::io::{ValueWriter, ValueWriterBlob};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut writer = ValueWriterBlob::new();
//!     writer.write_u8(0x01)?;
//!     writer.write_u8(0x00)?;
//!     writer.write_svarint(10)?;
//!     writer.write_svarint(10)?;
//!     assert_eq!(writer.into_blob().into_vec(), vec![0x01, 0x00, 0x14, 0x14]);
//!     Ok(())
//! }
//! ```

use super::varint::encode_zigzag;
use crate::Blob;
use anyhow::Result;
use std::io::Write;

/// A trait for writing TWKB values to various destinations.
pub trait ValueWriter {
	/// Returns a mutable reference to the underlying writer.
	fn get_writer(&mut self) -> &mut dyn Write;

	/// Returns the current write position.
	///
	/// # Errors
	///
	/// Returns an error if the position cannot be determined.
	fn position(&mut self) -> Result<u64>;

	/// Returns `true` if nothing has been written yet.
	fn is_empty(&mut self) -> Result<bool> {
		Ok(self.position()? == 0)
	}

	/// Writes an unsigned variable-length integer (varint).
	fn write_varint(&mut self, mut value: u64) -> Result<()> {
		while value >= 0x80 {
			self.get_writer().write_all(&[((value & 0x7F) as u8) | 0x80])?;
			value >>= 7;
		}
		self.get_writer().write_all(&[value as u8])?;
		Ok(())
	}

	/// Writes a signed variable-length integer (zigzag-encoded).
	fn write_svarint(&mut self, value: i64) -> Result<()> {
		self.write_varint(encode_zigzag(value))
	}

	/// Writes a single byte.
	fn write_u8(&mut self, value: u8) -> Result<()> {
		self.get_writer().write_all(&[value])?;
		Ok(())
	}

	/// Writes the contents of a [`Blob`].
	fn write_blob(&mut self, blob: &Blob) -> Result<()> {
		self.get_writer().write_all(blob.as_slice())?;
		Ok(())
	}

	/// Writes a slice of bytes.
	fn write_slice(&mut self, buf: &[u8]) -> Result<()> {
		self.get_writer().write_all(buf)?;
		Ok(())
	}
}
