// This module defines the `ValueReader` trait for reading the values TWKB is made of: single
// header bytes, unsigned varints and zigzag encoded signed varints.
//
// # Overview
//
// Implementations provide access to an underlying `SeekRead` and track the total length of the
// readable data. On top of that the trait offers bounds checks (`ensure_remaining`) so that count
// prefixes can be validated against the bytes that are actually left, and sub-readers that limit
// reading to a window of the data.
//
// # Examples
//
// ```rust
// use twkb_core::io::{ValueReader, ValueReaderSlice};
//
// fn main() -> anyhow::Result<()> {
//     let mut reader = ValueReaderSlice::new(&[0x01, 0x00, 0x14, 0x14]);
//     assert_eq!(reader.read_u8()?, 0x01);
//     assert_eq!(reader.read_u8()?, 0x00);
//     assert_eq!(reader.read_svarint()?, 10);
//     assert_eq!(reader.read_svarint()?, 10);
//     Ok(())
// }
// ```

use super::MAX_VARINT_LEN;
use super::varint::decode_zigzag;
use crate::TwkbError;
use anyhow::{Context, Result, bail};
use std::io::{Read, Seek};

/// A simple alias for types implementing both `Seek` and `Read`, used for convenience.
pub trait SeekRead: Seek + Read {}

/// A trait for reading TWKB values from a bounded source.
pub trait ValueReader<'a> {
	/// Returns the underlying reader to access raw bytes.
	fn get_reader(&mut self) -> &mut dyn SeekRead;

	/// Returns the total length of the readable data.
	fn len(&self) -> u64;

	/// Returns the current position within the readable data.
	fn position(&mut self) -> u64;

	/// Sets the current position within the readable data.
	///
	/// # Errors
	/// Returns an error if the position lies outside of the data.
	fn set_position(&mut self, position: u64) -> Result<()>;

	/// Checks if there is no data to read.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the number of bytes remaining to be read.
	fn remaining(&mut self) -> u64 {
		self.len().saturating_sub(self.position())
	}

	/// Checks if there are any bytes remaining to be read.
	fn has_remaining(&mut self) -> bool {
		self.remaining() > 0
	}

	/// Fails with [`TwkbError::TruncatedInput`] unless at least `needed` bytes remain.
	fn ensure_remaining(&mut self, needed: u64) -> Result<()> {
		let remaining = self.remaining();
		if needed > remaining {
			bail!(TwkbError::TruncatedInput { needed, remaining });
		}
		Ok(())
	}

	/// Reads a single byte.
	///
	/// # Errors
	/// Fails with [`TwkbError::TruncatedInput`] if no byte is left.
	fn read_u8(&mut self) -> Result<u8> {
		self.ensure_remaining(1)?;
		let mut buffer = [0u8; 1];
		self.get_reader().read_exact(&mut buffer)?;
		Ok(buffer[0])
	}

	/// Reads a variable-length unsigned integer (varint).
	///
	/// # Errors
	/// Fails with [`TwkbError::MalformedVarint`] if the input ends before the terminating byte or
	/// if ten bytes were consumed without one.
	fn read_varint(&mut self) -> Result<u64> {
		let mut value = 0u64;
		for index in 0..MAX_VARINT_LEN {
			if !self.has_remaining() {
				bail!(TwkbError::MalformedVarint);
			}
			let mut buffer = [0u8; 1];
			self.get_reader().read_exact(&mut buffer)?;
			let byte = buffer[0];
			value |= u64::from(byte & 0x7F) << (7 * index);
			if byte & 0x80 == 0 {
				return Ok(value);
			}
		}
		bail!(TwkbError::MalformedVarint)
	}

	/// Reads a zigzag encoded signed varint.
	///
	/// # Errors
	/// Returns an error if reading the underlying varint fails.
	fn read_svarint(&mut self) -> Result<i64> {
		Ok(decode_zigzag(self.read_varint()?))
	}

	/// Reads a varint that is used as a count or length and converts it to `usize`.
	fn read_count(&mut self) -> Result<usize> {
		let value = self.read_varint().context("Failed to read count")?;
		usize::try_from(value).with_context(|| format!("count {value} does not fit into memory"))
	}

	/// Returns a sub-reader limited to the next `length` bytes and advances past them.
	///
	/// # Errors
	/// Fails with [`TwkbError::TruncatedInput`] if fewer than `length` bytes remain.
	fn get_sub_reader<'b>(&'b mut self, length: u64) -> Result<Box<dyn ValueReader<'b> + 'b>>;
}
