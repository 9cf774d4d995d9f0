//! This module provides the `ValueReaderSlice` struct for reading values from a byte slice.
//!
//! # Examples
//!
//! ```rust
//! use twkb_core::io::{ValueReader, ValueReaderSlice};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let data = &[0x02, 0x00, 0x02, 0x02, 0x02, 0x08, 0x08];
//!     let mut reader = ValueReaderSlice::new(data);
//!
//!     assert_eq!(reader.read_u8()?, 0x02);
//!     reader.set_position(2)?;
//!     assert_eq!(reader.read_varint()?, 2);
//!     assert_eq!(reader.remaining(), 4);
//!
//!     Ok(())
//! }
//! ```

use super::{SeekRead, ValueReader};
use crate::TwkbError;
use anyhow::{Result, anyhow, bail};
use std::io::Cursor;

/// A struct that provides reading capabilities from a byte slice.
pub struct ValueReaderSlice<'a> {
	cursor: Cursor<&'a [u8]>,
	len: u64,
}

impl<'a> ValueReaderSlice<'a> {
	/// Creates a new `ValueReaderSlice` from a byte slice.
	#[must_use]
	pub fn new(slice: &'a [u8]) -> ValueReaderSlice<'a> {
		ValueReaderSlice {
			len: slice.len() as u64,
			cursor: Cursor::new(slice),
		}
	}
}

impl SeekRead for Cursor<&[u8]> {}

impl<'a> ValueReader<'a> for ValueReaderSlice<'a> {
	fn get_reader(&mut self) -> &mut dyn SeekRead {
		&mut self.cursor
	}

	fn len(&self) -> u64 {
		self.len
	}

	fn position(&mut self) -> u64 {
		self.cursor.position()
	}

	fn set_position(&mut self, position: u64) -> Result<()> {
		if position > self.len {
			bail!("set position outside length")
		}
		self.cursor.set_position(position);
		Ok(())
	}

	fn get_sub_reader<'b>(&'b mut self, length: u64) -> Result<Box<dyn ValueReader<'b> + 'b>> {
		let start = self.cursor.position();
		let end = start.saturating_add(length);
		if end > self.len {
			bail!(TwkbError::TruncatedInput {
				needed: length,
				remaining: self.len - start,
			});
		}

		self.cursor.set_position(end);
		Ok(Box::new(ValueReaderSlice {
			len: length,
			cursor: Cursor::new(
				self
					.cursor
					.get_ref()
					.get(start as usize..end as usize)
					.ok_or(anyhow!("out of bounds"))?,
			),
		}))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn len() {
		let reader = ValueReaderSlice::new(&[0x80; 42]);
		assert_eq!(reader.len(), 42);
	}

	#[test]
	fn set_and_get_position() -> Result<()> {
		let mut reader = ValueReaderSlice::new(&[0x01, 0x02, 0x03, 0x04]);
		reader.set_position(2)?;
		assert_eq!(reader.position(), 2);
		assert_eq!(reader.read_u8()?, 0x03);
		reader.set_position(4)?;
		assert!(!reader.has_remaining());
		assert!(reader.set_position(5).is_err());
		Ok(())
	}

	#[test]
	fn sub_reader() -> Result<()> {
		let mut reader = ValueReaderSlice::new(&[0x01, 0x02, 0x03, 0x04, 0x05]);
		reader.set_position(1)?;
		{
			let mut sub_reader = reader.get_sub_reader(3)?;
			assert_eq!(sub_reader.read_u8()?, 0x02);
			assert_eq!(sub_reader.read_u8()?, 0x03);
			assert_eq!(sub_reader.read_u8()?, 0x04);
			assert!(sub_reader.read_u8().is_err());
		}
		assert_eq!(reader.read_u8()?, 0x05);
		Ok(())
	}

	#[test]
	fn sub_reader_out_of_bounds() {
		let mut reader = ValueReaderSlice::new(&[0x01, 0x02, 0x03]);
		let err = reader.get_sub_reader(5).err().unwrap();
		assert_eq!(
			TwkbError::kind_of(&err),
			Some(&TwkbError::TruncatedInput { needed: 5, remaining: 3 })
		);
	}
}
