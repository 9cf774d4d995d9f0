//! This module provides the `ValueWriterBlob` struct for writing values to an in-memory blob.
//!
//! The TWKB writer uses it as scratch space whenever the byte length of a geometry has to be known
//! before the geometry itself is written.
//!
//! # Examples
//!
//! ```rust
//! use twkb_core::io::{ValueWriter, ValueWriterBlob};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut writer = ValueWriterBlob::new();
//!     writer.write_varint(1025)?;
//!     assert_eq!(writer.into_blob().into_vec(), vec![0b1000_0001, 0b0000_1000]);
//!     Ok(())
//! }
//! ```

use super::ValueWriter;
use crate::types::Blob;
use anyhow::Result;
use std::io::{Cursor, Write};

/// A struct that provides writing capabilities to an in-memory blob.
pub struct ValueWriterBlob {
	cursor: Cursor<Vec<u8>>,
}

impl ValueWriterBlob {
	/// Creates a new, empty `ValueWriterBlob`.
	#[must_use]
	pub fn new() -> ValueWriterBlob {
		ValueWriterBlob {
			cursor: Cursor::new(Vec::new()),
		}
	}

	/// Converts the written data into a `Blob`.
	#[must_use]
	pub fn into_blob(self) -> Blob {
		Blob::from(self.cursor.into_inner())
	}
}

impl ValueWriter for ValueWriterBlob {
	fn get_writer(&mut self) -> &mut dyn Write {
		&mut self.cursor
	}

	fn position(&mut self) -> Result<u64> {
		Ok(self.cursor.position())
	}
}

impl Default for ValueWriterBlob {
	fn default() -> Self {
		Self::new()
	}
}
