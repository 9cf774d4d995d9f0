//! This module provides the [`Blob`] struct, a wrapper around [`Vec<u8>`] that holds encoded TWKB
//! bytes and offers hexadecimal conversion and file helpers.
//!
//! # Examples
//!
//! ```rust
//! use twkb_core::Blob;
//!
//! let blob = Blob::from_hex("01 00 14 14").unwrap();
//! assert_eq!(blob.len(), 4);
//! assert_eq!(blob.as_slice(), &[0x01, 0x00, 0x14, 0x14]);
//! assert_eq!(blob.as_hex_compact(), "01001414");
//! ```

use anyhow::{Context, Result, anyhow, bail};
use log::trace;
use std::fmt::Debug;
use std::path::Path;

/// A simple wrapper around [`Vec<u8>`] that provides additional methods for working with byte data.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Creates an empty `Blob`.
	///
	/// ```rust
	/// use twkb_core::Blob;
	///
	/// let empty_blob = Blob::new_empty();
	/// assert!(empty_blob.is_empty());
	/// ```
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Parses a hexadecimal string.
	///
	/// Whitespace is ignored and both upper and lower case digits are accepted, so the output of
	/// [`Blob::as_hex`] and [`Blob::as_hex_compact`] can both be parsed back.
	///
	/// # Errors
	///
	/// Returns an error if the string contains non-hex characters or an odd number of digits.
	///
	/// ```rust
	/// use twkb_core::Blob;
	///
	/// assert_eq!(Blob::from_hex("DEad be EF").unwrap().as_slice(), &[0xDE, 0xAD, 0xBE, 0xEF]);
	/// assert!(Blob::from_hex("abc").is_err());
	/// ```
	pub fn from_hex(text: &str) -> Result<Blob> {
		let digits: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
		if let Some(invalid) = digits.iter().find(|b| !b.is_ascii_hexdigit()) {
			bail!("invalid hex character '{}'", char::from(*invalid));
		}
		if digits.len() % 2 != 0 {
			bail!("hex string has an odd number of digits ({})", digits.len());
		}

		digits
			.chunks_exact(2)
			.map(|pair| {
				let pair = std::str::from_utf8(pair).map_err(|e| anyhow!("invalid hex digits: {e}"))?;
				u8::from_str_radix(pair, 16).with_context(|| format!("invalid hex byte '{pair}'"))
			})
			.collect::<Result<Vec<u8>>>()
			.map(Blob)
	}

	/// Returns a reference to the underlying byte slice.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_slice()
	}

	/// Returns a mutable reference to the underlying byte slice.
	pub fn as_mut_slice(&mut self) -> &mut [u8] {
		self.0.as_mut_slice()
	}

	/// Consumes the `Blob` and returns the underlying vector.
	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Returns a hexadecimal string representation of the bytes, separated by spaces.
	///
	/// ```rust
	/// use twkb_core::Blob;
	///
	/// let blob = Blob::from(&[0xDE, 0xAD, 0xBE, 0xEF]);
	/// assert_eq!(blob.as_hex(), "de ad be ef");
	/// ```
	#[must_use]
	pub fn as_hex(&self) -> String {
		self
			.0
			.iter()
			.map(|byte| format!("{byte:02x}"))
			.collect::<Vec<_>>()
			.join(" ")
	}

	/// Returns the hexadecimal representation without separators, as TWKB is usually quoted.
	#[must_use]
	pub fn as_hex_compact(&self) -> String {
		self.0.iter().map(|byte| format!("{byte:02x}")).collect()
	}

	/// Returns the number of bytes.
	#[must_use]
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	/// Returns `true` if the blob holds no bytes.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Saves the contents of this [`Blob`] to the given filesystem path.
	pub fn save_to_file(&self, path: &Path) -> Result<()> {
		trace!("writing {} bytes to {path:?}", self.0.len());
		std::fs::write(path, &self.0).with_context(|| format!("failed to write {}", path.display()))
	}

	/// Loads a [`Blob`] from the given filesystem path.
	pub fn load_from_file(path: &Path) -> Result<Self> {
		let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
		trace!("read {} bytes from {path:?}", bytes.len());
		Ok(Blob::from(bytes))
	}
}

impl From<Vec<u8>> for Blob {
	fn from(item: Vec<u8>) -> Self {
		Blob(item)
	}
}

impl From<&Vec<u8>> for Blob {
	fn from(item: &Vec<u8>) -> Self {
		Blob(item.clone())
	}
}

impl From<&[u8]> for Blob {
	fn from(item: &[u8]) -> Self {
		Blob(item.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Blob {
	fn from(item: &[u8; N]) -> Self {
		Blob(item.to_vec())
	}
}

/// Implements [`Debug`] by printing the byte length and hexadecimal representation of the bytes.
impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Blob({}): {}", self.0.len(), self.as_hex())
	}
}

impl Default for Blob {
	fn default() -> Self {
		Self::new_empty()
	}
}
