pub mod inspect;
pub mod recode;

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;
use twkb_core::Blob;

/// Loads the TWKB bytes named by a command line argument.
///
/// The argument is either a file, holding raw TWKB or TWKB as hex text, or a hex string.
pub fn read_input(input: &str) -> Result<Blob> {
	let path = Path::new(input);
	if path.is_file() {
		let blob = Blob::load_from_file(path)?;
		let is_text = !blob.is_empty()
			&& blob
				.as_slice()
				.iter()
				.all(|b| b.is_ascii_hexdigit() || b.is_ascii_whitespace());
		if is_text {
			debug!("reading {path:?} as hex text");
			let text = String::from_utf8_lossy(blob.as_slice());
			return Blob::from_hex(&text).with_context(|| format!("failed to parse hex in {path:?}"));
		}
		debug!("reading {path:?} as raw bytes");
		return Ok(blob);
	}

	Blob::from_hex(input).with_context(|| format!("{input:?} is neither a file nor a hex string"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn hex_argument() -> Result<()> {
		assert_eq!(read_input("01 00 02 04")?.as_slice(), &[1, 0, 2, 4]);
		Ok(())
	}

	#[test]
	fn raw_and_hex_files() -> Result<()> {
		let mut raw = tempfile::NamedTempFile::new()?;
		raw.write_all(&[0x02, 0x00, 0x02, 0x02, 0x02, 0x08, 0x08])?;
		assert_eq!(read_input(raw.path().to_str().unwrap())?.as_hex_compact(), "02000202020808");

		let mut text = tempfile::NamedTempFile::new()?;
		writeln!(text, "02000202\n020808")?;
		assert_eq!(read_input(text.path().to_str().unwrap())?.as_hex_compact(), "02000202020808");
		Ok(())
	}

	#[test]
	fn invalid_argument() {
		let err = read_input("no such file").unwrap_err();
		assert!(err.to_string().contains("is neither a file nor a hex string"));
	}
}
