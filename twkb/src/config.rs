//! Loading of writer options from YAML files.
//!
//! ```yaml
//! precision_xy: 5
//! emit_size: true
//! emit_z: true
//! precision_z: 2
//! ```
//!
//! Missing fields keep their defaults, unknown fields are rejected.

use anyhow::{Context, Result};
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};
use twkb_geometry::TwkbWriterOptions;

pub fn from_reader<R: Read>(reader: R) -> Result<TwkbWriterOptions> {
	Ok(serde_yaml_ng::from_reader(reader)?)
}

pub fn from_string(text: &str) -> Result<TwkbWriterOptions> {
	Ok(serde_yaml_ng::from_str(text)?)
}

pub fn from_path(path: &Path) -> Result<TwkbWriterOptions> {
	let file = File::open(path).with_context(|| format!("failed to open config {path:?}"))?;
	from_reader(BufReader::new(file)).with_context(|| format!("failed to parse config {path:?}"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::io::Write;

	#[test]
	fn partial_config() -> Result<()> {
		let options = from_string("precision_xy: 2\nemit_id_list: true\n")?;
		assert_eq!(
			options,
			TwkbWriterOptions::default().with_precision_xy(2).with_id_list(true)
		);
		Ok(())
	}

	#[test]
	fn unknown_field() {
		let err = from_string("precision: 2\n").unwrap_err();
		assert!(err.to_string().contains("unknown field `precision`"));
	}

	#[test]
	fn config_file() -> Result<()> {
		let mut file = tempfile::NamedTempFile::new()?;
		writeln!(file, "emit_bbox: false\nemit_m: true\nprecision_m: 1")?;
		let options = from_path(file.path())?;
		assert!(!options.emit_bbox);
		assert_eq!((options.emit_m, options.precision_m), (true, 1));
		Ok(())
	}

	#[test]
	fn missing_file() {
		let err = from_path(Path::new("/does/not/exist.yaml")).unwrap_err();
		assert!(format!("{err:#}").contains("failed to open config"));
	}
}
