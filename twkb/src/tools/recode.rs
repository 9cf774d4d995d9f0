use crate::config;
use anyhow::{Context, Result};
use clap::Args;
use log::info;
use std::path::PathBuf;
use twkb_geometry::{TwkbReader, TwkbReaderOptions, TwkbWriter, TwkbWriterOptions};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// TWKB to recode: a file with raw bytes or hex text, or a hex string
	#[arg(required = true)]
	input: String,

	/// file for the raw output, hex is printed to stdout if omitted
	#[arg()]
	output: Option<PathBuf>,

	/// YAML file with writer options, flags below override single fields
	#[arg(long, short, value_name = "FILE", display_order = 1)]
	config: Option<PathBuf>,

	/// decimal digits of X and Y, -7..=7
	#[arg(long, short, value_name = "int", allow_hyphen_values = true, display_order = 2)]
	precision: Option<i32>,

	/// decimal digits of Z, 0..=7
	#[arg(long, value_name = "int", display_order = 2)]
	precision_z: Option<i32>,

	/// decimal digits of M, 0..=7
	#[arg(long, value_name = "int", display_order = 2)]
	precision_m: Option<i32>,

	/// write bounding boxes
	#[arg(long, conflicts_with = "no_bbox", display_order = 3)]
	bbox: bool,

	/// do not write bounding boxes
	#[arg(long, display_order = 3)]
	no_bbox: bool,

	/// prefix every geometry with its size
	#[arg(long, display_order = 3)]
	size: bool,

	/// write the ids of multi geometries and collections
	#[arg(long, display_order = 3)]
	id_list: bool,

	/// write Z values if the geometries have them
	#[arg(long, display_order = 4)]
	z: bool,

	/// write M values if the geometries have them
	#[arg(long, display_order = 4)]
	m: bool,

	/// drop repeated points of lines and rings
	#[arg(long, display_order = 5)]
	collapse: bool,
}

impl Subcommand {
	fn writer_options(&self) -> Result<TwkbWriterOptions> {
		let mut options = match &self.config {
			Some(path) => config::from_path(path)?,
			None => TwkbWriterOptions::default(),
		};

		if let Some(precision) = self.precision {
			options.precision_xy = precision;
		}
		if let Some(precision) = self.precision_z {
			options.precision_z = precision;
		}
		if let Some(precision) = self.precision_m {
			options.precision_m = precision;
		}
		if self.bbox {
			options.emit_bbox = true;
		}
		if self.no_bbox {
			options.emit_bbox = false;
		}
		options.emit_size |= self.size;
		options.emit_id_list |= self.id_list;
		options.emit_z |= self.z;
		options.emit_m |= self.m;
		options.collapse_repeated_points |= self.collapse;
		Ok(options)
	}
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let input = super::read_input(&arguments.input)?;
	let geometries = TwkbReader::with_options(TwkbReaderOptions::default().with_export_ids(true))
		.read_all(input.as_slice())
		.context("Failed to decode input")?;

	let writer = TwkbWriter::new(arguments.writer_options()?)?;
	let output = writer.write_all(&geometries).context("Failed to encode geometries")?;
	info!(
		"recoded {} geometries from {} to {} bytes",
		geometries.len(),
		input.len(),
		output.len()
	);

	match &arguments.output {
		Some(path) => output.save_to_file(path)?,
		None => println!("{}", output.as_hex_compact()),
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::run_command;
	use clap::Parser;
	use std::io::Write;
	use twkb_core::Blob;

	#[derive(Parser)]
	struct TestCli {
		#[command(flatten)]
		subcommand: Subcommand,
	}

	fn options(args: &[&str]) -> Result<TwkbWriterOptions> {
		let cli = TestCli::try_parse_from(["recode", "01000204"].iter().chain(args))?;
		cli.subcommand.writer_options()
	}

	#[test]
	fn default_options() -> Result<()> {
		assert_eq!(options(&[])?, TwkbWriterOptions::default());
		Ok(())
	}

	#[test]
	fn flag_overrides() -> Result<()> {
		let options = options(&["-p", "-2", "--no-bbox", "--size", "--id-list", "--z", "--precision-z", "1", "--collapse"])?;
		assert_eq!(options.precision_xy, -2);
		assert!(!options.emit_bbox);
		assert!(options.emit_size && options.emit_id_list && options.collapse_repeated_points);
		assert_eq!((options.emit_z, options.precision_z), (true, 1));
		assert!(!options.emit_m);
		Ok(())
	}

	#[test]
	fn bbox_flags_conflict() {
		assert!(options(&["--bbox", "--no-bbox"]).is_err());
	}

	#[test]
	fn config_with_overrides() -> Result<()> {
		let mut file = tempfile::NamedTempFile::new()?;
		writeln!(file, "precision_xy: 3\nemit_bbox: false\nemit_m: true")?;
		let path = file.path().to_str().unwrap();
		let options = options(&["--config", path, "--bbox", "--precision-m", "2"])?;
		assert_eq!(options.precision_xy, 3);
		assert!(options.emit_bbox);
		assert_eq!((options.emit_m, options.precision_m), (true, 2));
		Ok(())
	}

	#[test]
	fn recode_to_file() -> Result<()> {
		let dir = tempfile::tempdir()?;
		let path = dir.path().join("line.twkb");
		let path_str = path.to_str().unwrap();
		run_command(vec!["twkb", "recode", "02000202020808", path_str, "-p", "0", "--size"])?;
		assert_eq!(
			Blob::load_from_file(&path)?.as_hex_compact(),
			"020309020802080202020808"
		);
		Ok(())
	}

	#[test]
	fn invalid_precision() {
		let err = run_command(vec!["twkb", "recode", "01000204", "-p", "9"]).unwrap_err();
		assert!(format!("{err:#}").contains("precision"));
	}
}
