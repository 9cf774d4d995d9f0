use anyhow::Result;
use clap::Args;
use std::fmt::Write;
use twkb_geometry::{TwkbReader, TwkbReaderOptions, TwkbRecord};

#[derive(Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// TWKB to inspect: a file with raw bytes or hex text, or a hex string
	#[arg(required = true)]
	input: String,

	/// accept size prefixes that do not match the content
	#[arg(long)]
	ignore_size: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let blob = super::read_input(&arguments.input)?;
	let options = TwkbReaderOptions::default()
		.with_export_ids(true)
		.with_check_size(!arguments.ignore_size);
	let records = TwkbReader::with_options(options).read_records(blob.as_slice())?;

	for (index, record) in records.iter().enumerate() {
		print!("{}", describe(index, record));
	}
	Ok(())
}

fn describe(index: usize, record: &TwkbRecord) -> String {
	let header = &record.header;
	let mut text = format!("#{index} {}\n", header.geometry_type);

	let mut precision = format!("xy={}", header.precision_xy);
	if header.has_z {
		let _ = write!(precision, " z={}", header.precision_z);
	}
	if header.has_m {
		let _ = write!(precision, " m={}", header.precision_m);
	}
	let _ = writeln!(text, "  precision: {precision}");

	let flags: Vec<&str> = [
		(header.has_bbox, "bbox"),
		(header.has_size, "size"),
		(header.has_id_list, "id_list"),
		(header.has_extended_precision, "extended_precision"),
		(header.has_empty, "empty"),
	]
	.into_iter()
	.filter_map(|(set, name)| set.then_some(name))
	.collect();
	let flags = if flags.is_empty() { "none".to_string() } else { flags.join(" ") };
	let _ = writeln!(text, "  flags: {flags}");

	if let Some(size) = record.size {
		let _ = writeln!(text, "  size: {size}");
	}
	if let Some(bbox) = &record.bbox {
		let intervals: Vec<String> = bbox.0.iter().map(|(o, i)| format!("{o} {i:?}")).collect();
		let _ = writeln!(text, "  bbox: {}", intervals.join(", "));
	}
	if let Some(ids) = record.geometry.ids() {
		let ids: Vec<String> = ids.iter().map(i64::to_string).collect();
		let _ = writeln!(text, "  ids: {}", ids.join(", "));
	}
	let _ = writeln!(text, "  geometry: {:?}", record.geometry);
	text
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::run_command;
	use pretty_assertions::assert_eq;
	use twkb_core::Blob;

	fn describe_hex(hex: &str) -> Result<String> {
		let blob = Blob::from_hex(hex)?;
		let reader = TwkbReader::with_options(TwkbReaderOptions::default().with_export_ids(true));
		let records = reader.read_records(blob.as_slice())?;
		Ok(records.iter().enumerate().map(|(i, r)| describe(i, r)).collect())
	}

	#[test]
	fn line_string_with_bbox_and_size() -> Result<()> {
		assert_eq!(
			describe_hex("020309020802080202020808")?,
			"#0 LineString\n  precision: xy=0\n  flags: bbox size\n  size: 9\n  bbox: X [1.0, 5.0], Y [1.0, 5.0]\n  geometry: LineString([[1.0, 1.0], [5.0, 5.0]])\n"
		);
		Ok(())
	}

	#[test]
	fn several_geometries() -> Result<()> {
		let text = describe_hex("0110 040403020406000002020202")?;
		assert!(text.starts_with("#0 Point\n  precision: xy=0\n  flags: empty\n"));
		assert!(text.contains("#1 MultiPoint\n"));
		assert!(text.contains("  ids: 1, 2, 3\n"));
		Ok(())
	}

	#[test]
	fn extended_precision() -> Result<()> {
		let text = describe_hex("01084702040608")?;
		assert!(text.contains("  precision: xy=0 z=1 m=2\n"));
		assert!(text.contains("  flags: extended_precision\n"));
		Ok(())
	}

	#[test]
	fn run_inspect() -> Result<()> {
		run_command(vec!["twkb", "inspect", "01001414"])?;
		assert!(run_command(vec!["twkb", "inspect", "0100"]).is_err());
		run_command(vec!["twkb", "inspect", "--ignore-size", "020206020202080800"])?;
		Ok(())
	}
}
