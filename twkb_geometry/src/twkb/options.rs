use serde::Deserialize;

/// Everything that controls how geometries are written.
///
/// Deserializable, so it can be loaded from configuration files. Missing fields take their
/// default values.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TwkbWriterOptions {
	/// Decimal digits kept for X and Y, -7..=7. Negative values round to tens, hundreds, ...
	pub precision_xy: i32,

	/// Write Z values if the geometry has them.
	pub emit_z: bool,

	/// Decimal digits kept for Z, 0..=7.
	pub precision_z: i32,

	/// Write M values if the geometry has them.
	pub emit_m: bool,

	/// Decimal digits kept for M, 0..=7.
	pub precision_m: i32,

	/// Prefix every geometry with its byte length.
	pub emit_size: bool,

	/// Write a bounding box in front of the coordinates (never for points).
	pub emit_bbox: bool,

	/// Write the ids of the children of multi geometries and collections.
	pub emit_id_list: bool,

	/// Drop points of lines and rings that are equal to their predecessor after scaling.
	pub collapse_repeated_points: bool,
}

impl Default for TwkbWriterOptions {
	fn default() -> Self {
		Self {
			precision_xy: 7,
			emit_z: false,
			precision_z: 3,
			emit_m: false,
			precision_m: 3,
			emit_size: false,
			emit_bbox: true,
			emit_id_list: false,
			collapse_repeated_points: false,
		}
	}
}

impl TwkbWriterOptions {
	pub fn with_precision_xy(mut self, precision: i32) -> Self {
		self.precision_xy = precision;
		self
	}

	/// Enables Z with the given precision.
	pub fn with_z(mut self, precision: i32) -> Self {
		self.emit_z = true;
		self.precision_z = precision;
		self
	}

	/// Enables M with the given precision.
	pub fn with_m(mut self, precision: i32) -> Self {
		self.emit_m = true;
		self.precision_m = precision;
		self
	}

	pub fn with_size(mut self, value: bool) -> Self {
		self.emit_size = value;
		self
	}

	pub fn with_bbox(mut self, value: bool) -> Self {
		self.emit_bbox = value;
		self
	}

	pub fn with_id_list(mut self, value: bool) -> Self {
		self.emit_id_list = value;
		self
	}

	pub fn with_collapse_repeated_points(mut self, value: bool) -> Self {
		self.collapse_repeated_points = value;
		self
	}
}

/// Everything that controls how geometries are read.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TwkbReaderOptions {
	/// Hand the ids of multi geometries and collections to the geometry factory.
	pub export_ids: bool,

	/// Fail if a size prefix differs from the number of bytes the geometry occupies.
	pub check_size: bool,
}

impl Default for TwkbReaderOptions {
	fn default() -> Self {
		Self {
			export_ids: false,
			check_size: true,
		}
	}
}

impl TwkbReaderOptions {
	pub fn with_export_ids(mut self, value: bool) -> Self {
		self.export_ids = value;
		self
	}

	pub fn with_check_size(mut self, value: bool) -> Self {
		self.check_size = value;
		self
	}
}
