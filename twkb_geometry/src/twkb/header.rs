//! The TWKB header: geometry type, precisions and metadata flags.
//!
//! ```text
//! byte 0       bits 0-3 geometry type, bits 4-7 zigzag(precision xy)
//! byte 1       bit 0 bbox, bit 1 size, bit 2 id list, bit 3 extended precision, bit 4 empty
//! byte 2 (opt) bit 0 has z, bit 1 has m, bits 2-4 precision z, bits 5-7 precision m
//! ```

use crate::geo::{GeometryType, Ordinate};
use anyhow::{Context, Result, bail};
use log::trace;
use twkb_core::{
	TwkbError,
	io::{ValueReader, ValueWriter, decode_zigzag_bits, encode_zigzag_bits},
};

pub const PRECISION_XY_MIN: i8 = -7;
pub const PRECISION_XY_MAX: i8 = 7;
pub const PRECISION_ZM_MAX: u8 = 7;

const FLAG_BBOX: u8 = 0b0000_0001;
const FLAG_SIZE: u8 = 0b0000_0010;
const FLAG_ID_LIST: u8 = 0b0000_0100;
const FLAG_EXTENDED_PRECISION: u8 = 0b0000_1000;
const FLAG_EMPTY: u8 = 0b0001_0000;

/// The decoded header of one TWKB geometry.
///
/// `has_z`, `has_m`, `precision_z` and `precision_m` only carry meaning while
/// `has_extended_precision` is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TwkbHeader {
	pub geometry_type: GeometryType,
	pub precision_xy: i8,
	pub has_bbox: bool,
	pub has_size: bool,
	pub has_id_list: bool,
	pub has_extended_precision: bool,
	pub has_empty: bool,
	pub has_z: bool,
	pub has_m: bool,
	pub precision_z: u8,
	pub precision_m: u8,
}

fn check_precision_xy(precision: i32) -> Result<i8> {
	if !(i32::from(PRECISION_XY_MIN)..=i32::from(PRECISION_XY_MAX)).contains(&precision) {
		bail!(TwkbError::precision_out_of_range(
			"XY",
			precision,
			i32::from(PRECISION_XY_MIN),
			i32::from(PRECISION_XY_MAX)
		));
	}
	Ok(precision as i8)
}

fn check_precision_zm(ordinate: Ordinate, precision: i32) -> Result<u8> {
	if !(0..=i32::from(PRECISION_ZM_MAX)).contains(&precision) {
		bail!(TwkbError::precision_out_of_range(
			ordinate,
			precision,
			0,
			i32::from(PRECISION_ZM_MAX)
		));
	}
	Ok(precision as u8)
}

impl TwkbHeader {
	/// Creates a header without any optional flags.
	///
	/// # Errors
	/// Fails with [`TwkbError::PrecisionOutOfRange`] unless `precision_xy` lies in -7..=7.
	pub fn new(geometry_type: GeometryType, precision_xy: i32) -> Result<Self> {
		Ok(Self {
			geometry_type,
			precision_xy: check_precision_xy(precision_xy)?,
			has_bbox: false,
			has_size: false,
			has_id_list: false,
			has_extended_precision: false,
			has_empty: false,
			has_z: false,
			has_m: false,
			precision_z: 0,
			precision_m: 0,
		})
	}

	#[must_use]
	pub fn with_bbox(mut self, value: bool) -> Self {
		self.has_bbox = value;
		self
	}

	#[must_use]
	pub fn with_size(mut self, value: bool) -> Self {
		self.has_size = value;
		self
	}

	#[must_use]
	pub fn with_id_list(mut self, value: bool) -> Self {
		self.has_id_list = value;
		self
	}

	#[must_use]
	pub fn with_empty(mut self, value: bool) -> Self {
		self.has_empty = value;
		self
	}

	/// Enables Z with the given precision.
	///
	/// # Errors
	/// Fails with [`TwkbError::PrecisionOutOfRange`] unless `precision` lies in 0..=7.
	pub fn with_z(mut self, precision: i32) -> Result<Self> {
		self.precision_z = check_precision_zm(Ordinate::Z, precision)?;
		self.has_z = true;
		self.has_extended_precision = true;
		Ok(self)
	}

	/// Enables M with the given precision.
	///
	/// # Errors
	/// Fails with [`TwkbError::PrecisionOutOfRange`] unless `precision` lies in 0..=7.
	pub fn with_m(mut self, precision: i32) -> Result<Self> {
		self.precision_m = check_precision_zm(Ordinate::M, precision)?;
		self.has_m = true;
		self.has_extended_precision = true;
		Ok(self)
	}

	/// Applies the rules that depend on the geometry kind:
	/// points never carry a bounding box, only multi geometries carry id lists, and an empty
	/// geometry carries neither bounding box nor id list nor Z/M.
	#[must_use]
	pub fn normalized(mut self) -> Self {
		if self.geometry_type == GeometryType::Point {
			self.has_bbox = false;
		}
		if !self.geometry_type.is_multi() {
			self.has_id_list = false;
		}
		if self.has_empty {
			self.has_bbox = false;
			self.has_id_list = false;
			self.has_z = false;
			self.has_m = false;
		}
		if !self.has_z {
			self.precision_z = 0;
		}
		if !self.has_m {
			self.precision_m = 0;
		}
		self.has_extended_precision = self.has_z || self.has_m;
		self
	}

	/// The ordinates coordinates of this geometry carry, in wire order.
	#[must_use]
	pub fn ordinates(&self) -> Vec<Ordinate> {
		let mut ordinates = vec![Ordinate::X, Ordinate::Y];
		if self.has_extended_precision && self.has_z {
			ordinates.push(Ordinate::Z);
		}
		if self.has_extended_precision && self.has_m {
			ordinates.push(Ordinate::M);
		}
		ordinates
	}

	/// Decimal digits kept for an ordinate.
	#[must_use]
	pub fn precision(&self, ordinate: Ordinate) -> i32 {
		match ordinate {
			Ordinate::X | Ordinate::Y => i32::from(self.precision_xy),
			Ordinate::Z => i32::from(self.precision_z),
			Ordinate::M => i32::from(self.precision_m),
		}
	}

	/// `10^precision` for an ordinate.
	#[must_use]
	pub fn scale(&self, ordinate: Ordinate) -> f64 {
		10f64.powi(self.precision(ordinate))
	}

	/// `10^-precision` for an ordinate.
	#[must_use]
	pub fn descale(&self, ordinate: Ordinate) -> f64 {
		10f64.powi(-self.precision(ordinate))
	}

	/// Writes the two or three header bytes.
	pub fn write(&self, writer: &mut dyn ValueWriter) -> Result<()> {
		let precision = encode_zigzag_bits(i64::from(self.precision_xy), 4) as u8;
		writer.write_u8(self.geometry_type.as_u8() | (precision << 4))?;

		let mut flags = 0u8;
		if self.has_bbox {
			flags |= FLAG_BBOX;
		}
		if self.has_size {
			flags |= FLAG_SIZE;
		}
		if self.has_id_list {
			flags |= FLAG_ID_LIST;
		}
		if self.has_extended_precision {
			flags |= FLAG_EXTENDED_PRECISION;
		}
		if self.has_empty {
			flags |= FLAG_EMPTY;
		}
		writer.write_u8(flags)?;

		if self.has_extended_precision {
			let mut extended = 0u8;
			if self.has_z {
				extended |= 0b01 | ((self.precision_z & 0b111) << 2);
			}
			if self.has_m {
				extended |= 0b10 | ((self.precision_m & 0b111) << 5);
			}
			writer.write_u8(extended)?;
		}
		Ok(())
	}

	/// Reads the two or three header bytes.
	///
	/// A precision nibble of 15 decodes to -8. No writer produces it, but it is accepted on read.
	///
	/// # Errors
	/// Fails with [`TwkbError::UnsupportedGeometryType`] for a type tag outside 1..=7 and with
	/// [`TwkbError::TruncatedInput`] if the input ends inside the header.
	pub fn read<'a>(reader: &mut dyn ValueReader<'a>) -> Result<Self> {
		let byte0 = reader.read_u8().context("Failed to read header type byte")?;
		let geometry_type = GeometryType::try_from(byte0 & 0x0F)?;
		let precision_xy = decode_zigzag_bits(u64::from(byte0 >> 4)) as i8;

		let flags = reader.read_u8().context("Failed to read header metadata byte")?;
		let has_extended_precision = flags & FLAG_EXTENDED_PRECISION != 0;

		let mut header = Self {
			geometry_type,
			precision_xy,
			has_bbox: flags & FLAG_BBOX != 0,
			has_size: flags & FLAG_SIZE != 0,
			has_id_list: flags & FLAG_ID_LIST != 0,
			has_extended_precision,
			has_empty: flags & FLAG_EMPTY != 0,
			has_z: false,
			has_m: false,
			precision_z: 0,
			precision_m: 0,
		};

		if has_extended_precision {
			let extended = reader.read_u8().context("Failed to read header extended precision byte")?;
			header.has_z = extended & 0b01 != 0;
			header.has_m = extended & 0b10 != 0;
			header.precision_z = (extended >> 2) & 0b111;
			header.precision_m = (extended >> 5) & 0b111;
		}

		trace!("read header {header:?}");
		Ok(header)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use rstest::rstest;
	use twkb_core::{
		Blob,
		io::{ValueReaderSlice, ValueWriterBlob},
	};

	fn to_hex(header: &TwkbHeader) -> Result<String> {
		let mut writer = ValueWriterBlob::new();
		header.write(&mut writer)?;
		Ok(writer.into_blob().as_hex_compact())
	}

	fn from_hex(hex: &str) -> Result<TwkbHeader> {
		let blob = Blob::from_hex(hex)?;
		TwkbHeader::read(&mut ValueReaderSlice::new(blob.as_slice()))
	}

	#[rstest]
	#[case(GeometryType::Point, 0, "0100")]
	#[case(GeometryType::LineString, 1, "2200")]
	#[case(GeometryType::Polygon, -1, "1300")]
	#[case(GeometryType::MultiPoint, 7, "e400")]
	#[case(GeometryType::GeometryCollection, -7, "d700")]
	fn type_and_precision(#[case] kind: GeometryType, #[case] precision: i32, #[case] hex: &str) -> Result<()> {
		let header = TwkbHeader::new(kind, precision)?;
		assert_eq!(to_hex(&header)?, hex);
		assert_eq!(from_hex(hex)?, header);
		Ok(())
	}

	#[test]
	fn flags() -> Result<()> {
		let header = TwkbHeader::new(GeometryType::MultiLineString, 0)?
			.with_bbox(true)
			.with_size(true)
			.with_id_list(true);
		assert_eq!(to_hex(&header)?, "0507");
		assert_eq!(from_hex("0507")?, header);
		Ok(())
	}

	#[test]
	fn extended_precision() -> Result<()> {
		let header = TwkbHeader::new(GeometryType::LineString, 2)?.with_z(3)?.with_m(5)?;
		// z precision 3 in bits 2-4, m precision 5 in bits 5-7
		assert_eq!(to_hex(&header)?, "4208af");
		assert_eq!(from_hex("4208af")?, header);
		assert_eq!(header.ordinates(), [Ordinate::X, Ordinate::Y, Ordinate::Z, Ordinate::M]);

		let header = TwkbHeader::new(GeometryType::Point, 0)?.with_m(1)?;
		assert_eq!(to_hex(&header)?, "010822");
		assert_eq!(header.ordinates(), [Ordinate::X, Ordinate::Y, Ordinate::M]);
		Ok(())
	}

	#[rstest]
	#[case(8)]
	#[case(-8)]
	#[case(100)]
	fn precision_xy_out_of_range(#[case] precision: i32) {
		let err = TwkbHeader::new(GeometryType::Point, precision).unwrap_err();
		assert_eq!(
			TwkbError::kind_of(&err),
			Some(&TwkbError::precision_out_of_range("XY", precision, -7, 7))
		);
	}

	#[rstest]
	#[case(-1)]
	#[case(8)]
	fn precision_zm_out_of_range(#[case] precision: i32) -> Result<()> {
		let header = TwkbHeader::new(GeometryType::Point, 0)?;
		let err = header.with_z(precision).unwrap_err();
		assert_eq!(
			TwkbError::kind_of(&err),
			Some(&TwkbError::precision_out_of_range("Z", precision, 0, 7))
		);
		assert!(header.with_m(precision).is_err());
		Ok(())
	}

	#[test]
	fn normalized() -> Result<()> {
		let point = TwkbHeader::new(GeometryType::Point, 0)?
			.with_bbox(true)
			.with_id_list(true)
			.normalized();
		assert!(!point.has_bbox);
		assert!(!point.has_id_list);

		let empty = TwkbHeader::new(GeometryType::MultiPoint, 0)?
			.with_bbox(true)
			.with_size(true)
			.with_id_list(true)
			.with_z(2)?
			.with_empty(true)
			.normalized();
		assert_eq!(to_hex(&empty)?, "0412");
		assert!(!empty.has_extended_precision);
		Ok(())
	}

	#[test]
	fn reads_reserved_bits_and_precision_minus_eight() -> Result<()> {
		let header = from_hex("f1e0")?;
		assert_eq!(header.geometry_type, GeometryType::Point);
		assert_eq!(header.precision_xy, -8);
		assert!(!header.has_bbox && !header.has_empty);
		Ok(())
	}

	#[rstest]
	#[case("0000", TwkbError::UnsupportedGeometryType(0))]
	#[case("0800", TwkbError::UnsupportedGeometryType(8))]
	#[case("01", TwkbError::TruncatedInput { needed: 1, remaining: 0 })]
	#[case("0108", TwkbError::TruncatedInput { needed: 1, remaining: 0 })]
	fn read_errors(#[case] hex: &str, #[case] expected: TwkbError) {
		let err = from_hex(hex).unwrap_err();
		assert_eq!(TwkbError::kind_of(&err), Some(&expected));
	}

	#[test]
	fn scale_and_descale() -> Result<()> {
		let header = TwkbHeader::new(GeometryType::Point, -2)?.with_z(3)?;
		assert_abs_diff_eq!(header.scale(Ordinate::X), 0.01, epsilon = 1e-12);
		assert_abs_diff_eq!(header.descale(Ordinate::Y), 100.0, epsilon = 1e-9);
		assert_abs_diff_eq!(header.scale(Ordinate::Z), 1000.0);
		assert_abs_diff_eq!(header.descale(Ordinate::M), 1.0);
		Ok(())
	}
}
