use super::TwkbHeader;
use crate::geo::Ordinate;

/// The active ordinates of one geometry and their scale factors, derived from its header.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleVector {
	ordinates: Vec<Ordinate>,
	precisions: Vec<i32>,
	scales: Vec<f64>,
}

impl ScaleVector {
	#[must_use]
	pub fn new(header: &TwkbHeader) -> Self {
		let ordinates = header.ordinates();
		let precisions: Vec<i32> = ordinates.iter().map(|o| header.precision(*o)).collect();
		let scales = ordinates.iter().map(|o| header.scale(*o)).collect();
		Self {
			ordinates,
			precisions,
			scales,
		}
	}

	/// Number of active ordinates, 2 to 4.
	#[must_use]
	pub fn dimensions(&self) -> usize {
		self.ordinates.len()
	}

	#[must_use]
	pub fn ordinates(&self) -> &[Ordinate] {
		&self.ordinates
	}

	/// Scales a value of dimension `dim` to an integer, rounding half away from zero.
	#[must_use]
	pub fn to_integer(&self, dim: usize, value: f64) -> i64 {
		(value * self.scales[dim]).round() as i64
	}

	/// Inverse of [`ScaleVector::to_integer`].
	#[must_use]
	pub fn to_float(&self, dim: usize, value: i64) -> f64 {
		let precision = self.precisions[dim];
		if precision >= 0 {
			value as f64 / self.scales[dim]
		} else {
			value as f64 * 10f64.powi(-precision)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geo::GeometryType;
	use anyhow::Result;
	use rstest::rstest;

	#[rstest]
	#[case(0, 10.0, 10)]
	#[case(0, 0.5, 1)]
	#[case(0, -0.5, -1)]
	#[case(0, 2.4999, 2)]
	#[case(1, -1.25, -13)]
	#[case(7, 13.404954, 134_049_540)]
	#[case(-2, 1234.0, 12)]
	#[case(-2, 1250.0, 13)]
	fn to_integer_rounds_half_away_from_zero(#[case] precision: i32, #[case] value: f64, #[case] expected: i64) -> Result<()> {
		let scale = ScaleVector::new(&TwkbHeader::new(GeometryType::Point, precision)?);
		assert_eq!(scale.to_integer(0, value), expected);
		Ok(())
	}

	#[rstest]
	#[case(0, 10, 10.0)]
	#[case(2, 12345, 123.45)]
	#[case(-2, 12, 1200.0)]
	fn to_float(#[case] precision: i32, #[case] value: i64, #[case] expected: f64) -> Result<()> {
		let scale = ScaleVector::new(&TwkbHeader::new(GeometryType::Point, precision)?);
		assert_eq!(scale.to_float(1, value), expected);
		Ok(())
	}

	#[test]
	fn dimensions_follow_header() -> Result<()> {
		let header = TwkbHeader::new(GeometryType::LineString, 5)?.with_m(2)?;
		let scale = ScaleVector::new(&header);
		assert_eq!(scale.dimensions(), 3);
		assert_eq!(scale.ordinates(), [Ordinate::X, Ordinate::Y, Ordinate::M]);
		assert_eq!(scale.to_integer(2, 1.25), 125);
		Ok(())
	}
}
