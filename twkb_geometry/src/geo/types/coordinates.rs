use std::fmt::{Debug, Display};

/// One component of a coordinate.
///
/// The declaration order is the order in which TWKB writes ordinates: X, Y, then Z, then M.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Ordinate {
	X,
	Y,
	Z,
	M,
}

impl Display for Ordinate {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Ordinate::X => "X",
			Ordinate::Y => "Y",
			Ordinate::Z => "Z",
			Ordinate::M => "M",
		})
	}
}

/// A position with mandatory X/Y and optional Z (elevation) and M (measure) values.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates {
	x: f64,
	y: f64,
	z: Option<f64>,
	m: Option<f64>,
}

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y, z: None, m: None }
	}

	#[must_use]
	pub fn new_z(x: f64, y: f64, z: f64) -> Self {
		Self {
			x,
			y,
			z: Some(z),
			m: None,
		}
	}

	#[must_use]
	pub fn new_m(x: f64, y: f64, m: f64) -> Self {
		Self {
			x,
			y,
			z: None,
			m: Some(m),
		}
	}

	#[must_use]
	pub fn new_zm(x: f64, y: f64, z: f64, m: f64) -> Self {
		Self {
			x,
			y,
			z: Some(z),
			m: Some(m),
		}
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.x
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.y
	}

	#[must_use]
	pub fn z(&self) -> Option<f64> {
		self.z
	}

	#[must_use]
	pub fn m(&self) -> Option<f64> {
		self.m
	}

	/// Returns the value of a single ordinate, `None` if the coordinate does not carry it.
	#[must_use]
	pub fn ordinate(&self, ordinate: Ordinate) -> Option<f64> {
		match ordinate {
			Ordinate::X => Some(self.x),
			Ordinate::Y => Some(self.y),
			Ordinate::Z => self.z,
			Ordinate::M => self.m,
		}
	}

	/// Sets a single ordinate. `None` removes Z or M and is ignored for X and Y.
	pub fn set_ordinate(&mut self, ordinate: Ordinate, value: Option<f64>) {
		match ordinate {
			Ordinate::X => {
				if let Some(v) = value {
					self.x = v;
				}
			}
			Ordinate::Y => {
				if let Some(v) = value {
					self.y = v;
				}
			}
			Ordinate::Z => self.z = value,
			Ordinate::M => self.m = value,
		}
	}

	/// `true` if a finite Z value is present.
	#[must_use]
	pub fn has_z(&self) -> bool {
		self.z.is_some_and(f64::is_finite)
	}

	/// `true` if a finite M value is present.
	#[must_use]
	pub fn has_m(&self) -> bool {
		self.m.is_some_and(f64::is_finite)
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates::new(value[0].into(), value[1].into())
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates::new(value[0], value[1])
	}
}

impl From<[f64; 3]> for Coordinates {
	/// Interprets the third value as Z.
	fn from(value: [f64; 3]) -> Self {
		Coordinates::new_z(value[0], value[1], value[2])
	}
}

impl From<[f64; 4]> for Coordinates {
	/// Interprets the values as X, Y, Z, M.
	fn from(value: [f64; 4]) -> Self {
		Coordinates::new_zm(value[0], value[1], value[2], value[3])
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<&(f64, f64)> for Coordinates {
	fn from(value: &(f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		[value.x, value.y]
	}
}

impl From<geo_types::Coord<f64>> for Coordinates {
	fn from(value: geo_types::Coord<f64>) -> Self {
		Coordinates::new(value.x, value.y)
	}
}

impl From<Coordinates> for geo_types::Coord<f64> {
	fn from(value: Coordinates) -> Self {
		geo_types::Coord { x: value.x, y: value.y }
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match (self.z, self.m) {
			(None, None) => [self.x, self.y].fmt(f),
			(Some(z), None) => [self.x, self.y, z].fmt(f),
			(None, Some(m)) => write!(f, "[{:?}, {:?}, m={:?}]", self.x, self.y, m),
			(Some(z), Some(m)) => [self.x, self.y, z, m].fmt(f),
		}
	}
}
