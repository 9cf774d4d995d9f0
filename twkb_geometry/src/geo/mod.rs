//! The in-memory geometry model: coordinates with optional Z/M, the seven TWKB geometry kinds,
//! and the factories the reader builds geometries with.

mod collection;
mod factory;
mod geometry;
mod geometry_type;
mod interop;
mod types;

pub use collection::*;
pub use factory::*;
pub use geometry::*;
pub use geometry_type::*;
pub use types::*;
