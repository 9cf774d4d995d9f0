//! Tiny Well-Known Binary: a compact, varint based serialisation of geometries.
//!
//! A TWKB geometry starts with a [`TwkbHeader`] carrying the geometry type, the decimal
//! precisions and flags for the optional parts: a size prefix, a [`BoundingBox`], an id list for
//! the children of multi geometries and the extended dimensions Z and M. Coordinates are scaled
//! to integers and stored as zigzag encoded deltas to the previous coordinate.
//!
//! Use [`TwkbWriter`] to encode and [`TwkbReader`] to decode.

mod bbox;
mod coordinates;
mod header;
mod id_list;
mod options;
mod reader;
mod scale;
mod writer;

pub use bbox::*;
pub use coordinates::*;
pub use header::*;
pub use id_list::*;
pub use options::*;
pub use reader::*;
pub use scale::*;
pub use writer::*;
