//! TWKB (Tiny Well-Known-Binary) encoding and decoding of vector geometries.
//!
//! The [`geo`] model holds points, lines, polygons and their multi/collection variants with
//! optional Z and M ordinates. [`TwkbWriter`] turns them into compact TWKB bytes,
//! [`TwkbReader`] turns bytes back into geometries through a [`GeometryFactory`].
//!
//! ```rust
//! use twkb_geometry::{Geometry, TwkbReader, TwkbWriter, TwkbWriterOptions};
//!
//! let writer = TwkbWriter::new(TwkbWriterOptions::default().with_precision_xy(0)).unwrap();
//! let blob = writer.write(&Geometry::new_point([10.0, 10.0])).unwrap();
//! assert_eq!(blob.as_hex_compact(), "01001414");
//!
//! let geometry = TwkbReader::new().read(blob.as_slice()).unwrap();
//! assert_eq!(geometry, Geometry::new_point([10.0, 10.0]));
//! ```

pub mod geo;
pub mod twkb;

pub use geo::*;
pub use twkb::*;
