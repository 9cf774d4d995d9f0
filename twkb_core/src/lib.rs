//! Byte-level building blocks of the TWKB codec: the [`Blob`] byte buffer, value readers and
//! writers with varint/zigzag support, and the [`TwkbError`] taxonomy shared by all crates.

pub mod error;

pub mod io;

pub mod types;

pub use error::*;
pub use types::*;
