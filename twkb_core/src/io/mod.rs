//! Readers and writers for the values TWKB is built from.
//!
//! [`ValueReader`]/[`ValueReaderSlice`] decode bytes, varints and zigzag varints from a bounded
//! byte slice; [`ValueWriter`]/[`ValueWriterBlob`] produce them. The free functions in
//! [`varint`] expose the bare zigzag/varint arithmetic.

mod value_reader;
mod value_reader_slice;
mod value_writer;
mod value_writer_blob;
pub mod varint;

pub use value_reader::*;
pub use value_reader_slice::*;
pub use value_writer::*;
pub use value_writer_blob::*;
pub use varint::*;
