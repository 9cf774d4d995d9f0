//! Contains the byte container types used by the codec.

mod blob;
pub use blob::*;
