//! A codec for the Quite OK Image format (QOI): a lossless image encoding
//! that trades a small amount of compression ratio for a much simpler and
//! faster encoder/decoder than PNG.
//!
//! The [`qoi`] module holds the whole codec: header parsing, the tagged
//! opcode stream, and the 64-entry pixel cache shared by the encoder and
//! decoder. [`error::QoiError`] enumerates everything that can go wrong.

pub mod error;
pub mod qoi;

pub use error::QoiError;
pub use qoi::{qoi_decode, qoi_encode, ChanelMode, Colorspace, QoiDescriptor};
