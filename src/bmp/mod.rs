//! BMP container decode and encode.
//!
//! Decode dispatches on the 4-byte info-header size tag: 12 bytes selects
//! the legacy core layout, 40 bytes the v3 layout; anything else is
//! rejected. Encode always emits the simplest form: 24-bit, v3 header,
//! no palette.

mod decode;
mod encode;

use alloc::vec::Vec;

use crate::bitmap::Bitmap;
use crate::error::BmpError;
use crate::limits::Limits;

/// Decode a BMP file held in memory.
pub fn decode(data: &[u8]) -> Result<Bitmap, BmpError> {
    decode::decode_bmp(data, None)
}

/// Decode a BMP file held in memory, rejecting images that exceed `limits`
/// before any pixel buffer is allocated.
pub fn decode_with_limits(data: &[u8], limits: &Limits) -> Result<Bitmap, BmpError> {
    decode::decode_bmp(data, Some(limits))
}

/// Encode a bitmap as an uncompressed 24-bit BMP.
pub fn encode(bitmap: &Bitmap) -> Result<Vec<u8>, BmpError> {
    encode::encode_bmp(bitmap)
}

/// Read and decode a BMP file from disk.
#[cfg(feature = "std")]
pub fn decode_file(path: impl AsRef<std::path::Path>) -> Result<Bitmap, BmpError> {
    let data = std::fs::read(path)?;
    decode::decode_bmp(&data, None)
}

/// Encode a bitmap and write it to disk as a 24-bit BMP.
#[cfg(feature = "std")]
pub fn encode_file(bitmap: &Bitmap, path: impl AsRef<std::path::Path>) -> Result<(), BmpError> {
    let bytes = encode::encode_bmp(bitmap)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
