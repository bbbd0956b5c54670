//! BMP encoder: uncompressed 24-bit, v3 header, no palette.

use alloc::vec::Vec;

use crate::bitmap::Bitmap;
use crate::error::BmpError;

const FILE_HEADER_SIZE: usize = 14;
const V3_HEADER_SIZE: usize = 40;
const DATA_OFFSET: usize = FILE_HEADER_SIZE + V3_HEADER_SIZE;

/// Encode a bitmap as a 24-bit BMP, regardless of how it was produced.
///
/// Deterministic: the same bitmap always yields the same bytes, and
/// re-encoding a decoded self-produced file is byte-identical.
pub(crate) fn encode_bmp(bitmap: &Bitmap) -> Result<Vec<u8>, BmpError> {
    let width = bitmap.width();
    let height = bitmap.height();
    if width == 0 || height == 0 {
        return Err(BmpError::EmptyBitmap);
    }

    let w = width as usize;
    let h = height as usize;
    // Row stride: 3 bytes per pixel, padded up to a 4-byte boundary.
    let row_stride = w
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    let pixel_data_size = row_stride
        .checked_mul(h)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;
    let file_size = pixel_data_size
        .checked_add(DATA_OFFSET)
        .ok_or(BmpError::DimensionsTooLarge { width, height })?;

    let mut out = Vec::with_capacity(file_size);
    write_headers(&mut out, file_size, width, height);

    let pad_bytes = row_stride - w * 3;
    for row in bitmap.pixels().chunks_exact(w).rev() {
        for px in row {
            out.push(px.b);
            out.push(px.g);
            out.push(px.r);
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    Ok(out)
}

fn write_headers(out: &mut Vec<u8>, file_size: usize, width: u32, height: u32) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes()); // reserved
    out.extend_from_slice(&0u16.to_le_bytes()); // reserved
    out.extend_from_slice(&(DATA_OFFSET as u32).to_le_bytes());

    // Info header (v3, 40 bytes)
    out.extend_from_slice(&(V3_HEADER_SIZE as u32).to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bit count
    out.extend_from_slice(&0u32.to_le_bytes()); // compression (BI_RGB)
    out.extend_from_slice(&0u32.to_le_bytes()); // image size
    out.extend_from_slice(&0u32.to_le_bytes()); // h resolution
    out.extend_from_slice(&0u32.to_le_bytes()); // v resolution
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}
