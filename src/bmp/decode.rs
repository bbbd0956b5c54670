//! BMP decoder: header dispatch, palette resolution, and scanline decode.

use alloc::vec;
use alloc::vec::Vec;

use crate::bitmap::{Bitmap, pixel_count};
use crate::error::BmpError;
use crate::limits::Limits;
use crate::pixel::Pixel;

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn set_position(&mut self, pos: usize) -> Result<(), BmpError> {
        if pos > self.data.len() {
            return Err(BmpError::UnexpectedEof);
        }
        self.pos = pos;
        Ok(())
    }

    fn read_u8(&mut self) -> Result<u8, BmpError> {
        if self.pos < self.data.len() {
            let b = self.data[self.pos];
            self.pos += 1;
            Ok(b)
        } else {
            Err(BmpError::UnexpectedEof)
        }
    }

    fn get_u16_le(&mut self) -> Result<u16, BmpError> {
        let bytes = self.read_fixed_bytes::<2>()?;
        Ok(u16::from_le_bytes(bytes))
    }

    fn get_u32_le(&mut self) -> Result<u32, BmpError> {
        let bytes = self.read_fixed_bytes::<4>()?;
        Ok(u32::from_le_bytes(bytes))
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BmpError> {
        if self.pos + N > self.data.len() {
            return Err(BmpError::UnexpectedEof);
        }
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(buf)
    }
}

// ── Parsed headers ──────────────────────────────────────────────────

const CORE_HEADER_SIZE: u32 = 12;
const V3_HEADER_SIZE: u32 = 40;

struct FileHeader {
    /// Offset from the start of the file to the pixel data. The header's
    /// declared sizes are not trusted for this; there may be a gap.
    data_offset: u32,
}

/// Variant-erased info header: geometry and depth, normalized from either
/// the 12-byte core layout or the 40-byte v3 layout.
struct InfoDescriptor {
    width: u32,
    height: u32,
    depth: u16,
    /// Explicit v3 used-color count; 0 means "derive from depth".
    palette_colors: u32,
}

fn parse_headers(cur: &mut Cursor<'_>) -> Result<(FileHeader, InfoDescriptor), BmpError> {
    if cur.read_u8()? != b'B' || cur.read_u8()? != b'M' {
        return Err(BmpError::UnrecognizedFormat);
    }
    let _file_size = cur.get_u32_le()?;
    let _reserved1 = cur.get_u16_le()?;
    let _reserved2 = cur.get_u16_le()?;
    let data_offset = cur.get_u32_le()?;

    // The info-header size field is the sole variant discriminator.
    let ihsize = cur.get_u32_le()?;
    let desc = match ihsize {
        CORE_HEADER_SIZE => parse_core_header(cur)?,
        V3_HEADER_SIZE => parse_v3_header(cur)?,
        _ => {
            return Err(BmpError::UnsupportedVariant(alloc::format!(
                "info header size {ihsize} (expected 12 or 40)"
            )));
        }
    };

    if desc.width == 0 || desc.height == 0 {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "zero image dimension: {}x{}",
            desc.width,
            desc.height
        )));
    }
    if !matches!(desc.depth, 1 | 2 | 4 | 8 | 24) {
        return Err(BmpError::UnsupportedVariant(alloc::format!(
            "bit depth {} (supported: 1, 2, 4, 8, 24)",
            desc.depth
        )));
    }

    Ok((FileHeader { data_offset }, desc))
}

fn parse_core_header(cur: &mut Cursor<'_>) -> Result<InfoDescriptor, BmpError> {
    let width = u32::from(cur.get_u16_le()?);
    let height = u32::from(cur.get_u16_le()?);
    let planes = cur.get_u16_le()?;
    let depth = cur.get_u16_le()?;

    if planes != 1 {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "planes field is {planes}, expected 1"
        )));
    }

    Ok(InfoDescriptor {
        width,
        height,
        depth,
        palette_colors: 0,
    })
}

fn parse_v3_header(cur: &mut Cursor<'_>) -> Result<InfoDescriptor, BmpError> {
    let width = cur.get_u32_le()? as i32;
    let height = cur.get_u32_le()? as i32;
    let planes = cur.get_u16_le()?;
    let depth = cur.get_u16_le()?;
    let compression = cur.get_u32_le()?;
    let _image_size = cur.get_u32_le()?;
    let _x_pixels_per_meter = cur.get_u32_le()?;
    let _y_pixels_per_meter = cur.get_u32_le()?;
    let colors_used = cur.get_u32_le()?;
    let _important_colors = cur.get_u32_le()?;

    if width <= 0 {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "non-positive width {width}"
        )));
    }
    // Negative height means top-down row order. Rejected rather than
    // silently misread as bottom-up.
    if height < 0 {
        return Err(BmpError::UnsupportedVariant(
            "top-down row order (negative height)".into(),
        ));
    }
    if planes != 1 {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "planes field is {planes}, expected 1"
        )));
    }
    if compression != 0 {
        return Err(BmpError::UnsupportedVariant(alloc::format!(
            "compression scheme {compression} (only BI_RGB is supported)"
        )));
    }
    if depth <= 8 && colors_used > 1u32 << depth {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "palette count {colors_used} exceeds max for {depth}-bit depth ({})",
            1u32 << depth
        )));
    }

    Ok(InfoDescriptor {
        width: width as u32,
        height: height as u32,
        depth,
        palette_colors: colors_used,
    })
}

// ── Palette ─────────────────────────────────────────────────────────

/// Read the indexed-color table. Entries are 32-bit packed B,G,R,reserved
/// in file order; count is the explicit v3 used-color count when nonzero,
/// otherwise `2^depth`.
fn read_palette(cur: &mut Cursor<'_>, desc: &InfoDescriptor) -> Result<Vec<Pixel>, BmpError> {
    let colors = if desc.palette_colors != 0 {
        desc.palette_colors
    } else {
        1u32 << desc.depth
    };

    let mut palette = Vec::with_capacity(colors as usize);
    for _ in 0..colors {
        let [b, g, r, a] = cur.read_fixed_bytes::<4>()?;
        palette.push(Pixel { b, g, r, a });
    }
    Ok(palette)
}

fn palette_pixel(palette: &[Pixel], index: usize) -> Result<Pixel, BmpError> {
    palette.get(index).copied().ok_or_else(|| {
        BmpError::InvalidData(alloc::format!(
            "palette index {index} out of range (palette has {} entries)",
            palette.len()
        ))
    })
}

// ── Scanline decode ─────────────────────────────────────────────────

/// Decode pixel rows in file order. BMP stores rows bottom-to-top, so the
/// row at file position 0 lands at `out[(height-1) * width ..]` and the
/// last row on disk becomes display row 0. Each row's byte count is padded
/// up to a 4-byte boundary regardless of depth.
fn decode_rows(
    cur: &mut Cursor<'_>,
    desc: &InfoDescriptor,
    palette: &[Pixel],
    out: &mut [Pixel],
) -> Result<(), BmpError> {
    let width = desc.width as usize;
    let height = desc.height as usize;

    for y in (0..height).rev() {
        let row = &mut out[y * width..(y + 1) * width];
        let mut bytes_read = 0usize;
        let mut x = 0usize;

        while x < width {
            match desc.depth {
                1 | 2 | 4 => {
                    // Each byte packs 8/depth pixels, most significant
                    // sub-field first.
                    let byte = cur.read_u8()?;
                    bytes_read += 1;
                    let mask = 0xFFu8 >> (8 - desc.depth);
                    let mut offset = 8i16 - desc.depth as i16;
                    loop {
                        let index = usize::from((byte >> offset) & mask);
                        row[x] = palette_pixel(palette, index)?;
                        x += 1;
                        offset -= desc.depth as i16;
                        if x >= width || offset < 0 {
                            break;
                        }
                    }
                }
                8 => {
                    let index = usize::from(cur.read_u8()?);
                    bytes_read += 1;
                    row[x] = palette_pixel(palette, index)?;
                    x += 1;
                }
                24 => {
                    let [b, g, r] = cur.read_fixed_bytes::<3>()?;
                    bytes_read += 3;
                    row[x] = Pixel { b, g, r, a: 0 };
                    x += 1;
                }
                d => {
                    // parse_headers already rejected other depths
                    return Err(BmpError::UnsupportedVariant(alloc::format!(
                        "bit depth {d}"
                    )));
                }
            }
        }

        while bytes_read % 4 != 0 {
            cur.read_u8()?;
            bytes_read += 1;
        }
    }

    Ok(())
}

// ── Full decode ─────────────────────────────────────────────────────

pub(crate) fn decode_bmp(data: &[u8], limits: Option<&Limits>) -> Result<Bitmap, BmpError> {
    let mut cur = Cursor::new(data);
    let (file_header, desc) = parse_headers(&mut cur)?;

    let len = pixel_count(desc.width, desc.height)?;
    let out_bytes = len
        .checked_mul(core::mem::size_of::<Pixel>())
        .ok_or(BmpError::DimensionsTooLarge {
            width: desc.width,
            height: desc.height,
        })?;
    if let Some(limits) = limits {
        limits.check_dimensions(desc.width, desc.height)?;
        limits.check_memory(out_bytes)?;
    }

    let palette = if desc.depth <= 8 {
        read_palette(&mut cur, &desc)?
    } else {
        Vec::new()
    };

    let mut pixels = vec![Pixel::BLACK; len];
    cur.set_position(file_header.data_offset as usize)?;
    decode_rows(&mut cur, &desc, &palette, &mut pixels)?;

    Bitmap::from_pixels(desc.width, desc.height, pixels)
}
