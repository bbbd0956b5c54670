use alloc::vec;
use alloc::vec::Vec;

use crate::error::BmpError;
use crate::pixel::Pixel;

/// An owned, decoded image: width, height, and a flat row-major pixel array.
///
/// The pixel array always has length exactly `width * height`, addressed as
/// `pixels[y * width + x]` with row 0 at the top of the image. Operations
/// that produce a new image ([`crate::blend`], [`crate::apply`]) allocate a
/// fresh `Bitmap` and leave their inputs untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<Pixel>,
}

impl Bitmap {
    /// Create a bitmap filled with [`Pixel::BLACK`].
    ///
    /// Fails with [`BmpError::DimensionsTooLarge`] if `width * height`
    /// overflows.
    pub fn new(width: u32, height: u32) -> Result<Bitmap, BmpError> {
        let len = pixel_count(width, height)?;
        Ok(Bitmap {
            width,
            height,
            data: vec![Pixel::BLACK; len],
        })
    }

    /// Create a bitmap from an existing pixel array.
    ///
    /// `data.len()` must be exactly `width * height`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<Pixel>) -> Result<Bitmap, BmpError> {
        let len = pixel_count(width, height)?;
        if data.len() != len {
            return Err(BmpError::BufferTooSmall {
                needed: len,
                actual: data.len(),
            });
        }
        Ok(Bitmap {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The flat pixel array, row-major, top row first.
    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.data
    }

    /// The pixel array viewed as raw bytes (B,G,R,A per pixel).
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// The pixel at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x < self.width && y < self.height {
            Some(self.data[self.index(x, y)])
        } else {
            None
        }
    }

    /// Mutable access to the pixel at `(x, y)`.
    pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut Pixel> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.data[idx])
        } else {
            None
        }
    }

    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

pub(crate) fn pixel_count(width: u32, height: u32) -> Result<usize, BmpError> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(BmpError::DimensionsTooLarge { width, height })
}
