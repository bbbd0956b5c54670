use bytemuck::{Pod, Zeroable};

/// A single pixel in BMP native channel order: blue, green, red, alpha.
///
/// The fourth channel is the BMP "reserved" byte; uncompressed 24-bit data
/// has no alpha on disk, so decode leaves it at 0. The channel-wise struct
/// view and the [`packed`](Pixel::packed) `u32` view are the same bits
/// (a bytemuck cast, not a conversion).
#[repr(C)]
#[derive(Pod, Zeroable, Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct Pixel {
    pub b: u8,
    pub g: u8,
    pub r: u8,
    pub a: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel {
        b: 0,
        g: 0,
        r: 0,
        a: 0,
    };

    /// Opaque-free constructor from red/green/blue, alpha 0.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Pixel {
        Pixel { b, g, r, a: 0 }
    }

    /// The pixel as a single native-endian `u32` (same bits as the struct).
    pub fn packed(self) -> u32 {
        bytemuck::cast(self)
    }

    /// Rebuild a pixel from its [`packed`](Pixel::packed) representation.
    pub fn from_packed(value: u32) -> Pixel {
        bytemuck::cast(value)
    }
}
