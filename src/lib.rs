//! # bmpkit
//!
//! Windows BMP decoder and encoder with a small per-pixel operation toolkit.
//!
//! ## Supported Formats
//!
//! - Decode: uncompressed BMP with a 12-byte core or 40-byte v3 info header,
//!   bit depths 1/2/4/8 (palette-indexed) and 24 (direct BGR).
//! - Encode: always 24-bit, v3 header, no palette.
//!
//! ## Pixel Operations
//!
//! [`blend`] composites two same-sized bitmaps with a symmetric
//! min/absolute-difference interpolation, and [`apply`] runs a [`Shader`]
//! over every pixel of a bitmap ([`Grayscale`], [`Noise`], or any closure).
//!
//! ## Non-Goals
//!
//! - RLE or JPEG/PNG-in-BMP compression
//! - v4/v5 info headers, 16/32/48/64-bit pixel formats
//! - Streaming or partial decode, color management
//!
//! ## Usage
//!
//! ```no_run
//! use bmpkit::Noise;
//!
//! let background = bmpkit::decode_file("bg.bmp")?;
//! let foreground = bmpkit::decode_file("fg.bmp")?;
//!
//! let background = bmpkit::grayscale(&background);
//! let combined = bmpkit::blend(&background, &foreground, 119)?;
//!
//! let noisy = bmpkit::apply(&combined, &mut Noise::from_entropy(77, 140));
//! bmpkit::encode_file(&noisy, "out.bmp")?;
//! # Ok::<(), bmpkit::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitmap;
mod error;
mod limits;
mod pixel;

pub mod bmp;
pub mod compose;
pub mod shader;

// Re-exports
pub use bitmap::Bitmap;
pub use bmp::{decode, decode_with_limits, encode};
#[cfg(feature = "std")]
pub use bmp::{decode_file, encode_file};
pub use compose::{blend, blend_channel, blend_pixel};
pub use error::BmpError;
pub use limits::Limits;
pub use pixel::Pixel;
pub use shader::{Grayscale, Noise, Shader, apply, grayscale};
