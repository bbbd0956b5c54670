//! Per-pixel shader pipeline.
//!
//! [`apply`] clones the source bitmap and invokes a [`Shader`] once per
//! pixel, scanning rows top-to-bottom and pixels left-to-right, writing
//! each result back before moving on. Shaders read from the evolving
//! canvas: a pixel already visited in the current pass shows its
//! transformed value. This in-place-during-scan order is part of the
//! pipeline's contract, not an implementation detail — shaders that
//! sample neighbors may rely on it.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::bitmap::Bitmap;
use crate::compose::blend_pixel;
use crate::pixel::Pixel;

/// A per-pixel transformation.
///
/// `shade` receives the evolving canvas (for dimensions and neighbor
/// access) and the coordinates of the pixel being replaced. Shader
/// parameters live on the implementing type; `&mut self` lets stateful
/// shaders (such as [`Noise`]) carry an RNG.
pub trait Shader {
    fn shade(&mut self, canvas: &Bitmap, x: u32, y: u32) -> Pixel;
}

/// Any `FnMut(&Bitmap, u32, u32) -> Pixel` closure is a shader.
impl<F> Shader for F
where
    F: FnMut(&Bitmap, u32, u32) -> Pixel,
{
    fn shade(&mut self, canvas: &Bitmap, x: u32, y: u32) -> Pixel {
        self(canvas, x, y)
    }
}

/// Run `shader` over every pixel of `source`, producing a new bitmap.
pub fn apply<S: Shader + ?Sized>(source: &Bitmap, shader: &mut S) -> Bitmap {
    let mut canvas = source.clone();
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let shaded = shader.shade(&canvas, x, y);
            let idx = canvas.index(x, y);
            canvas.pixels_mut()[idx] = shaded;
        }
    }
    canvas
}

/// Convert `source` to grayscale.
pub fn grayscale(source: &Bitmap) -> Bitmap {
    apply(source, &mut Grayscale)
}

/// Replaces each pixel's color channels with `(r + g + b) / 3`.
/// Idempotent; the alpha channel is untouched.
pub struct Grayscale;

impl Shader for Grayscale {
    fn shade(&mut self, canvas: &Bitmap, x: u32, y: u32) -> Pixel {
        let mut px = canvas.get(x, y).unwrap_or_default();
        let sum = u16::from(px.r) + u16::from(px.g) + u16::from(px.b);
        let gray = (sum / 3) as u8;
        px.r = gray;
        px.g = gray;
        px.b = gray;
        px
    }
}

/// Stochastic noise: with probability `level / 100`, blends a uniformly
/// random color into the pixel using the min/absolute-difference rule at
/// the configured alpha.
pub struct Noise {
    level: u8,
    alpha: u8,
    rng: SmallRng,
}

impl Noise {
    /// Noise shader with a fixed seed. `level` is clamped to 0..=100.
    pub fn new(level: u8, alpha: u8, seed: u64) -> Noise {
        Noise {
            level: level.min(100),
            alpha,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Noise shader seeded from the thread-local RNG.
    #[cfg(feature = "std")]
    pub fn from_entropy(level: u8, alpha: u8) -> Noise {
        Noise {
            level: level.min(100),
            alpha,
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl Shader for Noise {
    fn shade(&mut self, canvas: &Bitmap, x: u32, y: u32) -> Pixel {
        let px = canvas.get(x, y).unwrap_or_default();
        if self.rng.random_range(0..100u8) < self.level {
            let noise = Pixel::rgb(self.rng.random(), self.rng.random(), self.rng.random());
            blend_pixel(px, noise, self.alpha)
        } else {
            px
        }
    }
}
