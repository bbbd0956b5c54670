use bmpkit::{Bitmap, BmpError, Grayscale, Noise, Pixel, Shader};

fn gradient(w: u32, h: u32) -> Bitmap {
    let mut pixels = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            pixels.push(Pixel::rgb(
                (x * 37 % 256) as u8,
                (y * 91 % 256) as u8,
                ((x + y) * 13 % 256) as u8,
            ));
        }
    }
    Bitmap::from_pixels(w, h, pixels).unwrap()
}

#[test]
fn blend_channel_matches_float_reference() {
    for a in 0..=255u8 {
        for b in (0..=255u8).step_by(7) {
            for alpha in [0u8, 1, 77, 128, 200, 254, 255] {
                let expected = (f64::from(a.min(b))
                    + f64::from(a.abs_diff(b)) * f64::from(alpha) / 255.0)
                    .round() as u8;
                assert_eq!(
                    bmpkit::blend_channel(a, b, alpha),
                    expected,
                    "a={a} b={b} alpha={alpha}"
                );
            }
        }
    }
}

#[test]
fn blend_identical_inputs_is_identity() {
    let bitmap = gradient(6, 4);
    for alpha in [0u8, 1, 119, 254, 255] {
        let blended = bmpkit::blend(&bitmap, &bitmap, alpha).unwrap();
        assert_eq!(blended.pixels(), bitmap.pixels(), "alpha {alpha}");
    }
}

#[test]
fn blend_extremes_are_min_and_max() {
    let a = gradient(4, 4);
    let b = bmpkit::grayscale(&a);

    let lo = bmpkit::blend(&a, &b, 0).unwrap();
    let hi = bmpkit::blend(&a, &b, 255).unwrap();
    for ((pa, pb), (plo, phi)) in a
        .pixels()
        .iter()
        .zip(b.pixels())
        .zip(lo.pixels().iter().zip(hi.pixels()))
    {
        assert_eq!(plo.r, pa.r.min(pb.r));
        assert_eq!(plo.g, pa.g.min(pb.g));
        assert_eq!(plo.b, pa.b.min(pb.b));
        assert_eq!(phi.r, pa.r.max(pb.r));
        assert_eq!(phi.g, pa.g.max(pb.g));
        assert_eq!(phi.b, pa.b.max(pb.b));
    }
}

#[test]
fn blend_is_order_independent() {
    let a = gradient(5, 3);
    let b = bmpkit::grayscale(&a);
    for alpha in [0u8, 63, 128, 255] {
        let ab = bmpkit::blend(&a, &b, alpha).unwrap();
        let ba = bmpkit::blend(&b, &a, alpha).unwrap();
        assert_eq!(ab.pixels(), ba.pixels(), "alpha {alpha}");
    }
}

#[test]
fn blend_rejects_mismatched_dimensions() {
    let a = gradient(4, 4);
    let b = gradient(4, 5);
    match bmpkit::blend(&a, &b, 128) {
        Err(BmpError::DimensionMismatch { .. }) => {}
        other => panic!("expected DimensionMismatch, got {other:?}"),
    }
}

#[test]
fn grayscale_averages_channels() {
    let bitmap = Bitmap::from_pixels(2, 1, vec![Pixel::rgb(30, 60, 90), Pixel::rgb(0, 0, 255)])
        .unwrap();
    let gray = bmpkit::grayscale(&bitmap);
    assert_eq!(gray.pixels()[0], Pixel::rgb(60, 60, 60));
    assert_eq!(gray.pixels()[1], Pixel::rgb(85, 85, 85));
}

#[test]
fn grayscale_is_idempotent() {
    let bitmap = gradient(8, 8);
    let once = bmpkit::grayscale(&bitmap);
    let twice = bmpkit::grayscale(&once);
    assert_eq!(once.pixels(), twice.pixels());
}

#[test]
fn noise_level_zero_is_identity() {
    let bitmap = gradient(6, 6);
    let out = bmpkit::apply(&bitmap, &mut Noise::new(0, 200, 42));
    assert_eq!(out.pixels(), bitmap.pixels());
}

#[test]
fn noise_is_deterministic_for_a_seed() {
    let bitmap = gradient(16, 16);
    let a = bmpkit::apply(&bitmap, &mut Noise::new(77, 140, 7));
    let b = bmpkit::apply(&bitmap, &mut Noise::new(77, 140, 7));
    assert_eq!(a.pixels(), b.pixels());
}

#[test]
fn noise_level_100_touches_every_pixel_bound() {
    // At level 100 every pixel is blended; with alpha 255 each channel
    // becomes max(original, noise), so no channel may decrease.
    let bitmap = gradient(12, 12);
    let out = bmpkit::apply(&bitmap, &mut Noise::new(100, 255, 99));
    for (orig, noisy) in bitmap.pixels().iter().zip(out.pixels()) {
        assert!(noisy.r >= orig.r && noisy.g >= orig.g && noisy.b >= orig.b);
    }
}

#[test]
fn shaders_observe_transformed_neighbors() {
    // A shader that adds the already-visited left neighbor builds a running
    // sum, which only works because the pass mutates the canvas in scan
    // order.
    let bitmap = Bitmap::from_pixels(
        4,
        1,
        vec![
            Pixel::rgb(1, 0, 0),
            Pixel::rgb(2, 0, 0),
            Pixel::rgb(3, 0, 0),
            Pixel::rgb(4, 0, 0),
        ],
    )
    .unwrap();

    let mut running_sum = |canvas: &Bitmap, x: u32, y: u32| -> Pixel {
        let mut px = canvas.get(x, y).unwrap();
        if x > 0 {
            px.r += canvas.get(x - 1, y).unwrap().r;
        }
        px
    };
    let out = bmpkit::apply(&bitmap, &mut running_sum);

    let reds: Vec<u8> = out.pixels().iter().map(|p| p.r).collect();
    assert_eq!(reds, [1, 3, 6, 10]);
}

#[test]
fn shader_as_trait_object() {
    let bitmap = gradient(3, 3);
    let shader: &mut dyn Shader = &mut Grayscale;
    let out = bmpkit::apply(&bitmap, shader);
    assert_eq!(out.pixels(), bmpkit::grayscale(&bitmap).pixels());
}

#[test]
fn pixel_packed_view_is_bit_identical() {
    let px = Pixel {
        b: 0x11,
        g: 0x22,
        r: 0x33,
        a: 0x44,
    };
    assert_eq!(px.packed().to_ne_bytes(), [0x11, 0x22, 0x33, 0x44]);
    assert_eq!(Pixel::from_packed(px.packed()), px);
}

#[test]
fn bitmap_rejects_wrong_pixel_count() {
    match Bitmap::from_pixels(3, 3, vec![Pixel::BLACK; 8]) {
        Err(BmpError::BufferTooSmall { needed: 9, actual: 8 }) => {}
        other => panic!("expected BufferTooSmall, got {other:?}"),
    }
}
