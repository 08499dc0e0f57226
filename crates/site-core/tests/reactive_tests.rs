// Reactive mapping from synthetic magnitude snapshots.

use site_core::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn amplitude_scale_tracks_mean() {
    assert_eq!(amplitude_scale(&[0; 128]), 1.0);
    assert!(approx(amplitude_scale(&[128; 128]), 1.5));
    assert!(approx(amplitude_scale(&[255; 128]), 1.0 + 255.0 / 256.0));
    assert_eq!(amplitude_scale(&[]), 1.0);
}

#[test]
fn band_levels_zero_and_full() {
    let zero = band_levels(&[0; 128]);
    assert_eq!(zero, Bands { low: 0.0, mid: 0.0, high: 0.0 });

    let full = band_levels(&[255; 128]);
    assert_eq!((full.low, full.mid, full.high), (1.0, 1.0, 1.0));
}

#[test]
fn band_levels_split_by_index_order() {
    let mut m = vec![0u8; 9];
    m[0..3].fill(200);
    m[6..9].fill(100);
    let b = band_levels(&m);
    assert!(approx(b.low, 200.0 / 255.0));
    assert_eq!(b.mid, 0.0);
    assert!(approx(b.high, 100.0 / 255.0));
}

#[test]
fn band_levels_ignore_remainder_and_tiny_inputs() {
    // 128 bins -> three bands of 42, last two bins ignored
    let mut m = vec![0u8; 128];
    m[126] = 255;
    m[127] = 255;
    assert_eq!(band_levels(&m), Bands::default());
    assert_eq!(band_levels(&[255, 255]), Bands::default());
}

#[test]
fn srgb_decoding() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!(approx(srgb_to_linear(1.0), 1.0));
    assert!(approx(srgb_to_linear(0.5), 0.21404));
    // linear segment near black
    assert!(approx(srgb_to_linear(0.04), 0.04 / 12.92));
    let [r, g, b] = hex_to_linear(0x00aaff);
    assert_eq!(r, 0.0);
    assert!((g - 0.4020).abs() < 1e-3);
    assert!(approx(b, 1.0));
}

#[test]
fn mapper_scales_with_amplitude_and_keeps_colour() {
    let base = hex_to_linear(BASE_CUBE_HEX);
    let mapper = ReactiveMapper::new(base);

    let loud = mapper.sample(&[255; 128]);
    assert!(loud.scale > 1.9);
    assert_eq!(loud.color, base);

    let quiet = mapper.sample(&[0; 128]);
    assert_eq!(quiet.scale, 1.0);
    assert_eq!(quiet.color, base);
}
