// Host-side tests for the web frontend's constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_frustum_is_sane() {
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
    // the unit cube at its largest reactive scale (~2x) stays beyond the near plane
    assert!(CAMERA_Z - 1.0 * 3f32.sqrt() > CAMERA_NEAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lighting_is_within_unit_range() {
    assert!(LIGHT_INTENSITY > 0.0 && LIGHT_INTENSITY <= 1.0);
    assert!(AMBIENT_LIGHT >= 0.0 && AMBIENT_LIGHT < LIGHT_INTENSITY);
    assert!(LIGHT_POSITION.iter().any(|&c| c != 0.0));
    assert!(CLEAR_COLOR.iter().all(|&c| (0.0..=1.0).contains(&c)));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn analyser_fft_size_is_a_power_of_two() {
    assert!(ANALYSER_FFT_SIZE.is_power_of_two());
    assert!((32..=32768).contains(&ANALYSER_FFT_SIZE));
    // three bands need at least three bins
    assert!(ANALYSER_FFT_SIZE / 2 >= 3);
}

#[test]
fn corner_styles_distinguish_visible_from_hidden() {
    assert_ne!(VISIBLE_BACKGROUND, HIDDEN_BACKGROUND);
    assert_eq!(HIDDEN_BACKGROUND, HIDDEN_FOREGROUND);
    assert_ne!(VISIBLE_FOREGROUND, VISIBLE_BACKGROUND);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [CANVAS_ID, PLAY_BUTTON_ID, PLAY_ICON_ID, PAUSE_ICON_ID];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_ne!(PLAYING_LABEL, PAUSED_LABEL);
}
