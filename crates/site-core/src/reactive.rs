//! Audio-reactive mapping from a frequency-magnitude snapshot to the cube's
//! scale and colour. The cube scales uniformly with the mean magnitude,
//! `1 + mean / 256`, and keeps its base colour.

use crate::constants::*;

/// What the renderer needs from the reactive mapper each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
    pub scale: f32,
    pub color: [f32; 3],
}

/// Normalized band levels, each in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bands {
    pub low: f32,
    pub mid: f32,
    pub high: f32,
}

/// Mean byte magnitude; zero for an empty snapshot.
pub fn mean_magnitude(magnitudes: &[u8]) -> f32 {
    if magnitudes.is_empty() {
        return 0.0;
    }
    let sum: u32 = magnitudes.iter().map(|&m| m as u32).sum();
    sum as f32 / magnitudes.len() as f32
}

pub fn amplitude_scale(magnitudes: &[u8]) -> f32 {
    1.0 + mean_magnitude(magnitudes) / MAGNITUDE_NORM
}

/// Split into three contiguous equal bands by index. Trailing bins that do
/// not fill a whole band are ignored. A band of full-scale bins reads 1.
pub fn band_levels(magnitudes: &[u8]) -> Bands {
    let width = magnitudes.len() / 3;
    if width == 0 {
        return Bands::default();
    }
    let level = |band: usize| {
        let slice = &magnitudes[band * width..(band + 1) * width];
        (mean_magnitude(slice) / BAND_FULL_SCALE).clamp(0.0, 1.0)
    };
    Bands {
        low: level(0),
        mid: level(1),
        high: level(2),
    }
}

pub struct ReactiveMapper {
    base_color: [f32; 3],
}

impl ReactiveMapper {
    pub fn new(base_color: [f32; 3]) -> Self {
        Self { base_color }
    }

    pub fn sample(&self, magnitudes: &[u8]) -> Appearance {
        Appearance {
            scale: amplitude_scale(magnitudes),
            color: self.base_color,
        }
    }
}
