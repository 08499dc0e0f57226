use std::f32::consts::{FRAC_PI_2, PI};

// Shared rotation/reactivity tuning constants and the default site content.

// Rotation
pub const ROTATION_DURATION_MS: f64 = 6000.0; // time to sweep from one face to the next

// Face orientations (radians): x then y, applied in XYZ Euler order
pub const RIGHT_ORIENTATION: [f32; 2] = [0.0, -FRAC_PI_2];
pub const TOP_ORIENTATION: [f32; 2] = [FRAC_PI_2, 0.0];
pub const FRONT_ORIENTATION: [f32; 2] = [0.0, 0.0];
pub const BACK_ORIENTATION: [f32; 2] = [0.0, PI];
pub const LEFT_ORIENTATION: [f32; 2] = [0.0, FRAC_PI_2];
pub const BOTTOM_ORIENTATION: [f32; 2] = [-FRAC_PI_2, 0.0];

// Frequency magnitudes are bytes; dividing by this maps them into [0, 1)
pub const MAGNITUDE_NORM: f32 = 256.0;
// Band levels reach exactly 1 for a band of 255s
pub const BAND_FULL_SCALE: f32 = 255.0;

// Cube, sRGB
pub const BASE_CUBE_HEX: u32 = 0x00aaff;

// Playback
pub const DEFAULT_VOLUME: f32 = 0.3;

pub const DEFAULT_TRACKS: [&str; 7] = [
    "Music-Site/Abba - Dancing Queen (Official Music Video Remastered).mp3",
    "Music-Site/Rick Astley - Together Forever (Official Video) [4K Remaster].mp3",
    "Music-Site/Dschinghis Khan - Moskau (Starparade 14.06.1979).mp3",
    "Music-Site/Redbone - Come and Get Your Love (Single Edit - Audio).mp3",
    "Music-Site/Earth, Wind & Fire - September.mp3",
    "Music-Site/Earth, Wind & Fire - Lets Groove (Official Audio).mp3",
    "Music-Site/Jackson 5 - I Want You Back (Lyric Video).mp3",
];
