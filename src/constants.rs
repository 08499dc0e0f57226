// Host-side constants: DOM wiring, camera, lighting and audio analysis.

// DOM element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const PLAY_BUTTON_ID: &str = "music-player-btn";
pub const PLAY_ICON_ID: &str = "play-icon";
pub const PAUSE_ICON_ID: &str = "pause-icon";

// Play button text
pub const PLAYING_LABEL: &str = "Curated by Brandon";
pub const PAUSED_LABEL: &str = "Play";

// Corner styling
pub const VISIBLE_CLASS: &str = "visible";
pub const VISIBLE_BACKGROUND: &str = "transparent";
pub const VISIBLE_FOREGROUND: &str = "white";
pub const HIDDEN_BACKGROUND: &str = "black";
pub const HIDDEN_FOREGROUND: &str = "black";

// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_Z: f32 = 3.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Lighting
pub const LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0]; // normalized before upload
pub const LIGHT_INTENSITY: f32 = 1.0;
pub const AMBIENT_LIGHT: f32 = 0.08;

// Background
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

// Audio analysis
pub const ANALYSER_FFT_SIZE: u32 = 256; // yields ANALYSER_FFT_SIZE / 2 frequency bins
