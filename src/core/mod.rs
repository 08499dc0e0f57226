pub use site_core::*;

// Shaders bundled as string constants
pub static CUBE_WGSL: &str = include_str!("../../shaders/cube.wgsl");
