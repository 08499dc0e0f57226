//! Visual-side scene math shared with the web frontend.
//!
//! These types avoid referencing platform-specific APIs. The renderer
//! consumes them to build camera and model matrices.

use crate::face::Orientation;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

/// Model matrix for the cube: uniform scale, then x/y rotation in XYZ order.
pub fn cube_model_matrix(orientation: Orientation, scale: f32) -> Mat4 {
    let rotation = Quat::from_euler(EulerRot::XYZ, orientation.x, orientation.y, 0.0);
    Mat4::from_scale_rotation_translation(Vec3::splat(scale), rotation, Vec3::ZERO)
}
