//! Cube faces, screen corners and the orientation that turns each face
//! toward the camera.

use crate::constants::*;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Right,
    Top,
    Front,
    Back,
    Left,
    Bottom,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Right,
        Face::Top,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Bottom,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Face::Right => "right",
            Face::Top => "top",
            Face::Front => "front",
            Face::Back => "back",
            Face::Left => "left",
            Face::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the four fixed screen positions hosting a navigation label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Position in `Corner::ALL`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// DOM id of the anchor element for this corner.
    pub fn element_id(self) -> &'static str {
        match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomLeft => "bottom-left",
            Corner::BottomRight => "bottom-right",
        }
    }
}

/// An entry in the rotation cycle. Order in the sequence is significant.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceEntry {
    pub face: Face,
    pub label: String,
}

impl FaceEntry {
    pub fn new(face: Face, label: impl Into<String>) -> Self {
        Self {
            face,
            label: label.into(),
        }
    }
}

/// Cube rotation about the x and y axes, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    pub x: f32,
    pub y: f32,
}

impl Orientation {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    const fn from_array(xy: [f32; 2]) -> Self {
        Self { x: xy[0], y: xy[1] }
    }

    /// Per-axis linear interpolation; `t` is expected in [0, 1].
    pub fn lerp(self, to: Orientation, t: f32) -> Orientation {
        Orientation {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
        }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Fixed interpolation endpoint for a face.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceOrientation {
    pub face: Face,
    pub orientation: Orientation,
}

pub fn default_orientations() -> Vec<FaceOrientation> {
    let table = [
        (Face::Right, RIGHT_ORIENTATION),
        (Face::Top, TOP_ORIENTATION),
        (Face::Front, FRONT_ORIENTATION),
        (Face::Back, BACK_ORIENTATION),
        (Face::Left, LEFT_ORIENTATION),
        (Face::Bottom, BOTTOM_ORIENTATION),
    ];
    table
        .into_iter()
        .map(|(face, xy)| FaceOrientation {
            face,
            orientation: Orientation::from_array(xy),
        })
        .collect()
}
