use crate::color::hex_to_linear;
use crate::constants::*;
use crate::error::{Result, SiteError};
use crate::face::{default_orientations, Corner, Face, FaceEntry, FaceOrientation};
use crate::nav::NavBinding;
use fnv::FnvHashSet;

/// Everything the site needs at startup. `Default` is the live homepage.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub sequence: Vec<FaceEntry>,
    pub orientations: Vec<FaceOrientation>,
    pub bindings: Vec<NavBinding>,
    pub rotation_duration_ms: f64,
    pub tracks: Vec<String>,
    pub shuffle_tracks: bool,
    /// Linear RGB.
    pub base_color: [f32; 3],
    /// Restart the current rotation sweep when playback starts, so the
    /// visual cycle lines up with the music.
    pub resync_rotation_on_play: bool,
    pub volume: f32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            sequence: vec![
                FaceEntry::new(Face::Right, "About"),
                FaceEntry::new(Face::Top, "News"),
                FaceEntry::new(Face::Front, "Projects"),
                FaceEntry::new(Face::Back, "Contact"),
            ],
            orientations: default_orientations(),
            bindings: default_bindings(),
            rotation_duration_ms: ROTATION_DURATION_MS,
            tracks: DEFAULT_TRACKS.iter().map(|t| t.to_string()).collect(),
            shuffle_tracks: true,
            base_color: hex_to_linear(BASE_CUBE_HEX),
            resync_rotation_on_play: false,
            volume: DEFAULT_VOLUME,
        }
    }
}

/// One label per face. The homepage does not link anywhere yet, so the
/// labels carry no target and clicks on them are ignored.
pub fn default_bindings() -> Vec<NavBinding> {
    vec![
        NavBinding::new(Face::Right, Corner::TopLeft, "About"),
        NavBinding::new(Face::Front, Corner::BottomLeft, "Projects"),
        NavBinding::new(Face::Top, Corner::TopRight, "Blog"),
        NavBinding::new(Face::Back, Corner::BottomRight, "Contact"),
        NavBinding::new(Face::Left, Corner::TopLeft, "About"),
        NavBinding::new(Face::Bottom, Corner::BottomRight, "Contact"),
    ]
}

impl SiteConfig {
    /// Startup validation. Anything rejected here would otherwise surface as
    /// a modulo-by-zero or a silently dead corner once the frame loop runs.
    pub fn validate(&self) -> Result<()> {
        if self.tracks.is_empty() {
            return Err(SiteError::EmptyPlaylist);
        }
        if self.sequence.is_empty() {
            return Err(SiteError::EmptySequence);
        }
        if !self.rotation_duration_ms.is_finite() || self.rotation_duration_ms < 0.0 {
            return Err(SiteError::InvalidDuration(self.rotation_duration_ms));
        }
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(SiteError::InvalidVolume(self.volume));
        }
        let oriented: FnvHashSet<Face> = self.orientations.iter().map(|o| o.face).collect();
        if let Some(e) = self.sequence.iter().find(|e| !oriented.contains(&e.face)) {
            return Err(SiteError::MissingOrientation(e.face));
        }
        let mut bound = FnvHashSet::default();
        for b in &self.bindings {
            if !bound.insert(b.face) {
                return Err(SiteError::DuplicateBinding(b.face));
            }
        }
        Ok(())
    }
}
