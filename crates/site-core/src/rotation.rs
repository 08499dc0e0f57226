//! Face rotation state machine.
//!
//! Holds a cyclic sequence of faces and sweeps the cube's orientation from
//! the current entry to the next over a fixed duration. The index advances
//! exactly once each time the interpolation parameter reaches 1.

use crate::error::{Result, SiteError};
use crate::face::{Face, FaceEntry, FaceOrientation, Orientation};
use fnv::FnvHashMap;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    pub current_index: usize,
    /// `None` until the first frame (or an explicit restart) anchors the cycle.
    pub start_ms: Option<f64>,
}

/// Result of one rotation step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationFrame {
    pub orientation: Orientation,
    pub t: f32,
    /// Face at `current_index` after any advance made during this step.
    pub active_face: Face,
    pub advanced: bool,
}

/// Interpolation parameter for `elapsed_ms` into a sweep of `duration_ms`.
///
/// Clamped to [0, 1]. A zero duration completes immediately.
pub fn interpolation(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

pub struct FaceRotation {
    sequence: SmallVec<[FaceEntry; 6]>,
    orientations: FnvHashMap<Face, Orientation>,
    duration_ms: f64,
    state: RotationState,
}

impl FaceRotation {
    pub fn new(
        sequence: impl IntoIterator<Item = FaceEntry>,
        orientations: &[FaceOrientation],
        duration_ms: f64,
    ) -> Result<Self> {
        let sequence: SmallVec<[FaceEntry; 6]> = sequence.into_iter().collect();
        if sequence.is_empty() {
            return Err(SiteError::EmptySequence);
        }
        if !duration_ms.is_finite() || duration_ms < 0.0 {
            return Err(SiteError::InvalidDuration(duration_ms));
        }
        let orientations: FnvHashMap<Face, Orientation> = orientations
            .iter()
            .map(|fo| (fo.face, fo.orientation))
            .collect();
        if let Some(missing) = sequence
            .iter()
            .find(|e| !orientations.contains_key(&e.face))
        {
            return Err(SiteError::MissingOrientation(missing.face));
        }
        Ok(Self {
            sequence,
            orientations,
            duration_ms,
            state: RotationState::default(),
        })
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn sequence(&self) -> &[FaceEntry] {
        &self.sequence
    }

    pub fn active_face(&self) -> Face {
        self.sequence[self.state.current_index].face
    }

    /// Re-anchor the current sweep so it starts counting from `now_ms`.
    pub fn restart(&mut self, now_ms: f64) {
        self.state.start_ms = Some(now_ms);
    }

    pub fn step(&mut self, now_ms: f64) -> RotationFrame {
        let start = *self.state.start_ms.get_or_insert(now_ms);
        let t = interpolation(now_ms - start, self.duration_ms);

        let next_index = (self.state.current_index + 1) % self.sequence.len();
        let from = self.orientation_at(self.state.current_index);
        let to = self.orientation_at(next_index);
        let orientation = from.lerp(to, t as f32);

        let advanced = t >= 1.0;
        if advanced {
            self.state.current_index = next_index;
            self.state.start_ms = Some(now_ms);
            log::debug!(
                "[rotation] advanced to {} ({})",
                self.sequence[next_index].face,
                self.sequence[next_index].label
            );
        }

        RotationFrame {
            orientation,
            t: t as f32,
            active_face: self.active_face(),
            advanced,
        }
    }

    fn orientation_at(&self, index: usize) -> Orientation {
        // presence checked in `new`
        self.orientations
            .get(&self.sequence[index].face)
            .copied()
            .unwrap_or_default()
    }
}
