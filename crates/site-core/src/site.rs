//! The per-frame core: one owned `Site` ties rotation, navigation, playlist
//! and reactive mapping together. The host calls `tick` once per display
//! refresh with a timestamp and a magnitude snapshot; nothing here
//! schedules itself.

use crate::config::SiteConfig;
use crate::error::Result;
use crate::face::{Corner, Face, Orientation};
use crate::nav::{CornerSink, NavPresenter};
use crate::playlist::{AudioOutput, PlaybackChange, Playlist};
use crate::reactive::{Appearance, ReactiveMapper};
use crate::rotation::FaceRotation;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub orientation: Orientation,
    pub appearance: Appearance,
    pub active_face: Face,
    pub advanced: bool,
}

pub struct Site {
    rotation: FaceRotation,
    nav: NavPresenter,
    mapper: ReactiveMapper,
    playlist: Playlist,
    resync_rotation_on_play: bool,
    volume: f32,
    presented: Option<Face>,
}

impl Site {
    pub fn new<R: Rng + ?Sized>(config: SiteConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let SiteConfig {
            sequence,
            orientations,
            bindings,
            rotation_duration_ms,
            tracks,
            shuffle_tracks,
            base_color,
            resync_rotation_on_play,
            volume,
        } = config;

        let rotation = FaceRotation::new(sequence, &orientations, rotation_duration_ms)?;
        let nav = NavPresenter::new(bindings)?;
        let playlist = if shuffle_tracks {
            Playlist::shuffled(tracks, rng)?
        } else {
            Playlist::new(tracks)?
        };
        log::info!(
            "[site] faces={} duration={}ms tracks={}",
            rotation.len(),
            rotation_duration_ms,
            playlist.state().tracks.len()
        );
        Ok(Self {
            rotation,
            nav,
            mapper: ReactiveMapper::new(base_color),
            playlist,
            resync_rotation_on_play,
            volume,
            presented: None,
        })
    }

    pub fn rotation(&self) -> &FaceRotation {
        &self.rotation
    }

    pub fn nav(&self) -> &NavPresenter {
        &self.nav
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Load the first track into the host's media element.
    pub fn start<A: AudioOutput + ?Sized>(&mut self, out: &mut A) {
        self.playlist.start(out);
    }

    pub fn tick<S: CornerSink + ?Sized>(
        &mut self,
        now_ms: f64,
        magnitudes: &[u8],
        corners: &mut S,
    ) -> FrameOutput {
        let appearance = self.mapper.sample(magnitudes);
        let rot = self.rotation.step(now_ms);

        // Corner state only changes with the active face.
        if self.presented != Some(rot.active_face) {
            self.nav.present(rot.active_face, corners);
            self.presented = Some(rot.active_face);
        }

        FrameOutput {
            orientation: rot.orientation,
            appearance,
            active_face: rot.active_face,
            advanced: rot.advanced,
        }
    }

    pub fn toggle_play_pause<A: AudioOutput + ?Sized>(
        &mut self,
        now_ms: f64,
        out: &mut A,
    ) -> PlaybackChange {
        let change = self.playlist.toggle_play_pause(out);
        if change == PlaybackChange::Started && self.resync_rotation_on_play {
            self.rotation.restart(now_ms);
        }
        change
    }

    pub fn on_track_ended<A: AudioOutput + ?Sized>(&mut self, out: &mut A) {
        self.playlist.on_track_ended(out);
    }

    pub fn playback_failed(&mut self) {
        log::warn!("[site] playback did not start");
        self.playlist.playback_failed();
    }

    /// Where a click on `corner` should go right now, if anywhere.
    pub fn nav_target(&self, corner: Corner) -> Option<&str> {
        self.nav.target_for(self.rotation.active_face(), corner)
    }
}
