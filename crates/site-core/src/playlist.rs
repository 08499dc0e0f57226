//! Background music playlist.

use crate::error::{Result, SiteError};
use rand::Rng;

/// What the playlist needs from the host's media stack.
///
/// Implementations must not block: `play` and `resume` are fire-and-forget
/// and report failure out of band (see `Playlist::playback_failed`).
pub trait AudioOutput {
    /// Resume a suspended output context, if any.
    fn resume(&mut self);
    fn load(&mut self, uri: &str);
    fn play(&mut self);
    fn pause(&mut self);
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlaylistState {
    pub tracks: Vec<String>,
    pub current_track_index: usize,
    pub is_playing: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackChange {
    Started,
    Paused,
}

/// In-place Fisher–Yates shuffle.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

pub struct Playlist {
    state: PlaylistState,
}

impl Playlist {
    pub fn new(tracks: Vec<String>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(SiteError::EmptyPlaylist);
        }
        Ok(Self {
            state: PlaylistState {
                tracks,
                current_track_index: 0,
                is_playing: false,
            },
        })
    }

    pub fn shuffled<R: Rng + ?Sized>(mut tracks: Vec<String>, rng: &mut R) -> Result<Self> {
        shuffle(&mut tracks, rng);
        Self::new(tracks)
    }

    pub fn state(&self) -> &PlaylistState {
        &self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn current_track(&self) -> &str {
        &self.state.tracks[self.state.current_track_index]
    }

    /// Load the current track without starting it.
    pub fn start<A: AudioOutput + ?Sized>(&mut self, out: &mut A) {
        out.load(self.current_track());
        log::info!("[playlist] loaded {}", self.current_track());
    }

    pub fn toggle_play_pause<A: AudioOutput + ?Sized>(&mut self, out: &mut A) -> PlaybackChange {
        out.resume();
        if self.state.is_playing {
            out.pause();
            self.state.is_playing = false;
            log::info!("[playlist] paused");
            PlaybackChange::Paused
        } else {
            out.play();
            self.state.is_playing = true;
            log::info!("[playlist] playing {}", self.current_track());
            PlaybackChange::Started
        }
    }

    /// Advance cyclically; the next track starts only if playback was active.
    pub fn on_track_ended<A: AudioOutput + ?Sized>(&mut self, out: &mut A) {
        self.state.current_track_index =
            (self.state.current_track_index + 1) % self.state.tracks.len();
        out.load(self.current_track());
        if self.state.is_playing {
            out.play();
        }
        log::info!("[playlist] next track {}", self.current_track());
    }

    /// The host reports that a requested `play` was rejected.
    pub fn playback_failed(&mut self) {
        self.state.is_playing = false;
    }
}

/// Bookkeeping for in-flight `play` requests on a host whose `play` settles
/// later. Each request gets a generation; only a rejection of the latest one
/// still counts once a newer `play` or a `pause` has been issued.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayRequests {
    generation: u64,
    failed: bool,
}

impl PlayRequests {
    /// Start a new request and forget any failure not yet taken.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.failed = false;
        self.generation
    }

    /// A pause makes every outstanding request stale.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.failed = false;
    }

    /// Record that request `generation` was rejected. Returns whether it
    /// was still current.
    pub fn reject(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.failed = true;
        true
    }

    /// True once after the current request was rejected.
    pub fn take_failure(&mut self) -> bool {
        std::mem::take(&mut self.failed)
    }
}
