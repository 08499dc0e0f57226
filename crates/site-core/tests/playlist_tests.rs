// Playlist controller against a recording audio output.

use rand::rngs::StdRng;
use rand::SeedableRng;
use site_core::*;

#[derive(Default)]
struct RecordingOutput {
    calls: Vec<String>,
}

impl AudioOutput for RecordingOutput {
    fn resume(&mut self) {
        self.calls.push("resume".into());
    }
    fn load(&mut self, uri: &str) {
        self.calls.push(format!("load {uri}"));
    }
    fn play(&mut self) {
        self.calls.push("play".into());
    }
    fn pause(&mut self) {
        self.calls.push("pause".into());
    }
}

fn tracks(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("track-{i}.mp3")).collect()
}

#[test]
fn shuffle_is_a_permutation() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let original = tracks(7);
        let mut shuffled = original.clone();
        shuffle(&mut shuffled, &mut rng);
        assert_eq!(shuffled.len(), original.len());
        let mut a = original.clone();
        let mut b = shuffled.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b, "seed {seed} lost or duplicated a track");
    }
}

#[test]
fn shuffle_handles_trivial_lengths() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut empty: Vec<u8> = Vec::new();
    shuffle(&mut empty, &mut rng);
    assert!(empty.is_empty());
    let mut one = vec![42];
    shuffle(&mut one, &mut rng);
    assert_eq!(one, vec![42]);
}

#[test]
fn shuffle_actually_reorders_sometimes() {
    let original: Vec<u32> = (0..10).collect();
    let moved = (0..10).any(|seed| {
        let mut v = original.clone();
        shuffle(&mut v, &mut StdRng::seed_from_u64(seed));
        v != original
    });
    assert!(moved);
}

#[test]
fn empty_playlist_is_rejected() {
    assert_eq!(Playlist::new(Vec::new()).err(), Some(SiteError::EmptyPlaylist));
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(
        Playlist::shuffled(Vec::new(), &mut rng).err(),
        Some(SiteError::EmptyPlaylist)
    );
}

#[test]
fn start_loads_without_playing() {
    let mut pl = Playlist::new(tracks(3)).unwrap();
    let mut out = RecordingOutput::default();
    pl.start(&mut out);
    assert_eq!(out.calls, vec!["load track-0.mp3"]);
    assert!(!pl.is_playing());
}

#[test]
fn toggle_resumes_then_plays_and_pauses() {
    let mut pl = Playlist::new(tracks(3)).unwrap();
    let mut out = RecordingOutput::default();
    assert_eq!(pl.toggle_play_pause(&mut out), PlaybackChange::Started);
    assert!(pl.is_playing());
    assert_eq!(pl.toggle_play_pause(&mut out), PlaybackChange::Paused);
    assert!(!pl.is_playing());
    assert_eq!(out.calls, vec!["resume", "play", "resume", "pause"]);
}

#[test]
fn track_end_advances_cyclically() {
    let mut pl = Playlist::new(tracks(4)).unwrap();
    let mut out = RecordingOutput::default();
    let start = pl.state().current_track_index;
    for _ in 0..4 {
        pl.on_track_ended(&mut out);
    }
    assert_eq!(pl.state().current_track_index, start);
}

#[test]
fn track_end_plays_next_only_while_playing() {
    let mut pl = Playlist::new(tracks(2)).unwrap();
    let mut out = RecordingOutput::default();
    pl.on_track_ended(&mut out);
    assert_eq!(out.calls, vec!["load track-1.mp3"]);

    out.calls.clear();
    pl.toggle_play_pause(&mut out);
    pl.on_track_ended(&mut out);
    assert_eq!(out.calls, vec!["resume", "play", "load track-0.mp3", "play"]);
    assert_eq!(pl.current_track(), "track-0.mp3");
}

#[test]
fn rejected_play_reverts_to_paused() {
    let mut pl = Playlist::new(tracks(2)).unwrap();
    let mut out = RecordingOutput::default();
    pl.toggle_play_pause(&mut out);
    pl.playback_failed();
    assert!(!pl.is_playing());
    // next click tries again
    assert_eq!(pl.toggle_play_pause(&mut out), PlaybackChange::Started);
}

#[test]
fn shuffled_playlist_keeps_every_track() {
    let mut rng = StdRng::seed_from_u64(99);
    let pl = Playlist::shuffled(tracks(7), &mut rng).unwrap();
    let mut got = pl.state().tracks.clone();
    got.sort();
    assert_eq!(got, tracks(7));
}

#[test]
fn stale_play_rejection_is_ignored() {
    let mut requests = PlayRequests::default();
    // play, pause, play before either promise settles
    let first = requests.begin();
    requests.cancel();
    let second = requests.begin();

    // the pause aborts the first request
    assert!(!requests.reject(first));
    assert!(!requests.take_failure());

    assert!(requests.reject(second));
    assert!(requests.take_failure());
    assert!(!requests.take_failure());
}

#[test]
fn new_play_clears_an_untaken_failure() {
    let mut requests = PlayRequests::default();
    let first = requests.begin();
    assert!(requests.reject(first));
    requests.begin();
    assert!(!requests.take_failure());
}
