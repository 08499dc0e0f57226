// Rotation state machine driven with synthetic timestamps.

use site_core::*;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

fn four_face_rotation(duration_ms: f64) -> FaceRotation {
    let sequence = vec![
        FaceEntry::new(Face::Right, "About"),
        FaceEntry::new(Face::Top, "News"),
        FaceEntry::new(Face::Front, "Projects"),
        FaceEntry::new(Face::Back, "Contact"),
    ];
    FaceRotation::new(sequence, &default_orientations(), duration_ms).unwrap()
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn interpolation_is_clamped_and_monotonic() {
    let d = 6000.0;
    assert_eq!(interpolation(-50.0, d), 0.0);
    assert_eq!(interpolation(0.0, d), 0.0);
    assert_eq!(interpolation(3000.0, d), 0.5);
    assert_eq!(interpolation(6000.0, d), 1.0);
    assert_eq!(interpolation(9000.0, d), 1.0);

    let mut prev = 0.0;
    for e in 0..200 {
        let t = interpolation(e as f64 * 50.0, d);
        assert!(t >= prev, "t decreased at elapsed {}", e * 50);
        assert!((0.0..=1.0).contains(&t));
        prev = t;
    }
}

#[test]
fn zero_duration_completes_immediately() {
    assert_eq!(interpolation(0.0, 0.0), 1.0);
    let mut rot = four_face_rotation(0.0);
    let f = rot.step(10.0);
    assert!(f.advanced);
    assert_eq!(f.t, 1.0);
    assert_eq!(rot.state().current_index, 1);
}

#[test]
fn halfway_right_to_top() {
    let mut rot = four_face_rotation(6000.0);
    rot.step(0.0);
    let f = rot.step(3000.0);
    assert!(approx(f.orientation.x, FRAC_PI_4));
    assert!(approx(f.orientation.y, -FRAC_PI_4));
    assert!(!f.advanced);
    assert_eq!(f.active_face, Face::Right);
}

#[test]
fn first_frame_anchors_start_time() {
    let mut rot = four_face_rotation(6000.0);
    let f = rot.step(123_456.0);
    assert_eq!(f.t, 0.0);
    assert_eq!(rot.state().start_ms, Some(123_456.0));
    assert!(approx(f.orientation.y, -FRAC_PI_2));
}

#[test]
fn advances_once_per_completed_sweep() {
    let mut rot = four_face_rotation(6000.0);
    let mut advances = 0;
    let mut now = 0.0;
    rot.step(now);
    // 3 full sweeps sampled at 60 fps-ish
    while now < 3.0 * 6000.0 {
        now += 16.0;
        if rot.step(now).advanced {
            advances += 1;
        }
    }
    assert_eq!(advances, 3);
    assert_eq!(rot.state().current_index, 3);
}

#[test]
fn exact_durations_advance_exactly_n_times() {
    let mut rot = four_face_rotation(1000.0);
    rot.step(0.0);
    let mut advances = 0;
    for n in 1..=5 {
        let f = rot.step(n as f64 * 1000.0);
        assert!(f.advanced, "no advance at sweep {n}");
        advances += 1;
        // a second frame at the same instant must not advance again
        assert!(!rot.step(n as f64 * 1000.0).advanced);
    }
    assert_eq!(advances, 5);
    assert_eq!(rot.state().current_index, 5 % 4);
}

#[test]
fn full_cycle_returns_to_start() {
    let mut rot = four_face_rotation(100.0);
    rot.step(0.0);
    let start = rot.state().current_index;
    for n in 1..=rot.len() {
        rot.step(n as f64 * 100.0);
    }
    assert_eq!(rot.state().current_index, start);
    assert_eq!(rot.active_face(), Face::Right);
}

#[test]
fn advance_lands_on_target_orientation() {
    let mut rot = four_face_rotation(6000.0);
    rot.step(0.0);
    let f = rot.step(6000.0);
    assert!(f.advanced);
    assert_eq!(f.active_face, Face::Top);
    assert!(approx(f.orientation.x, FRAC_PI_2));
    assert!(approx(f.orientation.y, 0.0));
}

#[test]
fn last_entry_wraps_to_first() {
    let mut rot = four_face_rotation(10.0);
    rot.step(0.0);
    for n in 1..=3 {
        rot.step(n as f64 * 10.0);
    }
    assert_eq!(rot.active_face(), Face::Back);
    // back -> right: y sweeps from PI to -PI/2
    let f = rot.step(35.0);
    assert!(approx(f.orientation.y, std::f32::consts::PI + (-FRAC_PI_2 - std::f32::consts::PI) * 0.5));
}

#[test]
fn restart_reanchors_current_sweep() {
    let mut rot = four_face_rotation(6000.0);
    rot.step(0.0);
    rot.step(5000.0);
    rot.restart(5000.0);
    let f = rot.step(5500.0);
    assert!(!f.advanced);
    assert!((f.t - 500.0 / 6000.0).abs() < 1e-6);
    assert_eq!(rot.state().current_index, 0);
}

#[test]
fn construction_rejects_bad_input() {
    let empty: Vec<FaceEntry> = Vec::new();
    assert_eq!(
        FaceRotation::new(empty, &default_orientations(), 6000.0).err(),
        Some(SiteError::EmptySequence)
    );
    let seq = vec![FaceEntry::new(Face::Left, "About")];
    let only_front = [FaceOrientation {
        face: Face::Front,
        orientation: Orientation::new(0.0, 0.0),
    }];
    assert_eq!(
        FaceRotation::new(seq.clone(), &only_front, 6000.0).err(),
        Some(SiteError::MissingOrientation(Face::Left))
    );
    assert!(matches!(
        FaceRotation::new(seq, &default_orientations(), f64::NAN).err(),
        Some(SiteError::InvalidDuration(_))
    ));
}

#[test]
fn single_entry_sequence_cycles_in_place() {
    let seq = vec![FaceEntry::new(Face::Front, "Projects")];
    let mut rot = FaceRotation::new(seq, &default_orientations(), 100.0).unwrap();
    rot.step(0.0);
    let f = rot.step(100.0);
    assert!(f.advanced);
    assert_eq!(rot.state().current_index, 0);
    assert_eq!(f.orientation, Orientation::new(0.0, 0.0));
}
