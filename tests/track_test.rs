use motion_track::tracker::DEFAULT_OVERLAP_THRESHOLD;
use motion_track::{Rect, Region, Track, TrackIdGenerator, TrackMovementStatistics, TrackState};

fn still_track(id: u64, start_frame: u32, masses: &[f32]) -> Track {
    let mut track = Track::new(id);
    track.set_start_frame(start_frame);
    for (i, &mass) in masses.iter().enumerate() {
        let region = Region::new(20.0, 20.0, 10.0, 10.0)
            .with_mass(mass)
            .with_frame_index(start_frame + i as u32);
        track.add_frame(&region);
    }
    track
}

#[test]
fn test_len_grows_one_per_frame() {
    let mut track = Track::new(1);
    for i in 0..4 {
        track.add_frame(&Region::new(i as f32, 0.0, 10.0, 10.0).with_mass(10.0));
        assert_eq!(track.len(), 2 * i + 1);
        track.add_blank_frame().unwrap();
        assert_eq!(track.len(), 2 * i + 2);
        assert_eq!(track.len(), track.bounds_history().len());
    }
}

#[test]
fn test_velocity_after_first_and_second_frame() {
    let mut track = Track::new(1);
    track.add_frame(&Region::new(10.0, 10.0, 20.0, 20.0));
    assert_eq!(track.velocity(), (0.0, 0.0));

    track.add_frame(&Region::new(17.0, 4.0, 20.0, 20.0));
    assert_eq!(track.velocity(), (7.0, -6.0));
}

#[test]
fn test_stationary_track_stats() {
    let track = still_track(1, 0, &[10.0, 10.0, 10.0]);
    let stats = track.get_stats();
    assert_eq!(
        stats,
        TrackMovementStatistics {
            movement: 0.0,
            max_offset: 0.0,
            score: 0.0,
            average_mass: 10.0,
            median_mass: 10.0,
            delta_std: 0.0,
        }
    );
}

#[test]
fn test_stats_short_tracks_are_zero() {
    assert_eq!(Track::new(1).get_stats(), TrackMovementStatistics::default());
    let one = still_track(2, 0, &[40.0]);
    assert_eq!(one.get_stats(), TrackMovementStatistics::default());
}

#[test]
fn test_score_is_bounded() {
    for scale in [0.0_f32, 1.0, 10.0, 1.0e3, 1.0e6] {
        let mut track = Track::new(1);
        for i in 0..6 {
            let step = i as f32 * scale;
            track.add_frame(
                &Region::new(step, step * 0.5, 10.0, 10.0)
                    .with_mass(20.0)
                    .with_pixel_variance(scale),
            );
        }
        let stats = track.get_stats();
        assert!(stats.score >= 0.0);
        assert!(stats.score <= 200.0, "score {} at scale {}", stats.score, scale);
    }
}

#[test]
fn test_trim_scenario() {
    let mut track = still_track(1, 0, &[1.0, 1.0, 50.0, 50.0, 1.0]);
    track.trim();

    assert_eq!(track.len(), 2);
    assert_eq!(track.start_frame(), 2);
    assert!(track.bounds_history().iter().all(|r| r.mass == 50.0));

    // Trimming again changes nothing.
    let before = track.bounds_history().to_vec();
    track.trim();
    assert_eq!(track.bounds_history(), before.as_slice());
    assert_eq!(track.start_frame(), 2);
}

#[test]
fn test_smooth_constant_track_is_unchanged() {
    let mut track = still_track(1, 0, &[5.0, 6.0, 7.0, 8.0]);
    let before = track.bounds_history().to_vec();
    track.smooth(&Rect::new(0.0, 0.0, 160.0, 120.0));
    assert_eq!(track.bounds_history(), before.as_slice());
}

#[test]
fn test_overlap_scenario() {
    let a = still_track(1, 0, &[10.0; 5]);
    let b = still_track(2, 2, &[10.0; 5]);

    // Shared frames 2, 3 and 4 overlap completely; a has 5 frames.
    let ratio = a.get_overlap_ratio(&b, DEFAULT_OVERLAP_THRESHOLD);
    assert!((ratio - 0.6).abs() < 1e-6);
}

#[test]
fn test_overlap_ratio_edge_cases() {
    let a = still_track(1, 0, &[10.0; 3]);
    let empty = Track::new(2);
    assert_eq!(a.get_overlap_ratio(&empty, DEFAULT_OVERLAP_THRESHOLD), 0.0);
    assert_eq!(empty.get_overlap_ratio(&a, DEFAULT_OVERLAP_THRESHOLD), 0.0);

    // Frames 0..3 and 10..13 never meet.
    let later = still_track(3, 10, &[10.0; 3]);
    assert_eq!(a.get_overlap_ratio(&later, DEFAULT_OVERLAP_THRESHOLD), 0.0);

    for threshold in [0.0, 0.05, 0.5, 1.0, 2.0] {
        let ratio = a.get_overlap_ratio(&still_track(4, 1, &[10.0; 4]), threshold);
        assert!((0.0..=1.0).contains(&ratio));
    }
}

#[test]
fn test_controller_loop() {
    let ids = TrackIdGenerator::new();
    let mut track = Track::from_generator(&ids);
    let mut state = TrackState::Active;
    let max_unseen = 2;

    // Object walks right for three frames, then disappears.
    let detections: Vec<Option<Region>> = vec![
        Some(Region::new(10.0, 10.0, 10.0, 10.0).with_mass(30.0).with_frame_index(0)),
        Some(Region::new(14.0, 10.0, 10.0, 10.0).with_mass(30.0).with_frame_index(1)),
        Some(Region::new(18.0, 10.0, 10.0, 10.0).with_mass(30.0).with_frame_index(2)),
        None,
        None,
        None,
    ];

    for detection in detections {
        if !state.is_live() {
            break;
        }
        match detection {
            Some(region) => {
                // Once a velocity exists the next position is predicted exactly.
                if track.len() >= 2 {
                    let (distance, size_difference) =
                        track.get_track_region_score(&region).unwrap();
                    assert!(distance < 1.0);
                    assert_eq!(size_difference, 0.0);
                }
                track.add_frame(&region);
                state = TrackState::Active;
            }
            None => {
                track.add_blank_frame().unwrap();
                track.inc_frames_since_target_seen();
                state = if track.frames_since_target_seen() > max_unseen {
                    TrackState::Abandoned
                } else {
                    TrackState::Coasting
                };
            }
        }
    }

    assert_eq!(state, TrackState::Abandoned);
    assert_eq!(track.id(), 1);
    assert_eq!(track.len(), 6);

    track.trim();
    assert_eq!(track.len(), 3);
    assert_eq!(track.start_frame(), 0);

    let stats = track.get_stats();
    assert!((stats.movement - 8.0).abs() < 1e-5);
    assert!((stats.max_offset - 8.0).abs() < 1e-5);
    assert!((stats.average_mass - 30.0).abs() < 1e-6);
}
