//! Spawn schedule tests
//!
//! Tests for:
//! - Whole-second spawn gating
//! - One-spawn-per-frame rate limiting
//! - The 121-object cap

use cubegrid::grid::{CELL_COUNT, SpawnSchedule};

// ============================================================================
// Gating
// ============================================================================

#[test]
fn fresh_schedule_is_empty() {
    let schedule = SpawnSchedule::new();
    assert_eq!(schedule.spawned(), 0);
    assert!(!schedule.is_full());
}

#[test]
fn nothing_spawns_before_the_first_whole_second() {
    let mut schedule = SpawnSchedule::new();
    for elapsed in [0.0, 0.25, 0.5, 0.9, 0.999] {
        assert!(!schedule.tick(elapsed), "spawned at t={elapsed}");
    }
    assert_eq!(schedule.spawned(), 0);
}

#[test]
fn first_spawn_lands_just_past_one_second() {
    let mut schedule = SpawnSchedule::new();
    assert!(schedule.tick(1.001));
    assert_eq!(schedule.spawned(), 1);
}

#[test]
fn one_spawn_per_second_at_a_steady_frame_rate() {
    let mut schedule = SpawnSchedule::new();
    let mut spawns = 0;
    // 60 fps for just under ten seconds.
    for frame in 0..600 {
        let elapsed = frame as f32 / 60.0;
        if schedule.tick(elapsed) {
            spawns += 1;
        }
    }
    assert_eq!(spawns, 9);
    assert_eq!(schedule.spawned(), 9);
}

// ============================================================================
// Rate limiting
// ============================================================================

#[test]
fn late_first_frame_grants_a_single_spawn() {
    let mut schedule = SpawnSchedule::new();
    assert!(schedule.tick(5.0));
    assert_eq!(schedule.spawned(), 1);
}

#[test]
fn schedule_catches_up_one_object_per_frame() {
    let mut schedule = SpawnSchedule::new();
    // A long stall leaves elapsed time far ahead of the object count.
    let mut frames = 0;
    while schedule.tick(50.0) {
        frames += 1;
    }
    assert_eq!(frames, 50);
    assert_eq!(schedule.spawned(), 50);
    // Caught up: the next whole second has not passed yet.
    assert!(!schedule.tick(50.9));
    assert!(schedule.tick(51.0));
}

#[test]
fn spawn_count_never_exceeds_elapsed_whole_seconds() {
    let mut schedule = SpawnSchedule::new();
    let mut elapsed = 0.0;
    for frame in 0..1000 {
        // Uneven frame pacing between 1 ms and 230 ms.
        elapsed += 0.001 + 0.229 * ((frame % 7) as f32 / 6.0);
        schedule.tick(elapsed);
        assert!(schedule.spawned() <= elapsed as u32);
    }
}

// ============================================================================
// Capacity
// ============================================================================

#[test]
fn object_count_is_capped_at_the_grid_size() {
    let mut schedule = SpawnSchedule::new();
    for _ in 0..1000 {
        schedule.tick(10_000.0);
    }
    assert_eq!(schedule.spawned(), CELL_COUNT);
    assert!(schedule.is_full());
    assert!(!schedule.tick(20_000.0));
    assert_eq!(schedule.spawned(), CELL_COUNT);
}

#[test]
fn count_after_n_eligible_frames_is_min_of_n_and_capacity() {
    // With elapsed time always far ahead, every frame spawns exactly one
    // object until the grid is full.
    let mut schedule = SpawnSchedule::new();
    for n in 1..=200u32 {
        schedule.tick(1_000_000.0);
        assert_eq!(schedule.spawned(), n.min(CELL_COUNT));
    }
}
