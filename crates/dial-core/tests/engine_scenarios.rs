use dial_core::dynamics::step::{crosses_zero, next_position, split_distance, zero_delta};
use dial_core::{DialConfig, DialEngine, Direction, ReduceMode, Rotation};

fn engine_at(start: u8) -> DialEngine {
    DialEngine::new(DialConfig {
        start,
        reduce_mode: ReduceMode::Full,
    })
    .unwrap()
}

fn one(start: u8, rot: Rotation) -> (u8, u32) {
    let mut e = engine_at(start);
    let out = e.apply(rot);
    assert_eq!(out.position, e.position());
    assert_eq!(out.delta, e.zero_count());
    (e.position(), e.zero_count())
}

#[test]
fn default_starts_at_50() {
    let e = DialEngine::default();
    assert_eq!(e.position(), 50);
    assert_eq!(e.zero_count(), 0);
    assert_eq!(e.reduce_mode(), ReduceMode::Full);
}

#[test]
fn right_landing_exactly_on_zero() {
    assert_eq!(one(50, Rotation::right(50)), (0, 1));
}

#[test]
fn one_full_wrap_from_zero() {
    assert_eq!(one(0, Rotation::right(100)), (0, 1));
}

#[test]
fn departing_zero_counts_only_whole_wraps() {
    assert_eq!(one(0, Rotation::right(250)), (50, 2));
    assert_eq!(one(0, Rotation::left(250)), (50, 2));
    assert_eq!(one(0, Rotation::left(99)), (1, 0));
}

#[test]
fn left_landing_on_zero_counts() {
    assert_eq!(one(1, Rotation::left(1)), (0, 1));
}

#[test]
fn right_step_over_99() {
    assert_eq!(one(99, Rotation::right(1)), (0, 1));
}

#[test]
fn zero_distance_is_a_no_op() {
    assert_eq!(one(0, Rotation::left(0)), (0, 0));
    assert_eq!(one(37, Rotation::right(0)), (37, 0));
}

#[test]
fn left_past_zero_with_wraps() {
    // 5 -> 0 (1), then 1000 more = 10 wraps, then 5 more: lands on 95.
    assert_eq!(one(5, Rotation::left(1010)), (95, 11));
}

#[test]
fn sample_sequence() {
    let rots = [
        Rotation::left(68),
        Rotation::left(30),
        Rotation::right(48),
        Rotation::left(5),
        Rotation::right(60),
        Rotation::left(55),
        Rotation::left(1),
        Rotation::left(99),
        Rotation::right(14),
        Rotation::left(82),
    ];
    let mut e = DialEngine::default();
    for r in rots {
        e.apply(r);
    }
    assert_eq!(e.position(), 32);
    assert_eq!(e.zero_count(), 6);
}

#[test]
fn reset_restores_start_and_clears_counter() {
    let mut e = engine_at(7);
    e.apply(Rotation::right(1_000));
    assert_ne!(e.zero_count(), 0);
    e.reset();
    assert_eq!(e.position(), 7);
    assert_eq!(e.zero_count(), 0);
}

#[test]
fn start_out_of_range_is_rejected() {
    let err = DialEngine::new(DialConfig {
        start: 100,
        reduce_mode: ReduceMode::Full,
    })
    .unwrap_err();
    assert!(format!("{err}").contains("out of range"));
}

#[test]
fn full_mode_reduces_entire_distance() {
    assert_eq!(split_distance(16_384, ReduceMode::Full), (163, 84));
    assert_eq!(split_distance(u32::MAX, ReduceMode::Full), (42_949_672, 95));
    assert_eq!(split_distance(12_799, ReduceMode::Full), (127, 99));
    assert_eq!(split_distance(12_800, ReduceMode::Full), (128, 0));
}

#[test]
fn low_bits_mode_reduces_truncated_distance() {
    // 16384 & 0x3FFF == 0, but the wraps still cover the full distance.
    assert_eq!(split_distance(16_384, ReduceMode::LowBits), (163, 0));
    assert_eq!(split_distance(16_383, ReduceMode::LowBits), (163, 83));

    let mut e = DialEngine::new(DialConfig {
        start: 50,
        reduce_mode: ReduceMode::LowBits,
    })
    .unwrap();
    e.apply(Rotation::right(16_384));
    assert_eq!((e.position(), e.zero_count()), (50, 163));

    assert_eq!(one(50, Rotation::right(16_384)), (34, 164));
}

#[test]
fn crossing_rules() {
    assert!(!crosses_zero(10, 0, Direction::Left));
    assert!(crosses_zero(10, 10, Direction::Left));
    assert!(!crosses_zero(10, 9, Direction::Left));
    assert!(crosses_zero(90, 10, Direction::Right));
    assert!(!crosses_zero(90, 9, Direction::Right));

    // Starting at zero ignores the crossing flag.
    assert_eq!(zero_delta(0, 3, true), 3);
    assert_eq!(zero_delta(4, 3, true), 4);
    assert_eq!(zero_delta(4, 3, false), 3);
}

#[test]
fn next_position_wraps_once() {
    assert_eq!(next_position(99, 99, Direction::Right), 98);
    assert_eq!(next_position(0, 99, Direction::Left), 1);
    assert_eq!(next_position(0, 0, Direction::Left), 0);
    assert_eq!(next_position(42, 0, Direction::Right), 42);
}
