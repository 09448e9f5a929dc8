// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn normalized_coord_spans_minus_one_to_one() {
    assert_eq!(normalized_coord(0.0, 800.0), -1.0);
    assert_eq!(normalized_coord(400.0, 800.0), 0.0);
    assert_eq!(normalized_coord(800.0, 800.0), 1.0);
}

#[test]
fn normalized_coord_is_monotonic_across_the_extent() {
    let extent = 1024.0;
    let mut prev = normalized_coord(-50.0, extent);
    for px in (0..=1024).step_by(16) {
        let n = normalized_coord(px as f32, extent);
        assert!(n > prev, "not increasing at {px}px");
        prev = n;
    }
}

#[test]
fn normalized_coord_handles_degenerate_extents() {
    // A zero-sized window maps everything to the center.
    assert_eq!(normalized_coord(123.0, 0.0), 0.0);
    assert_eq!(normalized_coord(123.0, -5.0), 0.0);
}

#[test]
fn coordinates_outside_the_window_keep_scaling() {
    assert!(normalized_coord(1000.0, 800.0) > 1.0);
    assert!(normalized_coord(-100.0, 800.0) < -1.0);
}

#[test]
fn pointer_state_defaults_to_center() {
    let state = PointerState::default();
    assert_eq!(state.nx, 0.0);
    assert_eq!(state.ny, 0.0);
}
