// Host-side tests for the button border proximity effect.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod proximity {
    include!("../src/core/proximity.rs");
}

use proximity::*;

#[test]
fn pointer_on_center_gives_full_opacity() {
    let opacity = border_emphasis(400.0, 300.0, 400.0, 300.0, 200.0);
    assert_eq!(opacity, 1.0);
}

#[test]
fn halfway_inside_gives_three_quarters() {
    // 100px from center with a 200px range
    let opacity = border_emphasis(500.0, 300.0, 400.0, 300.0, 200.0);
    assert!((opacity - 0.75).abs() < 1e-6);
}

#[test]
fn exactly_at_range_falls_to_the_floor() {
    // The boundary is exclusive: distance == range is already outside.
    let opacity = border_emphasis(600.0, 300.0, 400.0, 300.0, 200.0);
    assert_eq!(opacity, FLOOR_OPACITY);
}

#[test]
fn far_away_stays_at_the_floor() {
    let opacity = border_emphasis(0.0, 0.0, 4000.0, 3000.0, 200.0);
    assert_eq!(opacity, FLOOR_OPACITY);
}

#[test]
fn diagonal_distance_uses_the_euclidean_metric() {
    // A 120/160/200 right triangle puts the pointer exactly at range.
    let at_range = border_emphasis(520.0, 460.0, 400.0, 300.0, 200.0);
    assert_eq!(at_range, FLOOR_OPACITY);

    let just_inside = border_emphasis(519.0, 459.0, 400.0, 300.0, 200.0);
    assert!(just_inside > EDGE_OPACITY);
}

#[test]
fn opacity_never_increases_walking_away_from_center() {
    let range = 200.0;
    let mut prev = border_emphasis(400.0, 300.0, 400.0, 300.0, range);
    for step in 1..=300 {
        let x = 400.0 + step as f32 * 1.5;
        let opacity = border_emphasis(x, 300.0, 400.0, 300.0, range);
        assert!(
            opacity <= prev + 1e-6,
            "opacity rose from {prev} to {opacity} at step {step}"
        );
        prev = opacity;
    }
}

#[test]
fn opacity_stays_between_floor_and_one() {
    let range = 200.0;
    for i in 0..400 {
        let x = 100.0 + i as f32 * 2.0;
        let opacity = border_emphasis(x, 50.0, 100.0, 50.0, range);
        assert!(opacity >= FLOOR_OPACITY);
        assert!(opacity <= 1.0 + 1e-6);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacity_constants_compose_to_full_and_floor() {
    assert!(FLOOR_OPACITY < EDGE_OPACITY);
    assert!((EDGE_OPACITY + CENTER_OPACITY_SPAN - 1.0).abs() < 1e-6);
}

#[test]
fn css_string_formats_the_landmark_opacities() {
    assert_eq!(border_color_css(1.0), "rgba(255, 255, 255, 1)");
    assert_eq!(border_color_css(0.75), "rgba(255, 255, 255, 0.75)");
    assert_eq!(border_color_css(0.25), "rgba(255, 255, 255, 0.25)");
}

#[test]
fn sweep_from_center_produces_the_expected_css_strings() {
    // Button centered at (640, 360), pointer walking out to the right.
    let (cx, cy) = (640.0, 360.0);
    let range = 200.0;

    let on_center = border_color_css(border_emphasis(cx, cy, cx, cy, range));
    assert_eq!(on_center, "rgba(255, 255, 255, 1)");

    let halfway = border_color_css(border_emphasis(cx + 100.0, cy, cx, cy, range));
    assert_eq!(halfway, "rgba(255, 255, 255, 0.75)");

    let outside = border_color_css(border_emphasis(cx + 350.0, cy, cx, cy, range));
    assert_eq!(outside, "rgba(255, 255, 255, 0.25)");
}
