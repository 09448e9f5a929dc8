// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_constants_are_within_reasonable_bounds() {
    // The camera sits in front of the scene looking down -Z
    assert!(CAMERA_Z > 0.0);

    // Field of view must be a usable perspective angle
    assert!(CAMERA_FOVY_DEG > 0.0 && CAMERA_FOVY_DEG < 180.0);

    // Clip planes must be ordered and strictly positive
    assert!(CAMERA_ZNEAR > 0.0);
    assert!(CAMERA_ZFAR > CAMERA_ZNEAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn sprite_constants_draw_small_translucent_quads() {
    assert!(PARTICLE_SIZE > 0.0);
    assert!(PARTICLE_OPACITY > 0.0 && PARTICLE_OPACITY < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn knot_constants_describe_a_valid_tube() {
    assert!(KNOT_RADIUS > 0.0);
    assert!(KNOT_TUBE > 0.0);
    // The tube must not swallow the hole of the knot
    assert!(KNOT_TUBE < KNOT_RADIUS);

    // Enough segments for triangulation on both axes
    assert!(KNOT_TUBULAR_SEGMENTS >= 3);
    assert!(KNOT_RADIAL_SEGMENTS >= 3);

    // Zero windings would degenerate the curve to a circle or a point
    assert!(KNOT_P >= 1);
    assert!(KNOT_Q >= 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn knot_gradient_endpoints_are_valid_colors() {
    for c in KNOT_COLOR_BOTTOM {
        assert!((0.0..=1.0).contains(&c));
    }
    for c in KNOT_COLOR_TOP {
        assert!((0.0..=1.0).contains(&c));
    }
    assert_ne!(KNOT_COLOR_BOTTOM, KNOT_COLOR_TOP);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn page_wiring_constants_are_usable() {
    assert!(!CANVAS_ELEMENT_ID.is_empty());
    assert!(CONTACT_BUTTON_SELECTOR.starts_with('.'));
    assert!(PROXIMITY_RANGE_PX > 0.0);
}

#[test]
fn knot_fits_well_inside_the_far_clip_plane() {
    // Worst-case vertex reach of the centerline plus the tube
    let reach = 1.5 * KNOT_RADIUS + KNOT_TUBE;
    assert!(reach + CAMERA_Z < CAMERA_ZFAR);
}
