// Host-side tests for the frame-loop cancel token.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod cancel {
    include!("../src/core/cancel.rs");
}

use cancel::*;

#[test]
fn fresh_token_is_not_cancelled() {
    let token = CancelToken::new();
    assert!(!token.is_cancelled());
}

#[test]
fn clones_share_one_flag() {
    let token = CancelToken::new();
    let handle = token.clone();
    handle.cancel();
    assert!(token.is_cancelled());
    assert!(handle.is_cancelled());
}

#[test]
fn cancellation_is_sticky() {
    let token = CancelToken::new();
    token.cancel();
    token.cancel();
    assert!(token.is_cancelled());
}

#[test]
fn loop_driven_by_token_stops_at_cancellation() {
    // Same shape as the frame loop: check the token before doing the
    // frame's work, cancel from a clone held elsewhere.
    let token = CancelToken::new();
    let stopper = token.clone();
    let mut frames = 0;
    for _ in 0..100 {
        if token.is_cancelled() {
            break;
        }
        frames += 1;
        if frames == 7 {
            stopper.cancel();
        }
    }
    assert_eq!(frames, 7);
}
