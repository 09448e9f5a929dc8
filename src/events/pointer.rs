use crate::input::{self, PointerState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer in normalized window coordinates.
///
/// Listens on the window, not the canvas, so the scene keeps rotating while
/// the pointer is over other page content.
pub fn wire_pointer_tracking(pointer: Rc<RefCell<PointerState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if let Some(window) = web::window() {
            let [nx, ny] = input::pointer_window_norm(&ev, &window);
            let mut p = pointer.borrow_mut();
            p.nx = nx;
            p.ny = ny;
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
