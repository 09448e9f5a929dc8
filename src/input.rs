use web_sys as web;

/// Last-seen pointer position, normalized to `[-1, 1]` on both axes.
/// Written by the pointer listener, read once per frame.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub nx: f32,
    pub ny: f32,
}

/// Map a client-space coordinate to `[-1, 1]` across `extent`. Zero or
/// negative extents (hidden window edge cases) map to the center.
#[inline]
pub fn normalized_coord(client: f32, extent: f32) -> f32 {
    if extent > 0.0 {
        (client / extent) * 2.0 - 1.0
    } else {
        0.0
    }
}

/// Normalized pointer position from an event, relative to the window so the
/// scene keeps responding when the pointer is off the canvas.
#[inline]
pub fn pointer_window_norm(ev: &web::PointerEvent, window: &web::Window) -> [f32; 2] {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    [
        normalized_coord(ev.client_x() as f32, w),
        normalized_coord(ev.client_y() as f32, h),
    ]
}
