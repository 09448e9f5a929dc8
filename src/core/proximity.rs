// Pointer-proximity border emphasis for the contact button.

/// Border opacity at or beyond the effect range.
pub const FLOOR_OPACITY: f32 = 0.25;
/// Border opacity just inside the range boundary.
pub const EDGE_OPACITY: f32 = 0.5;
/// Opacity gained linearly as the pointer closes on the element center.
pub const CENTER_OPACITY_SPAN: f32 = 0.5;

/// Map pointer distance from an element center to a border opacity.
///
/// Inside `range` the opacity rises linearly from 0.5 at the boundary to 1.0
/// at the center. At `range` and beyond it is a flat 0.25; the step at the
/// boundary is part of the behavior, not smoothed.
#[inline]
pub fn border_emphasis(pointer_x: f32, pointer_y: f32, center_x: f32, center_y: f32, range: f32) -> f32 {
    let dx = pointer_x - center_x;
    let dy = pointer_y - center_y;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance < range {
        EDGE_OPACITY + (1.0 - distance / range) * CENTER_OPACITY_SPAN
    } else {
        FLOOR_OPACITY
    }
}

/// CSS color string for the button border at `opacity`.
#[inline]
pub fn border_color_css(opacity: f32) -> String {
    format!("rgba(255, 255, 255, {})", opacity)
}
