/// Page wiring and camera tuning constants.
///
/// Scene composition values live in `core::constants`; the values here only
/// concern how the page is hooked up and viewed.
// Element lookup
pub const CANVAS_ELEMENT_ID: &str = "scene-canvas";
pub const CONTACT_BUTTON_SELECTOR: &str = ".contact-btn";

// Proximity effect radius around the contact button (CSS pixels)
pub const PROXIMITY_RANGE_PX: f32 = 200.0;

// Camera
pub const CAMERA_Z: f32 = 3.0;
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
