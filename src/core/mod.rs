pub mod cancel;
pub mod constants;
pub mod field;
pub mod knot;
pub mod proximity;
pub mod scene;

pub use cancel::*;
pub use constants::*;
pub use field::*;
pub use knot::*;
pub use proximity::*;
pub use scene::*;

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
pub static KNOT_WGSL: &str = include_str!("../../shaders/knot.wgsl");
