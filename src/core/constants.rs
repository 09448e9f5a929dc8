// Scene composition constants shared by the renderer and the frame loop.

// Particle sprites
pub const PARTICLE_SIZE: f32 = 0.025; // world-space side of each camera-facing quad
pub const PARTICLE_OPACITY: f32 = 0.75;

// Torus knot build parameters
pub const KNOT_RADIUS: f32 = 0.7;
pub const KNOT_TUBE: f32 = 0.3;
pub const KNOT_TUBULAR_SEGMENTS: usize = 100;
pub const KNOT_RADIAL_SEGMENTS: usize = 16;
pub const KNOT_P: u32 = 2; // windings around the torus axis of symmetry
pub const KNOT_Q: u32 = 3; // windings around the torus interior circle

// Knot gradient endpoints, mixed along the tube's v coordinate
pub const KNOT_COLOR_BOTTOM: [f32; 3] = [1.0, 0.0, 0.0]; // red at v = 0
pub const KNOT_COLOR_TOP: [f32; 3] = [0.0, 0.0, 1.0]; // blue at v = 1
