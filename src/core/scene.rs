use glam::{Mat4, Vec2, Vec3};
use rand::prelude::*;

use super::field::ParticleField;

// Pointer-driven rotation tuning
pub const ROTATION_GAIN: f32 = 0.02; // radians per frame at full pointer deflection
pub const FIELD_ROTATION_DAMPING: f32 = 0.4; // the field trails the knot by this factor

// Whole-field wiggle
pub const WIGGLE_OMEGA: f32 = 1.0; // rad/s
pub const WIGGLE_AMPLITUDE: f32 = 0.1; // world units

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Accumulated rotation angles about X and Y, radians. Grows without bound;
/// the rotation matrices built from it fold the excess.
#[derive(Clone, Copy, Debug, Default)]
pub struct Spin {
    pub x: f32,
    pub y: f32,
}

/// What the per-frame update writes and the renderer reads.
#[derive(Clone, Debug, Default)]
pub struct SceneState {
    pub field_spin: Spin,
    pub knot_spin: Spin,
    pub wiggle: Vec2,
}

impl SceneState {
    /// Advance one display-refresh step.
    ///
    /// `pointer_norm` is the pointer position normalized to `[-1, 1]` on both
    /// axes; `elapsed_sec` is wall-clock time since startup. Vertical pointer
    /// deflection spins the scene about X, horizontal about Y. The field gets
    /// the damped increment, the knot the full one. Colors take one step of
    /// their bounded random walk.
    pub fn advance(
        &mut self,
        field: &mut ParticleField,
        pointer_norm: [f32; 2],
        elapsed_sec: f32,
        rng: &mut impl Rng,
    ) {
        let dx = pointer_norm[1] * ROTATION_GAIN;
        let dy = pointer_norm[0] * ROTATION_GAIN;
        self.field_spin.x += dx * FIELD_ROTATION_DAMPING;
        self.field_spin.y += dy * FIELD_ROTATION_DAMPING;
        self.knot_spin.x += dx;
        self.knot_spin.y += dy;

        self.wiggle = wiggle_offset(elapsed_sec);

        field.jitter_colors(rng);
    }

    /// Model matrix for the particle field: wiggle translation, then spin.
    pub fn field_model(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(self.wiggle.x, self.wiggle.y, 0.0))
            * Mat4::from_rotation_x(self.field_spin.x)
            * Mat4::from_rotation_y(self.field_spin.y)
    }

    /// Model matrix for the torus knot: spin only, no wiggle.
    pub fn knot_model(&self) -> Mat4 {
        Mat4::from_rotation_x(self.knot_spin.x) * Mat4::from_rotation_y(self.knot_spin.y)
    }
}

/// Whole-field wiggle offset at `t` seconds. Closed form, so it is exactly
/// periodic with period `2*PI/WIGGLE_OMEGA` and never drifts.
#[inline]
pub fn wiggle_offset(t_sec: f32) -> Vec2 {
    Vec2::new(
        (t_sec * WIGGLE_OMEGA).sin() * WIGGLE_AMPLITUDE,
        (t_sec * WIGGLE_OMEGA).cos() * WIGGLE_AMPLITUDE,
    )
}
