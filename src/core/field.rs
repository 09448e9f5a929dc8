use rand::prelude::*;

/// Full width of the per-frame color perturbation.
pub const COLOR_JITTER_DELTA: f32 = 0.01;

#[derive(Clone, Copy, Debug)]
pub struct FieldParams {
    pub count: usize,
    /// Side length of the cube positions are drawn from.
    pub spread: f32,
    /// Ceiling for every color channel, at generation and forever after.
    pub max_gray: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            count: 2500,
            spread: 10.0,
            max_gray: 0.3,
        }
    }
}

/// A fixed-size cloud of dim particles.
///
/// Positions are assigned once and never move; the whole field is transformed
/// as a unit each frame. Colors random-walk inside `[0, max_gray]` and
/// saturate at the bounds rather than reflect.
pub struct ParticleField {
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
    max_gray: f32,
    colors_dirty: bool,
}

impl ParticleField {
    /// Draw `params.count` particles from `rng`. Position components are
    /// uniform over `[-spread/2, spread/2)`, color channels uniform over
    /// `[0, max_gray)`, every channel independent.
    pub fn generate(params: &FieldParams, rng: &mut impl Rng) -> Self {
        let mut positions = Vec::with_capacity(params.count);
        let mut colors = Vec::with_capacity(params.count);
        for _ in 0..params.count {
            positions.push([
                (rng.gen::<f32>() - 0.5) * params.spread,
                (rng.gen::<f32>() - 0.5) * params.spread,
                (rng.gen::<f32>() - 0.5) * params.spread,
            ]);
            colors.push([
                rng.gen::<f32>() * params.max_gray,
                rng.gen::<f32>() * params.max_gray,
                rng.gen::<f32>() * params.max_gray,
            ]);
        }
        Self {
            positions,
            colors,
            max_gray: params.max_gray,
            colors_dirty: false,
        }
    }

    /// One step of the bounded color random walk: each channel moves by an
    /// independent uniform draw from `[-DELTA/2, DELTA/2]` and clamps into
    /// `[0, max_gray]`. Marks the colors dirty.
    pub fn jitter_colors(&mut self, rng: &mut impl Rng) {
        for color in &mut self.colors {
            for channel in color.iter_mut() {
                let adjustment = COLOR_JITTER_DELTA * (rng.gen::<f32>() - 0.5);
                *channel = (*channel + adjustment).clamp(0.0, self.max_gray);
            }
        }
        self.colors_dirty = true;
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    pub fn max_gray(&self) -> f32 {
        self.max_gray
    }

    /// True when the colors changed since the last call. Resets the flag.
    pub fn take_colors_dirty(&mut self) -> bool {
        std::mem::take(&mut self.colors_dirty)
    }
}
