//! Coherent-noise height field sampled on the hex grid

use noise::{NoiseFn, Simplex};

/// Grid-to-noise-space scale
pub const NOISE_SCALE: f64 = 0.1;

/// Exponent applied to the normalized height. Values above 1 push the
/// distribution toward low ground so tall peaks stay rare.
pub const HEIGHT_EXPONENT: f32 = 1.5;

/// Simplex noise rescaled to a normalized height in [0, 1]
pub struct NoiseField {
    seed: u32,
    noise: Simplex,
}

impl NoiseField {
    /// Create a noise field with an explicit seed
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            noise: Simplex::new(seed),
        }
    }

    /// Create a noise field from OS entropy; two calls give different terrain
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Normalized height at a grid coordinate
    pub fn sample(&self, grid_x: i32, grid_z: i32) -> f32 {
        let n = self.noise.get([
            grid_x as f64 * NOISE_SCALE,
            grid_z as f64 * NOISE_SCALE,
        ]);

        // [-1, 1] -> [0, 1]; simplex can overshoot slightly
        let normalized = ((n + 1.0) * 0.5).clamp(0.0, 1.0) as f32;
        normalized.powf(HEIGHT_EXPONENT)
    }
}
