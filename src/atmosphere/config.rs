//! Cloud field configuration.

use serde::{Deserialize, Serialize};

/// Parameters for the drifting cloud pool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    /// Hard cap on the pool size.
    pub max_clouds: usize,
    /// Drift speed along +X in world units per second.
    pub drift_speed: f32,
    /// Fraction of the footprint half-extent at which clouds recycle.
    pub recycle_fraction: f32,
    /// Altitude range above the world's max height.
    pub altitude_min: f32,
    pub altitude_max: f32,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            max_clouds: 40,
            drift_speed: 0.5,
            recycle_fraction: 0.8,
            altitude_min: 2.0,
            altitude_max: 8.0,
        }
    }
}
