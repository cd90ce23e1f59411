//! World build configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::atmosphere::CloudConfig;
use crate::core::{Error, Result};
use crate::terrain::WorldShape;

/// Inputs for one world build. Replacing the config means a full rebuild.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Grid span; circular worlds keep cells within `radius / 2` of the origin.
    pub radius: f32,
    /// Height of a column whose normalized height is 1.
    pub max_height: f32,
    #[serde(default)]
    pub shape: WorldShape,
    /// Fixed seed for reproducible builds. `None` reseeds from entropy every build.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub clouds: CloudConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            radius: 40.0,
            max_height: 10.0,
            shape: WorldShape::Circle,
            seed: None,
            clouds: CloudConfig::default(),
        }
    }
}

impl WorldConfig {
    pub fn new(radius: f32, max_height: f32, shape: WorldShape) -> Self {
        Self {
            radius,
            max_height,
            shape,
            ..Default::default()
        }
    }

    /// Builder-style seed override
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configs that would produce degenerate geometry
    pub fn validate(&self) -> Result<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        if !(self.max_height.is_finite() && self.max_height > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "max_height must be positive, got {}",
                self.max_height
            )));
        }

        let clouds = &self.clouds;
        if !(clouds.drift_speed.is_finite() && clouds.drift_speed >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "cloud drift_speed must be non-negative, got {}",
                clouds.drift_speed
            )));
        }
        if !(clouds.recycle_fraction > 0.0 && clouds.recycle_fraction <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "cloud recycle_fraction must be in (0, 1], got {}",
                clouds.recycle_fraction
            )));
        }
        if !(clouds.altitude_min.is_finite()
            && clouds.altitude_max.is_finite()
            && clouds.altitude_min <= clouds.altitude_max)
        {
            return Err(Error::InvalidConfig(format!(
                "cloud altitude range {}..{} is empty",
                clouds.altitude_min, clouds.altitude_max
            )));
        }
        if clouds.altitude_min < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "cloud altitude_min must not be below max_height, got {}",
                clouds.altitude_min
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
