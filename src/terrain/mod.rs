//! Procedural terrain: noise, grid layout and height bands

pub mod noise_field;
pub use noise_field::NoiseField;

pub mod grid;
pub use grid::{GridCell, GridLayout, WorldShape};

pub mod band;
pub use band::Band;

use glam::Vec2;

/// A grid cell after its height has been sampled
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub grid_x: i32,
    pub grid_z: i32,
    pub world_pos: Vec2,
    /// Curved noise value in [0, 1]
    pub normalized_height: f32,
    /// `normalized_height × max_height`
    pub world_height: f32,
}

impl Cell {
    /// Sample the noise field for a grid cell and scale to world height
    pub fn sample(grid: GridCell, noise: &NoiseField, max_height: f32) -> Self {
        let normalized_height = noise.sample(grid.grid_x, grid.grid_z);
        Self {
            grid_x: grid.grid_x,
            grid_z: grid.grid_z,
            world_pos: grid.world_pos,
            normalized_height,
            world_height: normalized_height * max_height,
        }
    }

    pub fn band(&self, max_height: f32) -> Band {
        Band::classify(self.world_height, max_height)
    }
}
