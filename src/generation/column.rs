//! Terrain column construction.

use glam::Vec3;

use crate::mesh::{self, Mesh};
use crate::terrain::{Band, Cell};

/// Columns are never built shorter than this, even over near-zero terrain.
pub const MIN_COLUMN_HEIGHT: f32 = 1.0;

/// A built column, already positioned in world space
#[derive(Clone, Debug)]
pub struct Column {
    pub band: Band,
    /// Surface point at the center of the column's top face
    pub top: Vec3,
    pub mesh: Mesh,
}

/// Turns sampled cells into hex prisms
#[derive(Clone, Copy, Debug)]
pub struct ColumnBuilder {
    max_height: f32,
}

impl ColumnBuilder {
    pub fn new(max_height: f32) -> Self {
        Self { max_height }
    }

    /// Prism height for a world height
    pub fn column_height(world_height: f32) -> f32 {
        world_height.max(MIN_COLUMN_HEIGHT)
    }

    /// Build the column for `cell`. Classification uses the unclamped height.
    pub fn build(&self, cell: &Cell) -> Column {
        let band = cell.band(self.max_height);
        let height = Self::column_height(cell.world_height);
        let base = Vec3::new(cell.world_pos.x, 0.0, cell.world_pos.y);

        Column {
            band,
            top: base + Vec3::Y * height,
            mesh: mesh::hex_prism(height).translated(base),
        }
    }
}
