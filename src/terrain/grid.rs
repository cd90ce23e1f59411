//! Staggered hex grid enumeration

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Horizontal distance between neighbouring column centers
pub const CELL_WIDTH: f32 = 1.77;
/// Vertical distance between rows (about 1.5 × the hex radius)
pub const ROW_SPACING: f32 = 1.535;
/// Margin added beyond the playable radius for water and walls
pub const SKIRT_MARGIN: f32 = 4.0;

/// Footprint of the world
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorldShape {
    #[default]
    Circle,
    Rectangle,
}

/// One enumerated grid cell before sampling
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    pub grid_x: i32,
    pub grid_z: i32,
    /// Position on the XZ plane
    pub world_pos: Vec2,
}

/// Map a grid coordinate to its plane position; odd rows shift half a cell
pub fn tile_to_position(grid_x: i32, grid_z: i32) -> Vec2 {
    let stagger = if grid_z.rem_euclid(2) == 1 { 0.5 } else { 0.0 };
    Vec2::new(
        (grid_x as f32 + stagger) * CELL_WIDTH,
        grid_z as f32 * ROW_SPACING,
    )
}

/// Enumerates the cells of a circular or rectangular world
#[derive(Clone, Copy, Debug)]
pub struct GridLayout {
    radius: f32,
    shape: WorldShape,
}

impl GridLayout {
    pub fn new(radius: f32, shape: WorldShape) -> Self {
        Self { radius, shape }
    }

    /// Radius used to size the water disc, wall and skirt
    pub fn skirt_radius(&self) -> f32 {
        let base = self.radius / 2.0 + SKIRT_MARGIN;
        match self.shape {
            WorldShape::Circle => base,
            WorldShape::Rectangle => base * 2.0,
        }
    }

    /// Half-extents on the XZ plane of the area the cells cover.
    ///
    /// Circles stay within `radius / 2` of the origin. Rectangles reach
    /// half a cell further on x because of the odd-row stagger.
    pub fn footprint_half_extents(&self) -> Vec2 {
        match self.shape {
            WorldShape::Circle => Vec2::splat(self.radius / 2.0),
            WorldShape::Rectangle => {
                let bound = self.grid_bound() as f32;
                Vec2::new((bound + 0.5) * CELL_WIDTH, bound * ROW_SPACING)
            }
        }
    }

    /// Grid coordinate bound (inclusive) for the current shape
    fn grid_bound(&self) -> i32 {
        match self.shape {
            WorldShape::Circle => self.radius.floor() as i32,
            WorldShape::Rectangle => (self.radius / 2.0).floor() as i32,
        }
    }

    /// Lazily enumerate cells, row by row.
    ///
    /// Circles walk `[-radius, radius]²` and drop anything farther than
    /// `radius / 2` from the origin. Rectangles walk `[-radius/2, radius/2]²`
    /// and keep everything.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + use<> {
        let bound = self.grid_bound();
        let max_dist = self.radius / 2.0;
        let shape = self.shape;

        (-bound..=bound)
            .flat_map(move |grid_z| (-bound..=bound).map(move |grid_x| (grid_x, grid_z)))
            .map(|(grid_x, grid_z)| GridCell {
                grid_x,
                grid_z,
                world_pos: tile_to_position(grid_x, grid_z),
            })
            .filter(move |cell| match shape {
                WorldShape::Circle => cell.world_pos.length() <= max_dist,
                WorldShape::Rectangle => true,
            })
    }
}
