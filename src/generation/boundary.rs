//! Water disc, outer wall and under-skirt sized from the skirt radius.

use glam::Vec3;

use crate::mesh::{self, Mesh};

/// Segments used for every round boundary shape
pub const ROUND_SEGMENTS: u32 = 50;
/// Water thickness and elevation, as a fraction of max height
pub const WATER_FRACTION: f32 = 0.05;
/// Wall height as a fraction of max height
pub const WALL_FRACTION: f32 = 0.2;
/// Gap between the skirt radius and the wall
pub const WALL_CLEARANCE: f32 = 0.1;
/// Top radius of the under-skirt frustum
pub const SKIRT_TOP_RADIUS: f32 = 1.0;

/// Thin disc centered at `y = max_height × 0.05`
pub fn water_disc(skirt_radius: f32, max_height: f32) -> Mesh {
    let thickness = max_height * WATER_FRACTION;
    mesh::frustum(skirt_radius, skirt_radius, thickness, ROUND_SEGMENTS, false)
        .translated(Vec3::Y * thickness)
}

/// Open cylinder standing on `y = 0` just outside the skirt radius
pub fn outer_wall(skirt_radius: f32, max_height: f32) -> Mesh {
    let radius = skirt_radius + WALL_CLEARANCE;
    let height = max_height * WALL_FRACTION;
    mesh::frustum(radius, radius, height, ROUND_SEGMENTS, true).translated(Vec3::Y * height * 0.5)
}

/// How far the skirt reaches below `y = 0`
pub fn skirt_depth(max_height: f32) -> f32 {
    (max_height * 0.25).max(1.0)
}

/// Open frustum hanging below the terrain: narrow at `y = 0`, flaring out
/// to the wall radius at the bottom
pub fn inner_skirt(skirt_radius: f32, max_height: f32) -> Mesh {
    let depth = skirt_depth(max_height);
    mesh::frustum(
        SKIRT_TOP_RADIUS,
        skirt_radius + WALL_CLEARANCE,
        depth,
        ROUND_SEGMENTS,
        true,
    )
    .translated(Vec3::Y * -depth * 0.5)
}
