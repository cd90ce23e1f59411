//! Rocks and trees placed on top of terrain columns.
//!
//! Each rule ties the band a column was classified into (`origin`) to the
//! band whose batch the decoration is drawn with (`render`). The two differ
//! for dirt-band trees, which join the grass batch, and sand-band rocks,
//! which join the stone batch.

use glam::{Vec2, Vec3};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::mesh::{self, Mesh};
use crate::terrain::{Band, WorldShape};

/// What a rule places
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DecorationKind {
    Rock,
    Tree,
}

/// One row of the decoration table
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorationRule {
    /// Band of the column being decorated
    pub origin: Band,
    /// Band batch the decoration is merged into
    pub render: Band,
    pub kind: DecorationKind,
    /// Probability per column in [0, 1]
    pub chance: f32,
}

pub const DEFAULT_RULES: [DecorationRule; 4] = [
    DecorationRule { origin: Band::Peak, render: Band::Peak, kind: DecorationKind::Rock, chance: 0.20 },
    DecorationRule { origin: Band::Upper, render: Band::Mid, kind: DecorationKind::Tree, chance: 0.05 },
    DecorationRule { origin: Band::Mid, render: Band::Mid, kind: DecorationKind::Tree, chance: 0.03 },
    DecorationRule { origin: Band::Lower, render: Band::Peak, kind: DecorationKind::Rock, chance: 0.20 },
];

/// A placed decoration, positioned in world space
#[derive(Clone, Debug)]
pub struct Decoration {
    pub origin_band: Band,
    pub render_band: Band,
    pub kind: DecorationKind,
    pub mesh: Mesh,
}

/// Applies the rule table to columns
#[derive(Clone, Debug)]
pub struct DecorationGenerator {
    rules: Vec<DecorationRule>,
}

impl Default for DecorationGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.to_vec())
    }
}

impl DecorationGenerator {
    pub fn new(rules: Vec<DecorationRule>) -> Self {
        Self { rules }
    }

    /// First rule whose origin is `band`
    pub fn rule_for(&self, band: Band) -> Option<&DecorationRule> {
        self.rules.iter().find(|rule| rule.origin == band)
    }

    /// Roll the rule for `band` once and build the decoration on success.
    ///
    /// `top` is the center of the column's top face. Bands without a rule
    /// consume no random draws.
    pub fn decorate(&self, band: Band, top: Vec3, rng: &mut ChaCha8Rng) -> Option<Decoration> {
        let rule = self.rule_for(band)?;
        if rng.r#gen::<f32>() >= rule.chance {
            return None;
        }

        let mesh = match rule.kind {
            DecorationKind::Rock => rock(rng, top),
            DecorationKind::Tree => tree_cluster(rng, top),
        };
        Some(Decoration {
            origin_band: rule.origin,
            render_band: rule.render,
            kind: rule.kind,
            mesh,
        })
    }
}

/// Low-poly boulder half sunk into the column top
pub fn rock(rng: &mut ChaCha8Rng, top: Vec3) -> Mesh {
    let radius = rng.gen_range(0.1..0.4);
    let offset = Vec3::new(rng.gen_range(0.0..0.4), 0.0, rng.gen_range(0.0..0.4));
    mesh::sphere(radius, 7, 7).translated(top + offset)
}

/// (bottom radius, height scale, base lift as a fraction of the tree height)
const TREE_TIERS: [(f32, f32, f32); 3] = [(1.5, 1.0, 0.0), (1.15, 0.8, 0.6), (0.8, 0.6, 1.1)];

/// Stack of two or three three-sided cones sharing one origin at `base`
pub fn tree_cluster(rng: &mut ChaCha8Rng, base: Vec3) -> Mesh {
    let tree_height = rng.gen_range(1.25..2.25);
    let tiers = if rng.gen_bool(0.5) { 2 } else { 3 };

    let cones: Vec<Mesh> = TREE_TIERS[..tiers]
        .iter()
        .map(|&(radius, height_scale, lift)| {
            let height = tree_height * height_scale;
            let center = tree_height * lift + height * 0.5;
            mesh::frustum(0.0, radius, height, 3, false).translated(Vec3::Y * center)
        })
        .collect();

    Mesh::merge(&cones).translated(base)
}

pub const FLOATING_TREES_PER_RADIUS: f32 = 0.5;
pub const FLOATING_TREES_MIN: usize = 2;
pub const FLOATING_TREES_MAX: usize = 30;

/// Number of floating accent trees for a world radius
pub fn floating_tree_count(radius: f32) -> usize {
    let count = (radius * FLOATING_TREES_PER_RADIUS).round().max(0.0) as usize;
    count.clamp(FLOATING_TREES_MIN, FLOATING_TREES_MAX)
}

/// Random point on the plane inside the world footprint.
///
/// Circles use `half_extents.x` as the disc radius.
pub fn random_footprint_point(rng: &mut ChaCha8Rng, half_extents: Vec2, shape: WorldShape) -> Vec2 {
    match shape {
        WorldShape::Circle => {
            if half_extents.x <= 0.0 {
                return Vec2::ZERO;
            }
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let r = half_extents.x * rng.r#gen::<f32>().sqrt();
            Vec2::new(angle.cos() * r, angle.sin() * r)
        }
        WorldShape::Rectangle => Vec2::new(
            symmetric(rng, half_extents.x),
            symmetric(rng, half_extents.y),
        ),
    }
}

fn symmetric(rng: &mut ChaCha8Rng, half: f32) -> f32 {
    if half > 0.0 { rng.gen_range(-half..=half) } else { 0.0 }
}

/// Tree clusters hovering 5–15 units above the tallest possible terrain
pub fn floating_trees(
    rng: &mut ChaCha8Rng,
    count: usize,
    half_extents: Vec2,
    shape: WorldShape,
    max_height: f32,
) -> Vec<Mesh> {
    (0..count)
        .map(|_| {
            let p = random_footprint_point(rng, half_extents, shape);
            let y = max_height + rng.gen_range(5.0..15.0);
            tree_cluster(rng, Vec3::new(p.x, y, p.y))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(2024)
    }

    #[test]
    fn test_default_rules_cross_band() {
        let generator = DecorationGenerator::default();
        let upper = generator.rule_for(Band::Upper).unwrap();
        assert_eq!(upper.render, Band::Mid);
        assert_eq!(upper.kind, DecorationKind::Tree);

        let lower = generator.rule_for(Band::Lower).unwrap();
        assert_eq!(lower.render, Band::Peak);
        assert_eq!(lower.kind, DecorationKind::Rock);

        assert!(generator.rule_for(Band::Base).is_none());
    }

    #[test]
    fn test_base_never_decorated() {
        let generator = DecorationGenerator::default();
        let mut rng = rng();
        for _ in 0..500 {
            assert!(generator.decorate(Band::Base, Vec3::ZERO, &mut rng).is_none());
        }
    }

    #[test]
    fn test_decoration_rates() {
        let generator = DecorationGenerator::default();
        let mut rng = rng();
        let trials = 20_000;
        for (band, expected) in [(Band::Peak, 0.20), (Band::Upper, 0.05), (Band::Mid, 0.03), (Band::Lower, 0.20)] {
            let hits = (0..trials)
                .filter(|_| generator.decorate(band, Vec3::ZERO, &mut rng).is_some())
                .count();
            let rate = hits as f32 / trials as f32;
            assert!((rate - expected).abs() < 0.02, "{:?}: rate {} expected {}", band, rate, expected);
        }
    }

    #[test]
    fn test_decoration_tags() {
        let generator = DecorationGenerator::new(vec![DecorationRule {
            origin: Band::Upper,
            render: Band::Mid,
            kind: DecorationKind::Tree,
            chance: 1.0,
        }]);
        let decoration = generator.decorate(Band::Upper, Vec3::new(1.0, 7.5, 2.0), &mut rng()).unwrap();
        assert_eq!(decoration.origin_band, Band::Upper);
        assert_eq!(decoration.render_band, Band::Mid);
        let bounds = decoration.mesh.bounds().unwrap();
        assert!((bounds.min.y - 7.5).abs() < 1e-4);
    }

    #[test]
    fn test_rock_rests_on_top() {
        let mut rng = rng();
        for _ in 0..50 {
            let top = Vec3::new(4.0, 3.0, -1.0);
            let bounds = rock(&mut rng, top).bounds().unwrap();
            let center = bounds.center();
            assert!((center.y - 3.0).abs() < 1e-4);
            // odd segment counts leave the sphere slightly off-center in x
            assert!(center.x >= 3.95 && center.x <= 4.45);
            let radius = bounds.size().y * 0.5;
            assert!((0.1 - 1e-4..=0.4 + 1e-4).contains(&radius));
        }
    }

    #[test]
    fn test_tree_cluster_tiers_taper() {
        let mut rng = rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..40 {
            let tree = tree_cluster(&mut rng, Vec3::ZERO);
            // side wall (4 × 2) + bottom cap (5) per cone
            let cones = tree.vertex_count() / 13;
            assert_eq!(tree.vertex_count() % 13, 0);
            seen.insert(cones);

            let bounds = tree.bounds().unwrap();
            assert!(bounds.min.y.abs() < 1e-5);
            assert!(bounds.size().x <= 3.0 + 1e-4);
        }
        let expected: std::collections::HashSet<usize> = [2, 3].into_iter().collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_floating_tree_count_clamped() {
        assert_eq!(floating_tree_count(1.0), FLOATING_TREES_MIN);
        assert_eq!(floating_tree_count(20.0), 10);
        assert_eq!(floating_tree_count(1000.0), FLOATING_TREES_MAX);
    }

    #[test]
    fn test_floating_trees_above_terrain() {
        let mut rng = rng();
        let trees = floating_trees(&mut rng, 10, Vec2::splat(10.0), WorldShape::Circle, 8.0);
        assert_eq!(trees.len(), 10);
        for tree in &trees {
            let bounds = tree.bounds().unwrap();
            assert!(bounds.min.y >= 13.0 - 1e-4 && bounds.min.y <= 23.0 + 1e-4);
            let base = Vec2::new(bounds.center().x, bounds.center().z);
            // cone footprint is at most 1.5 around the trunk axis
            assert!(base.length() <= 10.0 + 1.5);
        }
    }

    #[test]
    fn test_footprint_point_rectangle() {
        let mut rng = rng();
        let extents = Vec2::new(9.0, 4.0);
        let mut far_x = false;
        for _ in 0..200 {
            let p = random_footprint_point(&mut rng, extents, WorldShape::Rectangle);
            assert!(p.x.abs() <= 9.0 && p.y.abs() <= 4.0);
            far_x |= p.x.abs() > 4.0;
        }
        // x is not limited by the shorter axis
        assert!(far_x);
    }

    #[test]
    fn test_footprint_point_degenerate() {
        let mut rng = rng();
        assert_eq!(random_footprint_point(&mut rng, Vec2::ZERO, WorldShape::Circle), Vec2::ZERO);
        assert_eq!(random_footprint_point(&mut rng, Vec2::ZERO, WorldShape::Rectangle), Vec2::ZERO);
    }
}
