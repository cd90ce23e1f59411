//! World generation pipeline.
//!
//! One build runs, in order:
//! 1. Grid enumeration and noise sampling (terrain)
//! 2. Band classification, column and decoration building into a fresh accumulator
//! 3. Per-band merging (batcher)
//! 4. Water, wall and skirt sized from the skirt radius
//! 5. Floating accent trees and the cloud pool

pub mod config;
pub mod column;
pub mod decoration;
pub mod accumulator;
pub mod batcher;
pub mod boundary;

pub use config::WorldConfig;
pub use column::{Column, ColumnBuilder};
pub use decoration::{Decoration, DecorationGenerator, DecorationKind, DecorationRule};
pub use accumulator::BandAccumulator;
pub use batcher::GeometryBatcher;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::atmosphere::CloudField;
use crate::core::Result;
use crate::mesh::Mesh;
use crate::scene::{
    Drawable, DrawableKind, FaceSide, Material, TextureSet, TextureSurface, UnattachedBucket,
    World, WorldStats,
};
use crate::terrain::{Band, Cell, GridLayout, NoiseField};

/// Builds complete worlds from a [`WorldConfig`].
#[derive(Clone, Debug, Default)]
pub struct WorldAssembler {
    decorations: DecorationGenerator,
}

impl WorldAssembler {
    pub fn new(decorations: DecorationGenerator) -> Self {
        Self { decorations }
    }

    /// Build a world. Without a configured seed every call uses a new one.
    pub fn build(&self, config: &WorldConfig, textures: &TextureSet) -> Result<World> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let noise = NoiseField::new(noise_seed(seed));
        self.build_with(config, textures, noise, ChaCha8Rng::seed_from_u64(seed), seed)
    }

    /// Build a world from an explicit noise field and RNG
    pub fn build_with(
        &self,
        config: &WorldConfig,
        textures: &TextureSet,
        noise: NoiseField,
        mut rng: ChaCha8Rng,
        seed: u64,
    ) -> Result<World> {
        config.validate()?;
        let start = std::time::Instant::now();
        log::debug!("Building with seed {} (noise seed {})", seed, noise.seed());

        let layout = GridLayout::new(config.radius, config.shape);
        let columns = ColumnBuilder::new(config.max_height);
        let mut accumulator = BandAccumulator::new();
        let mut stats = WorldStats {
            seed,
            skirt_radius: layout.skirt_radius(),
            ..Default::default()
        };

        for grid_cell in layout.cells() {
            let cell = Cell::sample(grid_cell, &noise, config.max_height);
            let column = columns.build(&cell);
            stats.cells += 1;
            stats.columns.add(column.band, 1);

            let decoration = self.decorations.decorate(column.band, column.top, &mut rng);
            accumulator.push(column.band, column.mesh);
            if let Some(decoration) = decoration {
                stats.decorations += 1;
                accumulator.push(decoration.render_band, decoration.mesh);
            }
        }

        for band in Band::ALL {
            stats.primitives.add(band, accumulator.len(band));
            stats.vertices.add(band, accumulator.vertex_count(band));
        }
        let bands = GeometryBatcher::batch(&accumulator, textures);
        drop(accumulator);

        let half_extents = layout.footprint_half_extents();
        let tree_count = decoration::floating_tree_count(config.radius);
        let trees = decoration::floating_trees(
            &mut rng,
            tree_count,
            half_extents,
            config.shape,
            config.max_height,
        );
        stats.floating_trees = trees.len();
        let unattached = UnattachedBucket {
            mesh: Mesh::merge(&trees),
            texture: textures.get(TextureSurface::Leaf),
            count: trees.len(),
        };

        let (water, wall, skirt) = boundary_drawables(stats.skirt_radius, config.max_height, textures);

        let cloud_rng = ChaCha8Rng::seed_from_u64(rng.r#gen());
        let clouds = CloudField::new(config.radius, config.max_height, config.clouds.clone(), cloud_rng);
        stats.clouds = clouds.len();

        stats.build_ms = start.elapsed().as_secs_f64() * 1000.0;
        log::info!(
            "Built {:?} world r={} h={} seed={}: {} cells, {} decorations, {} band batches in {:.1}ms",
            config.shape,
            config.radius,
            config.max_height,
            seed,
            stats.cells,
            stats.decorations,
            bands.len(),
            stats.build_ms
        );
        log::debug!("Columns per band: {:?}", stats.columns);

        Ok(World {
            bands,
            water,
            wall,
            skirt,
            clouds,
            unattached,
            stats,
        })
    }
}

/// Fold a 64-bit seed into the noise generator's 32 bits
fn noise_seed(seed: u64) -> u32 {
    (seed ^ (seed >> 32)) as u32
}

fn boundary_drawables(
    skirt_radius: f32,
    max_height: f32,
    textures: &TextureSet,
) -> (Drawable, Drawable, Drawable) {
    let water = Drawable::new(
        DrawableKind::Water,
        boundary::water_disc(skirt_radius, max_height),
        Material::water(textures.get(TextureSurface::Water)),
    );
    let wall = Drawable::new(
        DrawableKind::Wall,
        boundary::outer_wall(skirt_radius, max_height),
        Material::textured(textures.get(TextureSurface::Dirt)).with_side(FaceSide::Back),
    );
    let skirt = Drawable::new(
        DrawableKind::Skirt,
        boundary::inner_skirt(skirt_radius, max_height),
        Material::textured(textures.get(TextureSurface::Dirt2)).with_side(FaceSide::Double),
    );
    (water, wall, skirt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::terrain::WorldShape;

    fn build(config: &WorldConfig) -> World {
        WorldAssembler::default()
            .build(config, &TextureSet::placeholder())
            .unwrap()
    }

    #[test]
    fn test_small_circle_world() {
        let config = WorldConfig::new(10.0, 10.0, WorldShape::Circle).with_seed(12345);
        let world = build(&config);

        let expected_cells = GridLayout::new(10.0, WorldShape::Circle).cells().count();
        assert!(expected_cells > 0);
        assert_eq!(world.stats.cells, expected_cells);
        assert_eq!(world.stats.columns.total(), expected_cells);
        assert!(!world.bands.is_empty());
        assert!(world.bands.len() <= 5);
        assert_eq!(world.water.kind, DrawableKind::Water);
        assert_eq!(world.wall.kind, DrawableKind::Wall);
        assert_eq!(world.skirt.kind, DrawableKind::Skirt);
        assert_eq!(world.drawables().count(), world.bands.len() + 3);
        assert!(world.clouds.len() > 0);
        assert_eq!(world.stats.skirt_radius, 9.0);
    }

    #[test]
    fn test_every_cell_batched_once() {
        let config = WorldConfig::new(24.0, 12.0, WorldShape::Circle).with_seed(99);
        let world = build(&config);

        let primitive_total = world.stats.primitives.total();
        assert_eq!(primitive_total, world.stats.cells + world.stats.decorations);

        for band in Band::ALL {
            let vertices = world.stats.vertices.get(band);
            match world.band(band) {
                Some(drawable) => {
                    assert_eq!(drawable.mesh.vertex_count(), vertices);
                    assert_eq!(drawable.material.texture, Some(TextureSet::placeholder().get(band.surface())));
                }
                None => assert_eq!(vertices, 0),
            }
        }
    }

    #[test]
    fn test_column_vertices_match_cells() {
        // with no decorations, vertex totals are exactly cells × prism size
        let assembler = WorldAssembler::new(DecorationGenerator::new(Vec::new()));
        let config = WorldConfig::new(16.0, 10.0, WorldShape::Rectangle).with_seed(3);
        let world = assembler.build(&config, &TextureSet::placeholder()).unwrap();

        let prism = crate::mesh::hex_prism(1.0).vertex_count();
        assert_eq!(world.stats.decorations, 0);
        assert_eq!(world.stats.vertices.total(), world.stats.cells * prism);
        let merged: usize = world.bands.iter().map(|d| d.mesh.vertex_count()).sum();
        assert_eq!(merged, world.stats.cells * prism);
    }

    fn single_rule(origin: Band, render: Band, kind: DecorationKind) -> WorldAssembler {
        WorldAssembler::new(DecorationGenerator::new(vec![DecorationRule {
            origin,
            render,
            kind,
            chance: 1.0,
        }]))
    }

    /// First seeded world that has columns in `band`
    fn world_with_band(assembler: &WorldAssembler, band: Band) -> World {
        (0..64)
            .map(|seed| {
                let config = WorldConfig::new(60.0, 10.0, WorldShape::Rectangle).with_seed(seed);
                assembler.build(&config, &TextureSet::placeholder()).unwrap()
            })
            .find(|world| world.stats.columns.get(band) > 0)
            .expect("no seed produced columns in the band")
    }

    #[test]
    fn test_upper_trees_join_mid_batch() {
        let world = world_with_band(&single_rule(Band::Upper, Band::Mid, DecorationKind::Tree), Band::Upper);
        let columns = world.stats.columns;
        let primitives = world.stats.primitives;

        assert_eq!(world.stats.decorations, columns.get(Band::Upper));
        assert_eq!(primitives.get(Band::Mid), columns.get(Band::Mid) + columns.get(Band::Upper));
        assert_eq!(primitives.get(Band::Upper), columns.get(Band::Upper));

        // the Upper batch holds bare prisms only
        let prism = crate::mesh::hex_prism(1.0).vertex_count();
        let upper = world.band(Band::Upper).unwrap();
        assert_eq!(upper.mesh.vertex_count(), columns.get(Band::Upper) * prism);
    }

    #[test]
    fn test_lower_rocks_join_peak_batch() {
        let world = world_with_band(&single_rule(Band::Lower, Band::Peak, DecorationKind::Rock), Band::Lower);
        let columns = world.stats.columns;
        let primitives = world.stats.primitives;

        assert_eq!(world.stats.decorations, columns.get(Band::Lower));
        assert_eq!(primitives.get(Band::Peak), columns.get(Band::Peak) + columns.get(Band::Lower));
        assert_eq!(primitives.get(Band::Lower), columns.get(Band::Lower));

        let prism = crate::mesh::hex_prism(1.0).vertex_count();
        let lower = world.band(Band::Lower).unwrap();
        assert_eq!(lower.mesh.vertex_count(), columns.get(Band::Lower) * prism);
        // rocks always give the Peak batch a drawable
        assert!(world.band(Band::Peak).is_some());
    }

    #[test]
    fn test_tiny_max_height() {
        let config = WorldConfig::new(20.0, 0.01, WorldShape::Circle).with_seed(11);
        let world = build(&config);
        assert_eq!(world.stats.columns.total(), world.stats.cells);
        assert!(world.stats.columns.get(Band::Base) > 0);
        assert!(world.stats.columns.get(Band::Base) >= world.stats.columns.get(Band::Peak));
    }

    #[test]
    fn test_rectangle_vs_circle_cell_count() {
        let rect = build(&WorldConfig::new(20.0, 10.0, WorldShape::Rectangle).with_seed(1));
        let circle = build(&WorldConfig::new(20.0, 10.0, WorldShape::Circle).with_seed(1));
        assert_eq!(rect.stats.cells, 441);
        assert!(circle.stats.cells < rect.stats.cells);
        assert_eq!(rect.stats.skirt_radius, 28.0);
    }

    #[test]
    fn test_same_seed_reproducible() {
        let config = WorldConfig::new(14.0, 8.0, WorldShape::Circle).with_seed(777);
        let a = build(&config);
        let b = build(&config);
        assert_eq!(a.stats.columns, b.stats.columns);
        assert_eq!(a.stats.decorations, b.stats.decorations);
        assert_eq!(a.bands.len(), b.bands.len());
        for (da, db) in a.bands.iter().zip(&b.bands) {
            assert_eq!(da.mesh, db.mesh);
        }
        assert_eq!(a.clouds.len(), b.clouds.len());
    }

    #[test]
    fn test_unseeded_rebuilds_are_valid() {
        let config = WorldConfig::new(14.0, 8.0, WorldShape::Circle);
        let a = build(&config);
        let b = build(&config);
        assert_eq!(a.stats.cells, b.stats.cells);
        assert!(!a.bands.is_empty() && !b.bands.is_empty());
    }

    #[test]
    fn test_floating_trees_unattached() {
        let config = WorldConfig::new(20.0, 10.0, WorldShape::Circle).with_seed(5);
        let world = build(&config);
        assert_eq!(world.unattached.count, decoration::floating_tree_count(20.0));
        assert_eq!(world.unattached.texture, TextureSet::placeholder().get(TextureSurface::Leaf));
        let bounds = world.unattached.mesh.bounds().unwrap();
        assert!(bounds.min.y >= 15.0 - 1e-4);
        // floating trees never reach the scene drawables
        let leaf = Some(world.unattached.texture);
        assert!(world.drawables().all(|d| d.material.texture != leaf));
    }

    #[test]
    fn test_floating_trees_span_rectangle_footprint() {
        let config = WorldConfig::new(60.0, 10.0, WorldShape::Rectangle).with_seed(21);
        let world = build(&config);
        let extents = GridLayout::new(60.0, WorldShape::Rectangle).footprint_half_extents();
        let bounds = world.unattached.mesh.bounds().unwrap();

        // cone footprint is at most 1.5 around the trunk axis
        assert!(bounds.max.x <= extents.x + 1.5 && bounds.min.x >= -extents.x - 1.5);
        assert!(bounds.max.z <= extents.y + 1.5 && bounds.min.z >= -extents.y - 1.5);
        let reach = bounds.max.x.max(-bounds.min.x);
        assert!(reach > 30.0, "trees reach only {}", reach);
    }

    #[test]
    fn test_boundary_materials() {
        let world = build(&WorldConfig::default().with_seed(8));
        assert!(world.water.material.is_translucent());
        assert_eq!(world.wall.material.side, FaceSide::Back);
        let water_top = world.water.mesh.bounds().unwrap().max.y;
        assert!((water_top - 0.75).abs() < 1e-4);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = WorldAssembler::default()
            .build(&WorldConfig::new(10.0, 0.0, WorldShape::Circle), &TextureSet::placeholder());
        assert!(matches!(err, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_build_with_injected_noise() {
        let config = WorldConfig::new(12.0, 10.0, WorldShape::Circle);
        let textures = TextureSet::placeholder();
        let assembler = WorldAssembler::default();
        let a = assembler
            .build_with(&config, &textures, NoiseField::new(4), ChaCha8Rng::seed_from_u64(4), 4)
            .unwrap();
        let b = assembler
            .build_with(&config, &textures, NoiseField::new(4), ChaCha8Rng::seed_from_u64(4), 4)
            .unwrap();
        assert_eq!(a.stats.columns, b.stats.columns);
        assert_eq!(a.stats.seed, 4);
    }
}
