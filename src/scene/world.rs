//! The output of one world build.

use serde::Serialize;

use super::drawable::{Drawable, DrawableKind};
use super::material::{Material, TextureHandle};
use crate::atmosphere::{CloudField, CloudInstance};
use crate::mesh::Mesh;
use crate::terrain::Band;

/// A count per band
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BandCounts {
    pub peak: usize,
    pub upper: usize,
    pub mid: usize,
    pub lower: usize,
    pub base: usize,
}

impl BandCounts {
    pub fn get(&self, band: Band) -> usize {
        match band {
            Band::Peak => self.peak,
            Band::Upper => self.upper,
            Band::Mid => self.mid,
            Band::Lower => self.lower,
            Band::Base => self.base,
        }
    }

    pub fn add(&mut self, band: Band, n: usize) {
        let slot = match band {
            Band::Peak => &mut self.peak,
            Band::Upper => &mut self.upper,
            Band::Mid => &mut self.mid,
            Band::Lower => &mut self.lower,
            Band::Base => &mut self.base,
        };
        *slot += n;
    }

    pub fn total(&self) -> usize {
        self.peak + self.upper + self.mid + self.lower + self.base
    }
}

/// Summary of a build, for logs and tooling
#[derive(Clone, Debug, Default, Serialize)]
pub struct WorldStats {
    pub seed: u64,
    pub cells: usize,
    /// Columns per terrain band
    pub columns: BandCounts,
    /// Primitives per render batch (columns plus decorations)
    pub primitives: BandCounts,
    pub vertices: BandCounts,
    pub decorations: usize,
    pub floating_trees: usize,
    pub clouds: usize,
    pub skirt_radius: f32,
    pub build_ms: f64,
}

/// Floating accent trees. They are generated with a leaf texture but are
/// not part of the drawables handed to the scene.
#[derive(Clone, Debug)]
pub struct UnattachedBucket {
    pub mesh: Mesh,
    pub texture: TextureHandle,
    pub count: usize,
}

/// Everything one build produced. The caller owns scene insertion.
pub struct World {
    pub bands: Vec<Drawable>,
    pub water: Drawable,
    pub wall: Drawable,
    pub skirt: Drawable,
    pub clouds: CloudField,
    pub unattached: UnattachedBucket,
    pub stats: WorldStats,
}

impl World {
    /// Merged drawable for a band, if that band received anything
    pub fn band(&self, band: Band) -> Option<&Drawable> {
        self.bands.iter().find(|d| d.kind == DrawableKind::Band(band))
    }

    /// Band batches followed by water, wall and skirt
    pub fn drawables(&self) -> impl Iterator<Item = &Drawable> {
        self.bands
            .iter()
            .chain([&self.water, &self.wall, &self.skirt])
    }

    /// Drawable for one cloud slot
    pub fn cloud_drawable(slot: usize, cloud: &CloudInstance) -> Drawable {
        Drawable::new(DrawableKind::Cloud(slot), cloud.mesh.clone(), Material::cloud())
            .with_translation(cloud.position)
    }

    /// Drawables for every cloud in the pool
    pub fn cloud_drawables(&self) -> Vec<Drawable> {
        self.clouds
            .instances()
            .iter()
            .enumerate()
            .map(|(slot, cloud)| Self::cloud_drawable(slot, cloud))
            .collect()
    }
}
