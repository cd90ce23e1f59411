//! Merges each band's primitives into one drawable.

use crate::mesh::Mesh;
use crate::scene::{Drawable, DrawableKind, Material, TextureSet};
use crate::terrain::Band;

use super::accumulator::BandAccumulator;

/// Stateless batching step
pub struct GeometryBatcher;

impl GeometryBatcher {
    /// Concatenate pre-positioned primitives into a single mesh
    pub fn merge(primitives: &[Mesh]) -> Mesh {
        Mesh::merge(primitives)
    }

    /// One drawable per non-empty band, highest band first.
    ///
    /// Bands that received nothing are skipped rather than producing an
    /// empty mesh.
    pub fn batch(accumulator: &BandAccumulator, textures: &TextureSet) -> Vec<Drawable> {
        let mut drawables = Vec::with_capacity(Band::ALL.len());
        for (band, primitives) in accumulator.iter() {
            if primitives.is_empty() {
                log::debug!("Band {:?} is empty, no drawable", band);
                continue;
            }

            let mesh = Self::merge(primitives);
            log::debug!(
                "Band {:?}: {} primitives, {} vertices",
                band,
                primitives.len(),
                mesh.vertex_count()
            );
            drawables.push(Drawable::new(
                DrawableKind::Band(band),
                mesh,
                Material::textured(textures.get(band.surface())),
            ));
        }
        drawables
    }
}
