//! Per-band primitive collection for a single build.

use crate::mesh::Mesh;
use crate::terrain::Band;

/// Five ordered lists of positioned, not yet merged primitives.
///
/// A fresh accumulator is created for every build and consumed by the
/// batcher, so nothing carries over between worlds.
#[derive(Clone, Debug, Default)]
pub struct BandAccumulator {
    lists: [Vec<Mesh>; 5],
}

impl BandAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, band: Band, mesh: Mesh) {
        self.lists[band.index()].push(mesh);
    }

    pub fn primitives(&self, band: Band) -> &[Mesh] {
        &self.lists[band.index()]
    }

    pub fn len(&self, band: Band) -> usize {
        self.lists[band.index()].len()
    }

    pub fn total_len(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    /// Vertices the merged mesh for `band` will have
    pub fn vertex_count(&self, band: Band) -> usize {
        self.lists[band.index()].iter().map(Mesh::vertex_count).sum()
    }

    /// Bands in descending order with their primitives
    pub fn iter(&self) -> impl Iterator<Item = (Band, &[Mesh])> {
        Band::ALL.into_iter().map(move |band| (band, self.primitives(band)))
    }
}
