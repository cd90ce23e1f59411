//! Finished geometry paired with a material.

use glam::Vec3;

use super::material::Material;
use crate::mesh::Mesh;
use crate::terrain::Band;

/// What a drawable represents in the world
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawableKind {
    Band(Band),
    Water,
    Wall,
    Skirt,
    /// Cloud pool slot
    Cloud(usize),
}

/// Mesh + material + placement, ready for the renderer
#[derive(Clone, Debug)]
pub struct Drawable {
    pub kind: DrawableKind,
    pub mesh: Mesh,
    pub material: Material,
    /// World offset applied by the renderer; zero for pre-positioned terrain
    pub translation: Vec3,
}

impl Drawable {
    pub fn new(kind: DrawableKind, mesh: Mesh, material: Material) -> Self {
        Self {
            kind,
            mesh,
            material,
            translation: Vec3::ZERO,
        }
    }

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }
}
