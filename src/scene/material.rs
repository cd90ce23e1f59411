//! Surfaces, texture handles and materials.
//!
//! Textures are owned by the renderer. This crate only asks for opaque
//! handles by surface name and records which handle each drawable uses.

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Named texture surfaces the renderer must provide
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureSurface {
    Stone,
    Grass,
    Dirt,
    Sand,
    Dirt2,
    Water,
    Leaf,
}

impl TextureSurface {
    pub const ALL: [TextureSurface; 7] = [
        TextureSurface::Stone,
        TextureSurface::Grass,
        TextureSurface::Dirt,
        TextureSurface::Sand,
        TextureSurface::Dirt2,
        TextureSurface::Water,
        TextureSurface::Leaf,
    ];

    /// Conventional asset name, e.g. `"dirt2"`
    pub fn name(&self) -> &'static str {
        match self {
            TextureSurface::Stone => "stone",
            TextureSurface::Grass => "grass",
            TextureSurface::Dirt => "dirt",
            TextureSurface::Sand => "sand",
            TextureSurface::Dirt2 => "dirt2",
            TextureSurface::Water => "water",
            TextureSurface::Leaf => "leaf",
        }
    }
}

/// Opaque renderer-side texture id
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureHandle(pub u64);

/// Supplies texture handles; implemented by the renderer
pub trait TextureSource {
    fn texture(&self, surface: TextureSurface) -> Option<TextureHandle>;
}

impl<F> TextureSource for F
where
    F: Fn(TextureSurface) -> Option<TextureHandle>,
{
    fn texture(&self, surface: TextureSurface) -> Option<TextureHandle> {
        self(surface)
    }
}

/// Handles for every surface, resolved once per build
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureSet {
    handles: [TextureHandle; 7],
}

impl TextureSet {
    /// Query the source for all surfaces, failing on the first missing one
    pub fn resolve(source: &dyn TextureSource) -> Result<Self> {
        let mut handles = [TextureHandle(0); 7];
        for (slot, surface) in handles.iter_mut().zip(TextureSurface::ALL) {
            *slot = source.texture(surface).ok_or(Error::MissingTexture(surface))?;
        }
        Ok(Self { handles })
    }

    /// Sequential placeholder handles (stone = 1 … leaf = 7) for tools and tests
    pub fn placeholder() -> Self {
        let mut handles = [TextureHandle(0); 7];
        for (i, slot) in handles.iter_mut().enumerate() {
            *slot = TextureHandle(i as u64 + 1);
        }
        Self { handles }
    }

    pub fn get(&self, surface: TextureSurface) -> TextureHandle {
        // variants are declared in `ALL` order
        self.handles[surface as usize]
    }
}

/// Which faces the renderer should draw
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaceSide {
    #[default]
    Front,
    /// Inward-facing only
    Back,
    Double,
}

/// Renderer-agnostic material description
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub texture: Option<TextureHandle>,
    /// Linear RGB tint
    pub color: [f32; 3],
    pub side: FaceSide,
    pub flat_shading: bool,
    pub opacity: f32,
    pub roughness: f32,
    pub metalness: f32,
    /// 0 = opaque, 1 = fully transmissive
    pub transmission: f32,
    pub ior: f32,
    pub thickness: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            texture: None,
            color: [1.0, 1.0, 1.0],
            side: FaceSide::Front,
            flat_shading: true,
            opacity: 1.0,
            roughness: 1.0,
            metalness: 0.0,
            transmission: 0.0,
            ior: 1.5,
            thickness: 0.0,
        }
    }
}

impl Material {
    /// Flat-shaded opaque material using one texture
    pub fn textured(texture: TextureHandle) -> Self {
        Self {
            texture: Some(texture),
            ..Default::default()
        }
    }

    /// Translucent refractive water surface
    pub fn water(texture: TextureHandle) -> Self {
        Self {
            texture: Some(texture),
            color: [0.333, 0.667, 1.0],
            flat_shading: false,
            opacity: 0.8,
            roughness: 1.0,
            metalness: 0.025,
            transmission: 1.0,
            ior: 1.4,
            thickness: 1.5,
            ..Default::default()
        }
    }

    /// Untextured white puffs
    pub fn cloud() -> Self {
        Self {
            opacity: 0.9,
            ..Default::default()
        }
    }

    pub fn with_side(mut self, side: FaceSide) -> Self {
        self.side = side;
        self
    }

    pub fn is_translucent(&self) -> bool {
        self.opacity < 1.0 || self.transmission > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_from_closure() {
        let source = |surface: TextureSurface| Some(TextureHandle(surface as u64 * 10));
        let set = TextureSet::resolve(&source).unwrap();
        assert_eq!(set.get(TextureSurface::Stone), TextureHandle(0));
        assert_eq!(set.get(TextureSurface::Leaf), TextureHandle(60));
    }

    #[test]
    fn test_resolve_missing() {
        let source = |surface: TextureSurface| match surface {
            TextureSurface::Water => None,
            _ => Some(TextureHandle(1)),
        };
        let err = TextureSet::resolve(&source).unwrap_err();
        assert!(matches!(err, Error::MissingTexture(TextureSurface::Water)));
    }

    #[test]
    fn test_placeholder_distinct() {
        let set = TextureSet::placeholder();
        for (i, surface) in TextureSurface::ALL.iter().enumerate() {
            assert_eq!(set.get(*surface), TextureHandle(i as u64 + 1));
        }
        let handles: std::collections::HashSet<_> =
            TextureSurface::ALL.iter().map(|s| set.get(*s)).collect();
        assert_eq!(handles.len(), 7);
    }

    #[test]
    fn test_water_is_translucent() {
        assert!(Material::water(TextureHandle(1)).is_translucent());
        assert!(!Material::textured(TextureHandle(1)).is_translucent());
    }

    #[test]
    fn test_surface_names() {
        assert_eq!(TextureSurface::Dirt2.name(), "dirt2");
        assert_eq!(TextureSurface::Stone.name(), "stone");
    }
}
