//! What a build hands to the renderer, and the seam to the renderer's scene.

pub mod material;
pub mod drawable;
pub mod world;
pub mod host;

pub use material::{FaceSide, Material, TextureHandle, TextureSet, TextureSource, TextureSurface};
pub use drawable::{Drawable, DrawableKind};
pub use world::{BandCounts, UnattachedBucket, World, WorldStats};
pub use host::{NodeId, RecordingSink, SceneHost, SceneSink};
