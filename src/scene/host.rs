//! Keeps a renderer's scene in sync with the current world.

use std::collections::HashMap;

use glam::Vec3;

use super::drawable::{Drawable, DrawableKind};
use super::material::{TextureSet, TextureSource};
use super::world::World;
use crate::core::Result;
use crate::generation::{WorldAssembler, WorldConfig};

/// Renderer-side id of an inserted drawable
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// Persistent scene owned by the renderer
pub trait SceneSink {
    fn insert(&mut self, drawable: &Drawable) -> NodeId;
    fn remove(&mut self, node: NodeId);
    fn set_translation(&mut self, node: NodeId, translation: Vec3);
}

/// Owns the current world and the scene nodes created for it.
pub struct SceneHost<S, T> {
    sink: S,
    textures: T,
    assembler: WorldAssembler,
    world: Option<World>,
    terrain_nodes: Vec<NodeId>,
    cloud_nodes: Vec<NodeId>,
}

impl<S: SceneSink, T: TextureSource> SceneHost<S, T> {
    pub fn new(sink: S, textures: T) -> Self {
        Self::with_assembler(sink, textures, WorldAssembler::default())
    }

    pub fn with_assembler(sink: S, textures: T, assembler: WorldAssembler) -> Self {
        Self {
            sink,
            textures,
            assembler,
            world: None,
            terrain_nodes: Vec::new(),
            cloud_nodes: Vec::new(),
        }
    }

    /// Build a new world and replace the scene contents with it.
    ///
    /// The new world is built before anything is touched, so a rejected
    /// config leaves the current scene as it was.
    pub fn rebuild_world(&mut self, config: &WorldConfig) -> Result<&World> {
        let textures = TextureSet::resolve(&self.textures)?;
        let world = self.assembler.build(config, &textures)?;

        self.clear();

        for drawable in world.drawables() {
            let node = self.sink.insert(drawable);
            self.terrain_nodes.push(node);
        }
        for drawable in world.cloud_drawables() {
            let node = self.sink.insert(&drawable);
            self.cloud_nodes.push(node);
        }

        log::info!(
            "Scene replaced: {} terrain nodes, {} clouds",
            self.terrain_nodes.len(),
            self.cloud_nodes.len()
        );
        Ok(self.world.insert(world))
    }

    /// Remove every node of the current world from the scene
    pub fn clear(&mut self) {
        for node in self.terrain_nodes.drain(..).chain(self.cloud_nodes.drain(..)) {
            self.sink.remove(node);
        }
        self.world = None;
    }

    /// Per-frame update: drift clouds and swap nodes for respawned ones.
    /// Returns the number of respawns.
    pub fn tick(&mut self, dt: f32) -> usize {
        let Self { sink, world, cloud_nodes, .. } = self;
        let Some(world) = world.as_mut() else {
            return 0;
        };

        let respawned = world.clouds.advance_with(dt, |slot, cloud| {
            sink.remove(cloud_nodes[slot]);
            cloud_nodes[slot] = sink.insert(&World::cloud_drawable(slot, cloud));
        });

        for (node, cloud) in cloud_nodes.iter().zip(world.clouds.instances()) {
            sink.set_translation(*node, cloud.position);
        }
        respawned
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Nodes this host currently has in the scene
    pub fn node_count(&self) -> usize {
        self.terrain_nodes.len() + self.cloud_nodes.len()
    }
}

/// In-memory [`SceneSink`] that just tracks what is inserted.
///
/// Useful for headless tools and tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    next_id: u64,
    nodes: HashMap<NodeId, (DrawableKind, Vec3)>,
    pub inserted: usize,
    pub removed: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn count(&self, pred: impl Fn(DrawableKind) -> bool) -> usize {
        self.nodes.values().filter(|(kind, _)| pred(*kind)).count()
    }

    pub fn translation(&self, node: NodeId) -> Option<Vec3> {
        self.nodes.get(&node).map(|(_, t)| *t)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }
}

impl SceneSink for RecordingSink {
    fn insert(&mut self, drawable: &Drawable) -> NodeId {
        self.next_id += 1;
        let id = NodeId(self.next_id);
        self.nodes.insert(id, (drawable.kind, drawable.translation));
        self.inserted += 1;
        id
    }

    fn remove(&mut self, node: NodeId) {
        if self.nodes.remove(&node).is_some() {
            self.removed += 1;
        }
    }

    fn set_translation(&mut self, node: NodeId, translation: Vec3) {
        if let Some(entry) = self.nodes.get_mut(&node) {
            entry.1 = translation;
        }
    }
}
