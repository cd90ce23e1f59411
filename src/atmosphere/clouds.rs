//! Drifting cloud pool.
//!
//! Clouds move along +X at a constant speed. Any cluster that passes the
//! recycle boundary is rebuilt at the opposite edge with a new cross-axis
//! position and altitude, so the pool size never changes.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use super::config::CloudConfig;
use crate::math::Aabb;
use crate::mesh::{self, Mesh};

const PUFF_SEGMENTS: u32 = 7;
/// Radius and x offset of the three main puffs
const PUFFS: [(f32, f32); 3] = [(1.2, -1.85), (1.5, 0.0), (0.9, 1.85)];

/// One multi-sphere cloud cluster
#[derive(Clone, Debug)]
pub struct CloudInstance {
    /// Puff geometry relative to `position`
    pub mesh: Mesh,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Incremented every time the slot is respawned
    pub generation: u32,
}

impl CloudInstance {
    fn spawn(rng: &mut ChaCha8Rng, position: Vec3, velocity: Vec3, generation: u32) -> Self {
        let mut puffs = Vec::with_capacity(4);
        for (radius, x) in PUFFS {
            let offset = Vec3::new(x, rng.gen_range(0.0..0.3), rng.gen_range(-0.3..0.3));
            puffs.push(mesh::sphere(radius, PUFF_SEGMENTS, PUFF_SEGMENTS).translated(offset));
        }
        if rng.gen_bool(0.5) {
            let offset = Vec3::new(rng.gen_range(-1.0..1.0), rng.gen_range(0.6..1.0), 0.0);
            let radius = rng.gen_range(0.8..1.1);
            puffs.push(mesh::sphere(radius, PUFF_SEGMENTS, PUFF_SEGMENTS).translated(offset));
        }

        Self {
            mesh: Mesh::merge(&puffs),
            position,
            velocity,
            generation,
        }
    }

    /// Number of spheres in the cluster
    pub fn puff_count(&self) -> usize {
        let per_puff = ((PUFF_SEGMENTS + 1) * (PUFF_SEGMENTS + 1)) as usize;
        self.mesh.vertex_count() / per_puff
    }

    /// Puffs moved to the current position
    pub fn world_mesh(&self) -> Mesh {
        self.mesh.clone().translated(self.position)
    }

    pub fn bounds(&self) -> Option<Aabb> {
        self.mesh.bounds().map(|b| b.translated(self.position))
    }
}

/// Fixed-size pool of drifting clouds.
///
/// Clouds spread over `±radius/2` across the drift axis for both world
/// shapes. Degenerate radii collapse the pool onto the origin column.
pub struct CloudField {
    instances: Vec<CloudInstance>,
    rng: ChaCha8Rng,
    config: CloudConfig,
    half_extent: f32,
    max_height: f32,
}

impl CloudField {
    /// Pool sized from a random fraction of the world radius
    pub fn new(radius: f32, max_height: f32, config: CloudConfig, mut rng: ChaCha8Rng) -> Self {
        let count = Self::pool_size(radius, config.max_clouds, &mut rng);
        Self::with_count(radius, max_height, count, config, rng)
    }

    /// Pool with an explicit size
    pub fn with_count(
        radius: f32,
        max_height: f32,
        count: usize,
        config: CloudConfig,
        rng: ChaCha8Rng,
    ) -> Self {
        let mut field = Self {
            instances: Vec::with_capacity(count),
            rng,
            config,
            // also maps a NaN radius to an empty footprint
            half_extent: (radius / 2.0).max(0.0),
            max_height,
        };

        let boundary = field.recycle_boundary();
        let velocity = field.velocity();
        for _ in 0..count {
            let x = if boundary > 0.0 { field.rng.gen_range(-boundary..=boundary) } else { 0.0 };
            let position = field.random_position(x);
            let instance = CloudInstance::spawn(&mut field.rng, position, velocity, 0);
            field.instances.push(instance);
        }

        log::debug!("Cloud field: {} clusters, recycle at x={:.2}", count, boundary);
        field
    }

    /// `floor(u^0.45 × radius)` clamped to `[1, max_clouds]`, `u` uniform in [0, 1)
    pub fn pool_size(radius: f32, max_clouds: usize, rng: &mut ChaCha8Rng) -> usize {
        let fraction = rng.r#gen::<f32>().powf(0.45);
        let span = (fraction * radius).floor().max(0.0) as usize;
        span.clamp(1, max_clouds.max(1))
    }

    fn velocity(&self) -> Vec3 {
        Vec3::new(self.config.drift_speed, 0.0, 0.0)
    }

    fn random_position(&mut self, x: f32) -> Vec3 {
        let z = if self.half_extent > 0.0 {
            self.rng.gen_range(-self.half_extent..=self.half_extent)
        } else {
            0.0
        };
        let (low, high) = (self.config.altitude_min, self.config.altitude_max);
        let lift = if low < high { self.rng.gen_range(low..=high) } else { low };
        Vec3::new(x, self.max_height + lift, z)
    }

    /// Drift-axis coordinate past which a cloud is respawned
    pub fn recycle_boundary(&self) -> f32 {
        (self.config.recycle_fraction * self.half_extent).max(0.0)
    }

    /// Advance all clouds by `dt` seconds
    pub fn advance(&mut self, dt: f32) -> usize {
        self.advance_with(dt, |_, _| {})
    }

    /// Advance all clouds, calling `on_respawn(slot, new_instance)` for each
    /// recycled cloud. Returns the number of respawns.
    pub fn advance_with(&mut self, dt: f32, mut on_respawn: impl FnMut(usize, &CloudInstance)) -> usize {
        let boundary = self.recycle_boundary();
        let mut respawned = 0;

        for slot in 0..self.instances.len() {
            let instance = &mut self.instances[slot];
            instance.position += instance.velocity * dt;
            if instance.position.x <= boundary {
                continue;
            }

            let generation = instance.generation.wrapping_add(1);
            let position = self.random_position(-boundary);
            let velocity = self.velocity();
            self.instances[slot] = CloudInstance::spawn(&mut self.rng, position, velocity, generation);
            log::trace!("Cloud {} respawned at {:?}", slot, position);

            on_respawn(slot, &self.instances[slot]);
            respawned += 1;
        }

        respawned
    }

    pub fn instances(&self) -> &[CloudInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
