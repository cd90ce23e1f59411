//! Hexscape - procedural hex-column terrain and scene assembly

pub mod core;
pub mod math;
pub mod mesh;
pub mod terrain;
pub mod generation;
pub mod atmosphere;
pub mod scene;
