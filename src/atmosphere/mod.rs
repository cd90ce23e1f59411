//! Sky decoration: the drifting cloud pool.

pub mod clouds;
pub mod config;

pub use clouds::{CloudField, CloudInstance};
pub use config::CloudConfig;
