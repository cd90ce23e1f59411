//! Error types for hexscape

use thiserror::Error;

use crate::scene::TextureSurface;

/// Main error type for world generation
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid world config: {0}")]
    InvalidConfig(String),

    #[error("No texture handle for surface '{}'", .0.name())]
    MissingTexture(TextureSurface),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
