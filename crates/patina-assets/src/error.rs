use std::path::PathBuf;

/// Errors that can occur while loading assets from disk.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("texture not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to decode texture '{0}': {1}")]
    TextureLoadFailed(PathBuf, String),

    #[error("failed to load glTF file '{0}': {1}")]
    GltfLoadFailed(PathBuf, String),
}
