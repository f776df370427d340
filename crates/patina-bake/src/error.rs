use patina_assets::AssetError;

/// Errors that can occur while converting a textured mesh.
#[derive(Debug, thiserror::Error)]
pub enum BakeError {
    #[error("mesh '{0}' has no texture path")]
    MissingTexture(String),

    #[error("mesh '{name}' has {positions} positions but {texture_coordinates} texture coordinates")]
    AttributeMismatch {
        name: String,
        positions: usize,
        texture_coordinates: usize,
    },

    #[error("mesh '{name}' references vertex {index} but has only {vertices} vertices")]
    IndexOutOfRange {
        name: String,
        index: u32,
        vertices: usize,
    },

    #[error(transparent)]
    Texture(#[from] AssetError),
}
