//! Patina Assets - mesh records and texture loading
//!
//! Provides the textured and colored mesh records exchanged with the
//! model-loading and rendering collaborators, plus the disk loaders that
//! back them: raster textures via the `image` crate and glTF 2.0 models
//! via the `gltf` crate.

mod error;
mod mesh;
mod model;
mod texture;

pub use error::AssetError;
pub use mesh::{next_mesh_id, ColoredMesh, MeshId, TexturedMesh};
pub use model::load_textured_meshes;
pub use texture::{load_texture, TextureImage};
