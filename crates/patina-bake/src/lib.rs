//! Patina Bake - texture to vertex color conversion
//!
//! Replaces a mesh's texture reference with baked per-vertex RGB colors.
//! Each vertex either samples the texture at its own UV, or shares the
//! averaged color of its triangle, depending on [`ColorMode`].

mod baker;
mod convert;
mod error;
mod sampler;

pub use baker::{bake_per_face, bake_per_vertex, ColorMode};
pub use convert::{convert_mesh, convert_meshes};
pub use error::BakeError;
pub use sampler::sample;
