use std::path::{Path, PathBuf};

use glam::{Vec2, Vec3};
use tracing::{debug, warn};

use crate::error::AssetError;
use crate::mesh::{next_mesh_id, TexturedMesh};

/// Load a glTF 2.0 file (.gltf or .glb) and extract one TexturedMesh per
/// primitive that references an on-disk base color texture.
///
/// Primitives without such a texture (untextured materials, embedded
/// images, data URIs) are skipped: the converter needs a texture file it
/// can load by path.
pub fn load_textured_meshes(path: &Path) -> Result<Vec<TexturedMesh>, AssetError> {
    let (document, buffers, _images) = gltf::import(path)
        .map_err(|e| AssetError::GltfLoadFailed(path.to_path_buf(), e.to_string()))?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut meshes = Vec::new();

    for mesh in document.meshes() {
        let name = mesh.name().unwrap_or("unnamed").to_string();

        for primitive in mesh.primitives() {
            let Some(texture_path) = base_color_texture_path(&primitive, base_dir) else {
                warn!("Skipping primitive of '{}': no on-disk base color texture", name);
                continue;
            };

            let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

            let positions: Vec<Vec3> = reader
                .read_positions()
                .map(|iter| iter.map(Vec3::from).collect())
                .unwrap_or_default();

            let texture_coordinates: Vec<Vec2> = reader
                .read_tex_coords(0)
                .map(|tc| tc.into_f32().map(Vec2::from).collect())
                .unwrap_or_default();

            let indices: Vec<u32> = reader
                .read_indices()
                .map(|idx| idx.into_u32().collect())
                .unwrap_or_default();

            meshes.push(TexturedMesh {
                indices,
                positions,
                texture_coordinates,
                texture_path,
                id: next_mesh_id(),
                name: name.clone(),
            });
        }
    }

    debug!(
        "glTF '{}': {} textured meshes",
        path.display(),
        meshes.len()
    );

    Ok(meshes)
}

/// Resolve a primitive's base color texture to a path on disk, relative to
/// the glTF file's directory. Embedded images have no path and yield None.
fn base_color_texture_path(primitive: &gltf::Primitive, base_dir: &Path) -> Option<PathBuf> {
    let info = primitive
        .material()
        .pbr_metallic_roughness()
        .base_color_texture()?;

    match info.texture().source().source() {
        gltf::image::Source::Uri { uri, .. } if !uri.starts_with("data:") => {
            Some(base_dir.join(uri))
        }
        _ => None,
    }
}
