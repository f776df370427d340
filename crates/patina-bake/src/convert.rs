use tracing::debug;

use patina_assets::{load_texture, ColoredMesh, TexturedMesh};

use crate::baker::{self, ColorMode};
use crate::error::BakeError;

/// Convert one textured mesh into a vertex-colored mesh.
///
/// The mesh is validated before any image I/O happens; the texture is
/// loaded for this mesh alone and dropped again once its colors are baked.
pub fn convert_mesh(mesh: &TexturedMesh, mode: ColorMode) -> Result<ColoredMesh, BakeError> {
    validate(mesh)?;

    let image = load_texture(&mesh.texture_path)?;

    let vertex_colors = match mode {
        ColorMode::PerVertex => baker::bake_per_vertex(mesh, &image),
        ColorMode::PerFace => baker::bake_per_face(mesh, &image),
    };

    debug!(
        "Baked {} vertex colors for mesh '{}' ({:?})",
        vertex_colors.len(),
        mesh.name,
        mode
    );

    Ok(ColoredMesh {
        indices: mesh.indices.clone(),
        positions: mesh.positions.clone(),
        vertex_colors,
        id: mesh.id,
        name: mesh.name.clone(),
    })
}

/// Convert an ordered batch of textured meshes, preserving order.
///
/// Conversions are independent of each other, but the first mesh that
/// fails validation or texture loading aborts the whole batch.
pub fn convert_meshes(
    meshes: &[TexturedMesh],
    mode: ColorMode,
) -> Result<Vec<ColoredMesh>, BakeError> {
    meshes.iter().map(|mesh| convert_mesh(mesh, mode)).collect()
}

fn validate(mesh: &TexturedMesh) -> Result<(), BakeError> {
    if mesh.texture_path.as_os_str().is_empty() {
        return Err(BakeError::MissingTexture(mesh.name.clone()));
    }

    if mesh.positions.len() != mesh.texture_coordinates.len() {
        return Err(BakeError::AttributeMismatch {
            name: mesh.name.clone(),
            positions: mesh.positions.len(),
            texture_coordinates: mesh.texture_coordinates.len(),
        });
    }

    if let Some(&index) = mesh
        .indices
        .iter()
        .find(|&&index| index as usize >= mesh.positions.len())
    {
        return Err(BakeError::IndexOutOfRange {
            name: mesh.name.clone(),
            index,
            vertices: mesh.positions.len(),
        });
    }

    Ok(())
}
