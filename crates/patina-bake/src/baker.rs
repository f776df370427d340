use glam::Vec3;
use patina_assets::{TextureImage, TexturedMesh};

use crate::sampler;

/// How vertex colors are derived from the texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Each vertex samples the texture at its own UV.
    PerVertex,
    /// All three vertices of a triangle share the average of the three
    /// samples, giving every face a single flat color.
    PerFace,
}

impl ColorMode {
    /// Map the `solid_face_color` configuration flag onto a mode.
    pub fn from_solid_face_color(solid: bool) -> Self {
        if solid {
            Self::PerFace
        } else {
            Self::PerVertex
        }
    }
}

/// Sample the texture once per vertex, at that vertex's own UV.
pub fn bake_per_vertex(mesh: &TexturedMesh, image: &TextureImage) -> Vec<Vec3> {
    mesh.texture_coordinates
        .iter()
        .map(|&uv| sampler::sample(image, uv))
        .collect()
}

/// Sample the texture at each triangle's three UVs and assign the averaged
/// color to all three vertices.
///
/// Triangles are processed in index order; a vertex shared by several
/// triangles keeps the color of the last one that touched it. Vertices not
/// referenced by any triangle stay black. Trailing indices that do not
/// form a full triple are ignored.
pub fn bake_per_face(mesh: &TexturedMesh, image: &TextureImage) -> Vec<Vec3> {
    let mut colors = vec![Vec3::ZERO; mesh.positions.len()];

    for tri in mesh.indices.chunks_exact(3) {
        let c0 = sampler::sample(image, mesh.texture_coordinates[tri[0] as usize]);
        let c1 = sampler::sample(image, mesh.texture_coordinates[tri[1] as usize]);
        let c2 = sampler::sample(image, mesh.texture_coordinates[tri[2] as usize]);

        let avg = (c0 + c1 + c2) / 3.0;

        for &index in tri {
            colors[index as usize] = avg;
        }
    }

    colors
}
