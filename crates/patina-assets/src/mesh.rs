use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::{Vec2, Vec3};

/// Unique identifier for a mesh record.
pub type MeshId = u64;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Allocate a new unique mesh ID.
pub fn next_mesh_id() -> MeshId {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Triangle geometry whose surface color comes from a UV-mapped texture
/// on disk. Consecutive index triples form triangles; indices may repeat,
/// so vertices are shared between triangles.
///
/// `texture_coordinates` runs parallel to `positions`: same length, same
/// index correspondence.
#[derive(Debug, Clone)]
pub struct TexturedMesh {
    pub indices: Vec<u32>,
    pub positions: Vec<Vec3>,
    pub texture_coordinates: Vec<Vec2>,
    pub texture_path: PathBuf,
    pub id: MeshId,
    pub name: String,
}

/// Triangle geometry carrying one RGB color per vertex instead of a
/// texture reference. `vertex_colors` runs parallel to `positions`, each
/// component in [0, 1].
#[derive(Debug, Clone)]
pub struct ColoredMesh {
    pub indices: Vec<u32>,
    pub positions: Vec<Vec3>,
    pub vertex_colors: Vec<Vec3>,
    pub id: MeshId,
    pub name: String,
}
