//! Patina - bakes model textures into per-vertex colors
//!
//! Loads the textured meshes of a glTF model, samples each mesh's texture
//! at the vertex UVs, and reports the resulting vertex-colored meshes.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use patina_assets::load_textured_meshes;
use patina_bake::{convert_meshes, ColorMode};

mod settings;

use settings::Settings;

/// Bake the textures referenced by a model into vertex colors
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Model file (.gltf or .glb) to convert
    model: PathBuf,

    /// Average each triangle's samples into a single face color,
    /// overriding the settings file
    #[arg(long)]
    solid_face_color: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let args = Args::parse();
    let settings = Settings::load();

    let mode =
        ColorMode::from_solid_face_color(args.solid_face_color || settings.graphics.solid_face_color);

    let meshes = load_textured_meshes(&args.model)
        .with_context(|| format!("Failed to load model {:?}", args.model))?;
    info!("Loaded {} textured meshes from {:?}", meshes.len(), args.model);

    let colored = convert_meshes(&meshes, mode).context("Failed to bake vertex colors")?;

    for mesh in &colored {
        info!(
            "Mesh '{}': {} vertices, {} triangles baked ({:?})",
            mesh.name,
            mesh.positions.len(),
            mesh.indices.len() / 3,
            mode
        );
    }

    Ok(())
}
