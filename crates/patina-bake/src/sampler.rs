use glam::{Vec2, Vec3};
use patina_assets::TextureImage;

/// Sample the texel under a UV coordinate, as an RGB color in [0, 1].
///
/// Both components wrap into [0, 1) via `x - floor(x)`, so coordinates
/// outside the unit square tile the texture. v = 0 addresses the bottom
/// scanline while the buffer stores rows top-down, hence the row flip.
pub fn sample(image: &TextureImage, uv: Vec2) -> Vec3 {
    let u = uv.x - uv.x.floor();
    let v = uv.y - uv.y.floor();

    let width = image.width as usize;
    let height = image.height as usize;

    // The scaled coordinate can hit width/height exactly in floating
    // point; the modulo folds it back in range.
    let px = (u * image.width as f32) as usize % width;
    let py_raw = (v * image.height as f32) as usize % height;
    let py = height - 1 - py_raw;

    let idx = (py * width + px) * 3;
    let texel = &image.data[idx..idx + 3];

    Vec3::new(
        texel[0] as f32 / 255.0,
        texel[1] as f32 / 255.0,
        texel[2] as f32 / 255.0,
    )
}
