use std::path::Path;

use crate::error::AssetError;

/// A decoded texture held as a tightly packed RGB byte buffer.
/// Rows are stored top to bottom; `data.len() == width * height * 3`.
#[derive(Debug, Clone)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Load an image file and return it as an RGB8 TextureImage.
/// Any alpha channel in the source is dropped.
pub fn load_texture(path: &Path) -> Result<TextureImage, AssetError> {
    if !path.exists() {
        return Err(AssetError::NotFound(path.to_path_buf()));
    }

    let img = image::open(path)
        .map_err(|e| AssetError::TextureLoadFailed(path.to_path_buf(), e.to_string()))?;

    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();

    Ok(TextureImage {
        width,
        height,
        data: rgb.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn missing_file_returns_not_found() {
        let result = load_texture(Path::new("/nonexistent/missing.png"));
        match result.unwrap_err() {
            AssetError::NotFound(_) => {}
            other => panic!("expected NotFound, got: {:?}", other),
        }
    }

    #[test]
    fn undecodable_file_returns_load_failed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        fs::write(&path, b"not an image at all").unwrap();

        let result = load_texture(&path);
        match result.unwrap_err() {
            AssetError::TextureLoadFailed(_, _) => {}
            other => panic!("expected TextureLoadFailed, got: {:?}", other),
        }
    }

    #[test]
    fn rgba_source_is_flattened_to_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgba.png");
        let mut img = image::RgbaImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgba([10, 20, 30, 128]));
        img.put_pixel(1, 0, image::Rgba([40, 50, 60, 0]));
        img.save(&path).unwrap();

        let tex = load_texture(&path).unwrap();
        assert_eq!(tex.width, 2);
        assert_eq!(tex.height, 1);
        assert_eq!(tex.data, vec![10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn buffer_length_matches_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solid.png");
        image::RgbImage::from_pixel(3, 5, image::Rgb([7, 7, 7]))
            .save(&path)
            .unwrap();

        let tex = load_texture(&path).unwrap();
        assert_eq!(tex.data.len(), (tex.width * tex.height * 3) as usize);
    }
}
