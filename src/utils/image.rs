use image::{imageops::FilterType, ImageFormat};
use std::path::{Path, PathBuf};

pub const THUMB_WIDTH: u32 = 60;
pub const THUMB_HEIGHT: u32 = 40;

/// Decodes `bytes`, shrinks the image to fit the thumbnail box and writes it
/// as PNG to `path`.
pub async fn save_thumbnail(bytes: Vec<u8>, path: &Path) -> Result<(), String> {
    tokio::task::spawn_blocking({
        let path: PathBuf = path.to_path_buf();
        move || {
            let img = image::load_from_memory(&bytes).map_err(|e| format!("decode failed: {}", e))?;
            let thumb = img.resize(THUMB_WIDTH, THUMB_HEIGHT, FilterType::Lanczos3);

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
            }
            thumb
                .save_with_format(&path, ImageFormat::Png)
                .map_err(|e| e.to_string())?;
            Ok::<(), String>(())
        }
    })
    .await
    .map_err(|e| format!("spawn failed: {:?}", e))??;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgba};
    use std::io::Cursor;
    use tempfile::TempDir;

    #[tokio::test]
    async fn shrinks_to_fit_box() {
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(320, 160, Rgba([200, 16, 46, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();

        let dir = TempDir::new().unwrap();
        let out = dir.path().join("thumb.png");
        save_thumbnail(bytes, &out).await.unwrap();

        let thumb = image::open(&out).unwrap();
        assert_eq!(thumb.width(), THUMB_WIDTH);
        assert_eq!(thumb.height(), 30);
    }

    #[tokio::test]
    async fn rejects_non_images() {
        let dir = TempDir::new().unwrap();
        let err = save_thumbnail(b"<html>".to_vec(), &dir.path().join("x.png")).await;
        assert!(err.is_err());
    }
}
