//! Image store that keeps uploads in a local directory.
//!
//! Files are named `{uuid}.{ext}` and addressed by `file://` URLs.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use tastebud_core::TastebudError;
use tastebud_core::error::Result;
use tastebud_core::media::{ImageStore, ImageUpload};

/// Infers the MIME type from a filename extension using `mime_guess`.
pub fn infer_mime_type(filename: &str) -> String {
    mime_guess::from_path(filename)
        .first_or_octet_stream()
        .to_string()
}

/// Reads an image from disk into an [`ImageUpload`].
pub async fn read_image(path: &Path) -> Result<ImageUpload> {
    let bytes = fs::read(path)
        .await
        .map_err(|e| TastebudError::io(format!("Failed to read image '{}': {}", path.display(), e)))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mime_type = infer_mime_type(&file_name);
    Ok(ImageUpload::new(file_name, mime_type, bytes))
}

pub struct LocalImageStore {
    dir: PathBuf,
}

impl LocalImageStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn extension_for(image: &ImageUpload) -> String {
        mime_guess::get_mime_extensions_str(&image.mime_type)
            .and_then(|exts| exts.first())
            .map(|ext| ext.to_string())
            .or_else(|| image.extension().map(str::to_lowercase))
            .unwrap_or_else(|| "img".to_string())
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn upload(&self, image: &ImageUpload) -> Result<String> {
        image.validate()?;

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| TastebudError::io(format!("Failed to create image directory: {}", e)))?;

        let file_name = format!("{}.{}", Uuid::new_v4(), Self::extension_for(image));
        let path = self.dir.join(&file_name);
        fs::write(&path, &image.bytes)
            .await
            .map_err(|e| TastebudError::io(format!("Failed to write image: {}", e)))?;

        tracing::info!("Stored image {} ({} bytes)", file_name, image.bytes.len());
        Ok(format!("file://{}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_infer_mime_type() {
        assert_eq!(infer_mime_type("dish.png"), "image/png");
        assert_eq!(infer_mime_type("menu.txt"), "text/plain");
    }

    #[tokio::test]
    async fn test_upload_writes_uuid_named_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalImageStore::new(temp_dir.path().join("images"));

        let url = store
            .upload(&ImageUpload::new("dish.png", "image/png", vec![1, 2, 3]))
            .await
            .unwrap();

        let path = PathBuf::from(url.trim_start_matches("file://"));
        assert!(path.starts_with(temp_dir.path().join("images")));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
        assert_eq!(std::fs::read(path).unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_upload_rejects_non_image() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalImageStore::new(temp_dir.path().to_path_buf());

        let err = store
            .upload(&ImageUpload::new("notes.txt", "text/plain", vec![0]))
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_read_image_guesses_mime() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plate.jpg");
        std::fs::write(&path, [0xff, 0xd8]).unwrap();

        let image = read_image(&path).await.unwrap();
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.file_name, "plate.jpg");
    }
}
