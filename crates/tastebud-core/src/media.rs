//! Image uploads for user-submitted restaurants.

use async_trait::async_trait;

use crate::error::{Result, TastebudError};

/// Largest accepted image, in bytes (5 MB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// A local image picked by the user, not yet uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(file_name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Rejects oversized files and non-image MIME types.
    pub fn validate(&self) -> Result<()> {
        if self.bytes.len() > MAX_IMAGE_BYTES {
            return Err(TastebudError::validation(
                "image",
                "please select an image smaller than 5MB",
            ));
        }
        if !self.mime_type.starts_with("image/") {
            return Err(TastebudError::validation(
                "image",
                "please select an image file",
            ));
        }
        Ok(())
    }

    /// File extension taken from the original file name, if any.
    pub fn extension(&self) -> Option<&str> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
    }
}

/// Remote image storage.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Stores the image and returns its public URL.
    async fn upload(&self, image: &ImageUpload) -> Result<String>;
}
