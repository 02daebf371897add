//! Image payloads picked from the gallery or captured by the camera.

use super::ValidationError;

/// Image bytes ready to be sent as a multipart part.
///
/// The picker/camera integration lives in the UI layer; by the time an image
/// reaches the core it is just a named blob with a MIME type.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Checks the upload is a non-empty `image/*` payload.
    pub fn validate(&self, field: &str) -> Result<(), ValidationError> {
        if self.bytes.is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        if !self.mime_type.starts_with("image/") {
            return Err(ValidationError::invalid_format(
                field,
                format!("expected an image, got {}", self.mime_type),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
