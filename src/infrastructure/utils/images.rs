use std::{io, path::Path};

use derive_more::Display;
use tokio::fs;

/// Validates an uploaded image file for extension, size, emptiness, and
/// content type, returning its bytes.
///
/// - `original_filename`: the client-supplied file name
/// - `file_path`: the temp file written by the multipart extractor
/// - `max_size`: max size in bytes
pub async fn read_image_file(
    original_filename: &str,
    file_path: &Path,
    max_size: usize
) -> Result<Vec<u8>, ImageError> {
    // 1. Extension check - common raster image extensions
    let allowed_exts = ["jpg", "jpeg", "png", "gif", "webp", "avif"];
    let ext = Path::new(original_filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());
    if ext.as_deref().map_or(true, |e| !allowed_exts.contains(&e)) {
        return Err(ImageError::InvalidExtension);
    }

    // 2. File size check
    let metadata = fs::metadata(file_path)
        .await
        .map_err(ImageError::IoError)?;
    if metadata.len() > max_size as u64 {
        return Err(ImageError::FileTooLarge);
    }

    // 3. Read file content
    let bytes = fs::read(file_path)
        .await
        .map_err(ImageError::IoError)?;
    if bytes.is_empty() {
        return Err(ImageError::EmptyFile);
    }

    // 4. MIME detection (tolerant mode)
    if let Some(kind) = infer::get(&bytes) {
        if !kind.mime_type().starts_with("image/") {
            return Err(ImageError::InvalidType(kind.mime_type().to_string()));
        }
    }

    Ok(bytes)
}

/// All errors related to image file handling.
#[derive(Debug, Display)]
pub enum ImageError {
    #[display("Invalid file extension. Only image files are allowed.")]
    InvalidExtension,

    #[display("Invalid content type: {_0}")]
    InvalidType(String),

    #[display("File is empty.")]
    EmptyFile,

    #[display("File size exceeds maximum allowed.")]
    FileTooLarge,

    #[display("Failed to read file: {_0}")]
    IoError(io::Error),
}
