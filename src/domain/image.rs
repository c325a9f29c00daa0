//! Image input validation and data URI encoding

use crate::error::{DaybookError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fs;
use std::path::Path;

/// Largest accepted image file (5 MB)
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

/// Guess a MIME type from a file extension
pub fn mime_from_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        "heic" => "image/heic",
        "ico" => "image/x-icon",
        _ => return None,
    };
    Some(mime)
}

/// Check type and size of an image before it is read, returning the MIME type
pub fn validate_image(mime: Option<&str>, size: u64) -> Result<&str> {
    let Some(mime) = mime.filter(|m| m.starts_with("image/")) else {
        return Err(DaybookError::Validation(
            "Please select an image file".to_string(),
        ));
    };
    if size > MAX_IMAGE_BYTES {
        return Err(DaybookError::Validation(
            "Image size should be less than 5MB".to_string(),
        ));
    }
    Ok(mime)
}

/// Encode image bytes as a `data:` URI
pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Turn an `--image` argument into an image reference.
///
/// URLs pass through untouched. Data URIs are decoded to check type and size,
/// then kept as given. Anything else is read as a local file, validated and
/// inlined.
pub fn resolve_image(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DaybookError::Validation(
            "Please upload an image".to_string(),
        ));
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Ok(trimmed.to_string());
    }
    if let Some(rest) = trimmed.strip_prefix("data:") {
        let (mime, payload) = rest.split_once(";base64,").ok_or_else(|| {
            DaybookError::Validation("Image data URI must be base64 encoded".to_string())
        })?;
        validate_image(Some(mime), 0)?;
        let bytes = STANDARD.decode(payload).map_err(|e| {
            DaybookError::Validation(format!("Invalid image data URI: {}", e))
        })?;
        validate_image(Some(mime), bytes.len() as u64)?;
        return Ok(trimmed.to_string());
    }

    let path = Path::new(trimmed);
    let metadata = fs::metadata(path).map_err(|e| {
        DaybookError::Validation(format!("Cannot read image '{}': {}", path.display(), e))
    })?;
    let mime = validate_image(mime_from_path(path), metadata.len())?;

    let bytes = fs::read(path)?;
    Ok(to_data_uri(mime, &bytes))
}
