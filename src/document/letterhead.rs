//! Letterhead images embedded as data URIs.

use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64_STANDARD};
use tracing::warn;

/// MIME type for an image path, by extension. Unknown extensions are
/// treated as JPEG.
pub fn image_mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "image/jpeg",
    }
}

/// Reads an image without blocking the runtime and encodes it as a `data:`
/// URI.
///
/// A missing or unreadable file is logged and yields `None`; the letter is
/// then rendered without a letterhead.
pub async fn letterhead_data_uri(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    match tokio::fs::read(path).await {
        Ok(bytes) => Some(format!(
            "data:{};base64,{}",
            image_mime_type(path),
            BASE64_STANDARD.encode(bytes)
        )),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Letterhead image unavailable");
            None
        }
    }
}
