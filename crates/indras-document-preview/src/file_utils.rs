//! Icon file loading for display in the webview.

use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// MIME type for an image path, by extension.
pub fn image_mime(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Encode raw bytes as a data URL.
pub fn embedded_data_url(mime: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(data))
}

/// Convert a local file path to a data URL for display in the webview.
///
/// Relative paths resolve against the current directory.
pub fn load_image_as_data_url(path: impl AsRef<Path>) -> Option<String> {
    let path = path.as_ref();
    let full_path: PathBuf = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().ok()?.join(path)
    };

    let data = std::fs::read(&full_path).ok()?;
    Some(embedded_data_url(image_mime(&full_path), &data))
}
