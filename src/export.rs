//! PNG export and data-URL encoding for the committed layer.

use base64::{Engine as _, engine::general_purpose};

use crate::draw::Surface;
use crate::error::SketchError;

const PNG_MIME: &str = "data:image/png";
const DOWNLOAD_MIME: &str = "data:application/octet-stream";

/// Encodes a surface as a `data:image/png;base64,…` URL.
pub fn image_url(surface: &Surface) -> Result<String, SketchError> {
    let bytes = surface.png_bytes()?;
    Ok(format!(
        "{PNG_MIME};base64,{}",
        general_purpose::STANDARD.encode(bytes)
    ))
}

/// Encodes a surface as a download URL.
///
/// Same PNG payload as [`image_url`], with the MIME marker rewritten to a
/// generic octet-stream type so browsers offer a file download instead of
/// displaying the image inline.
pub fn download_url(surface: &Surface) -> Result<String, SketchError> {
    Ok(to_download_url(&image_url(surface)?))
}

/// Rewrites a PNG data URL's MIME marker to the download type.
///
/// URLs that are not PNG data URLs pass through unchanged.
pub fn to_download_url(url: &str) -> String {
    match url.strip_prefix(PNG_MIME) {
        Some(rest) => format!("{DOWNLOAD_MIME}{rest}"),
        None => url.to_string(),
    }
}
