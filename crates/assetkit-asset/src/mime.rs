//! MIME type inference from file extensions

use assetkit_core::path;

/// Returned for paths with no extension or an unregistered one
pub const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Look up a registered MIME type for an extension (without the dot).
///
/// Matching is case-sensitive: `png` is registered, `PNG` is not.
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let mime = match ext {
        // Text
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "csv" => "text/csv",
        "md" => "text/markdown",
        "xml" => "text/xml",
        "js" | "mjs" => "text/javascript",

        // Application
        "json" | "map" => "application/json",
        "wasm" => "application/wasm",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",

        // Images
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "otf" => "font/otf",

        // Audio / video
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "mp4" => "video/mp4",
        "webm" => "video/webm",

        _ => return None,
    };
    Some(mime)
}

/// Infer the MIME type of an asset path.
pub fn guess_mime_type(asset_path: &str) -> &'static str {
    path::extension(asset_path)
        .and_then(mime_for_extension)
        .unwrap_or(FALLBACK_MIME_TYPE)
}
