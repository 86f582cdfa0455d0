//! Asset path normalization
//!
//! Store keys are forward-slash relative paths with no leading slash.
//! Query paths get exactly one leading `/` stripped and are otherwise used
//! verbatim: no `..` resolution, no case folding.

use crate::{AssetError, Result};

/// Normalize a path received from a caller before lookup
pub fn normalize_query(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Normalize a path recorded while building a store
///
/// Converts `\` separators to `/` and strips one leading `/`.
pub fn normalize_entry(path: &str) -> Result<String> {
    let unified = path.replace('\\', "/");
    let key = normalize_query(&unified);
    if key.is_empty() || key.ends_with('/') {
        return Err(AssetError::InvalidPath(path.to_string()));
    }
    Ok(key.to_string())
}

/// Extension of the final path segment, without the dot
///
/// Returns `None` when the file name has no `.` or ends with one.
pub fn extension(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}
