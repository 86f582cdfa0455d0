//! Asset type definitions

use crate::mime::guess_mime_type;
use assetkit_core::ContentHash;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A single bundled file
///
/// MIME type and size are derived from the path and bytes on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    path: String,
    data: Cow<'static, [u8]>,
}

impl Asset {
    pub(crate) fn new(path: String, data: Cow<'static, [u8]>) -> Self {
        Self { path, data }
    }

    /// Normalized relative path, never with a leading slash
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn mime_type(&self) -> &'static str {
        guess_mime_type(&self.path)
    }

    /// SHA-256 of the asset's bytes
    pub fn hash(&self) -> ContentHash {
        ContentHash::from_bytes(&self.data)
    }

    /// Summary of this asset without its payload
    pub fn info(&self) -> AssetInfo {
        AssetInfo {
            path: self.path.clone(),
            mime_type: self.mime_type().to_string(),
            size: self.size() as u64,
            hash: self.hash().to_prefixed_hex(),
        }
    }
}

/// Serializable asset metadata, as reported by inspection tools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetInfo {
    pub path: String,
    pub mime_type: String,
    pub size: u64,
    pub hash: String,
}
