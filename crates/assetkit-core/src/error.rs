//! Error types for assetkit

use thiserror::Error;

/// The main error type for asset bundle operations
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Invalid asset path: {0:?}")]
    InvalidPath(String),

    #[error("Duplicate asset path: {0}")]
    DuplicatePath(String),

    #[error("Asset bundle missing: {0}")]
    BundleMissing(String),

    #[error("Corrupt asset bundle: {0}")]
    CorruptBundle(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for assetkit operations
pub type Result<T> = std::result::Result<T, AssetError>;
