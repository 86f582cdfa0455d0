//! assetkit Asset - Immutable asset store
//!
//! This crate builds a read-only table of assets (path + bytes) once, from
//! an embedded bundle, a directory or explicit entries, and answers point
//! queries about it. Queries never mutate the store, so a built store can
//! be shared across threads freely.

mod mime;
mod store;
mod types;

pub use mime::{guess_mime_type, mime_for_extension, FALLBACK_MIME_TYPE};
pub use store::AssetStore;
pub use types::{Asset, AssetInfo};
