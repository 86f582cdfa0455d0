//! assetkit Core - Foundational types for the embedded asset shim
//!
//! This crate provides the types that the other assetkit crates depend on:
//! - `ContentHash` - SHA-256 based content hashing
//! - Asset path normalization helpers
//! - Error types and Result alias

mod error;
mod hash;
pub mod path;

pub use error::{AssetError, Result};
pub use hash::ContentHash;
