//! Immutable asset storage

use crate::types::{Asset, AssetInfo};
use assetkit_core::path::{normalize_entry, normalize_query};
use assetkit_core::{AssetError, Result};
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Read-only table of bundled assets keyed by normalized path
///
/// Built once and never mutated afterwards. Every query is total: a miss
/// is reported as `None` (or `false`), never as an error.
#[derive(Debug, Default)]
pub struct AssetStore {
    assets: BTreeMap<String, Asset>,
}

impl AssetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from explicit `(path, bytes)` entries
    ///
    /// Fails if any path is empty or two paths normalize to the same key.
    pub fn from_entries<I, P, D>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, D)>,
        P: AsRef<str>,
        D: Into<Cow<'static, [u8]>>,
    {
        let mut assets = BTreeMap::new();

        for (raw_path, data) in entries {
            let key = normalize_entry(raw_path.as_ref())?;
            if assets.contains_key(&key) {
                return Err(AssetError::DuplicatePath(key));
            }
            let data: Cow<'static, [u8]> = data.into();
            log::debug!("Registered asset {} ({} bytes)", key, data.len());
            assets.insert(key.clone(), Asset::new(key, data));
        }

        log::info!("Asset store ready: {} asset(s)", assets.len());
        Ok(Self { assets })
    }

    /// Build a store from a bundle compiled in with `rust-embed`
    pub fn from_embed<E: RustEmbed>() -> Result<Self> {
        let mut entries = Vec::new();

        for name in E::iter() {
            let file = E::get(&name).ok_or_else(|| {
                AssetError::CorruptBundle(format!("{} is indexed but has no content", name))
            })?;
            entries.push((name, file.data));
        }

        Self::from_entries(entries)
    }

    /// Build a store by walking a directory tree on disk
    pub fn from_directory<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(AssetError::BundleMissing(root.display().to_string()));
        }

        let mut entries = Vec::new();
        Self::scan_directory(root, root, &mut entries)?;
        Self::from_entries(entries)
    }

    fn scan_directory(
        root: &Path,
        dir: &Path,
        entries: &mut Vec<(String, Vec<u8>)>,
    ) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            let file_type = entry.file_type()?;

            // Symlinked directories are not followed; symlinked files are read
            if file_type.is_dir() {
                Self::scan_directory(root, &path, entries)?;
                continue;
            }
            if !file_type.is_file() && !path.is_file() {
                log::debug!("Skipping {}", path.display());
                continue;
            }

            let relative = path
                .strip_prefix(root)
                .ok()
                .and_then(|p| p.to_str())
                .ok_or_else(|| AssetError::InvalidPath(path.display().to_string()))?;
            let data = fs::read(&path)?;
            entries.push((relative.to_string(), data));
        }

        Ok(())
    }

    /// Look up an asset; the composite of path, MIME type, size and data
    pub fn get(&self, path: &str) -> Option<&Asset> {
        self.assets.get(normalize_query(path))
    }

    /// Look up an asset, treating a miss as an error
    pub fn require(&self, path: &str) -> Result<&Asset> {
        self.get(path)
            .ok_or_else(|| AssetError::NotFound(normalize_query(path).to_string()))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Raw bytes of an asset. An empty asset yields `Some(&[])`.
    pub fn data(&self, path: &str) -> Option<&[u8]> {
        self.get(path).map(Asset::data)
    }

    pub fn mime_type(&self, path: &str) -> Option<&'static str> {
        self.get(path).map(Asset::mime_type)
    }

    pub fn size(&self, path: &str) -> Option<usize> {
        self.get(path).map(Asset::size)
    }

    pub fn info(&self, path: &str) -> Option<AssetInfo> {
        self.get(path).map(Asset::info)
    }

    /// All asset paths in sorted order
    pub fn paths(&self) -> impl Iterator<Item = &str> + '_ {
        self.assets.keys().map(String::as_str)
    }

    /// Iterate all assets in path order
    pub fn iter(&self) -> impl Iterator<Item = &Asset> + '_ {
        self.assets.values()
    }

    /// Get the number of assets
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
