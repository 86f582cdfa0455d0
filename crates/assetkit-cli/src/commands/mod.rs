//! CLI command implementations

pub mod cat;
pub mod info;
pub mod list;

use anyhow::{Context, Result};
use assetkit_asset::AssetStore;
use std::ops::Deref;

/// The store a command reads from
pub enum LoadedStore {
    Embedded(&'static AssetStore),
    Directory(AssetStore),
}

impl Deref for LoadedStore {
    type Target = AssetStore;

    fn deref(&self) -> &AssetStore {
        match self {
            LoadedStore::Embedded(store) => store,
            LoadedStore::Directory(store) => store,
        }
    }
}

/// Load the embedded bundle, or the directory given with `--dir`
pub fn load_store(dir: Option<&str>) -> Result<LoadedStore> {
    match dir {
        Some(dir) => {
            log::debug!("Loading assets from directory {}", dir);
            let store = AssetStore::from_directory(dir)
                .with_context(|| format!("Failed to load assets from {}", dir))?;
            Ok(LoadedStore::Directory(store))
        }
        None => Ok(LoadedStore::Embedded(assetkit_ffi::store())),
    }
}
