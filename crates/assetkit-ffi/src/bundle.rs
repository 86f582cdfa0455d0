//! The asset bundle compiled into the shim
//!
//! The bundle directory is chosen at build time through
//! `ASSETKIT_BUNDLE_DIR` (see `.cargo/config.toml`). The process-wide store
//! is built from it exactly once, on first use.

use assetkit_asset::AssetStore;
use once_cell::sync::Lazy;
use rust_embed::RustEmbed;

/// Environment variable holding the `env_logger` filter
pub const LOG_ENV: &str = "ASSETKIT_LOG";

#[derive(RustEmbed)]
#[folder = "$ASSETKIT_BUNDLE_DIR"]
struct Bundle;

static STORE: Lazy<AssetStore> = Lazy::new(|| {
    init_logging();
    match AssetStore::from_embed::<Bundle>() {
        Ok(store) => store,
        Err(err) => {
            // A broken bundle must never look like an empty one
            log::error!("Failed to load embedded asset bundle: {}", err);
            std::process::abort();
        }
    }
});

/// The process-wide store, built on first call
pub fn store() -> &'static AssetStore {
    &STORE
}

/// Install `env_logger`, filtered by `ASSETKIT_LOG` (default `warn`).
///
/// Does nothing if the host process already installed a logger.
pub fn init_logging() {
    let env = env_logger::Env::new().filter_or(LOG_ENV, "warn");
    let _ = env_logger::Builder::from_env(env).try_init();
}
