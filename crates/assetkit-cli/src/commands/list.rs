//! `assetkit list`

use super::load_store;
use anyhow::Result;
use assetkit_asset::AssetStore;

pub fn run(dir: Option<&str>, format: &str) -> Result<()> {
    let store = load_store(dir)?;
    println!("{}", render(&store, format)?);
    Ok(())
}

fn render(store: &AssetStore, format: &str) -> Result<String> {
    if format == "json" {
        let paths: Vec<&str> = store.paths().collect();
        return Ok(serde_json::to_string_pretty(&paths)?);
    }

    if store.is_empty() {
        return Ok("No assets in bundle".to_string());
    }

    let mut out = format!("{} asset(s):\n", store.len());
    for asset in store.iter() {
        out.push_str(&format!(
            "\n  {} ({}, {} bytes)",
            asset.path(),
            asset.mime_type(),
            asset.size()
        ));
    }
    Ok(out)
}
