//! `assetkit info`

use super::load_store;
use anyhow::Result;
use assetkit_asset::AssetInfo;

pub fn run(path: &str, dir: Option<&str>, format: &str) -> Result<()> {
    let store = load_store(dir)?;
    let info = store.require(path)?.info();
    println!("{}", render(&info, format)?);
    Ok(())
}

fn render(info: &AssetInfo, format: &str) -> Result<String> {
    if format == "json" {
        return Ok(serde_json::to_string_pretty(info)?);
    }

    Ok(format!(
        "Asset: {}\n  MIME type: {}\n  Size: {} bytes\n  Hash: {}",
        info.path, info.mime_type, info.size, info.hash
    ))
}
