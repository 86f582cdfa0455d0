//! `assetkit cat`

use super::load_store;
use anyhow::Result;
use std::io::{self, Write};

pub fn run(path: &str, dir: Option<&str>) -> Result<()> {
    let store = load_store(dir)?;
    let asset = store.require(path)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(asset.data())?;
    stdout.flush()?;
    Ok(())
}
