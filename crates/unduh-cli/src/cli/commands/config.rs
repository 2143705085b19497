//! `unduh config` – show where configuration lives and what is in effect.

use anyhow::Result;
use std::path::Path;
use unduh_core::config::{self, UnduhConfig};

pub fn run_config(explicit: Option<&Path>, cfg: &UnduhConfig) -> Result<()> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => config::config_path()?,
    };
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
