//! `urlfeat config` – show the effective configuration.

use anyhow::Result;
use urlfeat_core::config::{self, UrlfeatConfig};

pub fn run_show_config(cfg: &UrlfeatConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
