// crates/kaofix-cli/src/io/config_file.rs

use std::path::Path;

use anyhow::{Context, Result};
use kaofix_core::validate::validate_config;
use kaofix_core::Config;

/// Load a TOML config, or the built-in defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => Config::load(p).with_context(|| format!("load config {}", p.display())),
        None => Ok(Config::default()),
    }
}

/// Re-validate after command-line overrides have been applied.
pub fn check(cfg: &Config) -> Result<()> {
    validate_config(cfg).context("invalid configuration")
}
