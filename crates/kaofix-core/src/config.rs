// crates/kaofix-core/src/config.rs
//
// Run configuration. Defaults reproduce the built-in asset list and table;
// a TOML file may override any subset of the keys.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{KaoError, Result};
use crate::repair::{RepairOptions, DEFAULT_BACKUP_SUFFIX};
use crate::table::{default_replacements, Replacement, ReplacementTable};
use crate::validate::validate_config;

pub const DEFAULT_TARGETS: [&str; 3] = [
    "src/assets/kaomoji.js",
    "src/assets/kaomoji_new.js",
    "src/assets/kaomoji_all_in_one.js",
];

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub backup_suffix: String,
    pub targets: Vec<PathBuf>,
    pub replacements: Vec<Replacement>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
            targets: DEFAULT_TARGETS.into_iter().map(PathBuf::from).collect(),
            replacements: default_replacements(),
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(s).map_err(|e| KaoError::Config(e.to_string()))?;
        validate_config(&cfg)?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path).map_err(|e| KaoError::io(path, e))?;
        let cfg: Config = toml::from_str(&s)
            .map_err(|e| KaoError::Config(format!("{}: {e}", path.display())))?;
        validate_config(&cfg)?;
        Ok(cfg)
    }

    pub fn table(&self) -> Result<ReplacementTable> {
        ReplacementTable::new(self.replacements.clone())
    }

    pub fn repair_options(&self, dry_run: bool) -> RepairOptions {
        RepairOptions {
            backup_suffix: self.backup_suffix.clone(),
            dry_run,
        }
    }
}
