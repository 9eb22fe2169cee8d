// crates/kaofix-cli/src/cmd/repair.rs

use std::path::PathBuf;

use clap::Args;
use kaofix_core::repair_targets;

use crate::io::{config_file, report};

#[derive(Args, Debug)]
pub struct RepairArgs {
    /// Files to repair; defaults to the configured targets
    pub paths: Vec<PathBuf>,

    /// TOML config with `targets`, `replacements`, `backup_suffix`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report what would change without writing anything
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Override the backup suffix (e.g. ".orig")
    #[arg(long)]
    pub backup_suffix: Option<String>,
}

pub fn run(args: RepairArgs) -> anyhow::Result<()> {
    let mut cfg = config_file::load_config(args.config.as_deref())?;
    if !args.paths.is_empty() {
        cfg.targets = args.paths;
    }
    if let Some(s) = args.backup_suffix {
        cfg.backup_suffix = s;
    }
    config_file::check(&cfg)?;

    let table = cfg.table()?;
    let outcomes = repair_targets(&cfg.targets, &table, &cfg.repair_options(args.dry_run));
    for o in &outcomes {
        report::print_outcome(o, args.dry_run);
    }
    report::print_summary(&outcomes);
    Ok(())
}
