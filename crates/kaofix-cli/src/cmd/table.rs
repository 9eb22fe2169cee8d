// crates/kaofix-cli/src/cmd/table.rs

use std::path::PathBuf;

use clap::Args;

use crate::io::{config_file, report};

#[derive(Args, Debug)]
pub struct TableArgs {
    /// TOML config with `targets`, `replacements`, `backup_suffix`
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: TableArgs) -> anyhow::Result<()> {
    let cfg = config_file::load_config(args.config.as_deref())?;
    let table = cfg.table()?;
    report::print_table(&table);
    Ok(())
}
