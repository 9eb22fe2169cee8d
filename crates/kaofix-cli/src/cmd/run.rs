// crates/kaofix-cli/src/cmd/run.rs
//
// Default pipeline: banner, self-test, every target in order, banner.
// Per-file problems are reported and never change the exit status.

use std::path::PathBuf;

use clap::Args;
use kaofix_core::repair_targets;
use kaofix_core::selftest::run_self_test;
use tracing::info;

use crate::cmd::args::EncodingArg;
use crate::io::{config_file, report};

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// TOML config with `targets`, `replacements`, `backup_suffix`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Encoding used for the self-test round trip
    #[arg(long, value_enum, default_value_t = EncodingArg::Utf8)]
    pub encoding: EncodingArg,

    /// Report what would change without writing anything
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

pub fn run(args: RunArgs) -> anyhow::Result<()> {
    let cfg = config_file::load_config(args.config.as_deref())?;
    let table = cfg.table()?;
    info!(targets = cfg.targets.len(), entries = table.len(), "starting run");

    report::print_banner();

    let st = run_self_test(args.encoding.into());
    report::print_self_test(&st);
    println!();

    let outcomes = repair_targets(&cfg.targets, &table, &cfg.repair_options(args.dry_run));
    for o in &outcomes {
        report::print_outcome(o, args.dry_run);
    }

    println!("done.");
    Ok(())
}
