// crates/kaofix-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;
mod logging;

#[derive(Parser)]
#[command(name = "kaofix-cli")]
#[command(about = "Kaomoji asset repair: encoding self-test + literal fix table", long_about = None)]
pub struct Cli {
    /// Raise log verbosity on stderr (-v debug, -vv trace). RUST_LOG wins when set.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Self-test, then repair every configured target (default)
    Run(cmd::run::RunArgs),

    /// Encode/decode the sample kaomoji and report round-trip fidelity
    Selftest(cmd::selftest::SelftestArgs),

    /// Repair the given files (or the configured targets)
    Repair(cmd::repair::RepairArgs),

    /// Print the effective replacement table
    Table(cmd::table::TableArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.cmd.unwrap_or_else(|| Commands::Run(cmd::run::RunArgs::default())) {
        Commands::Run(args) => cmd::run::run(args),
        Commands::Selftest(args) => cmd::selftest::run(args),
        Commands::Repair(args) => cmd::repair::run(args),
        Commands::Table(args) => cmd::table::run(args),
    }
}
