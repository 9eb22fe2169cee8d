// crates/kaofix-cli/src/logging.rs

use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. The console report itself goes to stdout.
pub fn init(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("init logging: {e}"))
}
