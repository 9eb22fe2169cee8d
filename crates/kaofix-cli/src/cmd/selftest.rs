// crates/kaofix-cli/src/cmd/selftest.rs

use clap::Args;
use kaofix_core::selftest::run_self_test;

use crate::cmd::args::EncodingArg;
use crate::io::report;

#[derive(Args, Debug, Default)]
pub struct SelftestArgs {
    /// Encoding used for the round trip
    #[arg(long, value_enum, default_value_t = EncodingArg::Utf8)]
    pub encoding: EncodingArg,
}

pub fn run(args: SelftestArgs) -> anyhow::Result<()> {
    let rep = run_self_test(args.encoding.into());
    report::print_self_test(&rep);
    Ok(())
}
