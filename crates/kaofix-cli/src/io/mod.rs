// crates/kaofix-cli/src/io/mod.rs

pub mod config_file;
pub mod report;
