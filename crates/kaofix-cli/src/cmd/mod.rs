// crates/kaofix-cli/src/cmd/mod.rs

pub mod args;
pub mod repair;
pub mod run;
pub mod selftest;
pub mod table;
