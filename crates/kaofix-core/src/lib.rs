pub mod error;
pub mod validate;

pub mod checksum;
pub mod codec;
pub mod config;
pub mod repair;
pub mod run;
pub mod scan;
pub mod selftest;
pub mod table;

pub use crate::config::Config;
pub use crate::error::{KaoError, Result};
pub use crate::repair::{repair_file, FileReport, RepairOptions};
pub use crate::run::{repair_targets, TargetOutcome};
pub use crate::table::{Replacement, ReplacementTable};
