// crates/kaofix-core/src/run.rs

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::repair::{repair_file, FileReport, RepairOptions};
use crate::table::ReplacementTable;

#[derive(Debug)]
pub enum TargetOutcome {
    Missing(PathBuf),
    Repaired(FileReport),
    Failed { path: PathBuf, error: String },
}

impl TargetOutcome {
    pub fn path(&self) -> &Path {
        match self {
            TargetOutcome::Missing(p) => p,
            TargetOutcome::Repaired(r) => &r.path,
            TargetOutcome::Failed { path, .. } => path,
        }
    }
}

/// Walk `targets` in order. Nothing here aborts the walk: missing files and
/// per-file errors become outcomes and the next target is processed.
pub fn repair_targets<P: AsRef<Path>>(
    targets: &[P],
    table: &ReplacementTable,
    opts: &RepairOptions,
) -> Vec<TargetOutcome> {
    targets
        .iter()
        .map(|t| {
            let path = t.as_ref();
            if !path.exists() {
                warn!(path = %path.display(), "target missing");
                return TargetOutcome::Missing(path.to_path_buf());
            }
            match repair_file(path, table, opts) {
                Ok(r) => TargetOutcome::Repaired(r),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "repair failed");
                    TargetOutcome::Failed {
                        path: path.to_path_buf(),
                        error: e.to_string(),
                    }
                }
            }
        })
        .collect()
}
