// crates/kaofix-core/src/repair.rs
//
// Per-file repair.
//
// Order of effects when the table changes something:
//   1. backup <- original bytes, re-read and crc32-checked
//   2. target <- repaired text
// A failure at any step returns Err before the next one runs, so the target is
// never rewritten without a verified backup beside it.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::checksum::crc32;
use crate::codec::TextEncoding;
use crate::error::{KaoError, Result};
use crate::scan::{scan, FlaggedLine};
use crate::table::{AppliedFix, ReplacementTable};

pub const DEFAULT_BACKUP_SUFFIX: &str = ".backup";

#[derive(Clone, Debug)]
pub struct RepairOptions {
    pub backup_suffix: String,
    /// Compute the report but leave the file system untouched.
    pub dry_run: bool,
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self {
            backup_suffix: DEFAULT_BACKUP_SUFFIX.to_string(),
            dry_run: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub changed: bool,
    /// Set only when a backup was actually written.
    pub backup_path: Option<PathBuf>,
    pub fixes: Vec<AppliedFix>,
    pub flagged: Vec<FlaggedLine>,
    pub crc_before: u32,
    pub crc_after: u32,
}

pub fn backup_path_for(path: &Path, suffix: &str) -> PathBuf {
    let mut s = OsString::from(path.as_os_str());
    s.push(suffix);
    PathBuf::from(s)
}

/// Repaired text plus what happened to it; no I/O.
#[derive(Clone, Debug)]
pub struct TextRepair {
    pub text: String,
    pub fixes: Vec<AppliedFix>,
    pub flagged: Vec<FlaggedLine>,
}

impl TextRepair {
    pub fn changed(&self, original: &str) -> bool {
        self.text != original
    }
}

pub fn repair_text(original: &str, table: &ReplacementTable) -> TextRepair {
    let (text, fixes) = table.apply(original);
    // scanned after substitution: only what the table left behind is reported
    let flagged = scan(&text);
    TextRepair {
        text,
        fixes,
        flagged,
    }
}

pub fn repair_file(
    path: &Path,
    table: &ReplacementTable,
    opts: &RepairOptions,
) -> Result<FileReport> {
    let bytes = fs::read(path).map_err(|e| KaoError::io(path, e))?;
    let original = TextEncoding::Utf8
        .decode(&bytes)
        .map_err(|e| KaoError::Decode(format!("{}: {e}", path.display())))?;

    let rep = repair_text(&original, table);
    let changed = rep.changed(&original);
    let crc_before = crc32(&bytes);
    let crc_after = crc32(rep.text.as_bytes());

    debug!(
        path = %path.display(),
        fixes = rep.fixes.len(),
        flagged = rep.flagged.len(),
        changed,
        "scanned"
    );

    let mut backup_path = None;
    if changed && !opts.dry_run {
        let bak = backup_path_for(path, &opts.backup_suffix);
        write_verified_backup(&bak, &bytes)?;
        fs::write(path, rep.text.as_bytes()).map_err(|e| KaoError::io(path, e))?;
        info!(path = %path.display(), backup = %bak.display(), "repaired");
        backup_path = Some(bak);
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        changed,
        backup_path,
        fixes: rep.fixes,
        flagged: rep.flagged,
        crc_before,
        crc_after,
    })
}

fn write_verified_backup(bak: &Path, original: &[u8]) -> Result<()> {
    fs::write(bak, original).map_err(|e| KaoError::io(bak, e))?;
    let written = fs::read(bak).map_err(|e| KaoError::io(bak, e))?;
    let expected = crc32(original);
    let actual = crc32(&written);
    if expected != actual {
        return Err(KaoError::Backup {
            path: bak.to_path_buf(),
            expected,
            actual,
        });
    }
    Ok(())
}
