use std::collections::HashSet;

use crate::config::Config;
use crate::error::{KaoError, Result};

pub fn validate_config(c: &Config) -> Result<()> {
    // An empty suffix would make the backup overwrite the target itself.
    if c.backup_suffix.is_empty() {
        return Err(KaoError::Config("backup_suffix must be non-empty".into()));
    }
    if c.backup_suffix.contains(['/', '\\']) {
        return Err(KaoError::Config(
            "backup_suffix must not contain path separators".into(),
        ));
    }

    let mut seen = HashSet::new();
    for (i, r) in c.replacements.iter().enumerate() {
        if r.wrong.is_empty() {
            return Err(KaoError::Config(format!(
                "replacement #{i} has an empty `wrong` string"
            )));
        }
        if !seen.insert(r.wrong.as_str()) {
            return Err(KaoError::Config(format!(
                "replacement #{i} repeats `wrong` string {:?}",
                r.wrong
            )));
        }
    }

    Ok(())
}
