// crates/kaofix-core/src/table.rs
//
// Ordered literal replacement table.
//
// Entries are applied in table order and each one replaces every occurrence
// of its `wrong` text. Order matters: an earlier entry can consume text a
// later entry would have matched, and a later entry can expose text an
// earlier one matches (`（.ﾟ∀.ﾟ）`), hence the repeated passes in `apply`.

use serde::Deserialize;

use crate::error::{KaoError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Replacement {
    pub wrong: String,
    pub correct: String,
}

impl Replacement {
    pub fn new(wrong: impl Into<String>, correct: impl Into<String>) -> Self {
        Self {
            wrong: wrong.into(),
            correct: correct.into(),
        }
    }
}

/// A table entry that fired during `apply`, with how many times it matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedFix {
    pub wrong: String,
    pub correct: String,
    pub occurrences: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplacementTable {
    entries: Vec<Replacement>,
}

impl ReplacementTable {
    pub fn new(entries: Vec<Replacement>) -> Result<Self> {
        for (i, e) in entries.iter().enumerate() {
            if e.wrong.is_empty() {
                return Err(KaoError::Config(format!(
                    "replacement #{i} has an empty `wrong` string"
                )));
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Replacement] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply every entry in order, repeating the whole table until a pass
    /// changes nothing (at most `len() + 1` passes). The result is a fixed
    /// point: applying it again fires nothing.
    ///
    /// Returns the new text and the entries that fired, in first-fired order,
    /// with occurrences summed across passes.
    pub fn apply(&self, input: &str) -> (String, Vec<AppliedFix>) {
        let mut out = input.to_string();
        let mut fixes: Vec<AppliedFix> = Vec::new();

        for _ in 0..=self.entries.len() {
            let mut fired = false;
            for e in &self.entries {
                let n = out.matches(e.wrong.as_str()).count();
                if n == 0 {
                    continue;
                }
                out = out.replace(e.wrong.as_str(), &e.correct);
                fired = true;
                match fixes.iter_mut().find(|f| f.wrong == e.wrong) {
                    Some(f) => f.occurrences += n,
                    None => fixes.push(AppliedFix {
                        wrong: e.wrong.clone(),
                        correct: e.correct.clone(),
                        occurrences: n,
                    }),
                }
            }
            if !fired {
                break;
            }
        }

        (out, fixes)
    }
}

impl Default for ReplacementTable {
    fn default() -> Self {
        Self {
            entries: default_replacements(),
        }
    }
}

/// Built-in fixes for the kaomoji asset files.
///
/// The second entry is shadowed by the first (its prefix is rewritten first),
/// so it never fires. It stays to keep the table identical to the one the
/// asset files were last repaired with.
pub fn default_replacements() -> Vec<Replacement> {
    vec![
        // dot-separated eyes
        Replacement::new("(.ﾟ∀.ﾟ)", "(ﾟ∀ﾟ)"),
        Replacement::new("(.ﾟ∀.ﾟ)o彡ﾟ", "( ﾟ∀ﾟ)o彡ﾟ"),
        // full-width brackets
        Replacement::new("（ﾟ∀ﾟ）", "(ﾟ∀ﾟ)"),
        Replacement::new("（", "("),
        Replacement::new("）", ")"),
        Replacement::new("｛", "{"),
        Replacement::new("｝", "}"),
        Replacement::new("［", "["),
        Replacement::new("］", "]"),
    ]
}
