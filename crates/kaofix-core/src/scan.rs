// crates/kaofix-core/src/scan.rs
//
// Diagnostic scan for dotted kaomoji eyes left inside quoted strings.
//
// Heuristic, tuned to the one known-bad pattern `(.ﾟ∀.ﾟ)`:
// - only lines holding a `"` and one of the markers `ﾟ` / `∀` are looked at
// - every quoted run containing a marker is extracted
// - a run is flagged when it contains both `.` and `ﾟ`
//
// It reports only; content is never changed here.

use std::sync::OnceLock;

use regex::Regex;

pub const MARKERS: [char; 2] = ['ﾟ', '∀'];

const EYE: char = 'ﾟ';

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlaggedLine {
    /// 1-based line number.
    pub line: usize,
    pub text: String,
}

fn quoted_with_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""([^"]*[ﾟ∀][^"]*)""#).expect("static regex"))
}

pub fn scan(content: &str) -> Vec<FlaggedLine> {
    let re = quoted_with_marker();
    let mut out = Vec::new();

    for (idx, line) in content.split('\n').enumerate() {
        if !line.contains('"') || !line.contains(MARKERS) {
            continue;
        }
        for cap in re.captures_iter(line) {
            let m = &cap[1];
            if m.contains('.') && m.contains(EYE) {
                out.push(FlaggedLine {
                    line: idx + 1,
                    text: m.to_string(),
                });
            }
        }
    }

    out
}
