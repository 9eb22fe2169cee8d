// crates/kaofix-cli/src/io/report.rs
//
// Human-readable console report (stdout). Not a stable format.

use kaofix_core::selftest::{SampleStatus, SelfTestReport};
use kaofix_core::{ReplacementTable, TargetOutcome};

pub fn print_banner() {
    println!("kaofix: kaomoji character repair");
    println!("{}", "=".repeat(50));
}

pub fn print_self_test(rep: &SelfTestReport) {
    println!("--- unicode self-test ({}) ---", rep.encoding);
    for o in &rep.outcomes {
        match &o.status {
            SampleStatus::Ok => println!("  ok    {}", o.sample),
            SampleStatus::Mismatch { decoded } => {
                println!("  FAIL  {} (round trip gave {:?})", o.sample, decoded)
            }
            SampleStatus::Error(e) => println!("  FAIL  {} (error: {})", o.sample, e),
        }
    }
    println!(
        "self-test: {}/{} passed",
        rep.outcomes.len() - rep.failures(),
        rep.outcomes.len()
    );
}

pub fn print_outcome(o: &TargetOutcome, dry_run: bool) {
    match o {
        TargetOutcome::Missing(p) => {
            println!("WARN: file does not exist: {}", p.display());
        }
        TargetOutcome::Failed { path, error } => {
            println!("checking: {}", path.display());
            println!("ERROR: failed to process {}: {}", path.display(), error);
            println!();
        }
        TargetOutcome::Repaired(r) => {
            println!("checking: {}", r.path.display());
            if r.changed {
                if dry_run {
                    println!("would fix: {}", r.path.display());
                } else {
                    println!("fixed: {}", r.path.display());
                }
                if let Some(b) = &r.backup_path {
                    println!("backup: {}", b.display());
                }
                for f in &r.fixes {
                    println!("  fix: '{}' -> '{}' (x{})", f.wrong, f.correct, f.occurrences);
                }
                println!("  crc32: {:08x} -> {:08x}", r.crc_before, r.crc_after);
            } else {
                println!("no changes needed: {}", r.path.display());
            }

            if !r.flagged.is_empty() {
                println!();
                println!("WARN: possibly problematic sequences:");
                for f in &r.flagged {
                    println!("  line {}: {}", f.line, f.text);
                }
            }
            println!();
        }
    }
}

pub fn print_summary(outcomes: &[TargetOutcome]) {
    let mut fixed = 0usize;
    let mut clean = 0usize;
    let mut missing = 0usize;
    let mut failed = 0usize;
    for o in outcomes {
        match o {
            TargetOutcome::Repaired(r) if r.changed => fixed += 1,
            TargetOutcome::Repaired(_) => clean += 1,
            TargetOutcome::Missing(_) => missing += 1,
            TargetOutcome::Failed { .. } => failed += 1,
        }
    }
    println!("summary: fixed={fixed} clean={clean} missing={missing} failed={failed}");
}

pub fn print_table(t: &ReplacementTable) {
    println!("--- replacement table ({} entries, applied in order) ---", t.len());
    for (i, r) in t.entries().iter().enumerate() {
        println!("#{:>2} '{}' -> '{}'", i + 1, r.wrong, r.correct);
    }
}
