// crates/kaofix-core/tests/repair_file.rs

use std::fs;
use std::path::Path;

use kaofix_core::repair::{backup_path_for, repair_file, RepairOptions};
use kaofix_core::scan::scan;
use kaofix_core::{Replacement, ReplacementTable};

const DIRTY: &str = "export default [\n  \"(.ﾟ∀.ﾟ)\",\n  \"（ﾟ∀ﾟ）\",\n  \"｛［x］｝\",\n];\n";
const CLEAN: &str = "export default [\n  \"(ﾟ∀ﾟ)\",\n  \"(*´∀`*)\",\n];\n";

fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
    let p = dir.join(name);
    fs::write(&p, body).expect("write fixture");
    p
}

#[test]
fn clean_file_is_untouched_and_gets_no_backup() {
    let dir = tempfile::tempdir().unwrap();
    let p = write(dir.path(), "kaomoji.js", CLEAN);

    let rep = repair_file(&p, &ReplacementTable::default(), &RepairOptions::default()).unwrap();

    assert!(!rep.changed);
    assert!(rep.fixes.is_empty());
    assert!(rep.backup_path.is_none());
    assert_eq!(rep.crc_before, rep.crc_after);
    assert_eq!(fs::read_to_string(&p).unwrap(), CLEAN);
    assert!(!backup_path_for(&p, ".backup").exists());
}

#[test]
fn dirty_file_is_fixed_and_backed_up_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let p = write(dir.path(), "kaomoji.js", DIRTY);
    let before = fs::read(&p).unwrap();

    let rep = repair_file(&p, &ReplacementTable::default(), &RepairOptions::default()).unwrap();

    assert!(rep.changed);
    let bak = rep.backup_path.clone().expect("backup written");
    assert_eq!(bak, dir.path().join("kaomoji.js.backup"));
    assert_eq!(fs::read(&bak).unwrap(), before);

    let after = fs::read_to_string(&p).unwrap();
    assert_eq!(
        after,
        "export default [\n  \"(ﾟ∀ﾟ)\",\n  \"(ﾟ∀ﾟ)\",\n  \"{[x]}\",\n];\n"
    );
    for wrong in ["(.ﾟ∀.ﾟ)", "（", "）", "｛", "｝", "［", "］"] {
        assert!(!after.contains(wrong), "{wrong} survived");
    }

    let fired: Vec<&str> = rep.fixes.iter().map(|f| f.wrong.as_str()).collect();
    assert_eq!(fired, vec!["(.ﾟ∀.ﾟ)", "（ﾟ∀ﾟ）", "｛", "｝", "［", "］"]);
}

#[test]
fn replacement_lands_at_every_former_position() {
    let dir = tempfile::tempdir().unwrap();
    let p = write(dir.path(), "a.txt", "xAyAz");
    let table = ReplacementTable::new(vec![Replacement::new("A", "BB")]).unwrap();

    let rep = repair_file(&p, &table, &RepairOptions::default()).unwrap();

    assert_eq!(rep.fixes[0].occurrences, 2);
    assert_eq!(fs::read_to_string(&p).unwrap(), "xBByBBz");
}

#[test]
fn second_run_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let p = write(dir.path(), "kaomoji.js", DIRTY);
    let table = ReplacementTable::default();
    let opts = RepairOptions::default();

    let first = repair_file(&p, &table, &opts).unwrap();
    assert!(first.changed);
    let bak = first.backup_path.unwrap();
    let bak_bytes = fs::read(&bak).unwrap();
    let fixed = fs::read(&p).unwrap();

    let second = repair_file(&p, &table, &opts).unwrap();
    assert!(!second.changed);
    assert!(second.backup_path.is_none());
    assert_eq!(fs::read(&p).unwrap(), fixed);
    // the first backup still holds the pre-repair bytes
    assert_eq!(fs::read(&bak).unwrap(), bak_bytes);
}

#[test]
fn dotted_eyes_flagged_before_but_not_after_replacement() {
    let line = "  \"(.ﾟ∀.ﾟ)\",";
    assert_eq!(scan(line).len(), 1);

    let dir = tempfile::tempdir().unwrap();
    let p = write(dir.path(), "kaomoji.js", line);
    let rep = repair_file(&p, &ReplacementTable::default(), &RepairOptions::default()).unwrap();
    assert!(rep.flagged.is_empty());
    assert!(scan(&fs::read_to_string(&p).unwrap()).is_empty());
}

#[test]
fn leftover_pattern_is_flagged_even_when_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let p = write(dir.path(), "kaomoji.js", "ok\n\"｡:.ﾟヽ(*´∀`)ﾉﾟ.:｡\"\n");

    let rep = repair_file(&p, &ReplacementTable::default(), &RepairOptions::default()).unwrap();

    assert!(!rep.changed);
    assert_eq!(rep.flagged.len(), 1);
    assert_eq!(rep.flagged[0].line, 2);
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let p = write(dir.path(), "kaomoji.js", DIRTY);
    let opts = RepairOptions {
        dry_run: true,
        ..RepairOptions::default()
    };

    let rep = repair_file(&p, &ReplacementTable::default(), &opts).unwrap();

    assert!(rep.changed);
    assert!(rep.backup_path.is_none());
    assert_eq!(fs::read_to_string(&p).unwrap(), DIRTY);
    assert!(!backup_path_for(&p, ".backup").exists());
}

#[test]
fn custom_suffix_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let p = write(dir.path(), "kaomoji.js", DIRTY);
    let opts = RepairOptions {
        backup_suffix: ".orig".into(),
        ..RepairOptions::default()
    };

    let rep = repair_file(&p, &ReplacementTable::default(), &opts).unwrap();
    assert_eq!(rep.backup_path.unwrap(), dir.path().join("kaomoji.js.orig"));
}

#[test]
fn invalid_utf8_is_an_error_and_nothing_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("bad.js");
    let bytes = vec![b'"', 0xFF, 0xFE, b'"'];
    fs::write(&p, &bytes).unwrap();

    let err = repair_file(&p, &ReplacementTable::default(), &RepairOptions::default()).unwrap_err();
    assert!(err.to_string().contains("bad.js"));
    assert_eq!(fs::read(&p).unwrap(), bytes);
    assert!(!backup_path_for(&p, ".backup").exists());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("nope.js");
    let err = repair_file(&p, &ReplacementTable::default(), &RepairOptions::default()).unwrap_err();
    assert!(matches!(err, kaofix_core::KaoError::Io { .. }));
}

#[test]
fn bracketed_dotted_eyes_settle_in_one_run_and_backup_survives() {
    let dir = tempfile::tempdir().unwrap();
    let p = write(dir.path(), "kaomoji.js", "\"（.ﾟ∀.ﾟ）\"");
    let table = ReplacementTable::default();
    let opts = RepairOptions::default();

    let first = repair_file(&p, &table, &opts).unwrap();
    assert!(first.changed);
    assert!(first.flagged.is_empty());
    assert_eq!(fs::read_to_string(&p).unwrap(), "\"(ﾟ∀ﾟ)\"");

    let second = repair_file(&p, &table, &opts).unwrap();
    assert!(!second.changed);
    assert!(second.backup_path.is_none());
    assert_eq!(
        fs::read_to_string(backup_path_for(&p, ".backup")).unwrap(),
        "\"（.ﾟ∀.ﾟ）\""
    );
}
