use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use super::*;
use crate::types::{Command, Direction, ItemKind};

fn make_test_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

#[test]
fn schema_roundtrip_header_and_records() {
    let dir = tempdir().unwrap();
    let path = make_test_path(dir.path(), "roundtrip.jsonl");

    let mut writer = JournalWriter::create(&path, 42, "test-build").unwrap();
    writer.append(0, Command::Step(Direction::East)).unwrap();
    writer.append(1, Command::UseItem(ItemKind::OxygenTank)).unwrap();
    writer.append(1, Command::Restart).unwrap();

    let loaded = load_journal_from_file(&path).unwrap();
    assert_eq!(loaded.journal.format_version, 1);
    assert_eq!(loaded.journal.build_id, "test-build");
    assert_eq!(loaded.journal.seed, 42);
    assert_eq!(loaded.journal.inputs.len(), 3);

    assert_eq!(loaded.journal.inputs[0].command, Command::Step(Direction::East));
    assert_eq!(loaded.journal.inputs[1].command, Command::UseItem(ItemKind::OxygenTank));
    assert_eq!(loaded.journal.inputs[2].command, Command::Restart);

    assert_eq!(loaded.journal.inputs[0].seq, 0);
    assert_eq!(loaded.journal.inputs[1].seq, 1);
    assert_eq!(loaded.journal.inputs[2].seq, 2);

    assert_eq!(loaded.next_seq, 3);
    assert_ne!(loaded.last_sha256_hex, INITIAL_HASH);
}

#[test]
fn hash_chain_detects_tampered_record() {
    let dir = tempdir().unwrap();
    let path = make_test_path(dir.path(), "tampered.jsonl");

    let mut writer = JournalWriter::create(&path, 1, "dev").unwrap();
    writer.append(0, Command::Step(Direction::North)).unwrap();
    writer.append(1, Command::Step(Direction::South)).unwrap();

    // Flip the second record's command without touching its digest.
    let content = fs::read_to_string(&path).unwrap();
    let mut lines: Vec<String> = content.lines().map(String::from).collect();
    assert!(lines.len() >= 3, "expected header + 2 records");
    lines[2] = lines[2].replace("South", "West");
    fs::write(&path, lines.join("\n") + "\n").unwrap();

    let result = load_journal_from_file(&path);
    assert!(
        matches!(result, Err(JournalLoadError::HashChainBroken { line: 3 })),
        "expected hash chain broken at line 3, got: {result:?}"
    );
}

#[test]
fn hash_chain_detects_deleted_record() {
    let dir = tempdir().unwrap();
    let path = make_test_path(dir.path(), "deleted.jsonl");

    let mut writer = JournalWriter::create(&path, 1, "dev").unwrap();
    for turn in 0..3 {
        writer.append(turn, Command::Step(Direction::East)).unwrap();
    }

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 4); // header + 3 records
    let tampered = format!("{}\n{}\n{}\n", lines[0], lines[1], lines[3]);
    fs::write(&path, tampered).unwrap();

    let result = load_journal_from_file(&path);
    assert!(
        matches!(
            result,
            Err(JournalLoadError::HashChainBroken { .. })
                | Err(JournalLoadError::InvalidRecord { .. })
        ),
        "expected chain corruption error, got: {result:?}"
    );
}

#[test]
fn truncated_last_line_returns_error() {
    let dir = tempdir().unwrap();
    let path = make_test_path(dir.path(), "truncated.jsonl");

    let mut writer = JournalWriter::create(&path, 1, "dev").unwrap();
    writer.append(0, Command::Restart).unwrap();

    // Simulate a crash mid-append: valid prefix, no trailing newline.
    let mut file = OpenOptions::new().append(true).open(&path).unwrap();
    write!(file, "{{\"seq\":1,\"tur").unwrap();

    let result = load_journal_from_file(&path);
    assert!(
        matches!(result, Err(JournalLoadError::IncompleteLine { line: 3 })),
        "expected incomplete line at line 3, got: {result:?}"
    );
}

#[test]
fn missing_trailing_newline_on_valid_json_line_is_incomplete() {
    let dir = tempdir().unwrap();
    let path = make_test_path(dir.path(), "no_newline.jsonl");

    fs::write(&path, "{\"format_version\":1,\"build_id\":\"dev\",\"seed\":123}").unwrap();

    let result = load_journal_from_file(&path);
    assert!(
        matches!(result, Err(JournalLoadError::IncompleteLine { line: 1 })),
        "expected incomplete line at line 1, got: {result:?}"
    );
}

#[test]
fn empty_file_returns_error() {
    let dir = tempdir().unwrap();
    let path = make_test_path(dir.path(), "empty.jsonl");
    fs::write(&path, "").unwrap();

    let result = load_journal_from_file(&path);
    assert!(
        matches!(result, Err(JournalLoadError::EmptyFile)),
        "expected EmptyFile error, got: {result:?}"
    );
}

#[test]
fn header_only_file_loads_empty_journal() {
    let dir = tempdir().unwrap();
    let path = make_test_path(dir.path(), "header_only.jsonl");

    let _writer = JournalWriter::create(&path, 555, "dev").unwrap();

    let loaded = load_journal_from_file(&path).unwrap();
    assert_eq!(loaded.journal.seed, 555);
    assert!(loaded.journal.inputs.is_empty());
    assert_eq!(loaded.next_seq, 0);
    assert_eq!(loaded.last_sha256_hex, INITIAL_HASH);
}

#[test]
fn resume_appends_continue_hash_chain() {
    let dir = tempdir().unwrap();
    let path = make_test_path(dir.path(), "resume.jsonl");

    let mut writer = JournalWriter::create(&path, 1, "dev").unwrap();
    writer.append(0, Command::Step(Direction::West)).unwrap();
    drop(writer);

    let loaded = load_journal_from_file(&path).unwrap();
    assert_eq!(loaded.journal.inputs.len(), 1);

    let mut writer = JournalWriter::resume(&path, loaded.last_sha256_hex, loaded.next_seq).unwrap();
    writer.append(1, Command::UseItem(ItemKind::SignalFlare)).unwrap();
    drop(writer);

    let reloaded = load_journal_from_file(&path).unwrap();
    assert_eq!(reloaded.journal.inputs.len(), 2);
    assert_eq!(reloaded.journal.inputs[0].seq, 0);
    assert_eq!(reloaded.journal.inputs[1].seq, 1);
    assert_eq!(reloaded.next_seq, 2);
}

#[test]
fn invalid_header_returns_error() {
    let dir = tempdir().unwrap();
    let path = make_test_path(dir.path(), "bad_header.jsonl");
    fs::write(&path, "not valid json\n").unwrap();

    let result = load_journal_from_file(&path);
    assert!(
        matches!(result, Err(JournalLoadError::InvalidHeader { line: 1, .. })),
        "expected invalid header error, got: {result:?}"
    );
}
