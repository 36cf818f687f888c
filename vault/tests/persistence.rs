use std::fs;
use vault::{load_whitelist, write_note, write_whitelist};

#[test]
fn test_load_whitelist_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let whitelist = load_whitelist(&dir.path().join("absent.md")).unwrap();
    assert!(whitelist.is_empty());
}

#[test]
fn test_load_whitelist_reads_checked_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("whitelist.md");
    fs::write(
        &path,
        "# Whitelist for demo\n\n- [x] a.py\n- [ ] b.js\n\n## sub\n- [x] sub/c.css\n"
    )
    .unwrap();

    let whitelist = load_whitelist(&path).unwrap();
    assert_eq!(whitelist.len(), 2);
    assert!(whitelist.contains("a.py"));
    assert!(whitelist.contains("sub/c.css"));
}

#[test]
fn test_write_whitelist_creates_parents_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("GitHub/demo/whitelist.md");

    write_whitelist(&path, "# Whitelist for demo\n\n- [ ] a.py\n").unwrap();
    assert!(path.exists());

    // A human checks a box, then the initializer runs again.
    fs::write(&path, "# Whitelist for demo\n\n- [x] a.py\n").unwrap();
    write_whitelist(&path, "# Whitelist for demo\n\n- [ ] a.py\n").unwrap();

    let rewritten = fs::read_to_string(&path).unwrap();
    assert!(!rewritten.contains("- [x]"));
}

#[test]
fn test_write_note_mirrors_remote_hierarchy() {
    let dir = tempfile::tempdir().unwrap();

    let destination = write_note(
        dir.path(),
        "pkg/utils.py",
        "def run():\n    pass",
        "2024-03-01 10:00:00"
    )
    .unwrap();

    assert_eq!(destination, dir.path().join("pkg/utils.md"));
    let body = fs::read_to_string(&destination).unwrap();
    assert!(body.starts_with("---\noriginal_file: pkg/utils.py\n"));
    assert!(body.contains("# utils.py"));
    assert!(body.contains("```python\ndef run():\n    pass\n```"));
}

#[test]
fn test_write_note_overwrites_existing_note() {
    let dir = tempfile::tempdir().unwrap();

    write_note(dir.path(), "a.py", "old", "Unknown").unwrap();
    write_note(dir.path(), "a.py", "new", "2024-03-01 10:00:00").unwrap();

    let body = fs::read_to_string(dir.path().join("a.md")).unwrap();
    assert!(body.contains("new"));
    assert!(!body.contains("old"));
}
