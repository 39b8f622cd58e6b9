use dialpad_core::DirectoryError;
use dialpad_core::directory::{DirectoryProvider, TomlDirectory, fetch_authorized};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_contacts(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("contacts.toml");
    std::fs::write(&path, content).unwrap();
    path
}

/// Verify contacts are read in file order with optional fields defaulted.
#[test]
fn test_toml_directory_reads_contacts_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_contacts(
        &temp_dir,
        r#"
[[contact]]
first_name = "John"
last_name = "Smith"
phone_numbers = ["555-0100", "555-0101"]

[[contact]]
first_name = "Amy"

[[contact]]
last_name = "Jones"
"#,
    );

    let records = fetch_authorized(&TomlDirectory::new(path)).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].first_name.as_deref(), Some("John"));
    assert_eq!(records[0].phone_numbers.len(), 2);
    assert_eq!(records[1].last_name, None);
    assert_eq!(records[2].first_name, None);
    assert_eq!(records[2].last_name.as_deref(), Some("Jones"));
}

/// Verify a file without contacts yields an empty directory.
#[test]
fn test_toml_directory_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_contacts(&temp_dir, "");

    let records = TomlDirectory::new(path).fetch_all().unwrap();

    assert!(records.is_empty());
}

/// Verify a missing file is reported, not treated as empty.
#[test]
fn test_toml_directory_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let provider = TomlDirectory::new(temp_dir.path().join("absent.toml"));

    let err = provider.fetch_all().unwrap_err();

    assert!(matches!(err, DirectoryError::NotFound(_)));
}

/// Verify malformed contacts are a parse error.
#[test]
fn test_toml_directory_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_contacts(&temp_dir, "[[contact]\nfirst_name = 3");

    let err = TomlDirectory::new(path).fetch_all().unwrap_err();

    assert!(matches!(err, DirectoryError::Parse(_)));
}
