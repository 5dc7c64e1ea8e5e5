//! Integration tests for fill-file generation through the public API

use fillfile::{generate, FillRequest, DEFAULT_FILL_BYTE};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_four_bytes_of_supplied_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.bin");

    generate(&path, 4, 0xAB).unwrap();

    assert_eq!(fs::read(&path).unwrap(), vec![0xAB, 0xAB, 0xAB, 0xAB]);
}

#[test]
fn test_three_bytes_of_default_value() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.bin");

    FillRequest::new(&path, 3).write().unwrap();

    assert_eq!(fs::read(&path).unwrap(), vec![0xE4, 0xE4, 0xE4]);
    assert_eq!(DEFAULT_FILL_BYTE, 228);
}

#[test]
fn test_zero_length_produces_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.bin");

    generate(&path, 0, 0xFF).unwrap();

    let metadata = fs::metadata(&path).unwrap();
    assert_eq!(metadata.len(), 0);
}

#[test]
fn test_rerun_truncates_pre_existing_longer_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.bin");

    fs::write(&path, [0xEEu8; 10]).unwrap();
    generate(&path, 2, 0x00).unwrap();

    assert_eq!(fs::read(&path).unwrap(), vec![0x00, 0x00]);
}

#[test]
fn test_rerun_replaces_shorter_file_in_full() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.bin");

    generate(&path, 2, 0x11).unwrap();
    generate(&path, 6, 0x22).unwrap();

    assert_eq!(fs::read(&path).unwrap(), vec![0x22; 6]);
}

#[test]
fn test_request_from_hex_and_octal_literals() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fixture.bin");

    let request = FillRequest::from_literals(&path, "0x20", Some("0377")).unwrap();
    assert_eq!(request.length, 32);
    assert_eq!(request.byte, 0xFF);

    request.write().unwrap();
    assert_eq!(fs::read(&path).unwrap(), vec![0xFF; 32]);
}

#[test]
fn test_request_without_value_uses_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fixture.bin");

    FillRequest::from_literals(&path, "5", None)
        .unwrap()
        .write()
        .unwrap();

    assert_eq!(fs::read(&path).unwrap(), vec![DEFAULT_FILL_BYTE; 5]);
}

#[test]
fn test_missing_parent_directory_propagates_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.bin");

    let err = generate(&path, 8, 0x00).unwrap_err();
    assert!(matches!(err, fillfile::FillError::Io(_)));
    assert!(!path.exists());
}

#[test]
fn test_large_file_is_uniform() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("large.bin");
    let length = 1_000_000u64;

    generate(&path, length, 0x5A).unwrap();

    let data = fs::read(&path).unwrap();
    assert_eq!(data.len() as u64, length);
    assert!(data.iter().all(|&b| b == 0x5A));
}
