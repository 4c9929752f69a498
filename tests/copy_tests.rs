//! Tests for single file copy operations

use dropcopy::executor::copy_file;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

fn create_test_file(path: &PathBuf, content: &[u8]) {
    let mut file = fs::File::create(path).expect("Failed to create test file");
    file.write_all(content)
        .expect("Failed to write test content");
    file.flush().expect("Failed to flush");
}

#[test]
fn test_copy_basic_content() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let src_path = root.join("app.exe");
    let content = b"MZ not really a PE header";
    create_test_file(&src_path, content);

    let dest_path = root.join("copy.exe");
    let bytes_copied = copy_file(&src_path, &dest_path).expect("copy_file should succeed");

    assert_eq!(bytes_copied, content.len() as u64);
    assert_eq!(fs::read(&dest_path).expect("Failed to read dest file"), content);
}

#[test]
fn test_copy_creates_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let src_path = root.join("lib.dll");
    create_test_file(&src_path, b"test content");

    let dest_path = root.join("a/b/c/lib.dll");
    copy_file(&src_path, &dest_path).expect("copy_file should create parent directories");

    assert!(dest_path.parent().unwrap().is_dir());
    assert_eq!(
        fs::read(&dest_path).expect("Failed to read dest file"),
        b"test content"
    );
}

#[test]
fn test_copy_overwrites_existing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let src_path = root.join("new.dll");
    create_test_file(&src_path, b"new");
    let dest_path = root.join("old.dll");
    create_test_file(&dest_path, b"a much longer old version");

    copy_file(&src_path, &dest_path).expect("copy_file should overwrite");

    assert_eq!(fs::read(&dest_path).expect("Failed to read dest file"), b"new");
}

#[test]
fn test_copy_preserves_mtime() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let src_path = root.join("source.dll");
    create_test_file(&src_path, b"test content");

    let mtime = SystemTime::now() - Duration::from_secs(3600);
    filetime::set_file_mtime(&src_path, filetime::FileTime::from_system_time(mtime))
        .expect("Failed to set mtime");

    let dest_path = root.join("dest.dll");
    copy_file(&src_path, &dest_path).expect("copy_file should succeed");

    let src_mtime = fs::metadata(&src_path).unwrap().modified().unwrap();
    let dest_mtime = fs::metadata(&dest_path).unwrap().modified().unwrap();

    let diff = if src_mtime > dest_mtime {
        src_mtime.duration_since(dest_mtime).unwrap()
    } else {
        dest_mtime.duration_since(src_mtime).unwrap()
    };

    assert!(
        diff < Duration::from_secs(2),
        "mtime should be preserved (diff: {:?})",
        diff
    );
}

#[test]
fn test_copy_missing_source_reports_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path();

    let src_path = root.join("missing.dll");
    let err = copy_file(&src_path, &root.join("dest.dll")).unwrap_err();

    assert!(err.to_string().contains("missing.dll"));
    assert_eq!(err.exit_code(), dropcopy::ErrorCode::GenericException);
}
