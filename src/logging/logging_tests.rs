//! Tests for log file setup.

use super::*;
use serial_test::serial;
use std::fs;

#[test]
fn split_log_path_separates_directory_and_file() {
    let path = Path::new("/var/tmp/barboard/app.log");
    let (dir, file) = split_log_path(path).unwrap();
    assert_eq!(dir, Path::new("/var/tmp/barboard"));
    assert_eq!(file, "app.log");
}

#[test]
fn split_log_path_bare_file_uses_current_directory() {
    let (dir, file) = split_log_path(Path::new("barboard.log")).unwrap();
    assert_eq!(dir, Path::new("."));
    assert_eq!(file, "barboard.log");
}

#[test]
fn split_log_path_rejects_path_without_file_name() {
    let result = split_log_path(Path::new("/"));
    assert!(matches!(result, Err(LoggingError::InvalidPath(_))));
}

#[test]
fn logging_error_messages_name_the_path() {
    let err = LoggingError::InvalidPath(PathBuf::from("/"));
    assert_eq!(err.to_string(), "Invalid log file path: \"/\"");
}

#[test]
#[serial(tracing_init)]
fn init_creates_log_directory_if_missing() {
    let test_dir = std::env::temp_dir().join("barboard_test_logs_create");
    let log_file = test_dir.join("test.log");

    let _ = fs::remove_dir_all(&test_dir);

    // May fail if the subscriber is already set; the directory is created first.
    let _ = init(&log_file);

    assert!(
        test_dir.exists(),
        "Log directory should be created: {:?}",
        test_dir
    );

    let _ = fs::remove_dir_all(&test_dir);
}

#[test]
#[serial(tracing_init)]
fn second_init_reports_subscriber_already_set() {
    let test_dir = std::env::temp_dir().join("barboard_test_logs_twice");
    let log_file = test_dir.join("twice.log");

    let _ = init(&log_file);
    let second = init(&log_file);

    assert!(matches!(second, Err(LoggingError::SubscriberAlreadySet)));

    let _ = fs::remove_dir_all(&test_dir);
}
