//! Integration tests for logger behavior.

use course_catalog::logger::{level, set_level, set_level_from_str, Level};
use course_catalog::{debug, error, info, warn};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[test]
fn level_is_readable() {
    set_level(Level::Warn);
    assert!(level() <= Level::Debug);
}

#[cfg(feature = "file-logging")]
#[test]
fn file_sink_receives_prefixed_lines() {
    use course_catalog::logger::{close_file_logging, init_file_logging};
    use std::fs;
    use tempfile::TempDir;

    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("logs").join("catalog.log");

    assert!(init_file_logging(&path));
    error!("written to file");
    close_file_logging();

    let content = fs::read_to_string(&path).expect("read log file");
    assert!(content.contains("[ERROR] written to file"));
}
