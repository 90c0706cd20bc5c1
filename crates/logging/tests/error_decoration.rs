//! Integration tests for error-trace decoration.
//!
//! These tests verify that error and critical records append the payload's
//! trace when one exists, and that plain-text records and lower severities
//! are never decorated.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;

use emolog::{Logger, Payload};

#[derive(Debug)]
struct ConfigLoadError {
    source: io::Error,
}

impl fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("failed to load configuration")
    }
}

impl Error for ConfigLoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

fn chained_error() -> ConfigLoadError {
    ConfigLoadError {
        source: io::Error::new(io::ErrorKind::NotFound, "settings.toml not found"),
    }
}

fn file_logger(name: &str, path: &std::path::Path) -> Logger {
    Logger::builder(name)
        .save(true)
        .log_path(path)
        .build()
        .expect("logger construction")
}

// ============================================================================
// Error-Grade Decoration
// ============================================================================

/// Verifies an error call with a chained payload includes the cause lines.
#[test]
fn error_with_chain_includes_the_trace() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("error.log");
    let logger = file_logger("decorate-error", &path);

    logger.error(Payload::from_error(&chained_error()));

    let content = fs::read_to_string(&path).expect("read log");
    assert!(content.contains("failed to load configuration"));
    assert!(content.contains("caused by: settings.toml not found"));
}

/// Verifies critical records are decorated the same way.
#[test]
fn critical_with_chain_includes_the_trace() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("critical.log");
    let logger = file_logger("decorate-critical", &path);

    logger.critical(Payload::from_error(&chained_error()));

    let content = fs::read_to_string(&path).expect("read log");
    assert!(content.contains("caused by: settings.toml not found"));
}

/// Verifies the error payload's own text is the stringified error.
#[test]
fn error_payload_stringifies_the_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("stringify.log");
    let logger = file_logger("decorate-stringify", &path);

    let error = chained_error();
    logger.error(&error);

    let content = fs::read_to_string(&path).expect("read log");
    assert!(content.contains("⛔️ | "));
    assert!(content.contains(" | failed to load configuration"));
}

// ============================================================================
// Undecorated Paths
// ============================================================================

/// Verifies a plain-text error call carries no trace.
#[test]
fn plain_text_error_is_undecorated() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("plain.log");
    let logger = file_logger("decorate-plain", &path);

    logger.error("plain failure text");

    let content = fs::read_to_string(&path).expect("read log");
    assert!(content.contains("plain failure text"));
    assert!(!content.contains("caused by:"));
}

/// Verifies lower severities withhold the trace even for error payloads.
#[test]
fn warning_withholds_the_trace() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("warning.log");
    let logger = file_logger("decorate-warning", &path);

    logger.warning(Payload::from_error(&chained_error()));

    let content = fs::read_to_string(&path).expect("read log");
    assert!(content.contains("failed to load configuration"));
    assert!(!content.contains("caused by:"));
}
