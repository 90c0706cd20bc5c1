//! Integration tests for duplicate-record suppression.
//!
//! These tests verify that a record identical to the immediately preceding
//! one on the same sink is dropped, and that anything short of immediate
//! repetition is emitted normally.

use std::fs;

use emolog::Logger;

// ============================================================================
// Immediate Repetition
// ============================================================================

/// Verifies two consecutive identical calls emit a single record.
#[test]
fn consecutive_duplicates_emit_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("dup.log");
    let logger = Logger::builder("dedup-immediate")
        .save(true)
        .log_path(&path)
        .build()
        .expect("logger construction");

    logger.info("repeated payload");
    logger.info("repeated payload");

    let content = fs::read_to_string(&path).expect("read log");
    assert_eq!(content.matches("repeated payload").count(), 1);
}

/// Verifies a long run of the same record still emits exactly once.
#[test]
fn longer_runs_collapse_to_one_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("run.log");
    let logger = Logger::builder("dedup-run")
        .save(true)
        .log_path(&path)
        .build()
        .expect("logger construction");

    for _ in 0..5 {
        logger.warning("still happening");
    }

    let content = fs::read_to_string(&path).expect("read log");
    assert_eq!(content.matches("still happening").count(), 1);
}

// ============================================================================
// Interleaving Releases The Slot
// ============================================================================

/// Verifies a duplicate separated by another record is emitted again.
#[test]
fn interleaved_duplicate_is_emitted_again() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("interleaved.log");
    let logger = Logger::builder("dedup-interleaved")
        .save(true)
        .log_path(&path)
        .build()
        .expect("logger construction");

    logger.info("first payload");
    logger.info("other payload");
    logger.info("first payload");

    let content = fs::read_to_string(&path).expect("read log");
    assert_eq!(content.matches("first payload").count(), 2);
    assert_eq!(content.matches("other payload").count(), 1);
}

/// Verifies the same text at a different level is not a duplicate.
#[test]
fn level_change_is_not_a_duplicate() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("levels.log");
    let logger = Logger::builder("dedup-levels")
        .save(true)
        .log_path(&path)
        .build()
        .expect("logger construction");

    logger.info("same words");
    logger.warning("same words");

    let content = fs::read_to_string(&path).expect("read log");
    assert_eq!(content.matches("same words").count(), 2);
}

/// Verifies suppression keeps dropping until the message changes.
#[test]
fn suppression_holds_until_the_message_changes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("hold.log");
    let logger = Logger::builder("dedup-hold")
        .save(true)
        .log_path(&path)
        .build()
        .expect("logger construction");

    logger.error("failure state");
    logger.error("failure state");
    logger.error("failure state");
    logger.error("recovered");
    logger.error("failure state");

    let content = fs::read_to_string(&path).expect("read log");
    assert_eq!(content.matches("failure state").count(), 2);
    assert_eq!(content.matches("recovered").count(), 1);
}
