//! crates/logging/src/registry.rs
//! Process-wide logger state shared by name.

use std::fs::File;
use std::io;
use std::sync::{Arc, Mutex, OnceLock};

use dashmap::DashMap;

use emolog_core::Level;

use crate::sink::RecordSink;

/// Sink set and threshold shared by every logger constructed with one name.
///
/// Sinks are attached at most once per kind, so repeated construction with
/// the same name reuses the existing outputs instead of accumulating
/// duplicates. The threshold is overwritten by each construction, matching
/// the behaviour of reconfiguring a shared named logger.
#[derive(Debug)]
pub(crate) struct LoggerState {
    pub(crate) threshold: u8,
    pub(crate) console: Option<RecordSink<io::Stdout>>,
    pub(crate) file: Option<RecordSink<File>>,
}

impl Default for LoggerState {
    fn default() -> Self {
        Self {
            threshold: Level::Debug.value(),
            console: None,
            file: None,
        }
    }
}

pub(crate) type SharedState = Arc<Mutex<LoggerState>>;

static REGISTRY: OnceLock<DashMap<String, SharedState>> = OnceLock::new();

/// Returns the shared state registered under `name`, creating it on first
/// use. State lives for the remainder of the process.
pub(crate) fn shared(name: &str) -> SharedState {
    let registry = REGISTRY.get_or_init(DashMap::new);
    registry.entry(name.to_owned()).or_default().clone()
}
