#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `emolog` decorates severity-leveled log records with emoji markers,
//! caller-location metadata, and duplicate-message suppression, writing each
//! record as a fixed bordered block to a console sink and optionally to a
//! single UTF-8 log file.
//!
//! # Design
//!
//! The crate is a facade over the record model in `emolog_core`. A
//! [`Logger`] is obtained from [`Logger::builder`]; every leveled call
//! checks the effective minimum level, resolves the true caller, assembles
//! the decorated `<emoji> | <caller> | <message>` line, and hands the
//! resulting [`Record`] to each attached [`RecordSink`]. Sinks render the
//! record through their [`RecordFormatter`] and drop it when the
//! [`DuplicateFilter`] saw the identical record immediately before.
//!
//! Logger state is shared process-wide by name: building a second logger
//! with an existing name reuses the same sink set, and sink attachment is
//! idempotent per kind, so repeated construction never accumulates
//! duplicate sinks.
//!
//! # Invariants
//!
//! - Saving to file requires a log path; the builder fails with
//!   [`ConfigError::MissingLogPath`] otherwise, and the parent directory is
//!   created before the sink attaches.
//! - Only immediate repetition is suppressed: a duplicate separated by any
//!   other record is emitted again.
//! - A failure inside caller resolution never reaches the host program; the
//!   record keeps its default attribution and the failure goes to the
//!   diagnostics channel.
//!
//! # Errors
//!
//! Construction surfaces [`ConfigError`]. The logging path itself is
//! infallible from the caller's point of view: sink write failures are
//! reported on the diagnostics channel (stderr, or `tracing` behind the
//! `tracing` feature) and otherwise swallowed.
//!
//! # Examples
//!
//! ```
//! use emolog::Logger;
//!
//! let logger = Logger::builder("docs-overview").level("INFO").build()?;
//! logger.info("service started");
//! logger.debug("dropped: below the INFO threshold");
//! # Ok::<(), emolog::ConfigError>(())
//! ```
//!
//! Error records append the payload's trace when it carries one:
//!
//! ```
//! use emolog::{Logger, Payload};
//! use std::io;
//!
//! let logger = Logger::builder("docs-errors").build()?;
//! let error = io::Error::new(io::ErrorKind::NotFound, "state file missing");
//! logger.error(Payload::from_error(&error));
//! # Ok::<(), emolog::ConfigError>(())
//! ```

mod caller;
mod dedup;
mod diag;
mod format;
mod logger;
mod macros;
mod registry;
mod sink;

pub use caller::{CallSite, CallerResolver, DEFAULT_STACK_SKIP, ResolvedCaller};
pub use dedup::DuplicateFilter;
pub use emolog_core::{
    ConfigError, DEFAULT_GLYPH, Level, LevelResolution, LevelSpec, ParseLevelError, Payload,
    Record, RenderConfig, glyph_for, label_for,
};
pub use format::RecordFormatter;
pub use logger::{Logger, LoggerBuilder};
pub use sink::RecordSink;
