#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `emolog_core` holds the record model shared by the emolog logging facade:
//! severity [`Level`]s with name-or-number resolution, the fixed
//! severity-to-emoji table, the [`RenderConfig`] display strings, the
//! [`Payload`] message body with its optional error trace, and the transient
//! [`Record`] produced for every emitted call.
//!
//! # Design
//!
//! The crate is deliberately free of I/O. Everything here is plain data that
//! the `emolog` facade assembles per call and hands to its sinks; nothing is
//! persisted and no type owns a writer. Severities are carried as raw `u8`
//! values (`10`–`50` for the five named levels) so that custom numeric levels
//! pass through the pipeline unchanged, with [`Level`] layered on top for the
//! named constants.
//!
//! # Errors
//!
//! The only fallible surface is logger construction, covered by
//! [`ConfigError`]. Level resolution never fails: unrecognised names demote
//! to INFO and report a warning string for the facade to emit (see
//! [`LevelSpec::resolve`]).
//!
//! # Examples
//!
//! ```
//! use emolog_core::{Level, LevelSpec, glyph_for};
//!
//! let resolved = LevelSpec::from("warning").resolve();
//! assert_eq!(resolved.threshold, Level::Warning.value());
//! assert_eq!(glyph_for(resolved.threshold), "🔥");
//! ```

mod config;
mod emoji;
mod error;
mod level;
mod payload;
mod record;

pub use config::{
    DEFAULT_BORDER_LINE, DEFAULT_SEPARATOR_LINE, DEFAULT_TIMESTAMP_FORMAT, RenderConfig,
};
pub use emoji::{DEFAULT_GLYPH, glyph_for};
pub use error::ConfigError;
pub use level::{Level, LevelResolution, LevelSpec, ParseLevelError, label_for};
pub use payload::Payload;
pub use record::{DEFAULT_CALLER, Record};
