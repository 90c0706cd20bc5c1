use std::borrow::Cow;
use std::panic::Location;
use std::path::Path;

use time::OffsetDateTime;

use crate::level::label_for;

/// Caller name recorded before resolution refines it.
///
/// Mirrors the convention of attributing top-of-program calls to `main`.
pub const DEFAULT_CALLER: &str = "main";

/// A single log record, alive only for the duration of formatting and
/// emission.
///
/// The record carries the decorated message produced by the facade together
/// with everything the formatter needs: level value and label, logger name,
/// timestamp, and source attribution. [`Record::new`] is `#[track_caller]`,
/// so the default file and line point at the true call site rather than any
/// frame inside the logging machinery; caller resolution may later override
/// them with refined values.
///
/// # Examples
///
/// ```
/// use emolog_core::Record;
///
/// let record = Record::new(20, "APP", "📚 | main | ready");
/// assert_eq!(record.label(), "INFO");
/// assert!(record.file().ends_with(".rs"));
/// assert!(record.line() > 0);
/// ```
#[derive(Clone, Debug)]
pub struct Record {
    level: u8,
    label: Cow<'static, str>,
    name: String,
    message: String,
    timestamp: OffsetDateTime,
    file: Cow<'static, str>,
    function: String,
    line: u32,
}

impl Record {
    /// Creates a record stamped with the current time and the caller's
    /// source location.
    #[must_use]
    #[track_caller]
    pub fn new(level: u8, name: impl Into<String>, message: impl Into<String>) -> Self {
        let location = Location::caller();
        Self {
            level,
            label: label_for(level),
            name: name.into(),
            message: message.into(),
            timestamp: OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()),
            file: Cow::Borrowed(location.file()),
            function: DEFAULT_CALLER.to_owned(),
            line: location.line(),
        }
    }

    /// Overrides the caller function name.
    #[must_use]
    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = function.into();
        self
    }

    /// Overrides the source attribution.
    #[must_use]
    pub fn with_source(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Cow::Owned(file.into());
        self.line = line;
        self
    }

    /// Overrides the timestamp.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: OffsetDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Returns the numeric level.
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Returns the rendered level label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the logger name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the decorated message body.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the record timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    /// Returns the full source file path.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Returns the source file basename rendered in the block header.
    #[must_use]
    pub fn file_basename(&self) -> &str {
        Path::new(self.file.as_ref())
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.file)
    }

    /// Returns the caller function name.
    #[must_use]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Returns the source line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}
