//! crates/logging/src/format.rs
//! Rendering of a record into its fixed bordered block.

use time::format_description::{FormatItem, OwnedFormatItem};
use time::macros::format_description;

use emolog_core::{Record, RenderConfig};

use crate::diag;

/// Compile-checked fallback matching `RenderConfig`'s default description.
const DEFAULT_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

#[derive(Debug)]
enum TimestampFormat {
    Custom(OwnedFormatItem),
    Default,
}

/// Renders records into the fixed six-line block layout:
///
/// ```text
/// ==================================================
/// <timestamp> | <LEVEL> | <logger-name>
/// <source-file> | <function> | <line>
/// --------------------------------------------------
/// <emoji> | <caller> | <message>
/// ==================================================
/// ```
///
/// The border, separator, and timestamp format come from the
/// [`RenderConfig`] given at construction and are used verbatim. The
/// timestamp format description is parsed once here; an invalid description
/// degrades to the default format with a diagnostic instead of failing.
#[derive(Debug)]
pub struct RecordFormatter {
    config: RenderConfig,
    timestamp_format: TimestampFormat,
}

impl RecordFormatter {
    /// Creates a formatter for the given display configuration.
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        let timestamp_format = match time::format_description::parse_owned::<2>(
            &config.timestamp_format,
        ) {
            Ok(items) => TimestampFormat::Custom(items),
            Err(error) => {
                diag::report("invalid timestamp format description", &error);
                TimestampFormat::Default
            }
        };

        Self {
            config,
            timestamp_format,
        }
    }

    /// Returns the display configuration this formatter renders with.
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders one record as a complete block, without a trailing newline.
    #[must_use]
    pub fn render(&self, record: &Record) -> String {
        let border = &self.config.border_line;
        format!(
            "{border}\n{timestamp} | {label} | {name}\n{file} | {function} | {line}\n{separator}\n{message}\n{border}",
            timestamp = self.timestamp(record),
            label = record.label(),
            name = record.name(),
            file = record.file_basename(),
            function = record.function(),
            line = record.line(),
            separator = self.config.separator_line,
            message = record.message(),
        )
    }

    fn timestamp(&self, record: &Record) -> String {
        let formatted = match &self.timestamp_format {
            TimestampFormat::Custom(items) => record.timestamp().format(items),
            TimestampFormat::Default => record.timestamp().format(DEFAULT_FORMAT),
        };

        formatted.unwrap_or_else(|error| {
            diag::report("timestamp rendering failed", &error);
            record.timestamp().to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn record() -> Record {
        Record::new(20, "APP", "📚 | main | ready")
            .with_source("/project/src/service.rs", 42)
            .with_function("start")
            .with_timestamp(datetime!(2024-03-05 14:30:15 UTC))
    }

    #[test]
    fn renders_the_six_line_block() {
        let formatter = RecordFormatter::new(RenderConfig::default());
        let block = formatter.render(&record());
        let lines: Vec<&str> = block.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "=".repeat(50));
        assert_eq!(lines[1], "2024-03-05 14:30:15 | INFO | APP");
        assert_eq!(lines[2], "service.rs | start | 42");
        assert_eq!(lines[3], "-".repeat(50));
        assert_eq!(lines[4], "📚 | main | ready");
        assert_eq!(lines[5], "=".repeat(50));
    }

    #[test]
    fn custom_border_and_separator_render_verbatim() {
        let config = RenderConfig::default()
            .with_border_line("*".repeat(30))
            .with_separator_line("~".repeat(30));
        let formatter = RecordFormatter::new(config);
        let block = formatter.render(&record());
        let lines: Vec<&str> = block.lines().collect();

        assert_eq!(lines[0], "*".repeat(30));
        assert_eq!(lines[3], "~".repeat(30));
        assert_eq!(lines[5], "*".repeat(30));
    }

    #[test]
    fn custom_timestamp_format_is_honoured() {
        let config = RenderConfig::default().with_timestamp_format("[year]-[month]-[day]");
        let formatter = RecordFormatter::new(config);
        let block = formatter.render(&record());

        assert!(block.contains("2024-03-05 | INFO | APP"));
        assert!(!block.contains("14:30:15"));
    }

    #[test]
    fn invalid_timestamp_format_falls_back_to_default() {
        let config = RenderConfig::default().with_timestamp_format("[not-a-component]");
        let formatter = RecordFormatter::new(config);
        let block = formatter.render(&record());

        assert!(block.contains("2024-03-05 14:30:15 | INFO | APP"));
    }

    #[test]
    fn multi_line_messages_extend_the_block() {
        let formatter = RecordFormatter::new(RenderConfig::default());
        let record = Record::new(40, "APP", "⛔️ | start | boom\ncaused by: disk full")
            .with_timestamp(datetime!(2024-03-05 14:30:15 UTC));
        let block = formatter.render(&record);
        let lines: Vec<&str> = block.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[5], "caused by: disk full");
    }
}
