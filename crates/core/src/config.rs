/// Default border line: fifty equals signs.
pub const DEFAULT_BORDER_LINE: &str = "==================================================";

/// Default separator line: fifty hyphens.
pub const DEFAULT_SEPARATOR_LINE: &str = "--------------------------------------------------";

/// Default timestamp format description (`YYYY-MM-DD HH:MM:SS`).
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "[year]-[month]-[day] [hour]:[minute]:[second]";

/// Display strings used when rendering a record block.
///
/// Values are stored verbatim and used verbatim; the timestamp format is a
/// `time` crate format description string, parsed once by the formatter.
/// Immutable once handed to a logger.
///
/// # Examples
///
/// ```
/// use emolog_core::RenderConfig;
///
/// let config = RenderConfig::default().with_border_line("*".repeat(30));
/// assert_eq!(config.border_line, "*".repeat(30));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderConfig {
    /// Line rendered above and below each record block.
    pub border_line: String,
    /// Line rendered between the header and the message body.
    pub separator_line: String,
    /// `time` format description for the record timestamp.
    pub timestamp_format: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            border_line: DEFAULT_BORDER_LINE.to_owned(),
            separator_line: DEFAULT_SEPARATOR_LINE.to_owned(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_owned(),
        }
    }
}

impl RenderConfig {
    /// Replaces the border line.
    #[must_use]
    pub fn with_border_line(mut self, border_line: impl Into<String>) -> Self {
        self.border_line = border_line.into();
        self
    }

    /// Replaces the separator line.
    #[must_use]
    pub fn with_separator_line(mut self, separator_line: impl Into<String>) -> Self {
        self.separator_line = separator_line.into();
        self
    }

    /// Replaces the timestamp format description.
    #[must_use]
    pub fn with_timestamp_format(mut self, timestamp_format: impl Into<String>) -> Self {
        self.timestamp_format = timestamp_format.into();
        self
    }
}
