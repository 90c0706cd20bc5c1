use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// The five named levels carry the conventional numeric values `10`–`50` and
/// order accordingly: `DEBUG < INFO < WARNING < ERROR < CRITICAL`.
///
/// # Examples
///
/// ```
/// use emolog_core::Level;
///
/// assert!(Level::Debug < Level::Critical);
/// assert_eq!(Level::Warning.value(), 30);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Level {
    /// Diagnostic detail for developers.
    Debug = 10,
    /// Routine informational message.
    Info = 20,
    /// Something unexpected that the program recovered from.
    Warning = 30,
    /// An operation failed.
    Error = 40,
    /// The program cannot reasonably continue.
    Critical = 50,
}

impl Level {
    /// Returns the numeric value carried through the record pipeline.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the uppercase label used when rendering the level.
    ///
    /// # Examples
    ///
    /// ```
    /// use emolog_core::Level;
    ///
    /// assert_eq!(Level::Error.as_str(), "ERROR");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Maps a numeric value back to its named level, if one exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use emolog_core::Level;
    ///
    /// assert_eq!(Level::from_value(40), Some(Level::Error));
    /// assert_eq!(Level::from_value(35), None);
    /// ```
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            10 => Some(Self::Debug),
            20 => Some(Self::Info),
            30 => Some(Self::Warning),
            40 => Some(Self::Error),
            50 => Some(Self::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Level`] from a string fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseLevelError {
    _private: (),
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognised log level name")
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            _ => Err(ParseLevelError { _private: () }),
        }
    }
}

/// Returns the rendered label for an arbitrary numeric level.
///
/// Named values produce their canonical uppercase label; anything else is
/// rendered as `LEVEL(<n>)` so custom thresholds stay visible in output.
///
/// # Examples
///
/// ```
/// use emolog_core::label_for;
///
/// assert_eq!(label_for(20), "INFO");
/// assert_eq!(label_for(35), "LEVEL(35)");
/// ```
#[must_use]
pub fn label_for(value: u8) -> Cow<'static, str> {
    match Level::from_value(value) {
        Some(level) => Cow::Borrowed(level.as_str()),
        None => Cow::Owned(format!("LEVEL({value})")),
    }
}

/// A minimum level given either as a case-insensitive name or a raw number.
///
/// Resolution never fails: unrecognised names demote to INFO and carry a
/// warning string for the facade to emit through itself, while numeric
/// values pass through unchanged.
///
/// # Examples
///
/// ```
/// use emolog_core::{Level, LevelSpec};
///
/// assert_eq!(LevelSpec::from("Warning").resolve().threshold, 30);
/// assert_eq!(LevelSpec::from(35).resolve().threshold, 35);
///
/// let fallback = LevelSpec::from("TRACE").resolve();
/// assert_eq!(fallback.threshold, Level::Info.value());
/// assert!(fallback.fallback_warning.is_some());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LevelSpec {
    /// A level name such as `"DEBUG"`, matched case-insensitively.
    Named(String),
    /// A raw numeric level, passed through unchanged.
    Value(u8),
}

/// Outcome of resolving a [`LevelSpec`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LevelResolution {
    /// The effective minimum level.
    pub threshold: u8,
    /// Warning to emit through the logger when the name was unrecognised.
    pub fallback_warning: Option<String>,
}

impl LevelSpec {
    /// Resolves the specification to an effective threshold.
    #[must_use]
    pub fn resolve(&self) -> LevelResolution {
        match self {
            Self::Value(value) => LevelResolution {
                threshold: *value,
                fallback_warning: None,
            },
            Self::Named(name) => match name.parse::<Level>() {
                Ok(level) => LevelResolution {
                    threshold: level.value(),
                    fallback_warning: None,
                },
                Err(_) => LevelResolution {
                    threshold: Level::Info.value(),
                    fallback_warning: Some(format!(
                        "invalid log level {name:?}; falling back to INFO"
                    )),
                },
            },
        }
    }
}

impl From<&str> for LevelSpec {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<String> for LevelSpec {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<u8> for LevelSpec {
    fn from(value: u8) -> Self {
        Self::Value(value)
    }
}

impl From<Level> for LevelSpec {
    fn from(level: Level) -> Self {
        Self::Value(level.value())
    }
}
