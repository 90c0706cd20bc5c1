use std::backtrace::{Backtrace, BacktraceStatus};
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// The message body of a log call.
///
/// A payload is either plain text or the rendering of an error value. Error
/// payloads stringify the error for display and carry a trace: the
/// `source()` chain rendered as `caused by:` lines, followed by a captured
/// backtrace when `RUST_BACKTRACE` enables one. The facade appends the trace
/// only for error and critical records.
///
/// # Examples
///
/// ```
/// use emolog_core::Payload;
///
/// let plain = Payload::from("ready");
/// assert_eq!(plain.text(), "ready");
/// assert!(plain.trace().is_none());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payload {
    text: Cow<'static, str>,
    trace: Option<String>,
}

impl Payload {
    /// Builds a plain-text payload from any displayable value.
    #[must_use]
    pub fn display(value: impl fmt::Display) -> Self {
        Self {
            text: Cow::Owned(value.to_string()),
            trace: None,
        }
    }

    /// Builds a payload from an error value.
    ///
    /// The error is stringified for display. The trace collects the
    /// `source()` chain and, when the process captures backtraces, the
    /// backtrace of the call; an error with neither yields no trace at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use emolog_core::Payload;
    /// use std::io;
    ///
    /// let error = io::Error::new(io::ErrorKind::NotFound, "missing");
    /// let payload = Payload::from_error(&error);
    /// assert_eq!(payload.text(), "missing");
    /// ```
    #[must_use]
    pub fn from_error<E: Error + ?Sized>(error: &E) -> Self {
        Self {
            text: Cow::Owned(error.to_string()),
            trace: render_trace(error),
        }
    }

    /// Returns the display text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the rendered trace, if the payload carries one.
    #[must_use]
    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Self {
            text: Cow::Owned(text.to_owned()),
            trace: None,
        }
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Self {
            text: Cow::Owned(text),
            trace: None,
        }
    }
}

impl From<Cow<'static, str>> for Payload {
    fn from(text: Cow<'static, str>) -> Self {
        Self { text, trace: None }
    }
}

impl<E: Error> From<&E> for Payload {
    fn from(error: &E) -> Self {
        Self::from_error(error)
    }
}

/// Renders the cause chain and captured backtrace of an error.
///
/// Returns `None` when the error has no sources and no backtrace was
/// captured, so plain failures render undecorated.
fn render_trace<E: Error + ?Sized>(error: &E) -> Option<String> {
    let mut lines = Vec::new();
    let mut source = error.source();
    while let Some(cause) = source {
        lines.push(format!("caused by: {cause}"));
        source = cause.source();
    }

    let backtrace = Backtrace::capture();
    let captured = matches!(backtrace.status(), BacktraceStatus::Captured);

    if lines.is_empty() && !captured {
        return None;
    }

    let mut rendered = lines.join("\n");
    if captured {
        if !rendered.is_empty() {
            rendered.push('\n');
        }
        rendered.push_str("stack backtrace:\n");
        rendered.push_str(backtrace.to_string().trim_end());
    }

    Some(rendered)
}
