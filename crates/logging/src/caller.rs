//! crates/logging/src/caller.rs
//! Resolution of the true calling function from captured stack frames.

use std::backtrace::Backtrace;

use emolog_core::DEFAULT_CALLER;

use crate::diag;

/// Frames skipped before the walk starts looking for a caller.
///
/// The first frames of a capture always belong to the backtrace machinery
/// itself, so starting two frames in matches the facade's own depth.
pub const DEFAULT_STACK_SKIP: usize = 2;

/// Symbol prefixes that can never be the caller: this crate's own modules
/// and the standard/logging/test infrastructure relaying the call.
const INTERNAL_PREFIXES: &[&str] = &[
    "emolog::caller",
    "emolog::dedup",
    "emolog::diag",
    "emolog::format",
    "emolog::logger",
    "emolog::registry",
    "emolog::sink",
    "emolog_core::",
    "std::",
    "core::",
    "alloc::",
    "backtrace::",
    "test::",
    "__rust",
];

/// Caller attribution recovered from a stack walk.
///
/// `file` and `line` are only present when the capture carried debug
/// information for the selected frame; the facade keeps its `#[track_caller]`
/// defaults otherwise.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolvedCaller {
    /// The calling function's bare name.
    pub function: String,
    /// Full path of the source file, when the frame was symbolicated.
    pub file: Option<String>,
    /// Line number within `file`, when the frame was symbolicated.
    pub line: Option<u32>,
}

/// Walks captured stack frames to find the first one outside the logging
/// machinery.
///
/// Resolution is strictly best-effort: every failure mode — an empty or
/// unparsable capture, no frame surviving the skip rules — yields `None`,
/// and the caller of [`resolve`](Self::resolve) keeps whatever attribution
/// it already had. A capture that renders no frames at all is additionally
/// reported on the diagnostics channel.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CallerResolver {
    skip: usize,
}

impl CallerResolver {
    /// Creates a resolver with the default frame-skip hint.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_skip(DEFAULT_STACK_SKIP)
    }

    /// Creates a resolver that skips the given number of leading frames.
    #[must_use]
    pub const fn with_skip(skip: usize) -> Self {
        Self { skip }
    }

    /// Returns the configured frame-skip hint.
    #[must_use]
    pub const fn skip(&self) -> usize {
        self.skip
    }

    /// Captures the current stack and resolves the calling function.
    #[must_use]
    pub fn resolve(&self) -> Option<ResolvedCaller> {
        let rendered = Backtrace::force_capture().to_string();
        let frames = parse_frames(&rendered);
        if frames.is_empty() {
            diag::report(
                "caller resolution failed",
                &"backtrace rendered no frames",
            );
            return None;
        }

        select_caller(&frames, self.skip)
    }
}

impl Default for CallerResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Call-site attribution captured at macro expansion time.
///
/// The `log_*!` macros build one of these with `file!()`, `line!()`, and the
/// enclosing function's name, bypassing the stack walk entirely.
///
/// # Examples
///
/// ```
/// use emolog::call_site;
///
/// fn handler() -> emolog::CallSite {
///     call_site!()
/// }
///
/// let site = handler();
/// assert_eq!(site.function(), "handler");
/// assert!(site.file().ends_with(".rs"));
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    function: String,
}

impl CallSite {
    /// Builds a call site from macro-captured parts.
    ///
    /// `raw_function` is the type-name path of a marker item defined inside
    /// the calling function; the trailing marker segment is stripped and the
    /// remainder tidied down to the bare function name.
    #[must_use]
    pub fn from_parts(file: &'static str, line: u32, raw_function: &'static str) -> Self {
        Self {
            file,
            line,
            function: tidy_function(raw_function),
        }
    }

    /// Returns the source file path.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Returns the source line.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the bare name of the calling function.
    #[must_use]
    pub fn function(&self) -> &str {
        &self.function
    }
}

struct Frame<'a> {
    symbol: &'a str,
    location: Option<(&'a str, u32)>,
}

/// Parses the rendered form of a [`Backtrace`] into frames.
///
/// Each frame renders as `<index>: <symbol>` optionally followed by an
/// indented `at <file>:<line>:<column>` line. Anything that doesn't match is
/// ignored rather than treated as an error.
fn parse_frames(rendered: &str) -> Vec<Frame<'_>> {
    let mut frames: Vec<Frame<'_>> = Vec::new();

    for line in rendered.lines() {
        let trimmed = line.trim();
        if let Some(symbol) = frame_symbol(trimmed) {
            frames.push(Frame {
                symbol,
                location: None,
            });
        } else if let Some(rest) = trimmed.strip_prefix("at ") {
            if let Some(frame) = frames.last_mut() {
                frame.location = parse_location(rest);
            }
        }
    }

    frames
}

/// Extracts the symbol from a `<index>: <symbol>` frame header.
fn frame_symbol(line: &str) -> Option<&str> {
    let (index, symbol) = line.split_once(": ")?;
    if index.is_empty() || !index.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let symbol = symbol.trim();
    (!symbol.is_empty()).then_some(symbol)
}

/// Splits `path:line:column` into the path and line number.
fn parse_location(rest: &str) -> Option<(&str, u32)> {
    let mut pieces = rest.rsplitn(3, ':');
    let _column = pieces.next()?;
    let line = pieces.next()?.parse::<u32>().ok()?;
    let path = pieces.next()?;
    Some((path, line))
}

fn select_caller(frames: &[Frame<'_>], skip: usize) -> Option<ResolvedCaller> {
    frames
        .iter()
        .skip(skip)
        .find(|frame| !is_internal(frame.symbol))
        .map(|frame| ResolvedCaller {
            function: tidy_function(frame.symbol),
            file: frame.location.map(|(path, _)| path.to_owned()),
            line: frame.location.map(|(_, line)| line),
        })
}

/// Reports whether a symbol belongs to the logging machinery rather than a
/// genuine caller.
fn is_internal(symbol: &str) -> bool {
    symbol == "<unknown>"
        || INTERNAL_PREFIXES
            .iter()
            .any(|prefix| symbol.starts_with(prefix))
}

/// Reduces a symbol path to the bare function name.
///
/// Strips a trailing legacy hash segment (`::h<16 hex>`), closure markers,
/// and the macro marker item, then keeps the final path segment. A bare
/// `main` stays `main`, matching the attribution of top-level calls.
fn tidy_function(symbol: &str) -> String {
    let mut remaining = symbol;

    loop {
        let Some((head, tail)) = remaining.rsplit_once("::") else {
            break;
        };
        let is_hash = tail.len() == 17
            && tail.starts_with('h')
            && tail[1..].bytes().all(|byte| byte.is_ascii_hexdigit());
        if is_hash || tail == "{{closure}}" || tail == "__emolog_site" {
            remaining = head;
        } else {
            break;
        }
    }

    let name = remaining.rsplit("::").next().unwrap_or(remaining);
    if name.is_empty() {
        DEFAULT_CALLER.to_owned()
    } else {
        name.to_owned()
    }
}
