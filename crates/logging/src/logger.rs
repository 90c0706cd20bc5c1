//! crates/logging/src/logger.rs
//! The logging facade and its builder.

use std::panic::Location;
use std::path::PathBuf;
use std::sync::PoisonError;

use emolog_core::{
    ConfigError, DEFAULT_CALLER, Level, LevelSpec, Payload, Record, RenderConfig, glyph_for,
};

use crate::caller::{CallSite, CallerResolver, DEFAULT_STACK_SKIP};
use crate::diag;
use crate::registry::{self, SharedState};
use crate::sink::RecordSink;

/// Configures and constructs a [`Logger`].
///
/// Obtained from [`Logger::builder`]. Defaults: level DEBUG, console sink
/// only, default [`RenderConfig`], default caller stack-skip hint.
///
/// # Examples
///
/// ```no_run
/// use emolog::Logger;
///
/// let logger = Logger::builder("APP")
///     .level("INFO")
///     .save(true)
///     .log_path("logs/app.log")
///     .build()?;
/// logger.info("service started");
/// # Ok::<(), emolog::ConfigError>(())
/// ```
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    level: LevelSpec,
    save: bool,
    log_path: Option<PathBuf>,
    config: RenderConfig,
    stack_skip: usize,
}

impl LoggerBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: LevelSpec::from(Level::Debug),
            save: false,
            log_path: None,
            config: RenderConfig::default(),
            stack_skip: DEFAULT_STACK_SKIP,
        }
    }

    /// Sets the minimum level, by case-insensitive name or numeric value.
    #[must_use]
    pub fn level(mut self, level: impl Into<LevelSpec>) -> Self {
        self.level = level.into();
        self
    }

    /// Enables or disables saving records to a file.
    #[must_use]
    pub fn save(mut self, save: bool) -> Self {
        self.save = save;
        self
    }

    /// Sets the log file path used when saving is enabled.
    #[must_use]
    pub fn log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(path.into());
        self
    }

    /// Overrides the display configuration.
    #[must_use]
    pub fn render_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the caller-resolution frame-skip hint.
    #[must_use]
    pub fn stack_skip(mut self, frames: usize) -> Self {
        self.stack_skip = frames;
        self
    }

    /// Builds the logger, attaching any sinks not yet present on the shared
    /// state registered under this name.
    ///
    /// Fails with [`ConfigError::MissingLogPath`] when saving was requested
    /// without a path, and with the directory/file variants when the file
    /// sink cannot be attached. An unrecognised level name is not an error:
    /// the logger comes up at INFO and immediately emits a warning about it
    /// through itself.
    pub fn build(self) -> Result<Logger, ConfigError> {
        let resolution = self.level.resolve();
        let state = registry::shared(&self.name);

        {
            let mut guard = state.lock().unwrap_or_else(PoisonError::into_inner);
            guard.threshold = resolution.threshold;

            if guard.console.is_none() {
                guard.console = Some(RecordSink::console(self.config.clone()));
            }

            if self.save {
                let path = self.log_path.ok_or(ConfigError::MissingLogPath)?;
                if guard.file.is_none() {
                    guard.file = Some(RecordSink::file(&path, self.config.clone())?);
                }
            }
        }

        let logger = Logger {
            name: self.name,
            state,
            config: self.config,
            resolver: CallerResolver::with_skip(self.stack_skip),
        };

        if let Some(warning) = resolution.fallback_warning {
            logger.warning(warning);
        }

        Ok(logger)
    }
}

/// Emoji-decorating logging facade over a named, process-wide sink set.
///
/// Every leveled call below the effective minimum level is dropped; the rest
/// are decorated as `<emoji> | <caller> | <message>`, attributed to the true
/// call site, rendered as a bordered block per sink, and suppressed per sink
/// when identical to the immediately preceding record.
///
/// Cloning is cheap and clones share the same sink set, as do separately
/// built loggers with the same name.
///
/// # Examples
///
/// ```
/// use emolog::Logger;
///
/// let logger = Logger::builder("docs-facade").level("WARNING").build()?;
/// logger.info("dropped");
/// logger.warning("emitted");
/// # Ok::<(), emolog::ConfigError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Logger {
    name: String,
    state: SharedState,
    config: RenderConfig,
    resolver: CallerResolver,
}

impl Logger {
    /// Starts building a logger registered under `name`.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    /// Returns the logger name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display configuration this logger was built with.
    #[must_use]
    pub fn render_config(&self) -> &RenderConfig {
        &self.config
    }

    /// Returns the effective minimum level of the shared state.
    #[must_use]
    pub fn effective_level(&self) -> u8 {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .threshold
    }

    /// Logs a message at DEBUG.
    #[track_caller]
    pub fn debug(&self, message: impl Into<Payload>) {
        self.emit(Level::Debug.value(), &message.into(), Location::caller(), None);
    }

    /// Logs a message at INFO.
    #[track_caller]
    pub fn info(&self, message: impl Into<Payload>) {
        self.emit(Level::Info.value(), &message.into(), Location::caller(), None);
    }

    /// Logs a message at WARNING.
    #[track_caller]
    pub fn warning(&self, message: impl Into<Payload>) {
        self.emit(Level::Warning.value(), &message.into(), Location::caller(), None);
    }

    /// Logs a message at ERROR, appending the payload's trace if present.
    #[track_caller]
    pub fn error(&self, message: impl Into<Payload>) {
        self.emit(Level::Error.value(), &message.into(), Location::caller(), None);
    }

    /// Logs a message at CRITICAL, appending the payload's trace if present.
    #[track_caller]
    pub fn critical(&self, message: impl Into<Payload>) {
        self.emit(Level::Critical.value(), &message.into(), Location::caller(), None);
    }

    /// Logs with an explicit call site, bypassing the stack walk.
    ///
    /// This is the entry point used by the `log_*!` macros, which capture
    /// the enclosing function at expansion time.
    #[track_caller]
    pub fn log_at(&self, level: Level, site: CallSite, message: impl Into<Payload>) {
        self.emit(level.value(), &message.into(), Location::caller(), Some(&site));
    }

    fn emit(
        &self,
        level: u8,
        payload: &Payload,
        location: &'static Location<'static>,
        site: Option<&CallSite>,
    ) {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if level < guard.threshold {
            return;
        }

        let (function, refined) = match site {
            Some(site) => (
                site.function().to_owned(),
                Some((site.file().to_owned(), site.line())),
            ),
            None => match self.resolver.resolve() {
                Some(caller) => {
                    let refined = caller.file.zip(caller.line);
                    (caller.function, refined)
                }
                None => (DEFAULT_CALLER.to_owned(), None),
            },
        };

        let mut record = Record::new(level, &self.name, assemble(level, &function, payload))
            .with_source(location.file(), location.line())
            .with_function(function);
        if let Some((file, line)) = refined {
            record = record.with_source(file, line);
        }

        if let Some(console) = guard.console.as_mut() {
            if let Err(error) = console.emit(&record) {
                diag::report("console sink write failed", &error);
            }
        }
        if let Some(file) = guard.file.as_mut() {
            if let Err(error) = file.emit(&record) {
                diag::report("file sink write failed", &error);
            }
        }
    }
}

/// Builds the decorated message line, appending the payload trace for
/// error-grade records.
fn assemble(level: u8, caller: &str, payload: &Payload) -> String {
    let mut message = format!("{} | {} | {}", glyph_for(level), caller, payload.text());

    if level >= Level::Error.value() {
        if let Some(trace) = payload.trace() {
            message.push('\n');
            message.push_str(trace);
        }
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Failure;

    impl fmt::Display for Failure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("failure")
        }
    }

    impl std::error::Error for Failure {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&UNDERLYING)
        }
    }

    #[derive(Debug)]
    struct Underlying;

    impl fmt::Display for Underlying {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("underlying")
        }
    }

    impl std::error::Error for Underlying {}

    static UNDERLYING: Underlying = Underlying;

    #[test]
    fn assemble_joins_glyph_caller_and_text() {
        let payload = Payload::from("ready");
        assert_eq!(
            assemble(Level::Info.value(), "start", &payload),
            "📚 | start | ready"
        );
    }

    #[test]
    fn assemble_appends_trace_for_error_grade_levels() {
        let payload = Payload::from_error(&Failure);
        let message = assemble(Level::Error.value(), "start", &payload);
        assert!(message.starts_with("⛔️ | start | failure"));
        assert!(message.contains("caused by: underlying"));
    }

    #[test]
    fn assemble_withholds_trace_below_error() {
        let payload = Payload::from_error(&Failure);
        let message = assemble(Level::Warning.value(), "start", &payload);
        assert_eq!(message, "🔥 | start | failure");
    }

    #[test]
    fn builder_requires_a_path_when_saving() {
        let error = Logger::builder("logger-missing-path")
            .save(true)
            .build()
            .err()
            .expect("construction must fail");
        assert!(matches!(error, ConfigError::MissingLogPath));
    }

    #[test]
    fn builder_defaults_to_debug_threshold() {
        let logger = Logger::builder("logger-default-level")
            .build()
            .expect("build");
        assert_eq!(logger.effective_level(), Level::Debug.value());
    }

    #[test]
    fn unknown_level_name_demotes_to_info() {
        let logger = Logger::builder("logger-unknown-level")
            .level("TRACE")
            .build()
            .expect("build");
        assert_eq!(logger.effective_level(), Level::Info.value());
    }

    #[test]
    fn same_name_shares_the_effective_level() {
        let first = Logger::builder("logger-shared-level")
            .level("ERROR")
            .build()
            .expect("build");
        let _second = Logger::builder("logger-shared-level")
            .level("DEBUG")
            .build()
            .expect("build");

        // The later construction reconfigured the shared state.
        assert_eq!(first.effective_level(), Level::Debug.value());
    }
}
