use std::io;
use std::path::PathBuf;

/// Configuration errors raised when constructing a logger.
///
/// These are the only fatal failures in the crate: they surface from the
/// builder's `build()` call and never from the logging path itself.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File saving was requested without a log file path.
    #[error("log path is required when saving to file is enabled")]
    MissingLogPath,

    /// The parent directory of the log file could not be created.
    #[error("failed to create log directory {path}")]
    CreateLogDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The log file could not be opened for appending.
    #[error("failed to open log file {path}")]
    OpenLogFile {
        /// The file that could not be opened.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },
}
