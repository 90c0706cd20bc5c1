//! crates/logging/src/sink.rs
//! Record sinks wrapping arbitrary writers.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use emolog_core::{ConfigError, Record, RenderConfig};

use crate::dedup::DuplicateFilter;
use crate::format::RecordFormatter;

/// Streaming sink that renders records into an [`io::Write`] target.
///
/// The sink owns the underlying writer together with its own
/// [`RecordFormatter`] and [`DuplicateFilter`], so every attached output
/// formats records independently and suppresses its own immediate
/// duplicates. Writes are flushed per record; the file constructor opens in
/// append mode and creates missing parent directories first.
///
/// # Examples
///
/// Collect rendered blocks into a [`Vec<u8>`]:
///
/// ```
/// use emolog::{Record, RecordSink, RenderConfig};
///
/// let mut sink = RecordSink::new(Vec::new(), RenderConfig::default());
/// let emitted = sink.emit(&Record::new(20, "APP", "📚 | main | ready"))?;
/// assert!(emitted);
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(output.contains("📚 | main | ready"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct RecordSink<W> {
    writer: W,
    formatter: RecordFormatter,
    filter: DuplicateFilter,
}

impl<W> RecordSink<W> {
    /// Creates a sink rendering with the given display configuration.
    #[must_use]
    pub fn new(writer: W, config: RenderConfig) -> Self {
        Self {
            writer,
            formatter: RecordFormatter::new(config),
            filter: DuplicateFilter::new(),
        }
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    #[must_use]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> RecordSink<W>
where
    W: Write,
{
    /// Writes a record block unless the duplicate filter drops it.
    ///
    /// Returns whether the record was actually written. The rendered block
    /// is terminated with a newline and the writer is flushed so file sinks
    /// stay inspectable between calls.
    pub fn emit(&mut self, record: &Record) -> io::Result<bool> {
        if !self.filter.accept(record.label(), record.message()) {
            return Ok(false);
        }

        let block = self.formatter.render(record);
        self.writer.write_all(block.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(true)
    }
}

impl RecordSink<io::Stdout> {
    /// Creates the console sink writing to standard output.
    #[must_use]
    pub fn console(config: RenderConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl RecordSink<File> {
    /// Creates a file sink appending UTF-8 blocks to `path`.
    ///
    /// Missing parent directories are created first; both the directory
    /// creation and the open can fail with a [`ConfigError`] carrying the
    /// offending path.
    pub fn file(path: impl AsRef<Path>, config: RenderConfig) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| ConfigError::CreateLogDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| ConfigError::OpenLogFile {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::new(file, config))
    }
}
