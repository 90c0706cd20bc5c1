//! crates/logging/src/macros.rs
//! Call-site capturing log macros.

/// Captures the current call site, including the enclosing function name.
///
/// Expands to a [`CallSite`](crate::CallSite) built from `file!()`,
/// `line!()`, and the type-name path of a marker item defined inside the
/// calling function; the marker segment is stripped again during tidying.
///
/// # Examples
///
/// ```
/// fn worker() -> emolog::CallSite {
///     emolog::call_site!()
/// }
///
/// assert_eq!(worker().function(), "worker");
/// ```
#[macro_export]
macro_rules! call_site {
    () => {{
        fn __emolog_site() {}
        fn __name_of<T>(_: &T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::CallSite::from_parts(file!(), line!(), __name_of(&__emolog_site))
    }};
}

/// Logs a formatted message at DEBUG with exact call-site attribution.
///
/// # Examples
///
/// ```
/// use emolog::{Logger, log_debug};
///
/// let logger = Logger::builder("docs-macro-debug").build()?;
/// log_debug!(logger, "attempt {} of {}", 1, 3);
/// # Ok::<(), emolog::ConfigError>(())
/// ```
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_at($crate::Level::Debug, $crate::call_site!(), format!($($arg)*))
    };
}

/// Logs a formatted message at INFO with exact call-site attribution.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_at($crate::Level::Info, $crate::call_site!(), format!($($arg)*))
    };
}

/// Logs a formatted message at WARNING with exact call-site attribution.
#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_at($crate::Level::Warning, $crate::call_site!(), format!($($arg)*))
    };
}

/// Logs a formatted message at ERROR with exact call-site attribution.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_at($crate::Level::Error, $crate::call_site!(), format!($($arg)*))
    };
}

/// Logs a formatted message at CRITICAL with exact call-site attribution.
#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)*) => {
        $logger.log_at($crate::Level::Critical, $crate::call_site!(), format!($($arg)*))
    };
}
