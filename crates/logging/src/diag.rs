//! crates/logging/src/diag.rs
//! Internal diagnostics channel for failures the logger swallows.

use std::fmt;

/// Reports an internal failure without disturbing the host program.
///
/// Goes to stderr by default; the `tracing` feature reroutes the same
/// message through `tracing::warn!` so embedders can collect it.
pub(crate) fn report(context: &str, detail: &dyn fmt::Display) {
    #[cfg(feature = "tracing")]
    tracing::warn!("emolog: {}: {}", context, detail);

    #[cfg(not(feature = "tracing"))]
    eprintln!("emolog: {context}: {detail}");
}
