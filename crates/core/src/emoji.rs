use crate::level::Level;

/// Glyph rendered for levels with no entry in the fixed table.
pub const DEFAULT_GLYPH: &str = "❓";

/// Returns the marker glyph for a numeric level.
///
/// Exact-match lookup against the fixed table; any miss, including custom
/// numeric levels, yields [`DEFAULT_GLYPH`]. Pure, no side effects.
///
/// # Examples
///
/// ```
/// use emolog_core::{Level, glyph_for, DEFAULT_GLYPH};
///
/// assert_eq!(glyph_for(Level::Info.value()), "📚");
/// assert_eq!(glyph_for(35), DEFAULT_GLYPH);
/// ```
#[must_use]
pub const fn glyph_for(value: u8) -> &'static str {
    match Level::from_value(value) {
        Some(Level::Debug) => "🛠️",
        Some(Level::Info) => "📚",
        Some(Level::Warning) => "🔥",
        Some(Level::Error) => "⛔️",
        Some(Level::Critical) => "❌",
        None => DEFAULT_GLYPH,
    }
}
