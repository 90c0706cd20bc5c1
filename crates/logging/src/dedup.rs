//! crates/logging/src/dedup.rs
//! Suppression of immediately repeated records.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

/// Drops a record when it is identical to the immediately preceding one.
///
/// The filter keeps a single fingerprint of the last accepted record: the
/// hash of its level label and decorated message. Each sink owns one filter,
/// and the slot lives as long as the sink does. This is not a sliding
/// window — a duplicate separated by any other record is accepted again.
///
/// # Examples
///
/// ```
/// use emolog::DuplicateFilter;
///
/// let mut filter = DuplicateFilter::new();
/// assert!(filter.accept("INFO", "📚 | main | ready"));
/// assert!(!filter.accept("INFO", "📚 | main | ready"));
/// assert!(filter.accept("INFO", "📚 | main | working"));
/// assert!(filter.accept("INFO", "📚 | main | ready"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DuplicateFilter {
    last: Option<u64>,
}

impl DuplicateFilter {
    /// Creates a filter that has seen nothing yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Reports whether a record with this label and message may be emitted,
    /// updating the last-seen slot when it may.
    pub fn accept(&mut self, label: &str, message: &str) -> bool {
        let mut hasher = FxHasher::default();
        label.hash(&mut hasher);
        message.hash(&mut hasher);
        let fingerprint = hasher.finish();

        if self.last == Some(fingerprint) {
            return false;
        }

        self.last = Some(fingerprint);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_record_is_always_accepted() {
        let mut filter = DuplicateFilter::new();
        assert!(filter.accept("DEBUG", "message"));
    }

    #[test]
    fn immediate_repeat_is_dropped() {
        let mut filter = DuplicateFilter::new();
        assert!(filter.accept("INFO", "same"));
        assert!(!filter.accept("INFO", "same"));
        assert!(!filter.accept("INFO", "same"));
    }

    #[test]
    fn same_message_at_a_different_level_is_accepted() {
        let mut filter = DuplicateFilter::new();
        assert!(filter.accept("INFO", "same"));
        assert!(filter.accept("WARNING", "same"));
    }

    #[test]
    fn interleaving_resets_the_slot() {
        let mut filter = DuplicateFilter::new();
        assert!(filter.accept("INFO", "first"));
        assert!(filter.accept("INFO", "second"));
        assert!(filter.accept("INFO", "first"));
    }

    #[test]
    fn rejected_records_do_not_update_the_slot() {
        let mut filter = DuplicateFilter::new();
        assert!(filter.accept("INFO", "same"));
        assert!(!filter.accept("INFO", "same"));
        // Still the last accepted record, so a third repeat stays dropped.
        assert!(!filter.accept("INFO", "same"));
    }
}
