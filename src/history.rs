//! Creation-ordered snapshots of store contents.

use std::sync::Arc;

use crate::record::Record;

/// A point-in-time copy of the store's records.
///
/// Handles are collected while the store's read lock is held; sorting
/// happens only after the lock has been released, so sort cost never
/// blocks writers.
pub(crate) struct History<T>(Vec<Arc<T>>);

impl<T: Record> History<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub(crate) fn push(&mut self, record: Arc<T>) {
        self.0.push(record);
    }

    /// Consume the snapshot, ordered by ascending creation time.
    ///
    /// Records with equal timestamps may come out in either relative order.
    pub(crate) fn into_sorted(mut self) -> Vec<Arc<T>> {
        self.0.sort_by_key(|record| record.created_at());
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    struct Stamped {
        name: &'static str,
        created_at: DateTime<Utc>,
    }

    impl Stamped {
        fn new(name: &'static str, created_secs: i64) -> Arc<Self> {
            Arc::new(Self {
                name,
                created_at: Utc.timestamp_opt(created_secs, 0).unwrap(),
            })
        }
    }

    impl Record for Stamped {
        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }
    }

    #[test]
    fn test_empty_history_sorts_to_empty() {
        let history: History<Stamped> = History::with_capacity(0);
        assert!(history.into_sorted().is_empty());
    }

    #[test]
    fn test_sorts_by_ascending_creation_time() {
        let mut history = History::with_capacity(3);
        history.push(Stamped::new("b", 3));
        history.push(Stamped::new("a", 1));
        history.push(Stamped::new("c", 2));

        let sorted = history.into_sorted();
        let names: Vec<_> = sorted.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_equal_timestamps_keep_all_records() {
        let mut history = History::with_capacity(3);
        history.push(Stamped::new("x", 5));
        history.push(Stamped::new("y", 5));
        history.push(Stamped::new("w", 1));

        let sorted = history.into_sorted();
        assert_eq!(sorted.len(), 3);
        assert_eq!(sorted[0].name, "w");
        // Ties may land in either order, but both must be present.
        let tied: Vec<_> = sorted[1..].iter().map(|r| r.name).collect();
        assert!(tied.contains(&"x"));
        assert!(tied.contains(&"y"));
    }
}
