//! Score extreme tracking with leader sets
//!
//! High and low score tracking is not a plain min/max: the snapshot also
//! reports *who* holds the record, and several players can share it. The
//! reducer here keeps the running extreme together with the set of labels
//! that attained it, so the tie bookkeeping is a small pure step the
//! aggregation pass can reuse for both directions.

use rustc_hash::FxHashSet;

/// Direction of the extreme being tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Track the largest value seen (high score)
    Highest,
    /// Track the smallest value seen (low score)
    Lowest,
}

/// Running extreme plus the set of participant labels that attained it.
///
/// A strictly better value replaces the extreme and clears the leader set;
/// an exact tie adds the label to the existing set. Equality is exact
/// (`f64 ==`): scores are short decimal text upstream, so ties are
/// reproduced faithfully rather than fuzzed through an epsilon.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtremeTracker {
    direction: Direction,
    value: Option<f64>,
    leaders: FxHashSet<String>,
}

impl ExtremeTracker {
    /// Create a tracker for the given direction.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            value: None,
            leaders: FxHashSet::default(),
        }
    }

    /// Create a high-score tracker.
    #[must_use]
    pub fn highest() -> Self {
        Self::new(Direction::Highest)
    }

    /// Create a low-score tracker.
    #[must_use]
    pub fn lowest() -> Self {
        Self::new(Direction::Lowest)
    }

    /// Fold one observation into the tracker.
    pub fn observe(&mut self, value: f64, label: &str) {
        let improved = self.value.map_or(true, |best| match self.direction {
            Direction::Highest => value > best,
            Direction::Lowest => value < best,
        });

        if improved {
            self.value = Some(value);
            self.leaders.clear();
            self.leaders.insert(label.to_owned());
        } else if self.value == Some(value) {
            self.leaders.insert(label.to_owned());
        }
    }

    /// Get the current extreme, `None` before any observation.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.value
    }

    /// Get the labels currently holding the extreme.
    #[must_use]
    pub const fn leaders(&self) -> &FxHashSet<String> {
        &self.leaders
    }

    /// Consume the tracker into its extreme and a sorted leader list.
    #[must_use]
    pub fn finish(self) -> (Option<f64>, Vec<String>) {
        let mut leaders: Vec<String> = self.leaders.into_iter().collect();
        leaders.sort_unstable();
        (self.value, leaders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tracker() {
        let tracker = ExtremeTracker::highest();
        assert_eq!(tracker.value(), None);
        assert!(tracker.leaders().is_empty());
    }

    #[test]
    fn test_strict_improvement_clears_leaders() {
        let mut tracker = ExtremeTracker::highest();
        tracker.observe(10.0, "Alice");
        tracker.observe(12.0, "Bob");

        assert_eq!(tracker.value(), Some(12.0));
        assert_eq!(tracker.leaders().len(), 1);
        assert!(tracker.leaders().contains("Bob"));
    }

    #[test]
    fn test_exact_tie_accumulates() {
        let mut tracker = ExtremeTracker::highest();
        tracker.observe(10.0, "Alice");
        tracker.observe(7.0, "Bob");
        tracker.observe(10.0, "Carol");

        assert_eq!(tracker.value(), Some(10.0));
        assert_eq!(tracker.leaders().len(), 2);
        assert!(tracker.leaders().contains("Alice"));
        assert!(tracker.leaders().contains("Carol"));
    }

    #[test]
    fn test_duplicate_label_counts_once() {
        let mut tracker = ExtremeTracker::highest();
        tracker.observe(10.0, "Alice");
        tracker.observe(10.0, "Alice");
        assert_eq!(tracker.leaders().len(), 1);
    }

    #[test]
    fn test_lowest_direction() {
        let mut tracker = ExtremeTracker::lowest();
        tracker.observe(10.0, "Alice");
        tracker.observe(7.0, "Bob");
        tracker.observe(9.0, "Carol");

        assert_eq!(tracker.value(), Some(7.0));
        assert!(tracker.leaders().contains("Bob"));
        assert_eq!(tracker.leaders().len(), 1);
    }

    #[test]
    fn test_finish_sorts_leaders() {
        let mut tracker = ExtremeTracker::highest();
        tracker.observe(5.0, "Carol");
        tracker.observe(5.0, "Alice");
        tracker.observe(5.0, "Bob");

        let (value, leaders) = tracker.finish();
        assert_eq!(value, Some(5.0));
        assert_eq!(leaders, ["Alice", "Bob", "Carol"]);
    }
}
