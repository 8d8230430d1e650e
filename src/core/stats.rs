//! Link-processing statistics for a single rewrite run.
//!
//! A driver owns one [`StatsAccumulator`] per run and feeds it events while it
//! walks documents. Reports are rendered from a [`LinkStatistics`] snapshot,
//! never from the accumulator itself.
//!
//! # Invariants
//!
//! - A new accumulator (and one that was just reset) reports all zeros and no
//!   categories.
//! - `total_links` and the category breakdown are independent. Recording one
//!   never records the other.
//! - A snapshot is an owned copy. Later recordings do not reach it, and edits
//!   to it do not reach the accumulator.
//! - Counts are added without validation; a negative `record_links` lowers the
//!   total. Sums saturate at the `i64` bounds.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::{debug, trace};

/// Per-category link counts, kept in first-recorded order.
///
/// Keys compare by exact string equality (case and whitespace sensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    entries: Vec<(String, i64)>,
}

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` to `category`, creating the entry at zero first if needed.
    pub fn add(&mut self, category: &str, count: i64) {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, existing)) => *existing = existing.saturating_add(count),
            None => self.entries.push((category.to_string(), count)),
        }
    }

    pub fn get(&self, category: &str) -> Option<i64> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, count)| *count)
    }

    /// Iterate `(category, count)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of every category count.
    pub fn total(&self) -> i64 {
        self.entries
            .iter()
            .fold(0i64, |acc, (_, count)| acc.saturating_add(*count))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for CategoryCounts {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut counts = CategoryCounts::new();
        for (category, count) in iter {
            let category: String = category.into();
            counts.add(&category, count);
        }
        counts
    }
}

impl Serialize for CategoryCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(name, count)| (name, count)))
    }
}

impl<'de> Deserialize<'de> for CategoryCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CategoryCountsVisitor;

        impl<'de> Visitor<'de> for CategoryCountsVisitor {
            type Value = CategoryCounts;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category labels to integer counts")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut counts = CategoryCounts::new();
                // Repeated keys fold into the first occurrence.
                while let Some((category, count)) = access.next_entry::<String, i64>()? {
                    counts.add(&category, count);
                }
                Ok(counts)
            }
        }

        deserializer.deserialize_map(CategoryCountsVisitor)
    }
}

/// Snapshot of a run's link statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStatistics {
    pub total_links: i64,
    pub files_modified: i64,
    #[serde(default)]
    pub links_by_category: CategoryCounts,
}

impl LinkStatistics {
    pub fn is_zero(&self) -> bool {
        self.total_links == 0 && self.files_modified == 0 && self.links_by_category.is_empty()
    }
}

/// Running totals for one link-processing run.
///
/// Not synchronized. Wrap it in a `Mutex` if more than one caller records.
#[derive(Debug, Default)]
pub struct StatsAccumulator {
    stats: LinkStatistics,
}

impl StatsAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` links to the run total.
    pub fn record_links(&mut self, count: i64) {
        self.stats.total_links = self.stats.total_links.saturating_add(count);
        trace!(count, total_links = self.stats.total_links, "recorded links");
    }

    /// Count one more modified file.
    pub fn record_file_modified(&mut self) {
        self.stats.files_modified = self.stats.files_modified.saturating_add(1);
        trace!(
            files_modified = self.stats.files_modified,
            "recorded modified file"
        );
    }

    /// Record a single transformation under `category`.
    pub fn record_transformation(&mut self, category: &str) {
        self.record_transformations(category, 1);
    }

    /// Record `count` transformations under `category`.
    pub fn record_transformations(&mut self, category: &str, count: i64) {
        self.stats.links_by_category.add(category, count);
        trace!(category, count, "recorded transformation");
    }

    /// Owned copy of the current totals.
    pub fn snapshot(&self) -> LinkStatistics {
        self.stats.clone()
    }

    /// Discard everything recorded so far.
    pub fn reset(&mut self) {
        debug!(
            total_links = self.stats.total_links,
            files_modified = self.stats.files_modified,
            categories = self.stats.links_by_category.len(),
            "resetting link statistics"
        );
        self.stats = LinkStatistics::default();
    }
}
