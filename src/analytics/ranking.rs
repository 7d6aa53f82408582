//! Ordering of scored items under explicit key chains
//!
//! A [`SortChain`] is an ordered list of [`SortKey`]s. Keys are evaluated in
//! turn and the first non-equal comparison decides. Sorting is stable, so
//! items equal under every key keep their input order.

use crate::models::{CourseRecord, RankMetric};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Sort direction of a single key
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// A labelled item with a numeric score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
    pub label: String,
    pub score: f64,
}

impl RankedItem {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// First character of the label
    pub fn initial(&self) -> Option<char> {
        self.label.chars().next()
    }
}

type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// One key extractor with its direction
pub struct SortKey<T> {
    name: &'static str,
    order: SortOrder,
    compare: Comparator<T>,
}

impl<T: 'static> SortKey<T> {
    /// Key compared through its `Ord` implementation
    pub fn by<K, F>(name: &'static str, order: SortOrder, extract: F) -> Self
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Self {
            name,
            order,
            compare: Box::new(move |a: &T, b: &T| extract(a).cmp(&extract(b))),
        }
    }

    /// Float key compared under IEEE 754 total order
    pub fn by_float<F>(name: &'static str, order: SortOrder, extract: F) -> Self
    where
        F: Fn(&T) -> f64 + Send + Sync + 'static,
    {
        Self {
            name,
            order,
            compare: Box::new(move |a: &T, b: &T| extract(a).total_cmp(&extract(b))),
        }
    }
}

impl<T> SortKey<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.order.apply((self.compare)(a, b))
    }
}

impl<T> fmt::Debug for SortKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortKey")
            .field("name", &self.name)
            .field("order", &self.order)
            .finish()
    }
}

/// Lexicographic combination of sort keys
#[derive(Debug)]
pub struct SortChain<T> {
    keys: Vec<SortKey<T>>,
}

impl<T> Default for SortChain<T> {
    fn default() -> Self {
        Self { keys: Vec::new() }
    }
}

impl<T> SortChain<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key evaluated after all existing keys
    pub fn then(mut self, key: SortKey<T>) -> Self {
        self.keys.push(key);
        self
    }

    pub fn keys(&self) -> &[SortKey<T>] {
        &self.keys
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.keys
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Stable sort in place
    pub fn sort(&self, items: &mut [T]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

/// Score descending, then first character of the label ascending
pub fn top_k_chain() -> SortChain<RankedItem> {
    SortChain::new()
        .then(SortKey::by_float("score", SortOrder::Descending, |i: &RankedItem| i.score))
        .then(SortKey::by("initial", SortOrder::Ascending, RankedItem::initial))
}

/// Distance ascending, then full label descending
pub fn nearest_chain() -> SortChain<RankedItem> {
    SortChain::new()
        .then(SortKey::by_float("distance", SortOrder::Ascending, |i: &RankedItem| i.score))
        .then(SortKey::by("label", SortOrder::Descending, |i: &RankedItem| i.label.clone()))
}

/// Top titles by a metric with duplicate titles collapsed
pub struct CourseRanker;

impl CourseRanker {
    /// Highest `top_k` distinct titles by `metric`
    ///
    /// Ties on the metric are broken by the first character of the title
    /// only; beyond that, load order decides which offering comes first.
    pub fn rank(records: &[CourseRecord], top_k: usize, metric: RankMetric) -> Vec<String> {
        let mut items: Vec<RankedItem> = records
            .iter()
            .map(|r| RankedItem::new(r.course_title.clone(), metric.value_of(r)))
            .collect();

        top_k_chain().sort(&mut items);
        distinct_labels(items, top_k)
    }
}

/// First `limit` labels in order, skipping labels already taken
pub fn distinct_labels(items: Vec<RankedItem>, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .map(|item| item.label)
        .filter(|label| seen.insert(label.clone()))
        .take(limit)
        .collect()
}
