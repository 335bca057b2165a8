//! Frequency counters and derived statistics.
//!
//! Every heuristic threshold in the tokenizers is calibrated against a
//! "most common" value from one of these counters, so the counters must be
//! deterministic: ties break by first insertion order, never by hash order.
//! Counters are backed by [`IndexMap`] for exactly that reason.
//!
//! An empty counter has no most-common value. That case is surfaced as
//! `None` and every consumer treats it as "heuristic not triggered".

mod characters;
mod lines;

pub use characters::CharacterStatistic;
pub use lines::{line_pitch, TextLineStatistic};

use indexmap::IndexMap;
use std::hash::Hash;

/// Number of decimals kept when counting fractional values.
///
/// Glyph coordinates carry sub-decimal floating point noise; rounding to
/// one decimal before counting collapses values that differ only by that
/// noise.
const DECI_SCALE: f32 = 10.0;

/// A frequency counter over fractional values, keyed at one-decimal
/// precision.
#[derive(Debug, Clone, Default)]
pub struct FloatCounter {
    counts: IndexMap<i64, usize>,
    total: usize,
}

impl FloatCounter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `value`.
    ///
    /// Non-finite values are ignored; a NaN coordinate must degrade the
    /// statistic, not poison it.
    pub fn add(&mut self, value: f32) {
        if !value.is_finite() {
            return;
        }
        let key = (value * DECI_SCALE).round() as i64;
        *self.counts.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    /// The most frequently counted value, or `None` for an empty counter.
    ///
    /// Ties break by first insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_layout::statistics::FloatCounter;
    ///
    /// let mut counter = FloatCounter::new();
    /// counter.add(12.02);
    /// counter.add(11.98);
    /// counter.add(14.0);
    /// assert_eq!(counter.most_common(), Some(12.0));
    /// ```
    pub fn most_common(&self) -> Option<f32> {
        let mut best: Option<(i64, usize)> = None;
        for (&key, &count) in &self.counts {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((key, count)),
            }
        }
        best.map(|(key, _)| key as f32 / DECI_SCALE)
    }

    /// The mean of all counted values (at counting precision), or `None`
    /// for an empty counter.
    pub fn average(&self) -> Option<f32> {
        if self.total == 0 {
            return None;
        }
        let sum: f64 = self
            .counts
            .iter()
            .map(|(&key, &count)| key as f64 * count as f64)
            .sum();
        Some((sum / (self.total as f64 * DECI_SCALE as f64)) as f32)
    }

    /// Total number of counted occurrences.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether nothing has been counted yet.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Fold another counter into this one by summing per-value counts.
    pub fn merge(&mut self, other: &FloatCounter) {
        for (&key, &count) in &other.counts {
            *self.counts.entry(key).or_insert(0) += count;
        }
        self.total += other.total;
    }
}

/// A frequency counter over categorical values (font faces, colors).
#[derive(Debug, Clone)]
pub struct ObjectCounter<T> {
    counts: IndexMap<T, usize>,
    total: usize,
}

impl<T> Default for ObjectCounter<T> {
    fn default() -> Self {
        Self {
            counts: IndexMap::new(),
            total: 0,
        }
    }
}

impl<T: Hash + Eq + Clone> ObjectCounter<T> {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `value`.
    pub fn add(&mut self, value: T) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.total += 1;
    }

    /// The most frequently counted value, or `None` for an empty counter.
    ///
    /// Ties break by first insertion.
    pub fn most_common(&self) -> Option<&T> {
        let mut best: Option<(&T, usize)> = None;
        for (value, &count) in &self.counts {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((value, count)),
            }
        }
        best.map(|(value, _)| value)
    }

    /// Total number of counted occurrences.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Whether nothing has been counted yet.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Fold another counter into this one by summing per-value counts.
    pub fn merge(&mut self, other: &ObjectCounter<T>) {
        for (value, &count) in &other.counts {
            *self.counts.entry(value.clone()).or_insert(0) += count;
        }
        self.total += other.total;
    }
}
