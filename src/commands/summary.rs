//! Score aggregation across rounds

/// Running totals over round scores
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreSummary {
    count: usize,
    total: u64,
    min: Option<u32>,
    max: Option<u32>,
}

impl ScoreSummary {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            count: 0,
            total: 0,
            min: None,
            max: None,
        }
    }

    /// Add one round's score
    pub fn record(&mut self, score: u32) {
        self.count += 1;
        self.total += u64::from(score);
        self.min = Some(self.min.map_or(score, |m| m.min(score)));
        self.max = Some(self.max.map_or(score, |m| m.max(score)));
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Mean score, or `None` before any round was recorded
    #[must_use]
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.total as f64 / self.count as f64)
    }

    #[must_use]
    pub const fn min(&self) -> Option<u32> {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> Option<u32> {
        self.max
    }
}

impl FromIterator<u32> for ScoreSummary {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut summary = Self::new();
        iter.into_iter().for_each(|score| summary.record(score));
        summary
    }
}
