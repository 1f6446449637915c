//! Ordering of scored plans.
//!
//! Ranking is a stable descending sort: plans with equal scores keep
//! their catalog order, so the same inputs always give the same list.
//! Truncation and page slicing live on [`RankedPlans`] and are chosen by
//! the caller.

use serde::Serialize;

use crate::scoring::ScoredPlan;

/// Sort scored plans by descending score, keeping input order on ties.
#[must_use]
pub fn rank(mut scored: Vec<ScoredPlan<'_>>) -> Vec<ScoredPlan<'_>> {
    // `sort_by` is stable; ties must not be reordered.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// A ranked result set, best first.
///
/// Empty when nothing met the requirement; callers show "no matches"
/// rather than relaxing the filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedPlans<'a> {
    plans: Vec<ScoredPlan<'a>>,
}

impl<'a> RankedPlans<'a> {
    /// Rank scored plans.
    #[must_use]
    pub fn new(scored: Vec<ScoredPlan<'a>>) -> Self {
        Self {
            plans: rank(scored),
        }
    }

    /// Keep at most `limit` plans.
    #[must_use]
    pub fn truncated(mut self, limit: usize) -> Self {
        self.plans.truncate(limit);
        self
    }

    /// All plans, best first.
    #[must_use]
    pub fn as_slice(&self) -> &[ScoredPlan<'a>] {
        &self.plans
    }

    /// The best plan, if any.
    #[must_use]
    pub fn best(&self) -> Option<&ScoredPlan<'a>> {
        self.plans.first()
    }

    /// Up to `n` plans from the top, without consuming the set.
    #[must_use]
    pub fn top(&self, n: usize) -> &[ScoredPlan<'a>] {
        &self.plans[..n.min(self.plans.len())]
    }

    /// The plans highlighted above the alternatives.
    #[must_use]
    pub fn featured(&self, count: usize) -> &[ScoredPlan<'a>] {
        self.top(count)
    }

    /// Up to `count` plans following the first `skip`.
    #[must_use]
    pub fn alternatives(&self, skip: usize, count: usize) -> &[ScoredPlan<'a>] {
        let start = skip.min(self.plans.len());
        let end = start.saturating_add(count).min(self.plans.len());
        &self.plans[start..end]
    }

    /// Iterate best first.
    pub fn iter(&self) -> impl Iterator<Item = &ScoredPlan<'a>> {
        self.plans.iter()
    }

    /// Number of plans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Check if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl<'a> IntoIterator for RankedPlans<'a> {
    type Item = ScoredPlan<'a>;
    type IntoIter = std::vec::IntoIter<ScoredPlan<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.plans.into_iter()
    }
}
