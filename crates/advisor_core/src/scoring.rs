//! Plan scoring strategies.
//!
//! Two scoring policies implement [`ScoringStrategy`]:
//!
//! - [`ValueDensity`] rewards hardware per unit of price and plans that
//!   match a requirement exactly. Used when listing plans for a tier.
//! - [`PriceEfficiency`] rewards cheap plans and plans in the visitor's
//!   preferred region. Used by the preference-based recommender.
//!
//! Scores are attached to borrowed plans through [`ScoredPlan`]; the
//! catalog is never modified.

use serde::Serialize;

use crate::data::HostingPlan;
use crate::requirements::HardwareRequirement;

/// Bonus for a plan whose CPU and RAM equal the requirement.
pub const EXACT_MATCH_BONUS: f64 = 100.0;

/// Bonus for a plan with exactly 50% headroom on both CPU and RAM.
pub const HEADROOM_MATCH_BONUS: f64 = 50.0;

/// Bonus for plans at or below [`AFFORDABLE_PRICE`].
pub const AFFORDABLE_BONUS: f64 = 20.0;

/// Monthly price at or below which a plan counts as affordable.
pub const AFFORDABLE_PRICE: f64 = 50.0;

/// Bonus for plans serving the preferred region.
pub const REGION_MATCH_BONUS: f64 = 50.0;

/// A way of turning a plan into a rank score. Higher is better.
///
/// Implementations may assume `plan.price > 0`, which catalog validation
/// guarantees.
pub trait ScoringStrategy {
    /// Short name for logs and reports.
    fn name(&self) -> &'static str;

    /// Score a single plan.
    fn score(&self, plan: &HostingPlan) -> f64;
}

/// Hardware-per-price scoring with bonuses for matching a requirement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueDensity {
    /// The requirement plans are matched against.
    pub requirement: HardwareRequirement,
}

impl ValueDensity {
    /// Create a value-density strategy for a requirement.
    #[must_use]
    pub const fn new(requirement: HardwareRequirement) -> Self {
        Self { requirement }
    }
}

impl ScoringStrategy for ValueDensity {
    fn name(&self) -> &'static str {
        "value-density"
    }

    // Exact float equality is the matching rule, not an approximation.
    #[allow(clippy::float_cmp)]
    fn score(&self, plan: &HostingPlan) -> f64 {
        let cpu = f64::from(plan.cpu);
        let req_cpu = f64::from(self.requirement.min_cpu);
        let req_ram = self.requirement.min_ram_gb;

        let mut score = (cpu * 10.0 + plan.ram * 5.0) / plan.price;

        if cpu == req_cpu && plan.ram == req_ram {
            score += EXACT_MATCH_BONUS;
        } else if cpu == req_cpu * 1.5 && plan.ram == req_ram * 1.5 {
            score += HEADROOM_MATCH_BONUS;
        }

        if plan.price <= AFFORDABLE_PRICE {
            score += AFFORDABLE_BONUS;
        }

        score
    }
}

/// Cheapness scoring with a bonus for the preferred region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceEfficiency {
    /// Preferred region. Blank means no preference and no bonus.
    pub region: String,
}

impl PriceEfficiency {
    /// Create a price-efficiency strategy for a preferred region.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
        }
    }
}

impl ScoringStrategy for PriceEfficiency {
    fn name(&self) -> &'static str {
        "price-efficiency"
    }

    fn score(&self, plan: &HostingPlan) -> f64 {
        let mut score = 1000.0 / plan.price;
        if plan.serves_region(&self.region) {
            score += REGION_MATCH_BONUS;
        }
        score
    }
}

/// A catalog plan together with its transient rank score.
///
/// Serializes as the plan's fields plus `score`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredPlan<'a> {
    /// The catalog entry, untouched.
    #[serde(flatten)]
    pub plan: &'a HostingPlan,
    /// Rank score. Higher is better.
    pub score: f64,
}

impl<'a> ScoredPlan<'a> {
    /// Drop the score and get the catalog entry back.
    #[must_use]
    pub const fn into_plan(self) -> &'a HostingPlan {
        self.plan
    }
}

/// Score every plan with `strategy`, keeping input order.
#[must_use]
pub fn score_plans<'a, I, S>(plans: I, strategy: &S) -> Vec<ScoredPlan<'a>>
where
    I: IntoIterator<Item = &'a HostingPlan>,
    S: ScoringStrategy + ?Sized,
{
    plans
        .into_iter()
        .map(|plan| ScoredPlan {
            plan,
            score: strategy.score(plan),
        })
        .collect()
}
