//! Recommendation entry points.
//!
//! Each entry point chains requirement, filter, scoring and ranking over
//! an explicitly passed catalog. [`Advisor`] bundles the catalogs and
//! settings for callers that would rather hold one handle.

use crate::catalog::{PlanCatalog, TierCatalog};
use crate::cost::CostEstimate;
use crate::data::{HardwareTier, TierClass};
use crate::error::Result;
use crate::filter::filter_plans;
use crate::performance::{
    compare_all_tiers, estimate_performance_curve, PerformanceSample, TierComparison,
};
use crate::preferences::UserPreferences;
use crate::ranking::RankedPlans;
use crate::requirements::{derive_minimum_spec, HardwareRequirement};
use crate::scoring::{score_plans, PriceEfficiency, ScoringStrategy, ValueDensity};
use crate::settings::AdvisorSettings;

/// Rank every plan that fits the visitor's server.
///
/// Uses price-efficiency scoring with the preferred region as a bonus.
/// The result is not truncated; an empty result means nothing fits.
///
/// # Errors
///
/// Returns an error if the preferences are invalid.
pub fn recommend_plans<'a>(
    catalog: &'a PlanCatalog,
    prefs: &UserPreferences,
) -> Result<RankedPlans<'a>> {
    prefs.validate()?;

    let requirement = derive_minimum_spec(prefs.player_count, prefs.mod_level);
    let candidates = filter_plans(catalog.plans(), &requirement);
    let strategy = PriceEfficiency::new(prefs.preferred_region().unwrap_or_default());
    tracing::debug!(
        candidates = candidates.len(),
        catalog = catalog.len(),
        strategy = strategy.name(),
        "Filtered plans for preferences"
    );

    let ranked = RankedPlans::new(score_plans(candidates, &strategy));

    if ranked.is_empty() {
        tracing::warn!(
            player_count = prefs.player_count,
            mod_level = %prefs.mod_level,
            "No plan meets the derived requirement"
        );
    }
    Ok(ranked)
}

/// Rank plans that meet `requirement` by value density, keeping at most `limit`.
#[must_use]
pub fn recommend_for_requirement(
    catalog: &PlanCatalog,
    requirement: HardwareRequirement,
    limit: usize,
) -> RankedPlans<'_> {
    let candidates = filter_plans(catalog.plans(), &requirement);
    let strategy = ValueDensity::new(requirement);
    tracing::debug!(
        candidates = candidates.len(),
        strategy = strategy.name(),
        limit,
        "Filtered plans for requirement"
    );
    RankedPlans::new(score_plans(candidates, &strategy)).truncated(limit)
}

/// Hosting plans for a tier class, using the class baseline requirement.
#[must_use]
pub fn plans_for_tier_class(
    catalog: &PlanCatalog,
    class: TierClass,
    limit: usize,
) -> RankedPlans<'_> {
    recommend_for_requirement(catalog, class.baseline_requirement(), limit)
}

/// The first tier, in catalog order, rated for `player_count` players.
#[must_use]
pub fn recommend_tier(tiers: &TierCatalog, player_count: u32) -> Option<&HardwareTier> {
    tiers.iter().find(|tier| tier.fits(player_count))
}

/// Catalogs and settings bundled behind one handle.
#[derive(Debug, Clone, Copy)]
pub struct Advisor<'a> {
    plans: &'a PlanCatalog,
    tiers: &'a TierCatalog,
    settings: &'a AdvisorSettings,
}

impl<'a> Advisor<'a> {
    /// Create an advisor over loaded catalogs.
    #[must_use]
    pub const fn new(
        plans: &'a PlanCatalog,
        tiers: &'a TierCatalog,
        settings: &'a AdvisorSettings,
    ) -> Self {
        Self {
            plans,
            tiers,
            settings,
        }
    }

    /// The plan catalog.
    #[must_use]
    pub const fn plans(&self) -> &'a PlanCatalog {
        self.plans
    }

    /// The tier catalog.
    #[must_use]
    pub const fn tiers(&self) -> &'a TierCatalog {
        self.tiers
    }

    /// The settings.
    #[must_use]
    pub const fn settings(&self) -> &'a AdvisorSettings {
        self.settings
    }

    /// See [`recommend_plans`].
    pub fn recommend(&self, prefs: &UserPreferences) -> Result<RankedPlans<'a>> {
        recommend_plans(self.plans, prefs)
    }

    /// See [`plans_for_tier_class`]; truncated to the configured result limit.
    #[must_use]
    pub fn plans_for_tier_class(&self, class: TierClass) -> RankedPlans<'a> {
        plans_for_tier_class(self.plans, class, self.settings.result_limit)
    }

    /// See [`recommend_for_requirement`]; truncated to the configured result limit.
    #[must_use]
    pub fn plans_for_requirement(&self, requirement: HardwareRequirement) -> RankedPlans<'a> {
        recommend_for_requirement(self.plans, requirement, self.settings.result_limit)
    }

    /// See [`recommend_tier`].
    #[must_use]
    pub fn recommend_tier(&self, player_count: u32) -> Option<&'a HardwareTier> {
        recommend_tier(self.tiers, player_count)
    }

    /// Cost breakdown under the configured discount schedule.
    ///
    /// Prefer this over `calculate_cost(.., None)`, which always uses the
    /// reference schedule.
    pub fn estimate_cost(&self, monthly_price: f64, months: u32) -> Result<CostEstimate> {
        CostEstimate::new(monthly_price, months, &self.settings.discount_schedule)
    }

    /// See [`estimate_performance_curve`].
    pub fn performance_curve(&self, tier: &HardwareTier) -> Result<Vec<PerformanceSample>> {
        estimate_performance_curve(tier)
    }

    /// See [`compare_all_tiers`].
    #[must_use]
    pub fn compare_tiers(&self, player_count: u32) -> Vec<TierComparison> {
        compare_all_tiers(self.tiers, player_count)
    }
}
