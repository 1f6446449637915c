//! Text and JSON rendering of engine results.
//!
//! Every report has a [`fmt::Display`] impl for the terminal and a
//! [`Serialize`] impl for `--json`.

use std::fmt;

use advisor_core::cost::{calculate_cost, CostEstimate};
use advisor_core::data::{HardwareTier, HostingPlan, TierClass};
use advisor_core::error::Result;
use advisor_core::performance::{PerformanceSample, TierComparison};
use advisor_core::preferences::{ModLevel, UserPreferences};
use advisor_core::ranking::RankedPlans;
use advisor_core::recommend::Advisor;
use advisor_core::requirements::{derive_minimum_spec, HardwareRequirement};
use advisor_core::scoring::ScoredPlan;
use serde::Serialize;

/// Width of the bars drawn by [`CurveChart`].
pub const BAR_WIDTH: usize = 40;

/// How to print a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Render `report` in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render<T: fmt::Display + Serialize>(self, report: &T) -> serde_json::Result<String> {
        match self {
            Self::Text => Ok(report.to_string()),
            Self::Json => serde_json::to_string_pretty(report),
        }
    }
}

/// A ranked plan with the rental total for the requested duration.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlanLine<'a> {
    /// The plan and its score.
    #[serde(flatten)]
    pub scored: ScoredPlan<'a>,
    /// List price times months, without a duration discount.
    pub total_cost: f64,
}

impl<'a> PlanLine<'a> {
    fn new(scored: ScoredPlan<'a>, months: u32) -> Result<Self> {
        Ok(Self {
            scored,
            total_cost: calculate_cost(scored.plan.price, months, Some(0.0))?,
        })
    }
}

/// Recommendation for one visitor's server.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport<'a> {
    /// Expected concurrent players.
    pub player_count: u32,
    /// Mod level.
    pub mod_level: ModLevel,
    /// Region the visitor prefers, if any.
    pub region: Option<String>,
    /// Derived minimum hardware.
    pub requirement: HardwareRequirement,
    /// Rental duration used for `total_cost`.
    pub months: u32,
    /// Smallest hardware tier rated for the player count.
    pub recommended_tier: Option<&'a HardwareTier>,
    /// Highlighted plans.
    pub featured: Vec<PlanLine<'a>>,
    /// Further options after the featured ones.
    pub alternatives: Vec<PlanLine<'a>>,
}

impl<'a> RecommendationReport<'a> {
    /// Run a recommendation and collect it for display.
    ///
    /// # Errors
    ///
    /// Returns an error if the preferences or the duration are invalid.
    pub fn build(advisor: Advisor<'a>, prefs: &UserPreferences, months: u32) -> Result<Self> {
        let ranked = advisor.recommend(prefs)?;
        let settings = advisor.settings();
        let lines = |plans: &[ScoredPlan<'a>]| -> Result<Vec<PlanLine<'a>>> {
            plans.iter().map(|s| PlanLine::new(*s, months)).collect()
        };

        Ok(Self {
            player_count: prefs.player_count,
            mod_level: prefs.mod_level,
            region: prefs.preferred_region().map(str::to_string),
            requirement: derive_minimum_spec(prefs.player_count, prefs.mod_level),
            months,
            recommended_tier: advisor.recommend_tier(prefs.player_count),
            featured: lines(ranked.featured(settings.featured_count))?,
            alternatives: lines(
                ranked.alternatives(settings.featured_count, settings.alternative_count),
            )?,
        })
    }
}

fn write_plan_line(
    f: &mut fmt::Formatter<'_>,
    index: usize,
    line: &PlanLine<'_>,
    months: u32,
) -> fmt::Result {
    let plan = line.scored.plan;
    writeln!(
        f,
        "  {index}. {} {} - {} cores, {} GB, ${:.2}/mo  [score {:.1}]  {months} mo: ${:.2}",
        plan.provider, plan.name, plan.cpu, plan.ram, plan.price, line.scored.score, line.total_cost
    )
}

impl fmt::Display for RecommendationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Requirement: {}+ cores, {} GB RAM ({} players, {})",
            self.requirement.min_cpu, self.requirement.min_ram_gb, self.player_count, self.mod_level
        )?;
        if let Some(region) = &self.region {
            writeln!(f, "Preferred region: {region}")?;
        }
        match self.recommended_tier {
            Some(tier) => writeln!(
                f,
                "Recommended tier: {} ({}), ${:.2}/mo",
                tier.name, tier.id, tier.monthly_price
            )?,
            None => writeln!(f, "Recommended tier: none rated for {} players", self.player_count)?,
        }

        if self.featured.is_empty() {
            return writeln!(f, "\nNo plan meets these requirements.");
        }

        writeln!(f, "\nTop picks:")?;
        for (i, line) in self.featured.iter().enumerate() {
            write_plan_line(f, i + 1, line, self.months)?;
        }
        if !self.alternatives.is_empty() {
            writeln!(f, "\nOther options:")?;
            let offset = self.featured.len();
            for (i, line) in self.alternatives.iter().enumerate() {
                write_plan_line(f, offset + i + 1, line, self.months)?;
            }
        }
        Ok(())
    }
}

/// Best plans for one tier class.
#[derive(Debug, Clone, Serialize)]
pub struct TierPlansReport<'a> {
    /// The class.
    pub tier_class: TierClass,
    /// The class baseline.
    pub requirement: HardwareRequirement,
    /// Ranked plans.
    pub plans: RankedPlans<'a>,
}

impl<'a> TierPlansReport<'a> {
    /// Rank plans for `class`, keeping `limit` or the configured result limit.
    #[must_use]
    pub fn build(advisor: Advisor<'a>, class: TierClass, limit: Option<usize>) -> Self {
        let requirement = class.baseline_requirement();
        let plans = match limit {
            Some(limit) => {
                advisor_core::recommend::recommend_for_requirement(advisor.plans(), requirement, limit)
            }
            None => advisor.plans_for_tier_class(class),
        };
        Self {
            tier_class: class,
            requirement,
            plans,
        }
    }
}

impl fmt::Display for TierPlansReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} plans ({}+ cores, {}+ GB RAM):",
            self.tier_class, self.requirement.min_cpu, self.requirement.min_ram_gb
        )?;
        if self.plans.is_empty() {
            return writeln!(f, "  none");
        }
        for (i, scored) in self.plans.iter().enumerate() {
            let plan = scored.plan;
            writeln!(
                f,
                "  {}. {} {} - {} cores, {} GB, ${:.2}/mo  [score {:.1}]",
                i + 1,
                plan.provider,
                plan.name,
                plan.cpu,
                plan.ram,
                plan.price,
                scored.score
            )?;
        }
        Ok(())
    }
}

/// Catalog listing.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct PlanTable<'a>(pub Vec<&'a HostingPlan>);

impl fmt::Display for PlanTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans match.");
        }
        for plan in &self.0 {
            writeln!(
                f,
                "{:<14} {:<22} {:<6} {:>3} cores {:>5} GB {:>6} GB  ${:>7.2}/mo  {}",
                plan.provider,
                plan.name,
                plan.tier,
                plan.cpu,
                plan.ram,
                plan.storage,
                plan.price,
                plan.regions
            )?;
        }
        writeln!(f, "{} plans", self.0.len())
    }
}

/// Cost breakdown for the cost estimator.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct CostBreakdown(pub CostEstimate);

impl fmt::Display for CostBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let e = &self.0;
        writeln!(f, "Monthly price:  ${:.2}", e.monthly_price)?;
        writeln!(f, "Duration:       {} months", e.months)?;
        writeln!(f, "Base cost:      ${:.2}", e.base_cost)?;
        if e.is_discounted() {
            writeln!(
                f,
                "Discount:       {:.0}% (-${:.2})",
                e.discount_rate * 100.0,
                e.savings
            )?;
        }
        writeln!(f, "Total:          ${:.2}", e.total_cost)?;
        writeln!(f, "Per day:        ${:.2}", e.cost_per_day)
    }
}

/// Utilization curve for one tier.
#[derive(Debug, Clone, Serialize)]
pub struct CurveChart<'a> {
    /// Tier identifier.
    pub tier_id: &'a str,
    /// One sample per player count.
    pub samples: Vec<PerformanceSample>,
}

fn bar(pct: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((pct / 100.0) * BAR_WIDTH as f64).round().clamp(0.0, BAR_WIDTH as f64) as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

impl fmt::Display for CurveChart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Estimated load for {}:", self.tier_id)?;
        writeln!(f, "players   cpu                                             memory")?;
        for s in &self.samples {
            writeln!(
                f,
                "{:>7}   {} {:>5.1}%  {} {:>5.1}%",
                s.players,
                bar(s.cpu_pct),
                s.cpu_pct,
                bar(s.memory_pct),
                s.memory_pct
            )?;
        }
        Ok(())
    }
}

/// Every tier side by side at one player count.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonTable {
    /// Player count compared at.
    pub player_count: u32,
    /// One row per tier.
    pub tiers: Vec<TierComparison>,
}

impl fmt::Display for ComparisonTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Estimated load at {} players:", self.player_count)?;
        for row in &self.tiers {
            writeln!(
                f,
                "  {:<16} {:<13} cpu {:>5.1}%  memory {:>5.1}%  max {:>4}  ${:.2}/mo{}",
                row.tier_id,
                row.tier_class,
                row.cpu_pct,
                row.memory_pct,
                row.max_players,
                row.monthly_price,
                if row.is_saturated() { "  SATURATED" } else { "" }
            )?;
        }
        Ok(())
    }
}
