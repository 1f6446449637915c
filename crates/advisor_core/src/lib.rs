//! # Advisor Core
//!
//! Recommendation engine for Hytale server hosting.
//!
//! This crate contains **only** pure logic over in-memory data:
//! - No rendering
//! - No file or network IO (reference data is compiled in)
//! - No shared mutable state
//!
//! Catalogs are loaded once, validated, and passed by reference into
//! every operation, so the engine can be called from any number of
//! threads without coordination.
//!
//! ## Crate Structure
//!
//! - [`data`] - Plan and tier record types
//! - [`catalog`] - Validated catalogs, bundled data, browsing
//! - [`requirements`] - Minimum hardware from player count and mods
//! - [`filter`] - Hardware filtering
//! - [`scoring`] - Scoring strategies
//! - [`ranking`] - Stable ranking and result slicing
//! - [`recommend`] - Entry points and the [`recommend::Advisor`] facade
//! - [`cost`] - Rental cost and discounts
//! - [`performance`] - Synthetic utilization curves

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod catalog;
pub mod cost;
pub mod data;
pub mod error;
pub mod filter;
pub mod performance;
pub mod preferences;
pub mod ranking;
pub mod recommend;
pub mod requirements;
pub mod scoring;
pub mod settings;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{PlanCatalog, PlanQuery, TierCatalog};
    pub use crate::cost::{calculate_cost, discount_rate, CostEstimate, DiscountSchedule};
    pub use crate::data::{HardwareTier, HostingPlan, PlanTier, TierClass};
    pub use crate::error::{AdvisorError, Result};
    pub use crate::filter::filter_plans;
    pub use crate::performance::{
        compare_all_tiers, estimate_performance_curve, PerformanceSample, TierComparison,
    };
    pub use crate::preferences::{ModLevel, UserPreferences};
    pub use crate::ranking::{rank, RankedPlans};
    pub use crate::recommend::{
        plans_for_tier_class, recommend_for_requirement, recommend_plans, recommend_tier, Advisor,
    };
    pub use crate::requirements::{derive_minimum_spec, HardwareRequirement};
    pub use crate::scoring::{score_plans, PriceEfficiency, ScoredPlan, ScoringStrategy, ValueDensity};
    pub use crate::settings::AdvisorSettings;
}
