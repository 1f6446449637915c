//! Proptest strategies for engine inputs.
//!
//! Generated plans always pass catalog validation, so properties can
//! focus on engine behaviour rather than load-time rejection.

use advisor_core::catalog::PlanCatalog;
use advisor_core::data::{HostingPlan, PlanTier};
use advisor_core::preferences::{ModLevel, UserPreferences};
use proptest::prelude::*;

/// Region lists drawn from when generating plans.
pub const REGIONS: [&str; 5] = [
    "Germany, Finland",
    "USA",
    "USA, Japan, Australia",
    "France, Canada",
    "Singapore",
];

/// Any mod level.
pub fn arb_mod_level() -> impl Strategy<Value = ModLevel> {
    prop_oneof![
        Just(ModLevel::Vanilla),
        Just(ModLevel::Light),
        Just(ModLevel::Heavy),
    ]
}

/// Any plan size class.
pub fn arb_plan_tier() -> impl Strategy<Value = PlanTier> {
    prop::sample::select(PlanTier::ALL.to_vec())
}

/// A valid plan. RAM and price are drawn from small sets so that ties
/// and exact requirement matches actually occur.
pub fn arb_plan() -> impl Strategy<Value = HostingPlan> {
    (
        arb_plan_tier(),
        1u32..=16,
        prop::sample::select(vec![2.0, 4.0, 6.0, 8.0, 12.0, 16.0, 24.0, 32.0]),
        prop::sample::select(vec![4.5, 5.0, 9.99, 20.0, 48.0, 50.0, 120.0]),
        prop::sample::select(REGIONS.to_vec()),
        0u32..1000,
    )
        .prop_map(|(tier, cpu, ram, price, regions, id)| HostingPlan {
            provider: format!("Provider {}", id % 7),
            tier,
            name: format!("plan-{id}"),
            price,
            cpu,
            ram,
            storage: 40.0,
            storage_type: "NVMe SSD".to_string(),
            regions: regions.to_string(),
            port_speed_mbps: None,
            url: String::new(),
            notes: String::new(),
            logo_color: String::new(),
        })
}

/// A validated catalog of up to `max_plans` plans.
pub fn arb_catalog(max_plans: usize) -> impl Strategy<Value = PlanCatalog> {
    prop::collection::vec(arb_plan(), 0..=max_plans).prop_map(|plans| {
        PlanCatalog::new(plans).expect("generated plans should be valid")
    })
}

/// Valid preferences, with or without a region.
pub fn arb_preferences() -> impl Strategy<Value = UserPreferences> {
    (
        1u32..=500,
        arb_mod_level(),
        prop::sample::select(vec!["", "usa", "Germany", "japan", "Antarctica"]),
    )
        .prop_map(|(players, mod_level, region)| {
            UserPreferences::new(players, mod_level).with_region(region)
        })
}
