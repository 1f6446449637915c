//! Test fixtures and helpers.
//!
//! Small, predictable plans and tiers for consistent testing. Fields that
//! the engine never reads get fixed placeholder values.

use advisor_core::catalog::{PlanCatalog, TierCatalog};
use advisor_core::data::{HardwareTier, HostingPlan, PlanTier, TierClass};

/// Tolerance used by [`assert_close`].
pub const EPSILON: f64 = 1e-9;

/// Assert that two floats are equal within [`EPSILON`].
///
/// # Panics
///
/// Panics if the values differ by more than the tolerance.
#[track_caller]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Create a plan with the given hardware and price, serving no region.
#[must_use]
pub fn plan(name: &str, cpu: u32, ram: f64, price: f64) -> HostingPlan {
    plan_in(name, cpu, ram, price, "")
}

/// Create a plan with the given hardware, price and region list.
#[must_use]
pub fn plan_in(name: &str, cpu: u32, ram: f64, price: f64, regions: &str) -> HostingPlan {
    HostingPlan {
        provider: "Fixture".to_string(),
        tier: PlanTier::Medium,
        name: name.to_string(),
        price,
        cpu,
        ram,
        storage: 50.0,
        storage_type: "NVMe SSD".to_string(),
        regions: regions.to_string(),
        port_speed_mbps: Some(1000),
        url: format!("https://example.com/{name}"),
        notes: format!("Fixture plan {name}"),
        logo_color: "#000000".to_string(),
    }
}

/// Create a starter tier with the given capacity.
#[must_use]
pub fn tier(id: &str, max_players: u32) -> HardwareTier {
    HardwareTier {
        id: id.to_string(),
        name: id.to_string(),
        tier_class: TierClass::Starter,
        cpu: 2,
        ram_gb: 4,
        storage_gb: 20,
        max_players,
        monthly_price: 9.99,
        description: String::new(),
        features: vec![],
        cpu_bottleneck: 50,
        memory_bottleneck: 50,
    }
}

/// Build a validated plan catalog.
///
/// # Panics
///
/// Panics if any fixture plan is invalid.
#[must_use]
pub fn catalog_of(plans: Vec<HostingPlan>) -> PlanCatalog {
    PlanCatalog::new(plans).expect("fixture plans should be valid")
}

/// Build a validated tier catalog.
///
/// # Panics
///
/// Panics if any fixture tier is invalid or duplicated.
#[must_use]
pub fn tiers_of(tiers: Vec<HardwareTier>) -> TierCatalog {
    TierCatalog::new(tiers).expect("fixture tiers should be valid")
}

/// A five-plan catalog spanning small to large hardware.
///
/// Includes two plans with identical specs and price, for tie-breaking tests.
#[must_use]
pub fn sample_catalog() -> PlanCatalog {
    catalog_of(vec![
        plan_in("budget", 2, 4.0, 5.0, "Germany, Finland"),
        plan_in("twin-a", 4, 8.0, 20.0, "USA"),
        plan_in("twin-b", 4, 8.0, 20.0, "USA, Japan"),
        plan_in("roomy", 6, 12.0, 30.0, "France"),
        plan_in("beefy", 8, 32.0, 80.0, "Singapore"),
    ])
}
