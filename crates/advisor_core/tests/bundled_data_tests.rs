//! Tests against the reference dataset compiled into the crate.
//!
//! These pin the recommendations a visitor actually sees, so a data edit
//! that changes them shows up here.

use advisor_core::prelude::*;
use advisor_test_utils::fixtures::assert_close;

fn load() -> (PlanCatalog, TierCatalog, AdvisorSettings) {
    (
        PlanCatalog::bundled().expect("bundled plans should load"),
        TierCatalog::bundled().expect("bundled tiers should load"),
        AdvisorSettings::bundled().expect("bundled settings should load"),
    )
}

fn names<'a>(plans: &[ScoredPlan<'a>]) -> Vec<&'a str> {
    plans.iter().map(|s| s.plan.name.as_str()).collect()
}

// ==========================================================================
// Catalog Loading
// ==========================================================================

#[test]
fn test_bundled_catalogs_load() {
    let (plans, tiers, _) = load();
    assert_eq!(plans.len(), 20);
    assert_eq!(tiers.len(), 6);
}

#[test]
fn test_bundled_tiers_cover_every_class() {
    let (_, tiers, _) = load();
    for class in TierClass::ALL {
        let count = tiers.iter().filter(|t| t.tier_class == class).count();
        assert_eq!(count, 2, "expected two {class} tiers");
    }
}

#[test]
fn test_bundled_tiers_ordered_by_capacity() {
    let (_, tiers, _) = load();
    let capacities: Vec<_> = tiers.iter().map(|t| t.max_players).collect();
    assert_eq!(capacities, vec![5, 10, 20, 30, 50, 100]);
}

#[test]
fn test_bundled_providers() {
    let (plans, _, _) = load();
    assert_eq!(
        plans.providers(),
        vec![
            "Hetzner",
            "Contabo",
            "OVHcloud",
            "DigitalOcean",
            "Vultr",
            "Akamai",
            "Netcup",
            "Hostinger"
        ]
    );
}

#[test]
fn test_search_bundled_catalog() {
    let (plans, _, _) = load();

    let ddos = plans.search(&PlanQuery {
        text: "anti-ddos".to_string(),
        ..Default::default()
    });
    assert_eq!(ddos.len(), 3);
    assert!(ddos.iter().all(|p| p.provider == "OVHcloud"));

    let contabo_large = plans.search(&PlanQuery {
        provider: Some("Contabo".to_string()),
        tier: Some(PlanTier::Large),
        ..Default::default()
    });
    assert_eq!(contabo_large.len(), 1);
    assert_eq!(contabo_large[0].name, "Cloud VPS 30");
}

// ==========================================================================
// Recommendations
// ==========================================================================

#[test]
fn test_small_vanilla_server_recommendation() {
    let (plans, _, settings) = load();
    let prefs = UserPreferences::new(5, ModLevel::Vanilla);
    let ranked = recommend_plans(&plans, &prefs).unwrap();

    // Every plan has at least 2 cores and 4 GB.
    assert_eq!(ranked.len(), 20);
    assert_eq!(
        names(ranked.featured(settings.featured_count)),
        vec!["Cloud VPS 10", "CX22", "VPS-1"]
    );
    assert_eq!(
        names(ranked.alternatives(settings.featured_count, settings.alternative_count)),
        vec!["Cloud VPS 20", "CX32", "KVM 2", "VPS-2"]
    );
}

#[test]
fn test_region_preference_promotes_local_plans() {
    let (plans, _, _) = load();
    let prefs = UserPreferences::new(5, ModLevel::Vanilla).with_region("Australia");
    let ranked = recommend_plans(&plans, &prefs).unwrap();

    assert_eq!(
        names(ranked.featured(3)),
        vec!["Cloud VPS 10", "VPS-1", "CX22"]
    );
}

#[test]
fn test_heavy_modded_community_server() {
    let (plans, _, _) = load();
    let prefs = UserPreferences::new(30, ModLevel::Heavy);
    let ranked = recommend_plans(&plans, &prefs).unwrap();

    assert_eq!(ranked.len(), 10);
    assert!(ranked
        .iter()
        .all(|s| s.plan.cpu >= 4 && s.plan.ram >= 12.0));
    assert_eq!(
        names(ranked.featured(3)),
        vec!["Cloud VPS 20", "VPS-2", "KVM 4"]
    );
}

#[test]
fn test_large_heavy_server_has_few_options() {
    let (plans, _, _) = load();
    let prefs = UserPreferences::new(1000, ModLevel::Heavy);
    let ranked = recommend_plans(&plans, &prefs).unwrap();

    assert_eq!(
        names(ranked.as_slice()),
        vec!["Cloud VPS 30", "VPS-4", "VPS 4000 G11", "CCX33"]
    );
}

#[test]
fn test_starter_tier_plans_keep_catalog_order_on_ties() {
    let (plans, _, settings) = load();
    let ranked = plans_for_tier_class(&plans, TierClass::Starter, settings.result_limit);

    assert_eq!(ranked.len(), 6);
    // Basic 4GB and High Frequency 4GB score the same; DigitalOcean is listed first.
    assert_eq!(
        names(ranked.as_slice()),
        vec![
            "CX22",
            "VPS-1",
            "Basic 4GB",
            "High Frequency 4GB",
            "Cloud VPS 10",
            "Cloud VPS 20"
        ]
    );
    assert_close(ranked.as_slice()[2].score, ranked.as_slice()[3].score);
}

#[test]
fn test_professional_tier_plans_reward_exact_match() {
    let (plans, _, settings) = load();
    let ranked = plans_for_tier_class(&plans, TierClass::Professional, settings.result_limit);

    let best = ranked.best().expect("professional plans exist");
    assert_eq!(best.plan.name, "Dedicated 16GB");
    assert_eq!((best.plan.cpu, best.plan.ram), (8, 16.0));
}

#[test]
fn test_recommended_tier_for_player_counts() {
    let (_, tiers, _) = load();
    let id = |players| recommend_tier(&tiers, players).map(|t| t.id.as_str());

    assert_eq!(id(1), Some("starter-1"));
    assert_eq!(id(10), Some("starter-2"));
    assert_eq!(id(25), Some("intermediate-2"));
    assert_eq!(id(100), Some("professional-2"));
    assert_eq!(id(101), None);
}

// ==========================================================================
// Cost and Performance
// ==========================================================================

#[test]
fn test_enterprise_yearly_cost() {
    let (plans, tiers, settings) = load();
    let advisor = Advisor::new(&plans, &tiers, &settings);
    let enterprise = tiers.get("professional-2").unwrap();

    let estimate = advisor.estimate_cost(enterprise.monthly_price, 12).unwrap();
    assert_close(estimate.discount_rate, 0.20);
    assert_close(estimate.total_cost, 119.99 * 12.0 * 0.8);
}

#[test]
fn test_every_bundled_tier_has_a_valid_curve() {
    let (_, tiers, _) = load();
    for tier in tiers.iter() {
        let curve = estimate_performance_curve(tier).unwrap();
        assert_eq!(curve.len(), tier.max_players as usize + 1);

        let last = curve.last().unwrap();
        assert_close(last.cpu_pct, 90.0);
        assert_close(last.memory_pct, 85.0);
    }
}

#[test]
fn test_compare_tiers_at_twenty_players() {
    let (_, tiers, _) = load();
    let comparison = compare_all_tiers(&tiers, 20);

    assert_eq!(comparison.len(), 6);
    let saturated: Vec<_> = comparison
        .iter()
        .filter(|c| c.is_saturated())
        .map(|c| c.tier_id.as_str())
        .collect();
    assert_eq!(saturated, vec!["starter-1", "starter-2", "intermediate-1"]);
    assert_close(comparison[5].cpu_pct, 20.0);
    assert_close(comparison[5].memory_pct, 18.0);
}
