//! Synthetic utilization estimates for hardware tiers.
//!
//! Two different models are used for two different charts and they are
//! kept apart:
//!
//! - [`estimate_performance_curve`] plots one tier from empty to full.
//!   CPU grows linearly; memory grows logarithmically (fast at first,
//!   then flattening).
//! - [`compare_all_tiers`] puts every tier side by side at one player
//!   count. Both metrics are linear there, memory at 90% of CPU.

use serde::Serialize;

use crate::catalog::TierCatalog;
use crate::data::{HardwareTier, TierClass};
use crate::error::{AdvisorError, Result};

/// Share of full CPU a tier reaches at its rated capacity.
pub const CURVE_CPU_SCALE: f64 = 0.9;

/// Share of full memory a tier reaches at its rated capacity.
pub const CURVE_MEMORY_SCALE: f64 = 0.85;

/// Memory-to-CPU ratio in the cross-tier comparison.
pub const COMPARISON_MEMORY_SCALE: f64 = 0.9;

/// Estimated utilization at one player count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformanceSample {
    /// Connected players.
    pub players: u32,
    /// CPU utilization, percent (0-100).
    pub cpu_pct: f64,
    /// Memory utilization, percent (0-100).
    pub memory_pct: f64,
}

/// Utilization curve for `tier`, one sample per player count from 0 to
/// `max_players` inclusive.
///
/// # Errors
///
/// Returns [`AdvisorError::InvalidMaxPlayers`] if the tier holds no players.
pub fn estimate_performance_curve(tier: &HardwareTier) -> Result<Vec<PerformanceSample>> {
    if tier.max_players == 0 {
        return Err(AdvisorError::InvalidMaxPlayers {
            tier: tier.id.clone(),
        });
    }

    let max_players = f64::from(tier.max_players);
    let cpu_per_player = 100.0 / max_players;
    let log_capacity = (max_players + 1.0).ln();

    let curve = (0..=tier.max_players)
        .map(|players| {
            let p = f64::from(players);
            let memory_factor = (p + 1.0).ln() / log_capacity;
            PerformanceSample {
                players,
                cpu_pct: (p * cpu_per_player * CURVE_CPU_SCALE).min(100.0),
                memory_pct: (memory_factor * 100.0 * CURVE_MEMORY_SCALE).min(100.0),
            }
        })
        .collect();

    Ok(curve)
}

/// One tier's estimated load at a fixed player count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierComparison {
    /// Tier identifier.
    pub tier_id: String,
    /// Tier display name.
    pub name: String,
    /// Tier class.
    pub tier_class: TierClass,
    /// CPU utilization, percent, capped at 100.
    pub cpu_pct: f64,
    /// Memory utilization, percent, capped at 100.
    pub memory_pct: f64,
    /// Rated capacity.
    pub max_players: u32,
    /// Monthly price.
    pub monthly_price: f64,
}

impl TierComparison {
    /// Check whether the tier would run at or past saturation.
    #[must_use]
    pub fn is_saturated(&self) -> bool {
        self.cpu_pct >= 100.0
    }
}

/// Estimated load of every tier at `player_count`, in catalog order.
///
/// Tiers with no capacity cannot exist in a validated catalog.
#[must_use]
pub fn compare_all_tiers(tiers: &TierCatalog, player_count: u32) -> Vec<TierComparison> {
    tiers
        .iter()
        .map(|tier| {
            let load = f64::from(player_count) / f64::from(tier.max_players) * 100.0;
            TierComparison {
                tier_id: tier.id.clone(),
                name: tier.name.clone(),
                tier_class: tier.tier_class,
                cpu_pct: load.min(100.0),
                memory_pct: (load * COMPARISON_MEMORY_SCALE).min(100.0),
                max_players: tier.max_players,
                monthly_price: tier.monthly_price,
            }
        })
        .collect()
}
