//! Minimum hardware derivation from player count and mod level.
//!
//! Player count picks a base step, then the mod level adjusts it. The
//! steps override each other rather than accumulate: 51 players and
//! 1000 players need the same base.

use serde::{Deserialize, Serialize};

use crate::preferences::ModLevel;

/// Player count above which the medium base applies.
pub const MEDIUM_PLAYER_THRESHOLD: u32 = 10;

/// Player count above which the large base applies.
pub const LARGE_PLAYER_THRESHOLD: u32 = 50;

/// RAM floor for heavily modded servers, in gigabytes.
pub const HEAVY_MOD_MIN_RAM_GB: f64 = 8.0;

/// Core floor for heavily modded servers.
pub const HEAVY_MOD_MIN_CPU: u32 = 4;

/// Extra RAM for lightly modded servers, in gigabytes.
pub const LIGHT_MOD_EXTRA_RAM_GB: f64 = 2.0;

/// Minimum hardware a plan must offer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HardwareRequirement {
    /// Minimum virtual cores.
    pub min_cpu: u32,
    /// Minimum memory in gigabytes.
    pub min_ram_gb: f64,
}

impl HardwareRequirement {
    /// Create a requirement.
    #[must_use]
    pub const fn new(min_cpu: u32, min_ram_gb: f64) -> Self {
        Self {
            min_cpu,
            min_ram_gb,
        }
    }

    /// Check whether hardware with `cpu` cores and `ram_gb` memory meets this requirement.
    #[must_use]
    pub fn is_met_by(&self, cpu: u32, ram_gb: f64) -> bool {
        ram_gb >= self.min_ram_gb && cpu >= self.min_cpu
    }
}

/// Derive the minimum hardware for a server.
///
/// Performs no validation: a player count of zero yields the smallest
/// base. [`crate::preferences::UserPreferences::validate`] rejects it
/// before the recommendation entry points get here.
#[must_use]
pub fn derive_minimum_spec(player_count: u32, mod_level: ModLevel) -> HardwareRequirement {
    let (mut min_cpu, mut min_ram_gb) = if player_count > LARGE_PLAYER_THRESHOLD {
        (6, 16.0)
    } else if player_count > MEDIUM_PLAYER_THRESHOLD {
        (4, 8.0)
    } else {
        (2, 4.0)
    };

    // Mods always adjust the player-count base, never the other way round.
    match mod_level {
        ModLevel::Vanilla => {}
        ModLevel::Light => min_ram_gb += LIGHT_MOD_EXTRA_RAM_GB,
        ModLevel::Heavy => {
            min_ram_gb = (min_ram_gb * 1.5).max(HEAVY_MOD_MIN_RAM_GB);
            min_cpu = min_cpu.max(HEAVY_MOD_MIN_CPU);
        }
    }

    let requirement = HardwareRequirement::new(min_cpu, min_ram_gb);
    tracing::debug!(
        player_count,
        mod_level = %mod_level,
        min_cpu = requirement.min_cpu,
        min_ram_gb = requirement.min_ram_gb,
        "Derived minimum hardware"
    );
    requirement
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vanilla_small_server_gets_baseline() {
        for players in 1..=10 {
            assert_eq!(
                derive_minimum_spec(players, ModLevel::Vanilla),
                HardwareRequirement::new(2, 4.0)
            );
        }
    }

    #[test]
    fn test_zero_players_gets_baseline() {
        assert_eq!(
            derive_minimum_spec(0, ModLevel::Vanilla),
            HardwareRequirement::new(2, 4.0)
        );
    }

    #[test]
    fn test_player_thresholds_are_exclusive() {
        assert_eq!(derive_minimum_spec(10, ModLevel::Vanilla).min_cpu, 2);
        assert_eq!(derive_minimum_spec(11, ModLevel::Vanilla).min_cpu, 4);
        assert_eq!(derive_minimum_spec(50, ModLevel::Vanilla).min_cpu, 4);
        assert_eq!(derive_minimum_spec(51, ModLevel::Vanilla).min_cpu, 6);
    }

    #[test]
    fn test_large_step_does_not_accumulate() {
        assert_eq!(
            derive_minimum_spec(51, ModLevel::Vanilla),
            derive_minimum_spec(1000, ModLevel::Vanilla)
        );
        assert_eq!(
            derive_minimum_spec(51, ModLevel::Vanilla),
            HardwareRequirement::new(6, 16.0)
        );
    }

    #[test]
    fn test_light_mods_add_ram_only() {
        assert_eq!(
            derive_minimum_spec(5, ModLevel::Light),
            HardwareRequirement::new(2, 6.0)
        );
        assert_eq!(
            derive_minimum_spec(30, ModLevel::Light),
            HardwareRequirement::new(4, 10.0)
        );
        assert_eq!(
            derive_minimum_spec(80, ModLevel::Light),
            HardwareRequirement::new(6, 18.0)
        );
    }

    #[test]
    fn test_heavy_mods_apply_floors() {
        // 4 * 1.5 = 6 is below the 8 GB floor.
        assert_eq!(
            derive_minimum_spec(5, ModLevel::Heavy),
            HardwareRequirement::new(4, 8.0)
        );
        for players in 11..=50 {
            assert_eq!(
                derive_minimum_spec(players, ModLevel::Heavy),
                HardwareRequirement::new(4, 12.0)
            );
        }
        assert_eq!(
            derive_minimum_spec(200, ModLevel::Heavy),
            HardwareRequirement::new(6, 24.0)
        );
    }

    #[test]
    fn test_is_met_by() {
        let req = HardwareRequirement::new(4, 8.0);
        assert!(req.is_met_by(4, 8.0));
        assert!(req.is_met_by(8, 16.0));
        assert!(!req.is_met_by(2, 16.0));
        assert!(!req.is_met_by(8, 6.0));
    }
}
