//! Hardware tier data structures for the predefined server configurations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;
use crate::requirements::HardwareRequirement;

/// Product-line class of a hardware tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TierClass {
    /// Small private servers.
    Starter,
    /// Mid-sized community servers.
    Intermediate,
    /// Large public servers.
    Professional,
}

impl TierClass {
    /// All tier classes, smallest first.
    pub const ALL: [Self; 3] = [Self::Starter, Self::Intermediate, Self::Professional];

    /// Lowercase tag used on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Intermediate => "intermediate",
            Self::Professional => "professional",
        }
    }

    /// Fixed minimum hardware used when listing hosting plans for a class.
    #[must_use]
    pub const fn baseline_requirement(&self) -> HardwareRequirement {
        match self {
            Self::Starter => HardwareRequirement::new(2, 4.0),
            Self::Intermediate => HardwareRequirement::new(4, 8.0),
            Self::Professional => HardwareRequirement::new(8, 16.0),
        }
    }
}

impl fmt::Display for TierClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TierClass {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "starter" => Ok(Self::Starter),
            "intermediate" => Ok(Self::Intermediate),
            "professional" => Ok(Self::Professional),
            _ => Err(AdvisorError::UnknownTierClass(s.to_string())),
        }
    }
}

/// A predefined Hytale server hardware bundle.
///
/// # Example RON
///
/// ```ron
/// HardwareTier(
///     id: "starter-1",
///     name: "Starter",
///     tier_class: Starter,
///     cpu: 2,
///     ram_gb: 4,
///     storage_gb: 20,
///     max_players: 5,
///     monthly_price: 5.99,
///     description: "Small private server",
///     features: ["Java 25 support", "Basic mod support"],
///     cpu_bottleneck: 75,
///     memory_bottleneck: 45,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareTier {
    /// Unique string identifier for this tier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Product-line class.
    pub tier_class: TierClass,

    /// Core count.
    pub cpu: u32,

    /// Memory in gigabytes.
    pub ram_gb: u32,

    /// Disk size in gigabytes.
    pub storage_gb: u32,

    /// Advertised player capacity.
    pub max_players: u32,

    /// Monthly price in the reference currency.
    pub monthly_price: f64,

    /// Short description of the intended audience.
    #[serde(default)]
    pub description: String,

    /// Feature list, in display order.
    #[serde(default)]
    pub features: Vec<String>,

    /// Estimated CPU saturation (0-100) at full player load.
    pub cpu_bottleneck: u8,

    /// Estimated memory saturation (0-100) at full player load.
    pub memory_bottleneck: u8,
}

impl HardwareTier {
    /// Check whether this tier is rated for `player_count` players.
    #[must_use]
    pub fn fits(&self, player_count: u32) -> bool {
        self.max_players >= player_count
    }

    /// Validate the numeric fields of this tier.
    ///
    /// Returns a list of validation errors.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.id.trim().is_empty() {
            errors.push(format!("Tier '{}' has an empty id", self.name));
        }
        for (field, value) in [
            ("cpu", self.cpu),
            ("ram_gb", self.ram_gb),
            ("storage_gb", self.storage_gb),
            ("max_players", self.max_players),
        ] {
            if value == 0 {
                errors.push(format!("Tier '{}' has zero {field}", self.id));
            }
        }
        if !(self.monthly_price.is_finite() && self.monthly_price > 0.0) {
            errors.push(format!(
                "Tier '{}' has non-positive monthly price {}",
                self.id, self.monthly_price
            ));
        }
        if self.cpu_bottleneck > 100 {
            errors.push(format!(
                "Tier '{}' cpu bottleneck {} is above 100",
                self.id, self.cpu_bottleneck
            ));
        }
        if self.memory_bottleneck > 100 {
            errors.push(format!(
                "Tier '{}' memory bottleneck {} is above 100",
                self.id, self.memory_bottleneck
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_tier() -> HardwareTier {
        HardwareTier {
            id: "intermediate-1".to_string(),
            name: "Intermediate".to_string(),
            tier_class: TierClass::Intermediate,
            cpu: 4,
            ram_gb: 8,
            storage_gb: 50,
            max_players: 20,
            monthly_price: 19.99,
            description: "Mid-sized community server".to_string(),
            features: vec!["Automatic backups".to_string()],
            cpu_bottleneck: 45,
            memory_bottleneck: 40,
        }
    }

    #[test]
    fn test_fits() {
        let tier = create_test_tier();
        assert!(tier.fits(1));
        assert!(tier.fits(20));
        assert!(!tier.fits(21));
    }

    #[test]
    fn test_validate_valid_tier() {
        let errors = create_test_tier().validate();
        assert!(errors.is_empty(), "Errors: {:?}", errors);
    }

    #[test]
    fn test_validate_rejects_zero_capacity_and_bad_bottleneck() {
        let mut tier = create_test_tier();
        tier.max_players = 0;
        tier.memory_bottleneck = 120;

        let errors = tier.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("max_players"));
        assert!(errors[1].contains("memory bottleneck"));
    }

    #[test]
    fn test_baseline_requirements() {
        assert_eq!(
            TierClass::Starter.baseline_requirement(),
            HardwareRequirement::new(2, 4.0)
        );
        assert_eq!(
            TierClass::Intermediate.baseline_requirement(),
            HardwareRequirement::new(4, 8.0)
        );
        assert_eq!(
            TierClass::Professional.baseline_requirement(),
            HardwareRequirement::new(8, 16.0)
        );
    }

    #[test]
    fn test_tier_class_from_str() {
        assert_eq!(
            " Professional ".parse::<TierClass>().unwrap(),
            TierClass::Professional
        );
        assert!("enterprise".parse::<TierClass>().is_err());
    }
}
