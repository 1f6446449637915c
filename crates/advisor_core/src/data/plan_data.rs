//! Hosting plan data structures for the VPS catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AdvisorError;

/// Provider-assigned size class of a hosting plan.
///
/// Loosely correlated with [`super::TierClass`] but independent of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanTier {
    /// Entry-level VPS.
    Small,
    /// Mid-range VPS.
    Medium,
    /// High-end VPS.
    Large,
}

impl PlanTier {
    /// All plan tiers, smallest first.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Lowercase tag used on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PlanTier {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(AdvisorError::UnknownPlanTier(s.to_string())),
        }
    }
}

/// A hosting offer from a third-party VPS provider.
///
/// Catalog entries are immutable once loaded. Scoring borrows them and
/// never writes back.
///
/// # Example RON
///
/// ```ron
/// HostingPlan(
///     provider: "Hetzner",
///     tier: Small,
///     name: "CX22",
///     price: 4.59,
///     cpu: 2,
///     ram: 4.0,
///     storage: 40.0,
///     storage_type: "NVMe SSD",
///     regions: "Germany, Finland",
///     port_speed_mbps: Some(1000),
///     url: "https://www.hetzner.com/cloud",
///     notes: "Shared vCPU, 20 TB traffic",
///     logo_color: "#d50c2d",
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostingPlan {
    /// Provider name. Several plans share a provider.
    pub provider: String,

    /// Provider-assigned size class.
    pub tier: PlanTier,

    /// Display name, not guaranteed unique.
    pub name: String,

    /// Monthly price in the reference currency.
    pub price: f64,

    /// Virtual core count.
    pub cpu: u32,

    /// Memory in gigabytes.
    pub ram: f64,

    /// Disk size in gigabytes.
    pub storage: f64,

    /// Free-text disk descriptor (e.g. "NVMe SSD").
    #[serde(default)]
    pub storage_type: String,

    /// Comma-separated region names. Matched as a case-insensitive substring.
    #[serde(default)]
    pub regions: String,

    /// Network port speed, when the provider publishes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_speed_mbps: Option<u32>,

    /// Outbound referral link. Opaque to the engine.
    #[serde(default)]
    pub url: String,

    /// Searchable description.
    #[serde(default)]
    pub notes: String,

    /// Display colour for the provider logo.
    #[serde(default)]
    pub logo_color: String,
}

impl HostingPlan {
    /// Check whether this plan lists the given region.
    ///
    /// The match is a case-insensitive substring test against the raw
    /// region list, so "europe" matches "Western Europe". The region is
    /// used as given, whitespace included. An empty region never matches.
    #[must_use]
    pub fn serves_region(&self, region: &str) -> bool {
        if region.is_empty() {
            return false;
        }
        self.regions
            .to_lowercase()
            .contains(&region.to_lowercase())
    }

    /// Check whether the name or notes contain `text`, ignoring case.
    ///
    /// An empty query matches every plan.
    #[must_use]
    pub fn matches_text(&self, text: &str) -> bool {
        let needle = text.to_lowercase();
        self.name.to_lowercase().contains(&needle) || self.notes.to_lowercase().contains(&needle)
    }

    /// Region names as a list, split on commas.
    pub fn region_list(&self) -> impl Iterator<Item = &str> {
        self.regions
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
    }

    /// Validate the numeric fields of this plan.
    ///
    /// Returns a list of validation errors, each prefixed with the plan's
    /// provider and name.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let label = format!("{} '{}'", self.provider, self.name);

        if !(self.price.is_finite() && self.price > 0.0) {
            errors.push(format!("Plan {label} has non-positive price {}", self.price));
        }
        if self.cpu == 0 {
            errors.push(format!("Plan {label} has zero CPU cores"));
        }
        if !(self.ram.is_finite() && self.ram > 0.0) {
            errors.push(format!("Plan {label} has non-positive RAM {}", self.ram));
        }
        if !(self.storage.is_finite() && self.storage > 0.0) {
            errors.push(format!(
                "Plan {label} has non-positive storage {}",
                self.storage
            ));
        }
        if self.port_speed_mbps == Some(0) {
            errors.push(format!("Plan {label} has zero port speed"));
        }
        if self.provider.trim().is_empty() {
            errors.push(format!("Plan '{}' has no provider", self.name));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_plan() -> HostingPlan {
        HostingPlan {
            provider: "Hetzner".to_string(),
            tier: PlanTier::Small,
            name: "CX22".to_string(),
            price: 4.59,
            cpu: 2,
            ram: 4.0,
            storage: 40.0,
            storage_type: "NVMe SSD".to_string(),
            regions: "Germany, Finland".to_string(),
            port_speed_mbps: Some(1000),
            url: "https://www.hetzner.com/cloud".to_string(),
            notes: "Shared vCPU, 20 TB traffic included".to_string(),
            logo_color: "#d50c2d".to_string(),
        }
    }

    #[test]
    fn test_serves_region_is_case_insensitive() {
        let plan = create_test_plan();
        assert!(plan.serves_region("germany"));
        assert!(plan.serves_region("FINLAND"));
        assert!(!plan.serves_region("USA"));
    }

    #[test]
    fn test_empty_region_never_matches() {
        let plan = create_test_plan();
        assert!(!plan.serves_region(""));
    }

    #[test]
    fn test_region_whitespace_is_significant() {
        let plan = create_test_plan();
        // "Germany, Finland" has no "germany " but does contain a space
        assert!(!plan.serves_region("germany "));
        assert!(!plan.serves_region(" germany"));
        assert!(plan.serves_region(" "));
        assert!(plan.serves_region(", finland"));
    }

    #[test]
    fn test_matches_text() {
        let plan = create_test_plan();
        assert!(plan.matches_text("cx2"));
        assert!(plan.matches_text("TRAFFIC"));
        assert!(plan.matches_text(""));
        assert!(!plan.matches_text("dedicated"));
    }

    #[test]
    fn test_region_list() {
        let plan = create_test_plan();
        let regions: Vec<_> = plan.region_list().collect();
        assert_eq!(regions, vec!["Germany", "Finland"]);
    }

    #[test]
    fn test_validate_valid_plan() {
        let plan = create_test_plan();
        let errors = plan.validate();
        assert!(errors.is_empty(), "Errors: {:?}", errors);
    }

    #[test]
    fn test_validate_rejects_bad_numbers() {
        let mut plan = create_test_plan();
        plan.price = 0.0;
        plan.cpu = 0;
        plan.ram = f64::NAN;

        let errors = plan.validate();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("price"));
        assert!(errors[1].contains("CPU"));
        assert!(errors[2].contains("RAM"));
    }

    #[test]
    fn test_plan_tier_from_str() {
        assert_eq!("Medium".parse::<PlanTier>().unwrap(), PlanTier::Medium);
        assert!(matches!(
            "huge".parse::<PlanTier>(),
            Err(AdvisorError::UnknownPlanTier(_))
        ));
    }

    #[test]
    fn test_plan_parses_from_ron() {
        let source = r##"HostingPlan(
            provider: "Vultr",
            tier: Large,
            name: "HF 8GB",
            price: 48.0,
            cpu: 4,
            ram: 8.0,
            storage: 256.0,
            regions: "USA, Japan",
        )"##;

        let plan: HostingPlan = ron::from_str(source).unwrap();
        assert_eq!(plan.tier, PlanTier::Large);
        assert_eq!(plan.port_speed_mbps, None);
        assert!(plan.notes.is_empty());
    }
}
