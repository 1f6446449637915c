//! Read-only plan and tier catalogs.
//!
//! Catalogs are assembled once at startup, validated as a whole, and then
//! handed by reference to every engine function. Nothing in the engine
//! keeps a global copy, so tests can build synthetic catalogs freely.
//!
//! The reference dataset ships inside the crate as RON text and is parsed
//! by [`PlanCatalog::bundled`] and [`TierCatalog::bundled`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::data::{HardwareTier, HostingPlan, PlanTier};
use crate::error::{AdvisorError, Result};

/// Bundled VPS plan catalog source.
pub const BUNDLED_PLANS_RON: &str = include_str!("../data/plans.ron");

/// Bundled hardware tier catalog source.
pub const BUNDLED_TIERS_RON: &str = include_str!("../data/tiers.ron");

fn parse_ron<T: serde::de::DeserializeOwned>(name: &str, source: &str) -> Result<T> {
    ron::from_str(source).map_err(|e| AdvisorError::DataParseError {
        path: name.to_string(),
        message: e.to_string(),
    })
}

/// Filters for browsing the plan catalog.
///
/// Every criterion that is set must hold. An empty query matches all plans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanQuery {
    /// Case-insensitive substring of the plan name or notes.
    #[serde(default)]
    pub text: String,
    /// Exact provider name.
    #[serde(default)]
    pub provider: Option<String>,
    /// Exact plan size class.
    #[serde(default)]
    pub tier: Option<PlanTier>,
}

impl PlanQuery {
    /// Check whether a plan satisfies this query.
    #[must_use]
    pub fn matches(&self, plan: &HostingPlan) -> bool {
        plan.matches_text(&self.text)
            && self.provider.as_deref().map_or(true, |p| plan.provider == p)
            && self.tier.map_or(true, |t| plan.tier == t)
    }
}

/// Validated collection of hosting plans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanCatalog {
    plans: Vec<HostingPlan>,
}

impl PlanCatalog {
    /// Build a catalog, rejecting it if any plan is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::CatalogValidation`] listing every invalid field.
    pub fn new(plans: Vec<HostingPlan>) -> Result<Self> {
        let errors: Vec<String> = plans.iter().flat_map(HostingPlan::validate).collect();
        if !errors.is_empty() {
            return Err(AdvisorError::CatalogValidation {
                catalog: "plans".to_string(),
                errors,
            });
        }

        tracing::info!(
            "Loaded plan catalog with {} plans from {} providers",
            plans.len(),
            plans
                .iter()
                .map(|p| p.provider.as_str())
                .collect::<HashSet<_>>()
                .len()
        );

        Ok(Self { plans })
    }

    /// Parse and validate a catalog from RON text (a list of `HostingPlan`).
    ///
    /// `name` identifies the source in error messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed or fails validation.
    pub fn from_ron_str(name: &str, source: &str) -> Result<Self> {
        Self::new(parse_ron(name, source)?)
    }

    /// Load the catalog bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled data is corrupt.
    pub fn bundled() -> Result<Self> {
        Self::from_ron_str("plans.ron", BUNDLED_PLANS_RON)
    }

    /// All plans in catalog order.
    #[must_use]
    pub fn plans(&self) -> &[HostingPlan] {
        &self.plans
    }

    /// Iterate over plans in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &HostingPlan> {
        self.plans.iter()
    }

    /// Number of plans.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Unique provider names, in order of first appearance.
    #[must_use]
    pub fn providers(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.plans
            .iter()
            .map(|p| p.provider.as_str())
            .filter(|p| seen.insert(*p))
            .collect()
    }

    /// Plans matching a browse query, in catalog order.
    #[must_use]
    pub fn search(&self, query: &PlanQuery) -> Vec<&HostingPlan> {
        self.plans.iter().filter(|p| query.matches(p)).collect()
    }
}

/// Validated collection of hardware tiers, in authoring order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierCatalog {
    tiers: Vec<HardwareTier>,
}

impl TierCatalog {
    /// Build a tier catalog, rejecting invalid or duplicate tiers.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::DuplicateTier`] if two tiers share an id, or
    /// [`AdvisorError::CatalogValidation`] listing every invalid field.
    pub fn new(tiers: Vec<HardwareTier>) -> Result<Self> {
        let mut ids = HashSet::new();
        for tier in &tiers {
            if !ids.insert(tier.id.as_str()) {
                return Err(AdvisorError::DuplicateTier(tier.id.clone()));
            }
        }

        let errors: Vec<String> = tiers.iter().flat_map(HardwareTier::validate).collect();
        if !errors.is_empty() {
            return Err(AdvisorError::CatalogValidation {
                catalog: "tiers".to_string(),
                errors,
            });
        }

        tracing::info!("Loaded tier catalog with {} tiers", tiers.len());

        Ok(Self { tiers })
    }

    /// Parse and validate a tier catalog from RON text (a list of `HardwareTier`).
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed or fails validation.
    pub fn from_ron_str(name: &str, source: &str) -> Result<Self> {
        Self::new(parse_ron(name, source)?)
    }

    /// Load the tier catalog bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled data is corrupt.
    pub fn bundled() -> Result<Self> {
        Self::from_ron_str("tiers.ron", BUNDLED_TIERS_RON)
    }

    /// All tiers in authoring order.
    #[must_use]
    pub fn tiers(&self) -> &[HardwareTier] {
        &self.tiers
    }

    /// Iterate over tiers in authoring order.
    pub fn iter(&self) -> impl Iterator<Item = &HardwareTier> {
        self.tiers.iter()
    }

    /// Find a tier by its id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&HardwareTier> {
        self.tiers.iter().find(|t| t.id == id)
    }

    /// Number of tiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}
