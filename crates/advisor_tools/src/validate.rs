//! Data validation utilities.
//!
//! Loading already rejects records that are malformed on their own. The
//! checks here look across records for data that loads fine but would
//! make the recommender behave badly.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use advisor_core::data::TierClass;
use advisor_core::filter::filter_plans;
use serde::Serialize;

use crate::loader::{load_data, AdvisorData, DataLoadResult};

/// Outcome of validating a data directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Plans loaded.
    pub plans: usize,
    /// Tiers loaded.
    pub tiers: usize,
    /// Non-fatal findings.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Run the consistency checks over loaded data, logging each finding.
    #[must_use]
    pub fn for_data(data: &AdvisorData) -> Self {
        let warnings = check_consistency(data);
        for warning in &warnings {
            tracing::warn!("{warning}");
        }
        Self {
            plans: data.plans.len(),
            tiers: data.tiers.len(),
            warnings,
        }
    }

    /// Check whether the data passed without findings.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} plans, {} tiers", self.plans, self.tiers)?;
        for warning in &self.warnings {
            writeln!(f, "warning: {warning}")?;
        }
        if self.is_clean() {
            writeln!(f, "No problems found.")?;
        }
        Ok(())
    }
}

/// Cross-record checks over loaded data.
///
/// Returns one message per finding.
#[must_use]
pub fn check_consistency(data: &AdvisorData) -> Vec<String> {
    let mut warnings = Vec::new();

    // Tier recommendation takes the first tier that fits.
    for pair in data.tiers.tiers().windows(2) {
        if pair[1].max_players < pair[0].max_players {
            warnings.push(format!(
                "Tier '{}' ({} players) is listed after larger tier '{}' ({} players) and will never be recommended first",
                pair[1].id, pair[1].max_players, pair[0].id, pair[0].max_players
            ));
        }
    }

    for class in TierClass::ALL {
        if !data.tiers.iter().any(|t| t.tier_class == class) {
            warnings.push(format!("No {class} tier defined"));
        }
        if filter_plans(data.plans.plans(), &class.baseline_requirement()).is_empty() {
            warnings.push(format!("No plan meets the {class} baseline"));
        }
    }

    let mut seen = HashSet::new();
    for plan in data.plans.iter() {
        if !seen.insert((plan.provider.as_str(), plan.name.as_str())) {
            warnings.push(format!(
                "Plan {} '{}' is listed more than once",
                plan.provider, plan.name
            ));
        }
        if plan.region_list().next().is_none() {
            warnings.push(format!(
                "Plan {} '{}' lists no regions and never earns a region bonus",
                plan.provider, plan.name
            ));
        }
    }

    warnings
}

/// Validate all RON data files in a directory.
///
/// # Errors
///
/// Returns an error if any data file fails to load or validate.
pub fn validate_data_directory(path: &Path) -> DataLoadResult<ValidationReport> {
    validate_data(Some(path))
}

/// Validate a data directory, or the bundled data when `dir` is `None`.
///
/// # Errors
///
/// Returns an error if any data file fails to load or validate.
pub fn validate_data(dir: Option<&Path>) -> DataLoadResult<ValidationReport> {
    let data = load_data(dir)?;
    Ok(ValidationReport::for_data(&data))
}
