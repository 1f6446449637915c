//! Engine settings loaded from RON.

use serde::{Deserialize, Serialize};

use crate::cost::DiscountSchedule;
use crate::error::{AdvisorError, Result};

/// Bundled settings source.
pub const BUNDLED_SETTINGS_RON: &str = include_str!("../data/settings.ron");

/// Result-set sizes and the discount schedule.
///
/// # Example RON
///
/// ```ron
/// AdvisorSettings(
///     result_limit: 6,
///     featured_count: 3,
///     alternative_count: 4,
///     discount_schedule: DiscountSchedule(steps: [
///         DiscountStep(min_months: 12, rate: 0.20),
///     ]),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorSettings {
    /// Plans listed per tier class.
    pub result_limit: usize,
    /// Plans highlighted at the top of a recommendation.
    pub featured_count: usize,
    /// Plans listed under "other options" after the featured ones.
    pub alternative_count: usize,
    /// Rental discount steps.
    pub discount_schedule: DiscountSchedule,
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            result_limit: 6,
            featured_count: 3,
            alternative_count: 4,
            discount_schedule: DiscountSchedule::default(),
        }
    }
}

impl AdvisorSettings {
    /// Parse and validate settings from RON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text cannot be parsed, or a discount step is
    /// out of range or repeats another step's threshold.
    pub fn from_ron_str(name: &str, source: &str) -> Result<Self> {
        let settings: Self = ron::from_str(source).map_err(|e| AdvisorError::DataParseError {
            path: name.to_string(),
            message: e.to_string(),
        })?;

        let errors = settings.validate();
        if !errors.is_empty() {
            return Err(AdvisorError::CatalogValidation {
                catalog: name.to_string(),
                errors,
            });
        }

        tracing::debug!(
            result_limit = settings.result_limit,
            discount_steps = settings.discount_schedule.steps.len(),
            "Loaded advisor settings"
        );
        Ok(settings)
    }

    /// Load the settings bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled settings are corrupt.
    pub fn bundled() -> Result<Self> {
        Self::from_ron_str("settings.ron", BUNDLED_SETTINGS_RON)
    }

    /// Validate the settings.
    ///
    /// Returns a list of validation errors.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = self.discount_schedule.validate();
        if self.result_limit == 0 {
            errors.push("result_limit must be at least 1".to_string());
        }
        errors
    }
}
