//! Visitor preferences for a single recommendation request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

/// How heavily the server will be modded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ModLevel {
    /// No mods.
    #[default]
    Vanilla,
    /// A handful of lightweight mods.
    Light,
    /// Large modpacks.
    Heavy,
}

impl ModLevel {
    /// Lowercase tag used on the command line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vanilla => "vanilla",
            Self::Light => "light",
            Self::Heavy => "heavy",
        }
    }
}

impl fmt::Display for ModLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ModLevel {
    type Err = AdvisorError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vanilla" => Ok(Self::Vanilla),
            "light" => Ok(Self::Light),
            "heavy" => Ok(Self::Heavy),
            _ => Err(AdvisorError::UnknownModLevel(s.to_string())),
        }
    }
}

/// What a visitor told us about their server.
///
/// Built fresh for each interaction and dropped once a result set has
/// been produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Expected concurrent players.
    pub player_count: u32,

    /// Modding level.
    #[serde(default)]
    pub mod_level: ModLevel,

    /// Preferred region. Blank means no preference.
    #[serde(default)]
    pub region: String,

    /// Monthly budget. Carried through but not used to filter plans.
    #[serde(default)]
    pub budget: Option<f64>,
}

impl UserPreferences {
    /// Create preferences with no region or budget.
    #[must_use]
    pub fn new(player_count: u32, mod_level: ModLevel) -> Self {
        Self {
            player_count,
            mod_level,
            region: String::new(),
            budget: None,
        }
    }

    /// Set the preferred region.
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Set the monthly budget.
    #[must_use]
    pub fn with_budget(mut self, budget: f64) -> Self {
        self.budget = Some(budget);
        self
    }

    /// The preferred region exactly as entered, or `None` when empty.
    #[must_use]
    pub fn preferred_region(&self) -> Option<&str> {
        (!self.region.is_empty()).then_some(self.region.as_str())
    }

    /// Reject inputs that would lead to a wrong recommendation.
    ///
    /// # Errors
    ///
    /// Returns an error if the player count is zero or the budget is not
    /// a positive number.
    pub fn validate(&self) -> Result<()> {
        if self.player_count == 0 {
            return Err(AdvisorError::InvalidPlayerCount(self.player_count));
        }
        if let Some(budget) = self.budget {
            if !(budget.is_finite() && budget > 0.0) {
                return Err(AdvisorError::InvalidBudget(budget));
            }
        }
        Ok(())
    }
}
