//! Error types for the recommendation engine.

use thiserror::Error;

/// Result type alias using [`AdvisorError`].
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Top-level error type for all engine errors.
///
/// Catalog errors are raised at load time and are fatal to startup.
/// Input errors are raised per request and surfaced to the caller.
/// An empty recommendation is never an error.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// Data file parsing error.
    #[error("Failed to parse data file '{path}': {message}")]
    DataParseError {
        /// Path or logical name of the file that failed to parse.
        path: String,
        /// Error message.
        message: String,
    },

    /// Catalog data failed validation.
    #[error("Validation failed for catalog '{catalog}': {errors:?}")]
    CatalogValidation {
        /// Catalog that failed validation.
        catalog: String,
        /// Every problem found, in catalog order.
        errors: Vec<String>,
    },

    /// Two tiers share an identifier.
    #[error("Duplicate tier ID: {0}")]
    DuplicateTier(String),

    /// Player count must be at least one.
    #[error("Invalid player count: {0} (must be at least 1)")]
    InvalidPlayerCount(u32),

    /// Unrecognised mod level tag.
    #[error("Unknown mod level: '{0}' (expected vanilla, light or heavy)")]
    UnknownModLevel(String),

    /// Unrecognised tier class tag.
    #[error("Unknown tier class: '{0}' (expected starter, intermediate or professional)")]
    UnknownTierClass(String),

    /// Unrecognised plan size tag.
    #[error("Unknown plan tier: '{0}' (expected small, medium or large)")]
    UnknownPlanTier(String),

    /// Budget must be positive when given.
    #[error("Invalid budget: {0} (must be positive)")]
    InvalidBudget(f64),

    /// Rental duration must be at least one month.
    #[error("Invalid rental duration: {0} months (must be at least 1)")]
    InvalidDuration(u32),

    /// Prices must be positive and finite.
    #[error("Invalid monthly price: {0} (must be positive)")]
    InvalidPrice(f64),

    /// Discount rates must lie in `[0, 1)`.
    #[error("Invalid discount rate: {0} (must be in [0, 1))")]
    InvalidDiscountRate(f64),

    /// Performance curves need a tier that holds at least one player.
    #[error("Tier '{tier}' has no player capacity")]
    InvalidMaxPlayers {
        /// Tier identifier.
        tier: String,
    },
}
