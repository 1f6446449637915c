//! Reference data loading from a directory.
//!
//! A data directory holds up to three RON files: `plans.ron`, `tiers.ron`
//! and `settings.ron`. Any file that is absent falls back to the copy
//! bundled with `advisor_core`, so a directory can override just the
//! plan catalog. Files that are present must parse and validate.

use std::io::ErrorKind;
use std::path::Path;

use advisor_core::catalog::{PlanCatalog, TierCatalog};
use advisor_core::error::AdvisorError;
use advisor_core::recommend::Advisor;
use advisor_core::settings::AdvisorSettings;
use thiserror::Error;

/// Plan catalog file name.
pub const PLANS_FILE: &str = "plans.ron";

/// Tier catalog file name.
pub const TIERS_FILE: &str = "tiers.ron";

/// Settings file name.
pub const SETTINGS_FILE: &str = "settings.ron";

/// Errors that can occur while loading reference data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// Failed to read file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The data directory does not exist.
    #[error("Data directory not found: {0}")]
    MissingDirectory(String),

    /// A file was read but its contents were rejected.
    #[error(transparent)]
    Advisor(#[from] AdvisorError),
}

/// Result type for data loading operations.
pub type DataLoadResult<T> = Result<T, DataLoadError>;

/// Where a loaded file came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Read from the data directory.
    Directory,
    /// Compiled into `advisor_core`.
    Bundled,
}

/// Catalogs and settings loaded together.
#[derive(Debug, Clone)]
pub struct AdvisorData {
    /// Plan catalog.
    pub plans: PlanCatalog,
    /// Tier catalog.
    pub tiers: TierCatalog,
    /// Engine settings.
    pub settings: AdvisorSettings,
    /// Origin of `plans`, `tiers` and `settings`, in that order.
    pub sources: [DataSource; 3],
}

impl AdvisorData {
    /// Load the data bundled with `advisor_core`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled data is corrupt.
    pub fn bundled() -> DataLoadResult<Self> {
        Ok(Self {
            plans: PlanCatalog::bundled()?,
            tiers: TierCatalog::bundled()?,
            settings: AdvisorSettings::bundled()?,
            sources: [DataSource::Bundled; 3],
        })
    }

    /// Borrow the data as an engine handle.
    #[must_use]
    pub fn advisor(&self) -> Advisor<'_> {
        Advisor::new(&self.plans, &self.tiers, &self.settings)
    }
}

/// Read a data file, returning `None` if it does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn read_data_file(path: &Path) -> DataLoadResult<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(DataLoadError::IoError {
            path: path.display().to_string(),
            source: e,
        }),
    }
}

fn load_or_bundled<T>(
    dir: &Path,
    file: &str,
    parse: impl FnOnce(&str, &str) -> advisor_core::error::Result<T>,
    bundled: impl FnOnce() -> advisor_core::error::Result<T>,
) -> DataLoadResult<(T, DataSource)> {
    let path = dir.join(file);
    match read_data_file(&path)? {
        Some(contents) => {
            let value = parse(&path.display().to_string(), &contents)?;
            Ok((value, DataSource::Directory))
        }
        None => {
            tracing::warn!("{} not found, using bundled copy", path.display());
            Ok((bundled()?, DataSource::Bundled))
        }
    }
}

/// Load catalogs and settings from `dir`.
///
/// # Errors
///
/// Returns an error if the directory does not exist, or if any file that
/// is present cannot be read, parsed, or validated.
pub fn load_data_directory(dir: &Path) -> DataLoadResult<AdvisorData> {
    if !dir.is_dir() {
        return Err(DataLoadError::MissingDirectory(dir.display().to_string()));
    }

    let (plans, plans_source) =
        load_or_bundled(dir, PLANS_FILE, PlanCatalog::from_ron_str, PlanCatalog::bundled)?;
    let (tiers, tiers_source) =
        load_or_bundled(dir, TIERS_FILE, TierCatalog::from_ron_str, TierCatalog::bundled)?;
    let (settings, settings_source) = load_or_bundled(
        dir,
        SETTINGS_FILE,
        AdvisorSettings::from_ron_str,
        AdvisorSettings::bundled,
    )?;

    tracing::info!(
        "Loaded {} plans and {} tiers from {}",
        plans.len(),
        tiers.len(),
        dir.display()
    );

    Ok(AdvisorData {
        plans,
        tiers,
        settings,
        sources: [plans_source, tiers_source, settings_source],
    })
}

/// Load from `dir` when given, otherwise use the bundled data.
///
/// # Errors
///
/// See [`load_data_directory`] and [`AdvisorData::bundled`].
pub fn load_data(dir: Option<&Path>) -> DataLoadResult<AdvisorData> {
    match dir {
        Some(dir) => load_data_directory(dir),
        None => AdvisorData::bundled(),
    }
}
