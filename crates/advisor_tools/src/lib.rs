//! # Hosting Advisor Tools
//!
//! Command-line tools around the recommendation engine:
//! - Data directory loading with bundled fallbacks
//! - Data validators
//! - Text and JSON reports

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod loader;
pub mod report;
pub mod validate;
