//! # Advisor Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Plan and tier fixtures
//! - Property-based testing strategies
//! - Float assertions

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod strategies;

/// Re-export proptest for convenience.
pub use proptest;
