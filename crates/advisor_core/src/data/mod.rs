//! Data structures for the plan and tier catalogs.
//!
//! This module contains pure data structures that describe hosting plans
//! and hardware tiers. All structs are designed to be deserialized from
//! RON files.
//!
//! **Note:** This module contains no IO - it only defines data types.
//! Catalog assembly and validation is handled by [`crate::catalog`].

mod plan_data;
mod tier_data;

pub use plan_data::{HostingPlan, PlanTier};
pub use tier_data::{HardwareTier, TierClass};
