//! Hardware filtering of catalog plans.

use crate::data::HostingPlan;
use crate::requirements::HardwareRequirement;

/// Keep the plans whose CPU and RAM meet `requirement`.
///
/// Order-preserving and non-mutating. Region, price and budget play no
/// part here; region only affects scoring.
#[must_use]
pub fn filter_plans<'a, I>(plans: I, requirement: &HardwareRequirement) -> Vec<&'a HostingPlan>
where
    I: IntoIterator<Item = &'a HostingPlan>,
{
    plans
        .into_iter()
        .filter(|plan| requirement.is_met_by(plan.cpu, plan.ram))
        .collect()
}
