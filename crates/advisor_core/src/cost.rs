//! Rental cost projection with duration discounts.
//!
//! Longer commitments earn a step discount. The steps are checked from
//! the longest threshold down, so a 12-month rental gets the 12-month
//! rate and not the 3-month one.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

/// Days per month used for per-day display figures. Not calendar accurate.
pub const DAYS_PER_MONTH: u32 = 30;

/// One step of a discount schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountStep {
    /// Shortest rental, in months, that earns this rate.
    pub min_months: u32,
    /// Fractional discount in `[0, 1)`.
    pub rate: f64,
}

/// Reference discount steps: 12+ months 20%, 6+ months 15%, 3+ months 10%.
pub const DEFAULT_DISCOUNT_STEPS: [DiscountStep; 3] = [
    DiscountStep {
        min_months: 12,
        rate: 0.20,
    },
    DiscountStep {
        min_months: 6,
        rate: 0.15,
    },
    DiscountStep {
        min_months: 3,
        rate: 0.10,
    },
];

fn rate_from_steps(steps: &[DiscountStep], months: u32) -> f64 {
    steps
        .iter()
        .filter(|step| months >= step.min_months)
        .max_by_key(|step| step.min_months)
        .map_or(0.0, |step| step.rate)
}

/// Duration-based discount schedule.
///
/// Steps may be authored in any order; the highest threshold that a
/// duration reaches always wins. Thresholds must be distinct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountSchedule {
    /// Discount steps.
    pub steps: Vec<DiscountStep>,
}

impl Default for DiscountSchedule {
    fn default() -> Self {
        Self {
            steps: DEFAULT_DISCOUNT_STEPS.to_vec(),
        }
    }
}

impl DiscountSchedule {
    /// A schedule with no discounts.
    #[must_use]
    pub fn none() -> Self {
        Self { steps: Vec::new() }
    }

    /// Discount rate for a rental of `months`.
    #[must_use]
    pub fn rate_for(&self, months: u32) -> f64 {
        rate_from_steps(&self.steps, months)
    }

    /// Validate every step.
    ///
    /// Returns a list of validation errors.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for step in &self.steps {
            if !valid_rate(step.rate) {
                errors.push(format!(
                    "Discount step at {} months has rate {} outside [0, 1)",
                    step.min_months, step.rate
                ));
            }
            if !seen.insert(step.min_months) {
                errors.push(format!(
                    "Discount step at {} months is defined more than once",
                    step.min_months
                ));
            }
        }

        errors
    }
}

fn valid_rate(rate: f64) -> bool {
    (0.0..1.0).contains(&rate)
}

fn check_price(monthly_price: f64) -> Result<()> {
    if monthly_price.is_finite() && monthly_price > 0.0 {
        Ok(())
    } else {
        Err(AdvisorError::InvalidPrice(monthly_price))
    }
}

fn check_months(months: u32) -> Result<()> {
    if months == 0 {
        Err(AdvisorError::InvalidDuration(months))
    } else {
        Ok(())
    }
}

/// Discount rate for a rental of `months` under the reference schedule.
///
/// Ignores any schedule loaded from settings. Use
/// [`DiscountSchedule::rate_for`] or `Advisor::estimate_cost` to honor a
/// configured schedule.
#[must_use]
pub fn discount_rate(months: u32) -> f64 {
    rate_from_steps(&DEFAULT_DISCOUNT_STEPS, months)
}

/// Total cost of renting at `monthly_price` for `months`.
///
/// `total = monthly_price * months * (1 - rate)`. When `discount_rate` is
/// `None` the rate comes from [`DEFAULT_DISCOUNT_STEPS`], not from a
/// configured schedule; pass `Some(schedule.rate_for(months))` to use one,
/// or `Some(0.0)` for the undiscounted price. [`CostEstimate::new`] does
/// this for a given schedule.
///
/// # Errors
///
/// Returns an error if the price is not positive, `months` is zero, or the
/// rate is outside `[0, 1)`.
pub fn calculate_cost(monthly_price: f64, months: u32, discount_rate: Option<f64>) -> Result<f64> {
    check_price(monthly_price)?;
    check_months(months)?;

    let rate = discount_rate.unwrap_or_else(|| self::discount_rate(months));
    if !valid_rate(rate) {
        return Err(AdvisorError::InvalidDiscountRate(rate));
    }

    Ok(monthly_price * f64::from(months) * (1.0 - rate))
}

/// Average cost per day of a rental, using fixed 30-day months.
///
/// # Errors
///
/// Returns an error if `months` is zero.
pub fn cost_per_day(total_cost: f64, months: u32) -> Result<f64> {
    check_months(months)?;
    Ok(total_cost / (f64::from(months) * f64::from(DAYS_PER_MONTH)))
}

/// Full cost breakdown for a rental, as shown by the cost estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostEstimate {
    /// Monthly list price.
    pub monthly_price: f64,
    /// Rental duration.
    pub months: u32,
    /// Applied discount rate.
    pub discount_rate: f64,
    /// Undiscounted total.
    pub base_cost: f64,
    /// Amount saved by the discount.
    pub savings: f64,
    /// Discounted total.
    pub total_cost: f64,
    /// Discounted total spread over 30-day months.
    pub cost_per_day: f64,
}

impl CostEstimate {
    /// Estimate a rental under `schedule`.
    ///
    /// # Errors
    ///
    /// Returns an error if the price is not positive, `months` is zero, or
    /// the schedule yields a rate outside `[0, 1)`.
    pub fn new(monthly_price: f64, months: u32, schedule: &DiscountSchedule) -> Result<Self> {
        let rate = schedule.rate_for(months);
        let total_cost = calculate_cost(monthly_price, months, Some(rate))?;
        let base_cost = monthly_price * f64::from(months);

        Ok(Self {
            monthly_price,
            months,
            discount_rate: rate,
            base_cost,
            savings: base_cost * rate,
            total_cost,
            cost_per_day: cost_per_day(total_cost, months)?,
        })
    }

    /// Check whether any discount applies.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        self.discount_rate > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_discount_rate_steps() {
        assert_close(discount_rate(1), 0.0);
        assert_close(discount_rate(2), 0.0);
        assert_close(discount_rate(3), 0.10);
        // Five months is past the 3-month step.
        assert_close(discount_rate(5), 0.10);
        assert_close(discount_rate(6), 0.15);
        assert_close(discount_rate(11), 0.15);
        assert_close(discount_rate(12), 0.20);
        assert_close(discount_rate(24), 0.20);
    }

    #[test]
    fn test_calculate_cost_uses_schedule_when_rate_omitted() {
        assert_close(calculate_cost(100.0, 12, None).unwrap(), 960.0);
        assert_close(calculate_cost(100.0, 6, None).unwrap(), 510.0);
        assert_close(calculate_cost(100.0, 1, None).unwrap(), 100.0);
    }

    #[test]
    fn test_calculate_cost_with_explicit_rate() {
        assert_close(calculate_cost(100.0, 12, Some(0.0)).unwrap(), 1200.0);
        assert_close(calculate_cost(10.0, 3, Some(0.5)).unwrap(), 15.0);
    }

    #[test]
    fn test_calculate_cost_rejects_bad_input() {
        assert!(matches!(
            calculate_cost(0.0, 3, None),
            Err(AdvisorError::InvalidPrice(_))
        ));
        assert!(matches!(
            calculate_cost(f64::INFINITY, 3, None),
            Err(AdvisorError::InvalidPrice(_))
        ));
        assert!(matches!(
            calculate_cost(10.0, 0, None),
            Err(AdvisorError::InvalidDuration(0))
        ));
        assert!(matches!(
            calculate_cost(10.0, 3, Some(1.0)),
            Err(AdvisorError::InvalidDiscountRate(_))
        ));
        assert!(matches!(
            calculate_cost(10.0, 3, Some(-0.1)),
            Err(AdvisorError::InvalidDiscountRate(_))
        ));
    }

    #[test]
    fn test_schedule_order_does_not_matter() {
        let shuffled = DiscountSchedule {
            steps: vec![
                DEFAULT_DISCOUNT_STEPS[2],
                DEFAULT_DISCOUNT_STEPS[0],
                DEFAULT_DISCOUNT_STEPS[1],
            ],
        };
        for months in 1..=36 {
            assert_close(shuffled.rate_for(months), discount_rate(months));
        }
    }

    #[test]
    fn test_schedule_validation() {
        assert!(DiscountSchedule::default().validate().is_empty());
        let bad = DiscountSchedule {
            steps: vec![DiscountStep {
                min_months: 1,
                rate: 1.5,
            }],
        };
        assert_eq!(bad.validate().len(), 1);
    }

    #[test]
    fn test_schedule_rejects_repeated_threshold() {
        let step = |rate| DiscountStep {
            min_months: 6,
            rate,
        };
        for steps in [vec![step(0.15), step(0.05)], vec![step(0.05), step(0.15)]] {
            let errors = DiscountSchedule { steps }.validate();
            assert_eq!(errors.len(), 1);
            assert!(errors[0].contains("more than once"));
        }
    }

    #[test]
    fn test_omitted_rate_ignores_custom_schedule() {
        let flat = DiscountSchedule {
            steps: vec![DiscountStep {
                min_months: 1,
                rate: 0.5,
            }],
        };
        assert_close(calculate_cost(100.0, 12, None).unwrap(), 960.0);
        assert_close(
            calculate_cost(100.0, 12, Some(flat.rate_for(12))).unwrap(),
            600.0,
        );
        assert_close(
            CostEstimate::new(100.0, 12, &flat).unwrap().total_cost,
            600.0,
        );
    }

    #[test]
    fn test_cost_estimate_breakdown() {
        let estimate = CostEstimate::new(19.99, 6, &DiscountSchedule::default()).unwrap();
        assert!(estimate.is_discounted());
        assert_close(estimate.discount_rate, 0.15);
        assert_close(estimate.base_cost, 119.94);
        assert_close(estimate.savings, 119.94 * 0.15);
        assert_close(estimate.total_cost, 119.94 * 0.85);
        assert_close(estimate.cost_per_day, 119.94 * 0.85 / 180.0);
        assert_close(estimate.base_cost - estimate.savings, estimate.total_cost);
    }

    #[test]
    fn test_cost_estimate_without_discounts() {
        let estimate = CostEstimate::new(10.0, 12, &DiscountSchedule::none()).unwrap();
        assert!(!estimate.is_discounted());
        assert_close(estimate.total_cost, 120.0);
        assert_close(estimate.cost_per_day, 120.0 / 360.0);
    }

    #[test]
    fn test_cost_per_day_rejects_zero_months() {
        assert!(cost_per_day(100.0, 0).is_err());
        assert_close(cost_per_day(300.0, 1).unwrap(), 10.0);
    }
}
