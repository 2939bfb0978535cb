//! Fee engine implementing the [`FeeCalculator`] trait.
//!
//! Walks the fixed tier schedule in ascending order and accumulates each
//! tier's marginal contribution. No clamping happens here.

use levy_core::constants::{BASE_PRICE, PERCENT, TIERS};
use levy_core::traits::FeeCalculator;
use levy_core::types::{CalculationResult, Tier, TierResult};
use tracing::trace;

/// The production fee calculator.
///
/// Implements [`FeeCalculator`] with:
/// - Zero fee at or below the first tier's lower bound
/// - Marginal accrual per tier, capped at each tier's upper bound
/// - An open-ended top tier
#[derive(Debug, Clone, Default)]
pub struct FeeEngine;

impl FeeEngine {
    /// Create a new FeeEngine.
    pub fn new() -> Self {
        Self
    }
}

/// Fee contributed by `tier` for `people` at `rate`, or `None` if the rate
/// does not enter the tier.
fn tier_contribution(tier: &Tier, rate: f64, people: f64) -> Option<TierResult> {
    let span = tier.span_for(rate)?;
    let fraction = span / PERCENT;
    let amount = BASE_PRICE * tier.coefficient as f64 * people * fraction;

    Some(TierResult {
        tier: tier.ordinal,
        label: tier.label.to_string(),
        coefficient: tier.coefficient,
        people,
        amount,
        rate_span: span,
        is_full: tier.is_saturated_by(rate),
    })
}

impl FeeCalculator for FeeEngine {
    fn calculate(&self, rate: f64, people: f64) -> CalculationResult {
        let mut result = CalculationResult::zero();

        for tier in &TIERS {
            // Tiers are ascending, so once one is not entered none above it are.
            let Some(contribution) = tier_contribution(tier, rate, people) else {
                break;
            };
            result.total_fee += contribution.amount;
            result.active_tier_index = contribution.tier;
            result.breakdown.push(contribution);
        }

        trace!(
            rate,
            people,
            total_fee = result.total_fee,
            active_tier = result.active_tier_index,
            "fee calculated"
        );
        result
    }
}

/// Calculate the marginal fee for `people` at `rate` with the production engine.
///
/// # Examples
///
/// ```
/// let r = levy_calc::calculate(85.0, 100.0);
/// assert!((r.total_fee - 52.5).abs() < 1e-9);
/// assert_eq!(r.active_tier_index, 2);
/// ```
pub fn calculate(rate: f64, people: f64) -> CalculationResult {
    FeeEngine::new().calculate(rate, people)
}
