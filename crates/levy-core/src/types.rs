//! Value types produced by the fee schedule.
//!
//! Every type here is an immutable value: results are built fresh on each
//! calculation and never updated in place.

use serde::{Deserialize, Serialize};

use crate::constants::{BASE_PRICE, TIERS};

/// One bracket of the marginal fee schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tier {
    /// 1-based position in the schedule.
    pub ordinal: u8,
    /// Display name.
    pub label: &'static str,
    /// Inclusive percentage where the tier begins.
    pub lower_bound: f64,
    /// Exclusive percentage where the next tier begins.
    pub upper_bound: f64,
    /// Marginal multiplier applied within the tier.
    pub coefficient: u32,
}

impl Tier {
    pub const fn new(
        ordinal: u8,
        label: &'static str,
        lower_bound: f64,
        upper_bound: f64,
        coefficient: u32,
    ) -> Self {
        Self {
            ordinal,
            label,
            lower_bound,
            upper_bound,
            coefficient,
        }
    }

    /// Percentage points of this tier consumed by `rate`.
    ///
    /// Returns `None` unless `rate` strictly exceeds the lower bound, so a rate
    /// sitting exactly on the boundary does not enter the tier.
    ///
    /// # Examples
    ///
    /// ```
    /// use levy_core::constants::TIERS;
    /// assert_eq!(TIERS[0].span_for(70.0), None);
    /// assert_eq!(TIERS[0].span_for(75.0), Some(5.0));
    /// assert_eq!(TIERS[0].span_for(95.0), Some(10.0));
    /// ```
    pub fn span_for(&self, rate: f64) -> Option<f64> {
        if rate > self.lower_bound {
            Some(rate.min(self.upper_bound) - self.lower_bound)
        } else {
            None
        }
    }

    /// Whether `rate` consumes the whole tier.
    pub fn is_saturated_by(&self, rate: f64) -> bool {
        rate >= self.upper_bound
    }

    /// Look up a tier by its 1-based ordinal.
    pub fn by_ordinal(ordinal: u8) -> Option<&'static Tier> {
        TIERS.iter().find(|t| t.ordinal == ordinal)
    }
}

/// Contribution of a single tier to a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierResult {
    /// Ordinal of the contributing tier.
    pub tier: u8,
    pub label: String,
    pub coefficient: u32,
    /// Headcount the amount was computed for.
    pub people: f64,
    /// Fee contributed by this tier.
    pub amount: f64,
    /// Percentage points of the tier consumed by the input rate.
    pub rate_span: f64,
    /// The input rate met or exceeded the tier's upper bound.
    pub is_full: bool,
}

impl TierResult {
    /// Human-readable derivation of [`amount`](Self::amount).
    ///
    /// # Examples
    ///
    /// ```
    /// use levy_core::types::TierResult;
    /// let r = TierResult {
    ///     tier: 1,
    ///     label: "70% - 79%".into(),
    ///     coefficient: 2,
    ///     people: 100.0,
    ///     amount: 15.0,
    ///     rate_span: 5.0,
    ///     is_full: false,
    /// };
    /// assert_eq!(r.formula(), "1.5 × 2 × 100 people × 5.0%");
    /// ```
    pub fn formula(&self) -> String {
        format!(
            "{BASE_PRICE:.1} × {} × {} people × {:.1}%",
            self.coefficient, self.people, self.rate_span
        )
    }
}

/// Outcome of a fee calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Sum of every breakdown amount.
    pub total_fee: f64,
    /// Contributing tiers in ascending order.
    pub breakdown: Vec<TierResult>,
    /// Ordinal of the highest tier touched, 0 when none.
    pub active_tier_index: u8,
}

impl CalculationResult {
    /// The result for a rate at or below the no-fee threshold.
    pub fn zero() -> Self {
        Self {
            total_fee: 0.0,
            breakdown: Vec::new(),
            active_tier_index: 0,
        }
    }

    /// The highest tier touched, if any.
    pub fn active_tier(&self) -> Option<&'static Tier> {
        Tier::by_ordinal(self.active_tier_index)
    }

    pub fn is_zero(&self) -> bool {
        self.breakdown.is_empty()
    }
}

/// One point of the fee-versus-rate chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSample {
    /// Sampled rate as labeled on the chart (may exceed 100).
    pub rate: f64,
    /// Total fee at `min(rate, 100)`.
    pub fee: f64,
    /// This sample is the one nearest the caller's current rate.
    pub is_current: bool,
}
