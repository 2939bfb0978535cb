//! Fee schedule constants. Rates are percentage points, normally in `[0, 100]`.

use crate::types::Tier;

/// Unit price per person per percentage-point fraction, shown in summaries.
pub const BASE_PRICE: f64 = 1.5;

/// Divisor turning percentage points into a fraction.
pub const PERCENT: f64 = 100.0;

/// Highest rate a caller should pass after clamping.
pub const MAX_RATE: f64 = 100.0;

pub const TIER_1_START: f64 = 70.0;
pub const TIER_2_START: f64 = 80.0;
pub const TIER_3_START: f64 = 90.0;

/// Rates at or below this value produce no fee.
pub const NO_FEE_THRESHOLD: f64 = TIER_1_START;

/// The marginal fee schedule, ordered ascending and contiguous.
///
/// The last tier is open-ended: an unclamped rate above [`MAX_RATE`] keeps
/// accruing its marginal fee.
///
/// # Examples
///
/// ```
/// use levy_core::constants::TIERS;
/// assert_eq!(TIERS[0].lower_bound, 70.0);
/// assert_eq!(TIERS[2].coefficient, 4);
/// assert!(TIERS[2].upper_bound.is_infinite());
/// ```
pub const TIERS: [Tier; 3] = [
    Tier::new(1, "70% - 79%", TIER_1_START, TIER_2_START, 2),
    Tier::new(2, "80% - 89%", TIER_2_START, TIER_3_START, 3),
    Tier::new(3, "90% - 100%", TIER_3_START, f64::INFINITY, 4),
];

/// First rate sampled for the chart series.
pub const SERIES_START: u32 = 65;

/// Last rate sampled for the chart series (inclusive).
pub const SERIES_END: u32 = 105;

/// Number of samples in a chart series.
pub const SERIES_LEN: usize = (SERIES_END - SERIES_START + 1) as usize;

/// A sample is "current" when its rate lies within this distance of the caller's rate.
pub const CURRENT_SAMPLE_TOLERANCE: f64 = 0.5;
