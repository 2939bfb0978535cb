//! Core trait boundaries for the fee schedule.

use crate::types::CalculationResult;

/// Progressive fee computation over the fixed tier schedule.
///
/// Implementations are pure: identical inputs yield identical results and
/// no state is retained between calls.
pub trait FeeCalculator: Send + Sync {
    /// Marginal fee for `people` at `rate` percent, with its per-tier breakdown.
    ///
    /// `rate` is expected in `[0, 100]` and `people` to be non-negative; the
    /// caller clamps. Any finite input yields a result, never a panic.
    fn calculate(&self, rate: f64, people: f64) -> CalculationResult;

    /// Total fee only.
    ///
    /// Default implementation: `calculate(rate, people).total_fee`.
    fn total_fee(&self, rate: f64, people: f64) -> f64 {
        self.calculate(rate, people).total_fee
    }
}
