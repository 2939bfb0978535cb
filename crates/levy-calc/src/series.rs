//! Chart series generation.
//!
//! Samples the total fee at every integer rate in
//! `[SERIES_START, SERIES_END]`. The calculator input is capped at
//! [`MAX_RATE`] while each sample keeps its uncapped rate, so the curve
//! runs flat past 100%.

use levy_core::constants::{CURRENT_SAMPLE_TOLERANCE, MAX_RATE, SERIES_END, SERIES_LEN, SERIES_START};
use levy_core::traits::FeeCalculator;
use levy_core::types::ChartSample;
use tracing::debug;

use crate::engine::FeeEngine;

/// Sample `calculator` across the chart domain for `people`.
///
/// `current_rate` only marks which sample the chart should highlight.
pub fn generate_series_with<C>(calculator: &C, people: f64, current_rate: f64) -> Vec<ChartSample>
where
    C: FeeCalculator + ?Sized,
{
    let mut samples = Vec::with_capacity(SERIES_LEN);

    for r in SERIES_START..=SERIES_END {
        let rate = f64::from(r);
        let fee = calculator.total_fee(rate.min(MAX_RATE), people);
        samples.push(ChartSample {
            rate,
            fee,
            is_current: (rate - current_rate).abs() < CURRENT_SAMPLE_TOLERANCE,
        });
    }

    debug!(people, current_rate, samples = samples.len(), "chart series generated");
    samples
}

/// Sample the production [`FeeEngine`] across the chart domain.
///
/// # Examples
///
/// ```
/// let series = levy_calc::generate_series(100.0, 85.0);
/// assert_eq!(series.len(), 41);
/// assert_eq!(series.first().unwrap().rate, 65.0);
/// assert_eq!(series.last().unwrap().rate, 105.0);
/// ```
pub fn generate_series(people: f64, current_rate: f64) -> Vec<ChartSample> {
    generate_series_with(&FeeEngine::new(), people, current_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use levy_core::types::CalculationResult;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records every rate it is asked about and charges the rate itself.
    #[derive(Default)]
    struct RecordingCalculator {
        calls: AtomicUsize,
        max_rate_seen: std::sync::Mutex<f64>,
    }

    impl FeeCalculator for RecordingCalculator {
        fn calculate(&self, rate: f64, _people: f64) -> CalculationResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut max = self.max_rate_seen.lock().unwrap();
            *max = max.max(rate);
            CalculationResult {
                total_fee: rate,
                ..CalculationResult::zero()
            }
        }
    }

    #[test]
    fn covers_inclusive_domain() {
        let series = generate_series(100.0, 85.0);
        assert_eq!(series.len(), SERIES_LEN);
        let rates: Vec<f64> = series.iter().map(|s| s.rate).collect();
        let expected: Vec<f64> = (65..=105).map(f64::from).collect();
        assert_eq!(rates, expected);
    }

    #[test]
    fn calculator_input_capped_at_max_rate() {
        let calc = RecordingCalculator::default();
        let series = generate_series_with(&calc, 1.0, 0.0);
        assert_eq!(calc.calls.load(Ordering::SeqCst), SERIES_LEN);
        assert_eq!(*calc.max_rate_seen.lock().unwrap(), MAX_RATE);
        assert_eq!(series.last().unwrap().rate, 105.0);
        assert_eq!(series.last().unwrap().fee, MAX_RATE);
    }

    #[test]
    fn tail_is_flat_past_cap() {
        let series = generate_series(100.0, 85.0);
        let at_cap = series.iter().find(|s| s.rate == 100.0).unwrap().fee;
        for s in series.iter().filter(|s| s.rate >= 100.0) {
            assert_eq!(s.fee, at_cap, "rate {}", s.rate);
        }
    }

    #[test]
    fn head_is_zero_up_to_threshold() {
        let series = generate_series(100.0, 85.0);
        for s in series.iter().filter(|s| s.rate <= 70.0) {
            assert_eq!(s.fee, 0.0, "rate {}", s.rate);
        }
        assert!(series.iter().find(|s| s.rate == 71.0).unwrap().fee > 0.0);
    }

    #[test]
    fn samples_match_calculator() {
        let series = generate_series(200.0, 95.0);
        let at_95 = series.iter().find(|s| s.rate == 95.0).unwrap();
        assert!((at_95.fee - 210.0).abs() < 1e-9);
    }

    #[test]
    fn marks_single_current_sample() {
        let series = generate_series(100.0, 85.0);
        let current: Vec<f64> = series.iter().filter(|s| s.is_current).map(|s| s.rate).collect();
        assert_eq!(current, vec![85.0]);
    }

    #[test]
    fn fractional_current_rate_marks_nearest() {
        let series = generate_series(100.0, 82.3);
        let current: Vec<f64> = series.iter().filter(|s| s.is_current).map(|s| s.rate).collect();
        assert_eq!(current, vec![82.0]);
    }

    #[test]
    fn current_rate_outside_domain_marks_nothing() {
        let series = generate_series(100.0, 10.0);
        assert!(series.iter().all(|s| !s.is_current));
    }

    #[test]
    fn works_through_trait_object() {
        let calc: &dyn FeeCalculator = &FeeEngine::new();
        assert_eq!(generate_series_with(calc, 50.0, 90.0), generate_series(50.0, 90.0));
    }

    proptest! {
        #[test]
        fn fees_non_decreasing(people in 0.0f64..1e6, current in 0.0f64..=100.0) {
            let series = generate_series(people, current);
            for pair in series.windows(2) {
                prop_assert!(
                    pair[0].fee <= pair[1].fee,
                    "fee dropped between {} and {}", pair[0].rate, pair[1].rate
                );
            }
        }
    }
}
