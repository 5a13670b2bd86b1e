//! Reduction of trial samples into a [`BenchmarkResult`].

use crate::data::{BenchmarkResult, Samples};
use crate::error::HarnessError;
use std::time::Duration;

/// Reduce a sample collection plus success/error counts into a
/// [`BenchmarkResult`].
///
/// Pure: no I/O, inputs untouched. `total_time` is the wall-clock span over
/// all trials, which may be shorter than the sum of samples when trials ran
/// concurrently.
pub fn summarize(
    operation: &str,
    iterations: u32,
    total_time: Duration,
    samples: &Samples,
    success: u32,
    errors: u32,
) -> Result<BenchmarkResult, HarnessError> {
    if samples.is_empty() {
        return Err(HarnessError::EmptySamples);
    }

    let mut sorted = samples.as_millis().to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let sum: f64 = sorted.iter().sum();
    let total_time_ms = total_time.as_secs_f64() * 1_000.;

    let ops_per_second = if total_time_ms > 0. {
        (iterations as f64 / total_time_ms * 1_000.).round() as u64
    } else {
        0
    };

    Ok(BenchmarkResult {
        operation: operation.to_string(),
        iterations,
        total_time_ms: round2(total_time_ms),
        avg_time_ms: round2(sum / sorted.len() as f64),
        min_time_ms: round2(sorted[0]),
        max_time_ms: round2(sorted[sorted.len() - 1]),
        p50_ms: round2(percentile(&sorted, 0.50)),
        p95_ms: round2(percentile(&sorted, 0.95)),
        p99_ms: round2(percentile(&sorted, 0.99)),
        ops_per_second,
        success,
        errors,
        error_rate: round2(errors as f64 / iterations as f64 * 100.),
    })
}

/// Rank selection at index `floor(n * q)`, clamped to the valid range. No
/// interpolation between adjacent samples.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let idx = ((sorted.len() as f64 * q).floor() as usize).min(sorted.len() - 1);
    sorted[idx]
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.).round() / 100.
}
