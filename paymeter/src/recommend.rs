//! Threshold rules turning aggregated numbers into optimization suggestions.

use crate::data::{BenchmarkResult, NetworkMetrics};

const HIGH_AVG_LATENCY_MS: f64 = 500.;
const HIGH_FACILITATOR_LATENCY_MS: f64 = 200.;
const HIGH_ERROR_RATE_PCT: f64 = 5.;
const LOW_THROUGHPUT_OPS: u64 = 10;

/// Evaluate the rule table over benchmark results and a network snapshot.
///
/// Pure function. Rules are independent and additive, evaluated in a fixed
/// order so identical inputs produce identically ordered output. When nothing
/// fires, a single all-clear entry is returned instead of an empty list.
pub fn recommend(results: &[BenchmarkResult], network: &NetworkMetrics) -> Vec<String> {
    let mut out = Vec::new();

    if !results.is_empty() {
        let mean_avg =
            results.iter().map(|r| r.avg_time_ms).sum::<f64>() / results.len() as f64;
        if mean_avg > HIGH_AVG_LATENCY_MS {
            out.push(format!(
                "Average operation latency is {mean_avg:.0}ms. Use endpoints closer to \
                 your region, cache responses where possible, and reuse pooled connections."
            ));
        }
    }

    let facilitator = network.facilitator_latency;
    if network.facilitator_reachable() && facilitator > HIGH_FACILITATOR_LATENCY_MS {
        out.push(format!(
            "Facilitator latency is {facilitator:.0}ms. Switch to a closer facilitator \
             or add periodic health checks to route around slow ones."
        ));
    }

    if results.iter().any(|r| r.error_rate > HIGH_ERROR_RATE_PCT) {
        out.push(
            "Error rate exceeds 5%. Add retries with exponential backoff, a circuit \
             breaker, and endpoint health monitoring."
                .to_string(),
        );
    }

    let max_ops = results.iter().map(|r| r.ops_per_second).max();
    if matches!(max_ops, Some(ops) if ops < LOW_THROUGHPUT_OPS) {
        out.push(
            "Throughput is below 10 ops/s. Batch requests where the protocol allows, \
             enable keep-alive, and trim payload sizes."
                .to_string(),
        );
    }

    if out.is_empty() {
        out.push("Performance looks healthy. No optimizations needed.".to_string());
    }
    out
}
