//! Plain-text rendering of results. Presentation only: hosts wanting
//! structured output can serialize the records directly.

use crate::data::{BenchmarkResult, NetworkMetrics};

/// Render results as an aligned text table, one row per benchmark.
pub fn render_results(results: &[BenchmarkResult]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<24} {:>6} {:>10} {:>10} {:>10} {:>10} {:>8} {:>7}\n",
        "Operation", "Iter", "Avg ms", "P50 ms", "P95 ms", "P99 ms", "Ops/s", "Err %"
    ));
    for r in results {
        out.push_str(&format!(
            "{:<24} {:>6} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>8} {:>7.2}\n",
            r.operation,
            r.iterations,
            r.avg_time_ms,
            r.p50_ms,
            r.p95_ms,
            r.p99_ms,
            r.ops_per_second,
            r.error_rate,
        ));
    }
    out
}

/// Render a network snapshot as labelled lines, spelling out unreachable
/// classes instead of printing the sentinel.
pub fn render_network(metrics: &NetworkMetrics) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Facilitator latency: {}\n",
        latency_cell(metrics.facilitator_latency)
    ));
    out.push_str(&format!(
        "RPC latency:         {}\n",
        latency_cell(metrics.rpc_latency)
    ));
    out.push_str(&format!(
        "Round trips:         {}\n",
        metrics.total_round_trips
    ));
    out
}

fn latency_cell(latency: f64) -> String {
    if latency >= 0. {
        format!("{latency:.2}ms")
    } else {
        "unreachable".to_string()
    }
}
