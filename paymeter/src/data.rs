use serde::Serialize;
use std::time::Duration;

/// Latency reported for an endpoint class when no probe of that class
/// completed a round trip. Distinct from a true zero-latency measurement.
pub const UNREACHABLE: f64 = -1.0;

/// Per-trial duration collector.
///
/// One entry per trial, in trial order, for successes and failures alike. A
/// failed trial contributes its elapsed time up to the failure.
#[derive(Debug, Clone, Default)]
pub struct Samples {
    values: Vec<f64>,
}

impl Samples {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            values: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, elapsed: Duration) {
        self.values.push(elapsed.as_secs_f64() * 1_000.);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_millis(&self) -> &[f64] {
        &self.values
    }
}

/// Statistics for one benchmark invocation. Immutable once produced.
///
/// Millisecond fields are rounded to 2 decimals. `success + errors ==
/// iterations` and `min_time_ms <= p50_ms <= p95_ms <= p99_ms <= max_time_ms`
/// always hold.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    pub operation: String,
    pub iterations: u32,
    pub total_time_ms: f64,
    pub avg_time_ms: f64,
    pub min_time_ms: f64,
    pub max_time_ms: f64,
    pub p50_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub ops_per_second: u64,
    pub success: u32,
    pub errors: u32,
    pub error_rate: f64,
}

/// Aggregated endpoint-probe measurements from one `analyze_network()` call.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkMetrics {
    /// Mean facilitator round-trip in ms, or [`UNREACHABLE`].
    pub facilitator_latency: f64,
    /// Mean RPC round-trip in ms, or [`UNREACHABLE`].
    pub rpc_latency: f64,
    /// Probes attempted, including failed ones.
    pub total_round_trips: usize,
    /// Reserved. Byte accounting is not implemented; always zero.
    pub data_transferred: u64,
}

impl NetworkMetrics {
    pub fn facilitator_reachable(&self) -> bool {
        self.facilitator_latency >= 0.
    }

    pub fn rpc_reachable(&self) -> bool {
        self.rpc_latency >= 0.
    }
}
