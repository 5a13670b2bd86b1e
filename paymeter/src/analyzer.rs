//! Concurrent endpoint probing and aggregation into [`NetworkMetrics`].

use crate::config::NetworkConfig;
use crate::data::{NetworkMetrics, UNREACHABLE};
use crate::probe::Prober;
use crate::stats::round2;
use futures::future::join_all;
#[allow(unused_imports)]
use tracing::{debug, info, instrument};

/// Fans probes out over the configured endpoint lists and averages what came
/// back.
pub struct NetworkAnalyzer<'a> {
    config: &'a NetworkConfig,
    prober: Prober,
}

impl<'a> NetworkAnalyzer<'a> {
    pub fn new(config: &'a NetworkConfig) -> Self {
        Self {
            config,
            prober: Prober::new(),
        }
    }

    pub fn with_prober(config: &'a NetworkConfig, prober: Prober) -> Self {
        Self { config, prober }
    }

    /// Probe every configured endpoint concurrently and aggregate.
    ///
    /// This is a join barrier: all probes settle (success or sentinel) before
    /// averaging. A class with zero successful probes reports the sentinel,
    /// and `total_round_trips` counts attempts, failures included. Never
    /// fails, whatever the endpoints do.
    #[instrument(name = "network_analysis", skip_all)]
    pub async fn analyze_network(&self) -> NetworkMetrics {
        info!(
            "probing {} facilitators and {} rpc nodes",
            self.config.facilitators.len(),
            self.config.rpc_nodes.len()
        );

        let facilitators = join_all(
            self.config
                .facilitators
                .iter()
                .map(|url| self.prober.probe_facilitator(url)),
        );
        let rpc_nodes = join_all(
            self.config
                .rpc_nodes
                .iter()
                .map(|url| self.prober.probe_rpc(url)),
        );
        let (facilitator_probes, rpc_probes) = tokio::join!(facilitators, rpc_nodes);

        let metrics = NetworkMetrics {
            facilitator_latency: average_reachable(&facilitator_probes),
            rpc_latency: average_reachable(&rpc_probes),
            total_round_trips: facilitator_probes.len() + rpc_probes.len(),
            data_transferred: 0,
        };
        debug!("network metrics: {metrics:?}");
        metrics
    }
}

/// Mean over successful probes only; sentinel when none completed. Never zero
/// and never NaN for an all-failed class.
fn average_reachable(latencies: &[f64]) -> f64 {
    let reachable: Vec<f64> = latencies.iter().copied().filter(|l| *l >= 0.).collect();
    if reachable.is_empty() {
        UNREACHABLE
    } else {
        round2(reachable.iter().sum::<f64>() / reachable.len() as f64)
    }
}
