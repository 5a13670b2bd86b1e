//! Single round-trip latency probes against facilitator and RPC endpoints.

use crate::data::UNREACHABLE;
use reqwest::Client;
use serde_json::json;
use std::time::{Duration, Instant};
#[allow(unused_imports)]
use tracing::{debug, trace, warn};

const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// One probe per call, one round trip per probe. Transport and HTTP failures
/// are folded into the [`UNREACHABLE`] sentinel; a probe never returns an
/// error to the caller.
#[derive(Debug, Clone, Default)]
pub struct Prober {
    client: Client,
}

impl Prober {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(PROBE_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }

    /// Probe with a caller-supplied client (custom timeouts, proxies).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Round-trip a facilitator health request. Returns elapsed milliseconds
    /// or [`UNREACHABLE`].
    pub async fn probe_facilitator(&self, url: &str) -> f64 {
        let target = format!("{}/health", url.trim_end_matches('/'));
        let start = Instant::now();
        match self.client.get(&target).send().await {
            Ok(res) if res.status().is_success() => elapsed_ms(start),
            Ok(res) => {
                debug!("facilitator {url} answered {}", res.status());
                UNREACHABLE
            }
            Err(err) => {
                debug!("facilitator {url} unreachable: {err}");
                UNREACHABLE
            }
        }
    }

    /// Round-trip an RPC node with a canned `eth_blockNumber` request.
    /// Returns elapsed milliseconds or [`UNREACHABLE`].
    pub async fn probe_rpc(&self, url: &str) -> f64 {
        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "eth_blockNumber",
            "params": [],
        });

        let start = Instant::now();
        match self.client.post(url).json(&payload).send().await {
            Ok(res) if res.status().is_success() => elapsed_ms(start),
            Ok(res) => {
                debug!("rpc {url} answered {}", res.status());
                UNREACHABLE
            }
            Err(err) => {
                debug!("rpc {url} unreachable: {err}");
                UNREACHABLE
            }
        }
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1_000.
}
