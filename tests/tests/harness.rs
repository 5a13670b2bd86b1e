mod utils;
#[allow(unused)]
use utils::*;

use paymeter::prelude::*;
use reqwest::Client;
use std::sync::OnceLock;

const PORT: u16 = 3010;

static CLIENT: OnceLock<Client> = OnceLock::new();

fn client() -> &'static Client {
    CLIENT.get_or_init(Client::new)
}

async fn timed_get(url: String) -> Result<(), OperationError> {
    let res = client().get(&url).send().await?;
    match OperationError::from_status(res.status().as_u16()) {
        None => Ok(()),
        Some(err) => Err(err),
    }
}

#[tokio::test]
async fn benchmark_against_live_endpoint() {
    let base = init(PORT).await;

    let url = format!("{base}/delay/ms/1");
    let mut harness = Harness::with_progress(Box::new(NoopProgress));
    let result = harness
        .run("delay-1ms", 20, || timed_get(url.clone()))
        .await
        .unwrap();

    assert_eq!(result.iterations, 20);
    assert_eq!(result.success, 20);
    assert_eq!(result.errors, 0);
    assert_eq!(result.error_rate, 0.);
    assert!(result.min_time_ms > 0.);
    assert!(result.min_time_ms <= result.p50_ms);
    assert!(result.p50_ms <= result.p95_ms);
    assert!(result.p95_ms <= result.p99_ms);
    assert!(result.p99_ms <= result.max_time_ms);
    assert!(result.ops_per_second > 0);
}

#[tokio::test]
async fn payment_required_counts_as_success() {
    let base = init(PORT).await;

    let url = format!("{base}/paid");
    let mut harness = Harness::with_progress(Box::new(NoopProgress));
    let result = harness
        .run("paid", 5, || timed_get(url.clone()))
        .await
        .unwrap();

    // The 402 route is the protocol working as intended.
    assert_eq!(result.success, 5);
    assert_eq!(result.errors, 0);
}

#[tokio::test]
async fn server_errors_are_measured_not_raised() {
    let base = init(PORT).await;

    let url = format!("{base}/broken");
    let mut harness = Harness::with_progress(Box::new(NoopProgress));
    let result = harness
        .run("broken", 5, || timed_get(url.clone()))
        .await
        .unwrap();

    assert_eq!(result.errors, 5);
    assert_eq!(result.error_rate, 100.);
    // Failed trials still carry their elapsed time.
    assert!(result.avg_time_ms > 0.);
}

#[tokio::test]
async fn batch_benchmark_groups_endpoints() {
    let base = init(PORT).await;

    let endpoints: Vec<String> = (0..12).map(|_| format!("{base}/delay/ms/1")).collect();
    let mut harness = Harness::with_progress(Box::new(NoopProgress));
    let result = harness
        .run_batch("batch-delay", &endpoints, 5, timed_get)
        .await
        .unwrap();

    // 12 endpoints at concurrency 5: groups of 5/5/2, three trials.
    assert_eq!(result.iterations, 3);
    assert_eq!(result.success, 3);
    assert_eq!(result.errors, 0);
}
