mod utils;
#[allow(unused)]
use utils::*;

use paymeter::prelude::*;
use paymeter::report;

const PORT: u16 = 3011;

#[tokio::test]
async fn analyzer_measures_live_endpoints() {
    let base = init(PORT).await;

    let config = NetworkConfig::new(vec![base.clone()], vec![format!("{base}/rpc")]);
    let metrics = NetworkAnalyzer::new(&config).analyze_network().await;

    assert!(metrics.facilitator_reachable());
    assert!(metrics.rpc_reachable());
    assert_eq!(metrics.total_round_trips, 2);
    assert_eq!(metrics.data_transferred, 0);
}

#[tokio::test]
async fn analyzer_mixes_live_and_dead_endpoints() {
    let base = init(PORT).await;

    // One live facilitator, one dead; the dead probe is filtered out of the
    // average but still counted as a round trip.
    let config = NetworkConfig::new(
        vec![base.clone(), "http://127.0.0.1:9".to_string()],
        vec![format!("{base}/rpc")],
    );
    let metrics = NetworkAnalyzer::new(&config).analyze_network().await;

    assert!(metrics.facilitator_reachable());
    assert_eq!(metrics.total_round_trips, 3);
}

#[tokio::test]
async fn end_to_end_healthy_run_gets_the_all_clear() {
    let base = init(PORT).await;

    async fn fetch(url: String) -> Result<(), OperationError> {
        let res = reqwest::get(&url).await?;
        match OperationError::from_status(res.status().as_u16()) {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }

    let url = format!("{base}/delay/ms/1");
    let mut harness = Harness::with_progress(Box::new(NoopProgress));
    let result = harness
        .run("delay-1ms", 10, || fetch(url.clone()))
        .await
        .unwrap();

    let config = NetworkConfig::new(vec![base.clone()], vec![format!("{base}/rpc")]);
    let metrics = NetworkAnalyzer::new(&config).analyze_network().await;

    let recs = recommend(&[result.clone()], &metrics);
    assert_eq!(recs.len(), 1);
    assert!(recs[0].contains("healthy"), "unexpected: {recs:?}");

    // Presentation smoke check.
    let table = report::render_results(&[result]);
    assert!(table.contains("delay-1ms"));
    let text = report::render_network(&metrics);
    assert!(text.contains("Round trips:"));
}
