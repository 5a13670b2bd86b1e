//! Benchmark orchestration: warmup, timed trials, and batch fan-out.

use crate::data::{BenchmarkResult, Samples};
use crate::error::{HarnessError, OperationError};
use crate::stats;
use futures::future::join_all;
use std::future::Future;
use std::time::Instant;
#[allow(unused_imports)]
use tracing::{debug, info, instrument, trace, warn};

/// Iteration cap for batch benchmarks. Bounds total wall-clock time no matter
/// how many endpoints are supplied.
const MAX_BATCH_ITERATIONS: usize = 10;

/// Injected progress observer. Called once per completed trial, outside the
/// timed window.
pub trait Progress: Send {
    fn on_progress(&mut self, completed: u32, total: u32);
}

/// Default observer: emits a status line every `every` completed trials and
/// on the final one.
pub struct TracingProgress {
    every: u32,
}

impl TracingProgress {
    pub fn new(every: u32) -> Self {
        Self {
            every: every.max(1),
        }
    }
}

impl Default for TracingProgress {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Progress for TracingProgress {
    fn on_progress(&mut self, completed: u32, total: u32) {
        if completed % self.every == 0 || completed == total {
            info!("completed {completed}/{total} trials");
        }
    }
}

pub struct NoopProgress;

impl Progress for NoopProgress {
    fn on_progress(&mut self, _completed: u32, _total: u32) {}
}

/// Runs caller-supplied operations and measures them.
///
/// The harness treats operations as opaque: it records elapsed time and
/// whether the call returned `Ok` or `Err`, nothing more. Policy decisions
/// such as treating HTTP 402 as success belong in the operation callable
/// (see [`OperationError::from_status`]).
pub struct Harness {
    progress: Box<dyn Progress>,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

impl Harness {
    pub fn new() -> Self {
        Self {
            progress: Box::new(TracingProgress::default()),
        }
    }

    pub fn with_progress(progress: Box<dyn Progress>) -> Self {
        Self { progress }
    }

    /// Benchmark a single operation over `iterations` strictly sequential
    /// trials, preceded by one untimed warmup call.
    ///
    /// Every trial contributes exactly one sample, failures included; a trial
    /// failure is counted, never propagated. Only `iterations == 0` is an
    /// error.
    #[instrument(name = "benchmark", skip_all, fields(name = name))]
    pub async fn run<T, F>(
        &mut self,
        name: &str,
        iterations: u32,
        op: T,
    ) -> Result<BenchmarkResult, HarnessError>
    where
        T: Fn() -> F,
        F: Future<Output = Result<(), OperationError>>,
    {
        if iterations == 0 {
            return Err(HarnessError::ZeroIterations);
        }

        info!("running {iterations} trials");

        // Warmup is observed but never fatal.
        if let Err(err) = op().await {
            warn!("warmup call failed: {err}");
        }

        let mut samples = Samples::with_capacity(iterations as usize);
        let mut success = 0u32;
        let mut errors = 0u32;

        let run_start = Instant::now();
        for i in 0..iterations {
            let start = Instant::now();
            let outcome = op().await;
            samples.push(start.elapsed());

            match outcome {
                Ok(()) => success += 1,
                Err(err) => {
                    errors += 1;
                    debug!("trial {i} failed: {err}");
                }
            }
            self.progress.on_progress(i + 1, iterations);
        }
        let total_time = run_start.elapsed();

        stats::summarize(name, iterations, total_time, &samples, success, errors)
    }

    /// Benchmark concurrent batches: endpoints are partitioned into groups of
    /// `concurrency`, and each trial times one group's full fan-out.
    ///
    /// Group members settle independently; a failed member never cancels its
    /// siblings, but marks the trial as an error. At most
    /// `min(10, groups)` trials run.
    #[instrument(name = "batch_benchmark", skip_all, fields(name = name))]
    pub async fn run_batch<T, F>(
        &mut self,
        name: &str,
        endpoints: &[String],
        concurrency: usize,
        op: T,
    ) -> Result<BenchmarkResult, HarnessError>
    where
        T: Fn(String) -> F,
        F: Future<Output = Result<(), OperationError>>,
    {
        if endpoints.is_empty() {
            return Err(HarnessError::NoEndpoints);
        }
        if concurrency == 0 {
            return Err(HarnessError::ZeroConcurrency);
        }

        let groups: Vec<&[String]> = endpoints.chunks(concurrency).collect();
        let iterations = groups.len().min(MAX_BATCH_ITERATIONS);
        info!(
            "{} endpoints in {} groups of up to {concurrency}; running {iterations} trials",
            endpoints.len(),
            groups.len()
        );

        let mut samples = Samples::with_capacity(iterations);
        let mut success = 0u32;
        let mut errors = 0u32;

        let run_start = Instant::now();
        for (i, group) in groups.iter().take(iterations).enumerate() {
            let start = Instant::now();
            let outcomes = join_all(group.iter().cloned().map(&op)).await;
            samples.push(start.elapsed());

            let failed = outcomes.iter().filter(|o| o.is_err()).count();
            if failed == 0 {
                success += 1;
            } else {
                errors += 1;
                debug!("trial {i}: {failed}/{} group members failed", group.len());
            }
            self.progress.on_progress(i as u32 + 1, iterations as u32);
        }
        let total_time = run_start.elapsed();

        stats::summarize(name, iterations as u32, total_time, &samples, success, errors)
    }
}
