#![doc = include_str!("../README.md")]

pub mod analyzer;
pub mod config;
pub mod data;
pub mod error;
pub mod harness;
pub mod probe;
pub mod recommend;
pub mod report;
pub mod stats;

pub use analyzer::NetworkAnalyzer;
pub use config::NetworkConfig;
pub use data::{BenchmarkResult, NetworkMetrics, Samples, UNREACHABLE};
pub use error::{ErrorKind, HarnessError, OperationError};
pub use harness::{Harness, Progress};
pub use probe::Prober;
pub use recommend::recommend;

pub mod prelude {
    pub use crate::analyzer::NetworkAnalyzer;
    pub use crate::config::NetworkConfig;
    pub use crate::data::{BenchmarkResult, NetworkMetrics, UNREACHABLE};
    pub use crate::error::{ErrorKind, HarnessError, OperationError};
    pub use crate::harness::{Harness, NoopProgress, Progress, TracingProgress};
    pub use crate::probe::Prober;
    pub use crate::recommend::recommend;
}
