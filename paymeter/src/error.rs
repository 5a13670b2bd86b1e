use std::fmt;
use thiserror::Error;

/// Errors raised for structurally invalid invocations.
///
/// Trial failures never surface here; they are counted into the result's
/// `errors` field instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HarnessError {
    #[error("statistics require at least one recorded sample")]
    EmptySamples,
    #[error("iteration count must be non-zero")]
    ZeroIterations,
    #[error("batch benchmark requires at least one endpoint")]
    NoEndpoints,
    #[error("batch concurrency must be non-zero")]
    ZeroConcurrency,
}

/// Failure class assigned where the underlying operation is invoked, so the
/// harness only ever sees a structured reason rather than raw error values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Timeout,
    Http(u16),
    Rpc,
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Transport => write!(f, "transport"),
            ErrorKind::Timeout => write!(f, "timeout"),
            ErrorKind::Http(code) => write!(f, "http {code}"),
            ErrorKind::Rpc => write!(f, "rpc"),
            ErrorKind::Other => write!(f, "other"),
        }
    }
}

/// A failed trial outcome as reported by an operation callable.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {message}")]
pub struct OperationError {
    pub kind: ErrorKind,
    pub message: String,
}

impl OperationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Other, message)
    }

    /// Classify an HTTP status at the operation boundary.
    ///
    /// Success codes map to `None`, as does 402: a payment-required response
    /// is the protocol working as intended and counts as a successful trial.
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 | 402 => None,
            code => Some(Self::new(
                ErrorKind::Http(code),
                format!("unexpected status {code}"),
            )),
        }
    }
}

impl From<reqwest::Error> for OperationError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if let Some(status) = err.status() {
            ErrorKind::Http(status.as_u16())
        } else if err.is_connect() || err.is_request() {
            ErrorKind::Transport
        } else {
            ErrorKind::Other
        };
        Self::new(kind, err.to_string())
    }
}
