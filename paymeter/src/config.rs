use serde::Deserialize;

/// Endpoint lists for network analysis.
///
/// Constructed once by the host and passed by reference; the library performs
/// no ambient environment lookups. Hosts that load it from a file can use the
/// `Deserialize` impl.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkConfig {
    #[serde(default)]
    pub facilitators: Vec<String>,
    #[serde(default)]
    pub rpc_nodes: Vec<String>,
}

impl NetworkConfig {
    pub fn new(facilitators: Vec<String>, rpc_nodes: Vec<String>) -> Self {
        Self {
            facilitators,
            rpc_nodes,
        }
    }

    /// Total endpoints across both classes; equals the round trips one
    /// `analyze_network()` call will attempt.
    pub fn endpoint_count(&self) -> usize {
        self.facilitators.len() + self.rpc_nodes.len()
    }
}
