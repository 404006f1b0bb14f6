use crate::check::{Check, CheckResult};
use crate::config::CheckConfig;
use crate::error::Error;

pub static NAME: &'static str = "CheckPerconaClusterSize";

static VARIABLE: &'static str = "wsrep_cluster_size";
static STATEMENT: &'static str = "SHOW GLOBAL STATUS LIKE 'wsrep_cluster_size'";

/// Checks that the number of nodes in the cluster equals the expected number of nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSizeCheck {
    expected: u32,
}

impl ClusterSizeCheck {
    pub fn new(expected: u32) -> ClusterSizeCheck {
        ClusterSizeCheck { expected: expected }
    }

    /// Expects a single node unless configured otherwise.
    pub fn from_config(config: &CheckConfig) -> ClusterSizeCheck {
        ClusterSizeCheck::new(config.expected.unwrap_or(1))
    }
}

impl Check for ClusterSizeCheck {
    fn variable(&self) -> &str {
        VARIABLE
    }

    fn statement(&self) -> &str {
        STATEMENT
    }

    fn evaluate(&self, value: &str) -> Result<CheckResult, Error> {
        let cluster_size = value.parse::<u32>().map_err(|_| Error::InvalidStatus {
            name: VARIABLE.to_string(),
            value: value.to_string(),
        })?;

        if cluster_size == self.expected {
            Ok(CheckResult::ok(format!("Expected to find {} nodes and found those {}", self.expected, cluster_size)))
        } else {
            Ok(CheckResult::critical(format!("Expected to find {} nodes, found {}", self.expected, cluster_size)))
        }
    }
}
