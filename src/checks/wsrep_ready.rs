use crate::check::{Check, CheckResult};
use crate::error::Error;

pub static NAME: &'static str = "CheckWsrepReady";

static VARIABLE: &'static str = "wsrep_ready";
static STATEMENT: &'static str = "SHOW STATUS LIKE 'wsrep_ready'";
static READY: &'static str = "ON";

/// Checks that the node reports itself ready to accept queries.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WsrepReadyCheck;

impl Check for WsrepReadyCheck {
    fn variable(&self) -> &str {
        VARIABLE
    }

    fn statement(&self) -> &str {
        STATEMENT
    }

    fn evaluate(&self, value: &str) -> Result<CheckResult, Error> {
        // Exact match; neither case nor whitespace is normalized.
        if value == READY {
            Ok(CheckResult::ok("Cluster is OK!"))
        } else {
            Ok(CheckResult::critical(format!("WSREP Ready is not ON. Is {}", value)))
        }
    }
}
