//! Severities, check results and the runner shared by all checks.
//!
//! A check run moves strictly from *not connected* over *connected* and *queried* to *reported*.
//! Any failure on the way short-cuts to *reported* with severity CRITICAL; the connection is
//! closed iff it has been established.

use crate::config::CheckConfig;
use crate::connection::{Connector, Session, StatusConnection};
use crate::error::Error;

/// Severity of a check result; exit codes and labels follow the Nagios plugin convention.
pub use nagiosplugin::ServiceState as Status;

#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub status: Status,
    pub message: String,
}

impl CheckResult {
    pub fn new<T: Into<String>>(status: Status, message: T) -> Self {
        CheckResult { status: status, message: message.into() }
    }

    pub fn ok<T: Into<String>>(message: T) -> Self {
        CheckResult::new(Status::Ok, message)
    }

    pub fn critical<T: Into<String>>(message: T) -> Self {
        CheckResult::new(Status::Critical, message)
    }

    pub fn unknown<T: Into<String>>(message: T) -> Self {
        CheckResult::new(Status::Unknown, message)
    }

    /// Renders the single output line, e.g. `CheckWsrepReady OK: Cluster is OK!`.
    pub fn output(&self, check_name: &str) -> String {
        format!("{} {}: {}", check_name, self.status, self.message)
    }
}

pub trait Check {
    /// Name of the status variable, e.g. `wsrep_ready`.
    fn variable(&self) -> &str;
    /// Statement returning the variable as a `Variable_name`, `Value` row.
    fn statement(&self) -> &str;
    /// Compares the observed value against the expectation.
    fn evaluate(&self, value: &str) -> Result<CheckResult, Error>;
}

/// Runs `check` against the server described by `config`. Never fails: errors become a CRITICAL
/// result carrying the error's message.
pub fn run<K, C>(check: &K, connector: &C, config: &CheckConfig) -> CheckResult
    where K: Check, C: Connector
{
    match query_and_evaluate(check, connector, config) {
        Ok(result) => {
            info!("Check of '{}' on {} finished with {}", check.variable(), config.id(), result.status);
            result
        }
        Err(err) => {
            error!("Check of '{}' on {} failed, because {}", check.variable(), config.id(), err);
            CheckResult::critical(format!("Percona MySQL check failed: {}", err))
        }
    }
}

fn query_and_evaluate<K, C>(check: &K, connector: &C, config: &CheckConfig) -> Result<CheckResult, Error>
    where K: Check, C: Connector
{
    let mut session: Session<C::Connection> = Session::open(connector, config)?;
    let value = session.status_value(check.statement())?
        .ok_or_else(|| Error::MissingStatus(check.variable().to_string()))?;
    debug!("{} = {}", check.variable(), value);

    check.evaluate(&value)
}
