//! galera-checks: Sensu / Nagios compatible check plugins for Percona XtraDB / Galera clusters.
//!
//! Each check opens one connection to a cluster node, reads one `wsrep_*` status variable,
//! compares it against an expectation and reports OK, WARNING, CRITICAL or UNKNOWN.

#[macro_use]
extern crate log;

pub mod check;
pub mod checks;
pub mod cli;
pub mod config;
pub mod connection;
pub mod error;
pub mod logging;
pub mod plugin;

pub use crate::check::{Check, CheckResult, Status};
pub use crate::config::{CheckConfig, CheckOptions};
pub use crate::error::Error;
