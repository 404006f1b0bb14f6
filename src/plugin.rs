//! Glue between the check binaries and the library: parse, resolve, run, report, exit.

use clap::Command;
use std::ffi::OsString;
use std::panic;
use std::process;

use crate::check::{self, Check, CheckResult};
use crate::cli;
use crate::config::CheckConfig;
use crate::connection::Connector;
use crate::logging;

/// Prepares the process for running check `name`: logging and a panic hook reporting UNKNOWN.
pub fn init(name: &'static str) {
    if logging::init_logger().is_err() {
        eprintln!("Could not initialize logger");
    }

    panic::set_hook(Box::new(move |info| {
        let reason = info.payload().downcast_ref::<&str>().map(|s| s.to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown reason".to_string());
        let location = info.location()
            .map(|loc| format!(" at {}", loc))
            .unwrap_or_default();
        let result = CheckResult::unknown(format!("Check failed to run: {}{}", reason, location));
        println!("{}", result.output(name));
        process::exit(result.status.exit_code());
    }));
}

/// Runs one check invocation and returns its result. Usage and configuration errors are UNKNOWN;
/// the database is only contacted if the configuration is valid.
pub fn execute<I, T, K, F, C>(command: Command, args: I, build_check: F, connector: &C) -> CheckResult
    where I: IntoIterator<Item = T>,
          T: Into<OsString> + Clone,
          K: Check,
          F: FnOnce(&CheckConfig) -> K,
          C: Connector
{
    let config = match cli::parse_args(command, args).and_then(|options| options.resolve()) {
        Ok(config) => config,
        Err(err) => {
            error!("Failed to parse configuration, because {}", err);
            if err.is_config_error() {
                return CheckResult::unknown(format!("Invalid configuration: {}", err));
            }
            return CheckResult::critical(format!("Percona MySQL check failed: {}", err));
        }
    };
    debug!("config = {:?}", config);

    let check = build_check(&config);
    check::run(&check, connector, &config)
}

/// Prints the result line for check `name` and terminates with the matching exit code.
pub fn report(name: &str, result: &CheckResult) -> ! {
    println!("{}", result.output(name));
    process::exit(result.status.exit_code());
}
