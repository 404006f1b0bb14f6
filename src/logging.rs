use chrono::Local;
use env_logger::Builder;
use log::{LevelFilter, SetLoggerError};
use std::env;
use std::io::Write;

/// Logs to stderr, leaving stdout to the check output. Only warnings and errors are shown unless
/// `RUST_LOG` says otherwise.
pub fn init_logger() -> Result<(), SetLoggerError> {
    let mut builder = Builder::new();
    builder
        .format(|buf, record| {
            writeln!(buf, "{} - {} - {} - {}:{}",
                     Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                     record.level(),
                     record.args(),
                     record.file().unwrap_or("<unknown>"),
                     record.line().unwrap_or(0),
            )
        })
        .filter(None, LevelFilter::Warn);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    builder.try_init()
}
