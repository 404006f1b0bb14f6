//! Command line interface of the check binaries.
//!
//! `-h` selects the host name as in the MySQL client tools, so help is only available as `--help`.

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;

use crate::config::{self, CheckOptions};
use crate::error::Error;

static VERSION: &'static str = env!("CARGO_PKG_VERSION");

/// Options understood by both checks.
pub fn base_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .version(VERSION)
        .about(about)
        .disable_help_flag(true)
        .arg(Arg::new("help")
            .long("help")
            .action(ArgAction::Help)
            .help("Prints help"))
        .arg(Arg::new("user")
            .short('u')
            .long("user")
            .value_name("USER")
            .allow_hyphen_values(true)
            .default_value(config::DEFAULT_USER)
            .help("MySQL User"))
        .arg(Arg::new("password")
            .short('p')
            .long("password")
            .value_name("PASS")
            .allow_hyphen_values(true)
            .help("MySQL Password"))
        .arg(Arg::new("hostname")
            .short('h')
            .long("hostname")
            .value_name("HOST")
            .default_value(config::DEFAULT_HOSTNAME)
            .help("Hostname to login to"))
        .arg(Arg::new("port")
            .short('P')
            .long("port")
            .value_name("PORT")
            .default_value(config::DEFAULT_PORT)
            .help("Port to connect to"))
        .arg(Arg::new("socket")
            .short('s')
            .long("socket")
            .value_name("SOCKET")
            .help("Socket to use"))
        .arg(Arg::new("database")
            .short('d')
            .long("database")
            .value_name("NAME")
            .help("Database to select"))
        .arg(Arg::new("ini")
            .short('i')
            .long("ini")
            .value_name("VALUE")
            .help("My.cnf style ini file with credentials; overrides command line options"))
        .arg(Arg::new("ini-section")
            .long("ini-section")
            .value_name("SECTION")
            .default_value(config::DEFAULT_INI_SECTION)
            .help("Section of the ini file to read"))
}

pub fn cluster_size_command() -> Command {
    base_command("check-percona-cluster-size",
                 "Checks the number of servers in the Percona cluster")
        .arg(Arg::new("expected")
            .short('e')
            .long("expected")
            .value_name("NUMBER")
            .default_value(config::DEFAULT_EXPECTED)
            .help("Number of servers expected in the cluster"))
}

pub fn wsrep_ready_command() -> Command {
    base_command("check-wsrep-ready", "Checks the wsrep_ready status of the cluster")
}

/// Parses `args`; `--help` and `--version` print and exit the process.
pub fn parse_args<I, T>(command: Command, args: I) -> Result<CheckOptions, Error>
    where I: IntoIterator<Item = T>, T: Into<OsString> + Clone
{
    use clap::error::ErrorKind;

    match command.try_get_matches_from(args) {
        Ok(matches) => Ok(options_from_matches(&matches)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let rendered = err.to_string();
                let first_line = rendered.lines().next().unwrap_or("invalid arguments");
                Err(Error::Usage(first_line.trim().to_string()))
            }
        },
    }
}

fn options_from_matches(matches: &ArgMatches) -> CheckOptions {
    let defaults = CheckOptions::default();
    // Not every command defines every argument, e.g. `expected`.
    let value = |id: &str| -> Option<String> {
        matches.try_get_one::<String>(id).ok().and_then(|v| v.cloned())
    };

    CheckOptions {
        hostname: value("hostname").unwrap_or(defaults.hostname),
        user: value("user").unwrap_or(defaults.user),
        password: value("password"),
        socket: value("socket"),
        port: value("port").unwrap_or(defaults.port),
        database: value("database"),
        expected: value("expected"),
        ini: value("ini").map(|path| path.into()),
        ini_section: value("ini-section").unwrap_or(defaults.ini_section),
    }
}
