//! check-wsrep-ready: Checks the wsrep_ready status of a Percona / Galera cluster node.

extern crate galera_checks;

use std::env;

use galera_checks::checks::{wsrep_ready, WsrepReadyCheck};
use galera_checks::cli;
use galera_checks::connection::MysqlConnector;
use galera_checks::plugin;

fn main() {
    plugin::init(wsrep_ready::NAME);

    let result = plugin::execute(cli::wsrep_ready_command(),
                                 env::args_os(),
                                 |_| WsrepReadyCheck,
                                 &MysqlConnector);

    plugin::report(wsrep_ready::NAME, &result);
}
