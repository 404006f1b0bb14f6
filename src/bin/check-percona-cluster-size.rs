//! check-percona-cluster-size: Checks the number of servers in a Percona / Galera cluster.

extern crate galera_checks;

use std::env;

use galera_checks::checks::{cluster_size, ClusterSizeCheck};
use galera_checks::cli;
use galera_checks::connection::MysqlConnector;
use galera_checks::plugin;

fn main() {
    plugin::init(cluster_size::NAME);

    let result = plugin::execute(cli::cluster_size_command(),
                                 env::args_os(),
                                 ClusterSizeCheck::from_config,
                                 &MysqlConnector);

    plugin::report(cluster_size::NAME, &result);
}
