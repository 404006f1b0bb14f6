//! The Galera checks; see http://galeracluster.com/documentation-webpages/monitoringthecluster.html

pub mod cluster_size;
pub mod wsrep_ready;

pub use self::cluster_size::ClusterSizeCheck;
pub use self::wsrep_ready::WsrepReadyCheck;
