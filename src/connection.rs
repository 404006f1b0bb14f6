use mysql as my;
use mysql::prelude::Queryable;
use std::ops::{Deref, DerefMut};

use crate::config::CheckConfig;
use crate::error::Error;

/// Column of `SHOW STATUS` carrying the variable's value.
static VALUE_COLUMN: &'static str = "Value";

/// An established connection able to answer a single status statement.
pub trait StatusConnection {
    /// Runs `statement` and returns the `Value` column of the first row, if any.
    fn status_value(&mut self, statement: &str) -> Result<Option<String>, Error>;
    fn close(&mut self);
}

/// Opens connections; the seam between the checks and the database driver.
pub trait Connector {
    type Connection: StatusConnection;

    fn connect(&self, config: &CheckConfig) -> Result<Self::Connection, Error>;
}

/// Holds a connection for the duration of one check and closes it exactly once when dropped.
pub struct Session<C: StatusConnection> {
    connection: C,
}

impl<C: StatusConnection> Session<C> {
    /// Only yields a session if the connection has been established, so there is nothing to
    /// close on connect errors.
    pub fn open<K>(connector: &K, config: &CheckConfig) -> Result<Session<C>, Error>
        where K: Connector<Connection = C>
    {
        let connection = connector.connect(config)?;
        debug!("Connected to {}", config.id());
        Ok(Session { connection: connection })
    }
}

impl<C: StatusConnection> Deref for Session<C> {
    type Target = C;

    fn deref(&self) -> &C {
        &self.connection
    }
}

impl<C: StatusConnection> DerefMut for Session<C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut self.connection
    }
}

impl<C: StatusConnection> Drop for Session<C> {
    fn drop(&mut self) {
        self.connection.close();
    }
}

/// Connects to MySQL using the `mysql` driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct MysqlConnector;

impl Connector for MysqlConnector {
    type Connection = MysqlConnection;

    fn connect(&self, config: &CheckConfig) -> Result<MysqlConnection, Error> {
        let opts = my::Opts::from(config);
        match my::Conn::new(opts) {
            Ok(conn) => Ok(MysqlConnection { conn: Some(conn) }),
            Err(err) => {
                warn!("Failed to connect to {}, because {}", config.id(), &err);
                Err(Error::Mysql(err))
            }
        }
    }
}

impl<'a> From<&'a CheckConfig> for my::Opts {
    fn from(config: &'a CheckConfig) -> Self {
        // Only prefer the socket if one has been configured; otherwise stick to TCP.
        let optsbuilder = my::OptsBuilder::new()
            .prefer_socket(config.socket.is_some())
            .ip_or_hostname(Some(config.hostname.clone()))
            .tcp_port(config.port)
            .socket(config.socket.clone())
            .user(Some(config.user.clone()))
            .pass(config.password.clone())
            .db_name(config.database.clone());

        my::Opts::from(optsbuilder)
    }
}

pub struct MysqlConnection {
    conn: Option<my::Conn>,
}

impl StatusConnection for MysqlConnection {
    fn status_value(&mut self, statement: &str) -> Result<Option<String>, Error> {
        let conn = match self.conn.as_mut() {
            Some(conn) => conn,
            None => return Err(Error::Closed),
        };
        let row: Option<my::Row> = conn.query_first(statement).map_err(|err| {
            warn!("Failed to query '{}', because {}", statement, &err);
            Error::Mysql(err)
        })?;
        trace!("row = {:?}", row);

        match row.and_then(|row| row.get_opt::<String, _>(VALUE_COLUMN)) {
            Some(Ok(value)) => Ok(Some(value)),
            Some(Err(err)) => Err(Error::Mysql(my::Error::FromValueError(err.0))),
            None => Ok(None),
        }
    }

    fn close(&mut self) {
        if let Some(conn) = self.conn.take() {
            debug!("Closing connection {}", conn.connection_id());
            drop(conn);
        }
    }
}
