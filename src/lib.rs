use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::result::{ConnectionError, ConnectionResult};

pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod store;
pub mod validation;
pub mod views;

pub const DEFAULT_DATABASE_URL: &str = "menuboard.db";
pub const DEFAULT_PORT: u16 = 3000;

/// Opens a SQLite connection with the pragmas this app relies on:
/// `foreign_keys` so cascading deletes fire, `busy_timeout` so concurrent
/// writers wait on the file lock instead of erroring out.
pub fn establish_connection(database_url: &str) -> ConnectionResult<SqliteConnection> {
    let mut conn = SqliteConnection::establish(database_url)?;
    conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 2000;")
        .map_err(ConnectionError::CouldntSetupConfiguration)?;
    Ok(conn)
}
