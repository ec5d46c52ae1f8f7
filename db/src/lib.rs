#[macro_use]
extern crate diesel;
#[macro_use]
extern crate log;

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use errors::Error;

pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;
pub type Connection = PooledConnection<ConnectionManager<SqliteConnection>>;
pub mod models;
pub mod schema;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// How long a connection waits on a locked database file before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
struct ConnectionOptions {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

pub fn get_conn(pool: &SqlitePool) -> Result<Connection, Error> {
    pool.get().map_err(|err| err.into())
}

/// Opens (creating if needed) the database file at `database_url` and
/// brings its schema up to date.
pub fn new_pool(database_url: &str) -> Result<SqlitePool, Error> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    let pool = Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout: BUSY_TIMEOUT,
        }))
        .build(manager)?;

    let mut conn = get_conn(&pool)?;
    run_migrations(&mut conn)?;

    Ok(pool)
}

pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), Error> {
    let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|err| {
        error!("Failed to run migrations - {}", err);
        Error::InternalServerError(err.to_string())
    })?;

    for version in applied {
        info!("Applied migration {}", version);
    }

    Ok(())
}
