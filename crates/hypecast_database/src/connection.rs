//! Database connection utilities.

use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use hypecast_error::{DatabaseError, DatabaseErrorKind, HypecastResult};

/// Shared connection pool type used by the repository.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Establish a single connection to the PostgreSQL database.
///
/// Reads the `DATABASE_URL` environment variable to determine the
/// connection string.
///
/// # Errors
///
/// Returns an error if:
/// - `DATABASE_URL` environment variable is not set
/// - Connection to the database fails
pub fn establish_connection() -> HypecastResult<PgConnection> {
    let database_url = database_url()?;
    PgConnection::establish(&database_url)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())).into())
}

/// Build an r2d2 connection pool from `DATABASE_URL`.
pub fn build_pool() -> HypecastResult<PgPool> {
    let database_url = database_url()?;
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .build(manager)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Pool(e.to_string())).into())
}

/// Run pending migrations against a connection.
pub fn run_migrations(conn: &mut PgConnection) -> HypecastResult<()> {
    use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

    const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

    conn.run_pending_migrations(MIGRATIONS)
        .map(|_| ())
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Migration(e.to_string())).into())
}

fn database_url() -> HypecastResult<String> {
    std::env::var("DATABASE_URL").map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::Connection(
            "DATABASE_URL environment variable not set".to_string(),
        ))
        .into()
    })
}
