//! SQLite storage for prescription and user records.
//!
//! Every invocation opens its own connection and drops it when the scope
//! ends; there is no pool and no sharing across calls. The database file
//! itself belongs to the main application.

pub mod insert;
pub mod model;
pub mod schema;

use std::path::Path;

use diesel::prelude::*;
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::error::{Error, Result};

/// Embedded database migrations compiled from the migrations/ directory.
///
/// The live database is created and migrated by the main application;
/// these exist to provision fresh databases for tests and local setups.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Open a connection to the database at `path`.
///
/// SQLite creates the file on first open if it does not exist.
///
/// # Errors
/// Returns an error if the path cannot be opened as a SQLite database.
pub fn open(path: &Path) -> Result<SqliteConnection> {
    let url = path.to_string_lossy();
    let mut conn =
        SqliteConnection::establish(&url).map_err(|e| Error::Connection(e.to_string()))?;
    configure_connection(&mut conn)?;
    Ok(conn)
}

/// Apply per-connection pragmas.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_connection(conn: &mut SqliteConnection) -> Result<()> {
    diesel::sql_query("PRAGMA busy_timeout=5000")
        .execute(conn)
        .map_err(|e| Error::Connection(e.to_string()))?;
    Ok(())
}

/// Run all pending migrations on an open connection.
///
/// # Errors
/// Returns an error if a migration fails.
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<()> {
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| Error::Connection(e.to_string()))?;
    Ok(())
}
