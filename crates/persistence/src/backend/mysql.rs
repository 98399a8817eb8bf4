// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! MySQL/MariaDB-specific backend utilities.
//!
//! The MySQL backend exists for deployments that want a networked
//! database; it is validated through the `#[ignore]`d tests that
//! `cargo xtask test-mariadb` runs against a Docker container.
//!
//! The embedded `migrations_mysql/` set must stay semantically identical
//! to the `SQLite` set in `migrations/`: same tables, same columns, same
//! constraints and indexes, backend-appropriate syntax only.
//! `cargo xtask verify-migrations` checks this.

use diesel::dsl::sql;
use diesel::sql_types::{BigInt, Integer};
use diesel::{Connection, MysqlConnection, QueryableByName, RunQueryDsl};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::error::PersistenceError;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations_mysql");

#[derive(QueryableByName)]
struct ForeignKeyChecks {
    #[diesel(sql_type = Integer)]
    fk_checks: i32,
}

/// Fetch the auto-increment ID assigned by the most recent insert via
/// `LAST_INSERT_ID()`.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_last_insert_rowid(conn: &mut MysqlConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("LAST_INSERT_ID()")).get_result(conn)?)
}

/// Connect to a `MySQL` database and run pending migrations.
///
/// # Errors
///
/// Returns an error if connection or migration fails.
pub fn initialize_database(database_url: &str) -> Result<MysqlConnection, PersistenceError> {
    info!("Initializing MySQL database at: {}", database_url);

    let mut conn = MysqlConnection::establish(database_url)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))?;

    info!("Running MySQL database migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    Ok(conn)
}

/// Verify that the `foreign_key_checks` session variable is enabled.
///
/// `InnoDB` enforces foreign keys by default, but the variable can be
/// switched off per session, which would let orphaned reservations
/// through.
///
/// # Errors
///
/// Returns an error if foreign key enforcement is not enabled.
pub fn verify_foreign_key_enforcement(conn: &mut MysqlConnection) -> Result<(), PersistenceError> {
    let checks: ForeignKeyChecks = diesel::sql_query("SELECT @@foreign_key_checks AS fk_checks")
        .get_result(conn)
        .map_err(|e| {
            PersistenceError::QueryFailed(format!("Failed to verify foreign key enforcement: {e}"))
        })?;

    if checks.fk_checks == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    info!("MySQL foreign key enforcement is enabled");
    Ok(())
}
