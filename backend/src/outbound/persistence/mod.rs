//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories here are thin translators between Diesel row structs and
//! domain types; no business logic lives in this layer. Connections come
//! from a `bb8` pool via `diesel-async`. The [`memory`] module offers
//! drop-in replacements for running without a database.

mod diesel_memo_repository;
mod diesel_user_repository;
pub mod memory;
mod models;
mod pool;
mod schema;

pub use diesel_memo_repository::DieselMemoRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};

use diesel::Connection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying schema migrations at startup.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("failed to connect for migrations: {0}")]
    Connect(#[from] diesel::ConnectionError),

    #[error("failed to apply migrations: {0}")]
    Apply(String),
}

/// Apply any pending migrations over a short-lived synchronous connection.
///
/// Runs before the async pool is built, so startup either has the full
/// schema or fails loudly.
pub fn run_migrations(database_url: &str) -> Result<(), MigrationError> {
    let mut conn = diesel::PgConnection::establish(database_url)?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply(err.to_string()))?;
    Ok(())
}
