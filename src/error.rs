//! Unified error handling for the migrator

use thiserror::Error;

/// Main error type for migrator operations.
///
/// Every variant aborts the remaining migration steps; there is no local
/// recovery or retry. The connection is still closed before the error reaches
/// the caller.
#[derive(Error, Debug)]
pub enum MigratorError {
	#[error("database connection failed: {0}")]
	Connection(#[source] sea_orm::DbErr),

	#[error("schema migration failed: {0}")]
	Ddl(#[source] sea_orm::DbErr),

	#[error("schema introspection failed: {0}")]
	Introspection(#[source] sea_orm::DbErr),
}

/// Result type alias for migrator operations
pub type Result<T> = std::result::Result<T, MigratorError>;
