//! Database layer: connection handling, migrations, entities, introspection

use crate::config::DatabaseConfig;
use crate::error::{MigratorError, Result};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{info, warn};

pub mod entities;
pub mod migration;
pub mod report;

pub use report::ColumnInfo;

/// Connect to the configured database.
///
/// One exclusively-owned connection per migrator invocation; nothing is
/// pooled or reused across runs.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
	let mut opt = ConnectOptions::new(config.connection_url());
	opt.max_connections(1)
		.connect_timeout(Duration::from_secs(8))
		.sqlx_logging(false);

	let conn = Database::connect(opt)
		.await
		.map_err(MigratorError::Connection)?;

	info!(database = %config.display_target(), "connected to database");

	Ok(conn)
}

/// Run the full migration: connect, apply schema, report, disconnect.
///
/// Safe to invoke repeatedly; table DDL uses `IF NOT EXISTS` and applied
/// migrations are tracked, so reruns perform no DDL. On success the returned
/// columns describe the resulting `uploads` table for operator verification.
///
/// The connection is closed on every exit path. Any connection, DDL, or
/// introspection failure aborts the remaining steps and propagates after
/// cleanup; no partial retry of individual statements.
pub async fn run(config: &DatabaseConfig) -> Result<Vec<ColumnInfo>> {
	let db = connect(config).await?;

	let outcome = migrate_and_report(&db).await;

	if let Err(err) = db.close().await {
		warn!("failed to close database connection: {err}");
	}

	outcome
}

async fn migrate_and_report(db: &DatabaseConnection) -> Result<Vec<ColumnInfo>> {
	migration::Migrator::up(db, None)
		.await
		.map_err(MigratorError::Ddl)?;
	info!("upload schema migrations applied");

	report::describe_table(db, "uploads").await
}
