//! Upload subsystem migrations
//!
//! Applied strictly in order: the uploads table first, then the two
//! append-only event logs that reference it. The `businesses` owner table
//! belongs to the core application schema and is expected to pre-exist.

use sea_orm_migration::prelude::*;

mod m20250601_000001_create_uploads_table;
mod m20250601_000002_create_upload_views_table;
mod m20250601_000003_create_upload_downloads_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
	fn migrations() -> Vec<Box<dyn MigrationTrait>> {
		vec![
			Box::new(m20250601_000001_create_uploads_table::Migration),
			Box::new(m20250601_000002_create_upload_views_table::Migration),
			Box::new(m20250601_000003_create_upload_downloads_table::Migration),
		]
	}
}
