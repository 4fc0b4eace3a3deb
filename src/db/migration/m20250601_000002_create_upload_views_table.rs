//! Upload views table: append-only log of view events.
//!
//! Rows are written once and never mutated. `viewer_id` is null for anonymous
//! viewers. Cascade-deleted with the referenced upload.

use super::m20250601_000001_create_uploads_table::Uploads;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
	async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		manager
			.create_table(
				Table::create()
					.table(UploadViews::Table)
					.if_not_exists()
					.col(
						ColumnDef::new(UploadViews::Id)
							.integer()
							.not_null()
							.auto_increment()
							.primary_key(),
					)
					.col(ColumnDef::new(UploadViews::UploadId).integer().not_null())
					.col(ColumnDef::new(UploadViews::ViewerId).integer())
					.col(ColumnDef::new(UploadViews::ViewerIp).string_len(45))
					.col(ColumnDef::new(UploadViews::UserAgent).text())
					.col(
						ColumnDef::new(UploadViews::ViewedAt)
							.timestamp_with_time_zone()
							.not_null()
							.default(Expr::current_timestamp()),
					)
					.foreign_key(
						ForeignKey::create()
							.from(UploadViews::Table, UploadViews::UploadId)
							.to(Uploads::Table, Uploads::Id)
							.on_delete(ForeignKeyAction::Cascade),
					)
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_upload_views_upload_id")
					.table(UploadViews::Table)
					.col(UploadViews::UploadId)
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_upload_views_viewer_id")
					.table(UploadViews::Table)
					.col(UploadViews::ViewerId)
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_upload_views_viewed_at")
					.table(UploadViews::Table)
					.col(UploadViews::ViewedAt)
					.to_owned(),
			)
			.await?;

		Ok(())
	}

	async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		manager
			.drop_table(Table::drop().table(UploadViews::Table).to_owned())
			.await
	}
}

#[derive(DeriveIden)]
enum UploadViews {
	Table,
	Id,
	UploadId,
	ViewerId,
	ViewerIp,
	UserAgent,
	ViewedAt,
}
