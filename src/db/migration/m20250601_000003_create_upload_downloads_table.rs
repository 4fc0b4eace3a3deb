//! Upload downloads table: append-only log of download events.
//!
//! Same shape as upload_views with downloader fields.

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
					.table(UploadDownloads::Table)
					.if_not_exists()
					.col(
						ColumnDef::new(UploadDownloads::Id)
							.integer()
							.not_null()
							.auto_increment()
							.primary_key(),
					)
					.col(
						ColumnDef::new(UploadDownloads::UploadId)
							.integer()
							.not_null(),
					)
					.col(ColumnDef::new(UploadDownloads::DownloaderId).integer())
					.col(ColumnDef::new(UploadDownloads::DownloaderIp).string_len(45))
					.col(ColumnDef::new(UploadDownloads::UserAgent).text())
					.col(
						ColumnDef::new(UploadDownloads::DownloadedAt)
							.timestamp_with_time_zone()
							.not_null()
							.default(Expr::current_timestamp()),
					)
					.foreign_key(
						ForeignKey::create()
							.from(UploadDownloads::Table, UploadDownloads::UploadId)
							.to(Uploads::Table, Uploads::Id)
							.on_delete(ForeignKeyAction::Cascade),
					)
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_upload_downloads_upload_id")
					.table(UploadDownloads::Table)
					.col(UploadDownloads::UploadId)
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_upload_downloads_downloader_id")
					.table(UploadDownloads::Table)
					.col(UploadDownloads::DownloaderId)
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_upload_downloads_downloaded_at")
					.table(UploadDownloads::Table)
					.col(UploadDownloads::DownloadedAt)
					.to_owned(),
			)
			.await?;

		Ok(())
	}

	async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		manager
			.drop_table(Table::drop().table(UploadDownloads::Table).to_owned())
			.await
	}
}

#[derive(DeriveIden)]
enum UploadDownloads {
	Table,
	Id,
	UploadId,
	DownloaderId,
	DownloaderIp,
	UserAgent,
	DownloadedAt,
}
