//! Uploads table: one row per stored media asset, owned by a business account.
//!
//! `file_type` is constrained to the closed set {video, image, audio, other}
//! with a CHECK rather than an engine-native enum so the DDL stays portable.
//! `tags` and `metadata` are semi-structured JSON, opaque at this layer.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
	async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		manager
			.create_table(
				Table::create()
					.table(Uploads::Table)
					.if_not_exists()
					.col(
						ColumnDef::new(Uploads::Id)
							.integer()
							.not_null()
							.auto_increment()
							.primary_key(),
					)
					.col(ColumnDef::new(Uploads::UserId).integer().not_null())
					.col(ColumnDef::new(Uploads::OriginalName).string().not_null())
					.col(ColumnDef::new(Uploads::FileName).string().not_null())
					.col(ColumnDef::new(Uploads::FilePath).string().not_null())
					.col(ColumnDef::new(Uploads::FileUrl).string().not_null())
					.col(ColumnDef::new(Uploads::FileSize).big_integer().not_null())
					.col(ColumnDef::new(Uploads::MimeType).string().not_null())
					.col(
						ColumnDef::new(Uploads::FileType)
							.string_len(16)
							.not_null()
							.check(
								Expr::col(Uploads::FileType)
									.is_in(["video", "image", "audio", "other"]),
							),
					)
					// Seconds; only meaningful for video
					.col(
						ColumnDef::new(Uploads::Duration)
							.integer()
							.not_null()
							.default(0),
					)
					.col(ColumnDef::new(Uploads::ThumbnailUrl).string())
					.col(ColumnDef::new(Uploads::Title).string().not_null())
					.col(ColumnDef::new(Uploads::Description).text())
					.col(ColumnDef::new(Uploads::Tags).json())
					.col(
						ColumnDef::new(Uploads::IsPublic)
							.boolean()
							.not_null()
							.default(false),
					)
					.col(ColumnDef::new(Uploads::Metadata).json())
					.col(
						ColumnDef::new(Uploads::ViewCount)
							.big_integer()
							.not_null()
							.default(0),
					)
					.col(
						ColumnDef::new(Uploads::DownloadCount)
							.big_integer()
							.not_null()
							.default(0),
					)
					.col(
						ColumnDef::new(Uploads::CreatedAt)
							.timestamp_with_time_zone()
							.not_null()
							.default(Expr::current_timestamp()),
					)
					.col(
						ColumnDef::new(Uploads::UpdatedAt)
							.timestamp_with_time_zone()
							.not_null()
							.default(Expr::current_timestamp()),
					)
					.foreign_key(
						ForeignKey::create()
							.from(Uploads::Table, Uploads::UserId)
							.to(Businesses::Table, Businesses::Id)
							.on_delete(ForeignKeyAction::Cascade),
					)
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_uploads_user_id")
					.table(Uploads::Table)
					.col(Uploads::UserId)
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_uploads_file_type")
					.table(Uploads::Table)
					.col(Uploads::FileType)
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_uploads_is_public")
					.table(Uploads::Table)
					.col(Uploads::IsPublic)
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_uploads_created_at")
					.table(Uploads::Table)
					.col(Uploads::CreatedAt)
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_uploads_title")
					.table(Uploads::Table)
					.col(Uploads::Title)
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_uploads_user_file_type")
					.table(Uploads::Table)
					.col(Uploads::UserId)
					.col(Uploads::FileType)
					.to_owned(),
			)
			.await?;

		manager
			.create_index(
				Index::create()
					.name("idx_uploads_user_is_public")
					.table(Uploads::Table)
					.col(Uploads::UserId)
					.col(Uploads::IsPublic)
					.to_owned(),
			)
			.await?;

		Ok(())
	}

	async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
		manager
			.drop_table(Table::drop().table(Uploads::Table).to_owned())
			.await
	}
}

// Table identifiers

#[derive(DeriveIden)]
pub(crate) enum Uploads {
	Table,
	Id,
	UserId,
	OriginalName,
	FileName,
	FilePath,
	FileUrl,
	FileSize,
	MimeType,
	FileType,
	Duration,
	ThumbnailUrl,
	Title,
	Description,
	Tags,
	IsPublic,
	Metadata,
	ViewCount,
	DownloadCount,
	CreatedAt,
	UpdatedAt,
}

/// Owner table from the core application schema; referenced, never created here.
#[derive(DeriveIden)]
enum Businesses {
	Table,
	Id,
}
