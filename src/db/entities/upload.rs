//! Upload entity: a stored media asset owned by a business account

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait};
use serde::{Deserialize, Serialize};

/// Closed category set for uploaded files.
///
/// Stored as a short string and double-checked by a DDL CHECK constraint, so
/// the closed set holds even for writers that bypass this entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum FileType {
	#[sea_orm(string_value = "video")]
	Video,
	#[sea_orm(string_value = "image")]
	Image,
	#[sea_orm(string_value = "audio")]
	Audio,
	#[sea_orm(string_value = "other")]
	Other,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "uploads")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i32,
	/// Owning business (tenant); cascade-deleted with it
	pub user_id: i32,
	pub original_name: String,
	pub file_name: String,
	pub file_path: String,
	pub file_url: String,
	pub file_size: i64,
	pub mime_type: String,
	pub file_type: FileType,
	pub duration: i32, // Seconds; only meaningful for video
	pub thumbnail_url: Option<String>,
	pub title: String,
	pub description: Option<String>,
	pub tags: Option<Json>, // Ordered array of strings
	pub is_public: bool,
	pub metadata: Option<Json>, // Free-form, validated by the application layer
	pub view_count: i64,
	pub download_count: i64,
	pub created_at: DateTimeUtc,
	pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(has_many = "super::upload_view::Entity")]
	UploadViews,
	#[sea_orm(has_many = "super::upload_download::Entity")]
	UploadDownloads,
}

impl Related<super::upload_view::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::UploadViews.def()
	}
}

impl Related<super::upload_download::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::UploadDownloads.def()
	}
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
	/// Touch `updated_at` on every save and stamp `created_at` on insert,
	/// replacing the engine-native `ON UPDATE CURRENT_TIMESTAMP` behavior.
	async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
	where
		C: ConnectionTrait,
	{
		let now = chrono::Utc::now();
		if insert && !self.created_at.is_set() {
			self.created_at = ActiveValue::Set(now);
		}
		self.updated_at = ActiveValue::Set(now);
		Ok(self)
	}
}
