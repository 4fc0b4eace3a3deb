//! Upload view entity: one append-only row per view event

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "upload_views")]
pub struct Model {
	#[sea_orm(primary_key)]
	pub id: i32,
	pub upload_id: i32,
	pub viewer_id: Option<i32>, // None for anonymous viewers
	pub viewer_ip: Option<String>,
	pub user_agent: Option<String>,
	pub viewed_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
	#[sea_orm(
		belongs_to = "super::upload::Entity",
		from = "Column::UploadId",
		to = "super::upload::Column::Id"
	)]
	Upload,
}

impl Related<super::upload::Entity> for Entity {
	fn to() -> RelationDef {
		Relation::Upload.def()
	}
}

impl ActiveModelBehavior for ActiveModel {}
