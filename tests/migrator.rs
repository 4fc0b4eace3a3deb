//! Integration tests for the upload schema migrations.
//!
//! These run against in-memory SQLite with a single-connection pool so every
//! statement sees the same database. The `businesses` owner table belongs to
//! the core application schema, so tests create a stub of it up front, the
//! same way a deployed database would already carry it.

use pretty_assertions::assert_eq;
use sea_orm::{
	ActiveModelTrait, ColumnTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
	EntityTrait, PaginatorTrait, QueryFilter, Set,
};
use sea_orm_migration::MigratorTrait;
use uploads_db::db::entities::{upload, upload_download, upload_view, FileType};
use uploads_db::db::migration::Migrator;
use uploads_db::db::report;

async fn fresh_db() -> DatabaseConnection {
	let mut opt = ConnectOptions::new("sqlite::memory:");
	opt.max_connections(1).sqlx_logging(false);
	let db = Database::connect(opt).await.expect("connect to sqlite");

	// Owner table normally provided by the core application schema
	db.execute_unprepared(
		"CREATE TABLE businesses (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL)",
	)
	.await
	.expect("create businesses stub");
	db.execute_unprepared("INSERT INTO businesses (name) VALUES ('Acme Hauling')")
		.await
		.expect("seed business");

	db
}

async fn migrated_db() -> DatabaseConnection {
	let db = fresh_db().await;
	Migrator::up(&db, None).await.expect("apply migrations");
	db
}

fn video_upload(user_id: i32) -> upload::ActiveModel {
	upload::ActiveModel {
		user_id: Set(user_id),
		original_name: Set("before-after.mp4".to_string()),
		file_name: Set("9f2c1b.mp4".to_string()),
		file_path: Set("/srv/uploads/9f2c1b.mp4".to_string()),
		file_url: Set("https://cdn.example.com/9f2c1b.mp4".to_string()),
		file_size: Set(4_194_304),
		mime_type: Set("video/mp4".to_string()),
		file_type: Set(FileType::Video),
		title: Set("Garage cleanout".to_string()),
		..Default::default()
	}
}

#[tokio::test]
async fn migration_is_idempotent() {
	let db = fresh_db().await;

	Migrator::up(&db, None).await.expect("first run");
	Migrator::up(&db, None).await.expect("second run");

	for table in ["uploads", "upload_views", "upload_downloads"] {
		let columns = report::describe_table(&db, table).await.expect("describe");
		assert!(!columns.is_empty(), "{table} should exist after reruns");
	}

	let uploads = upload::Entity::find().count(&db).await.expect("count");
	assert_eq!(uploads, 0);
}

#[tokio::test]
async fn uploads_report_has_expected_columns() {
	let db = migrated_db().await;

	let columns = report::describe_table(&db, "uploads").await.expect("describe");
	let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();

	assert_eq!(
		names,
		vec![
			"id",
			"user_id",
			"original_name",
			"file_name",
			"file_path",
			"file_url",
			"file_size",
			"mime_type",
			"file_type",
			"duration",
			"thumbnail_url",
			"title",
			"description",
			"tags",
			"is_public",
			"metadata",
			"view_count",
			"download_count",
			"created_at",
			"updated_at",
		]
	);
}

#[tokio::test]
async fn new_upload_gets_documented_defaults() {
	let db = migrated_db().await;

	let inserted = video_upload(1).insert(&db).await.expect("insert upload");
	let stored = upload::Entity::find_by_id(inserted.id)
		.one(&db)
		.await
		.expect("query")
		.expect("row exists");

	assert_eq!(stored.is_public, false);
	assert_eq!(stored.view_count, 0);
	assert_eq!(stored.download_count, 0);
	assert_eq!(stored.duration, 0);
	assert_eq!(stored.file_type, FileType::Video);
}

#[tokio::test]
async fn updating_upload_touches_updated_at() {
	let db = migrated_db().await;

	let inserted = video_upload(1).insert(&db).await.expect("insert upload");

	// Keep the clock strictly ahead of the insert timestamp
	tokio::time::sleep(std::time::Duration::from_millis(50)).await;

	let mut pending: upload::ActiveModel = inserted.clone().into();
	pending.title = Set("Garage cleanout (edited)".to_string());
	let updated = pending.update(&db).await.expect("update upload");

	assert_eq!(updated.created_at, inserted.created_at);
	assert!(
		updated.updated_at > inserted.updated_at,
		"updated_at should advance on every mutation"
	);
}

#[tokio::test]
async fn file_type_outside_closed_set_is_rejected() {
	let db = migrated_db().await;

	let result = db
		.execute_unprepared(
			"INSERT INTO uploads (user_id, original_name, file_name, file_path, file_url, \
			 file_size, mime_type, file_type, title) \
			 VALUES (1, 'report.pdf', 'a1.pdf', '/srv/uploads/a1.pdf', \
			 'https://cdn.example.com/a1.pdf', 1024, 'application/pdf', 'document', 'Report')",
		)
		.await;

	assert!(result.is_err(), "CHECK constraint should reject 'document'");
}

#[tokio::test]
async fn view_with_dangling_upload_id_is_rejected() {
	let db = migrated_db().await;

	let result = upload_view::ActiveModel {
		upload_id: Set(999),
		viewer_ip: Set(Some("203.0.113.7".to_string())),
		..Default::default()
	}
	.insert(&db)
	.await;

	assert!(result.is_err(), "foreign key should reject dangling upload_id");
}

#[tokio::test]
async fn deleting_upload_cascades_to_event_logs() {
	let db = migrated_db().await;

	let uploaded = video_upload(1).insert(&db).await.expect("insert upload");

	upload_view::ActiveModel {
		upload_id: Set(uploaded.id),
		viewer_id: Set(Some(42)),
		user_agent: Set(Some("Mozilla/5.0".to_string())),
		..Default::default()
	}
	.insert(&db)
	.await
	.expect("insert view");

	upload_download::ActiveModel {
		upload_id: Set(uploaded.id),
		..Default::default()
	}
	.insert(&db)
	.await
	.expect("insert download");

	upload::Entity::delete_by_id(uploaded.id)
		.exec(&db)
		.await
		.expect("delete upload");

	let views = upload_view::Entity::find()
		.filter(upload_view::Column::UploadId.eq(uploaded.id))
		.count(&db)
		.await
		.expect("count views");
	let downloads = upload_download::Entity::find()
		.filter(upload_download::Column::UploadId.eq(uploaded.id))
		.count(&db)
		.await
		.expect("count downloads");

	assert_eq!(views, 0);
	assert_eq!(downloads, 0);
}

#[tokio::test]
async fn deleting_business_cascades_to_uploads() {
	let db = migrated_db().await;

	let uploaded = video_upload(1).insert(&db).await.expect("insert upload");
	upload_view::ActiveModel {
		upload_id: Set(uploaded.id),
		..Default::default()
	}
	.insert(&db)
	.await
	.expect("insert view");

	db.execute_unprepared("DELETE FROM businesses WHERE id = 1")
		.await
		.expect("delete business");

	assert_eq!(upload::Entity::find().count(&db).await.expect("count"), 0);
	assert_eq!(
		upload_view::Entity::find().count(&db).await.expect("count"),
		0
	);
}

#[tokio::test]
async fn tags_and_metadata_round_trip_as_json() {
	let db = migrated_db().await;

	let mut model = video_upload(1);
	model.tags = Set(Some(serde_json::json!(["before", "after", "garage"])));
	model.metadata = Set(Some(serde_json::json!({ "job_id": 77 })));
	let inserted = model.insert(&db).await.expect("insert upload");

	let stored = upload::Entity::find_by_id(inserted.id)
		.one(&db)
		.await
		.expect("query")
		.expect("row exists");

	assert_eq!(
		stored.tags,
		Some(serde_json::json!(["before", "after", "garage"]))
	);
	assert_eq!(stored.metadata, Some(serde_json::json!({ "job_id": 77 })));
}
