//! Schema introspection for operator verification
//!
//! After the migrations run, the binary reads back the `uploads` column
//! structure and prints it, so an operator can eyeball the deployed shape
//! without a database client.

use crate::error::{MigratorError, Result};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};

/// One column of an introspected table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
	pub name: String,
	pub data_type: String,
	pub nullable: bool,
	pub default: Option<String>,
}

/// Read back the column structure of `table` on the connected backend.
pub async fn describe_table(db: &DatabaseConnection, table: &str) -> Result<Vec<ColumnInfo>> {
	let backend = db.get_database_backend();

	let stmt = match backend {
		// PRAGMA arguments cannot be bound; `table` is an internal constant.
		DbBackend::Sqlite => {
			Statement::from_string(backend, format!("PRAGMA table_info({table})"))
		}
		DbBackend::MySql => Statement::from_sql_and_values(
			backend,
			"SELECT column_name AS name, column_type AS data_type, \
			 is_nullable AS nullable, column_default AS default_value \
			 FROM information_schema.columns \
			 WHERE table_schema = DATABASE() AND table_name = ? \
			 ORDER BY ordinal_position",
			[table.into()],
		),
		DbBackend::Postgres => Statement::from_sql_and_values(
			backend,
			"SELECT column_name AS name, data_type, \
			 is_nullable AS nullable, column_default AS default_value \
			 FROM information_schema.columns \
			 WHERE table_name = $1 \
			 ORDER BY ordinal_position",
			[table.into()],
		),
	};

	let rows = db
		.query_all(stmt)
		.await
		.map_err(MigratorError::Introspection)?;

	let mut columns = Vec::with_capacity(rows.len());
	for row in rows {
		let column = if backend == DbBackend::Sqlite {
			ColumnInfo {
				name: row.try_get("", "name").map_err(MigratorError::Introspection)?,
				data_type: row.try_get("", "type").map_err(MigratorError::Introspection)?,
				nullable: row
					.try_get::<i32>("", "notnull")
					.map_err(MigratorError::Introspection)?
					== 0,
				default: row
					.try_get("", "dflt_value")
					.map_err(MigratorError::Introspection)?,
			}
		} else {
			ColumnInfo {
				name: row.try_get("", "name").map_err(MigratorError::Introspection)?,
				data_type: row
					.try_get("", "data_type")
					.map_err(MigratorError::Introspection)?,
				nullable: row
					.try_get::<String>("", "nullable")
					.map_err(MigratorError::Introspection)?
					== "YES",
				default: row
					.try_get("", "default_value")
					.map_err(MigratorError::Introspection)?,
			}
		};
		columns.push(column);
	}

	Ok(columns)
}

/// Render introspected columns as a terminal table.
pub fn render(columns: &[ColumnInfo]) -> Table {
	let mut table = Table::new();
	table.load_preset(UTF8_FULL);
	table.set_header(vec!["Column", "Type", "Nullable", "Default"]);

	for col in columns {
		table.add_row(vec![
			col.name.clone(),
			col.data_type.clone(),
			if col.nullable { "YES" } else { "NO" }.to_string(),
			col.default.clone().unwrap_or_else(|| String::from("-")),
		]);
	}

	table
}
