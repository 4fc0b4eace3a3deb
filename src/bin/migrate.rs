use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uploads_db::{db, DatabaseConfig};

#[derive(Parser, Debug)]
#[command(
	name = "uploads-migrate",
	about = "Create the upload subsystem tables (idempotent)"
)]
struct Args {
	/// Full connection URL; overrides all other connection flags
	#[arg(long, env = "DATABASE_URL")]
	database_url: Option<String>,

	/// Database server hostname
	#[arg(long, env = "DB_HOST", default_value = "127.0.0.1")]
	host: String,

	/// Database server port
	#[arg(long, env = "DB_PORT", default_value_t = 3306)]
	port: u16,

	/// Login user
	#[arg(long, env = "DB_USER", default_value = "root")]
	user: String,

	/// Login password
	#[arg(long, env = "DB_PASSWORD")]
	password: Option<String>,

	/// Database (schema) name
	#[arg(long, env = "DB_NAME", default_value = "uploads")]
	database: String,

	/// Skip server certificate verification (development only)
	#[arg(long)]
	danger_accept_invalid_certs: bool,
}

fn init_tracing() {
	tracing_subscriber::registry()
		.with(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| EnvFilter::new("uploads_db=info,uploads_migrate=info")),
		)
		.with(fmt::layer().with_target(false).with_writer(std::io::stdout))
		.init();
}

#[tokio::main]
async fn main() -> ExitCode {
	init_tracing();

	let args = Args::parse();
	let config = DatabaseConfig {
		url: args.database_url,
		host: args.host,
		port: args.port,
		username: args.user,
		password: args.password,
		database: args.database,
		danger_accept_invalid_certs: args.danger_accept_invalid_certs,
	};

	match db::run(&config).await {
		Ok(columns) => {
			println!("uploads table structure:");
			println!("{}", db::report::render(&columns));
			ExitCode::SUCCESS
		}
		Err(err) => {
			eprintln!("migration failed: {err}");
			ExitCode::FAILURE
		}
	}
}
