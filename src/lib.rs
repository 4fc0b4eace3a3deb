//! Schema migrator and entity layer for the upload subsystem.
//!
//! The upload subsystem stores media assets owned by business (tenant)
//! accounts, plus append-only view/download logs. This crate owns the durable
//! schema for those three tables and exposes a single idempotent migration
//! operation ([`db::run`]) consumed by the `uploads-migrate` binary at
//! deployment time. Row-level reads and writes are the application server's
//! concern, not ours.

pub mod config;
pub mod db;
pub mod error;

pub use config::DatabaseConfig;
pub use error::{MigratorError, Result};
