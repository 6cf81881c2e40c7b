//! Database connection and schema management

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr};
use sea_orm_migration::MigratorTrait;

pub mod entities;
pub mod migration;

pub use migration::Migrator;

/// Connect to the database, enforce foreign keys, and bring the schema up to
/// date.
///
/// The pool is capped at one connection so the sqlite foreign-key pragma
/// holds for every statement the engine issues.
pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
	let mut options = ConnectOptions::new(url.to_owned());
	options.max_connections(1).sqlx_logging(false);

	let db = Database::connect(options).await?;
	if db.get_database_backend() == DbBackend::Sqlite {
		db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;
	}
	Migrator::up(&db, None).await?;

	Ok(db)
}
