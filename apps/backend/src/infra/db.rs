use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbOwner, DbProfile};
use crate::error::AppError;

/// Connect to the database for the given profile and owner.
/// This function does NOT run any migrations.
pub async fn connect_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(profile, owner)?;
    let mut options = ConnectOptions::new(database_url);
    if profile == DbProfile::SqliteMemory {
        // An in-memory SQLite database exists per connection; a pool of more
        // than one would hand out empty databases.
        options.max_connections(1);
    }
    let conn = Database::connect(options).await?;
    Ok(conn)
}

/// Single bootstrap entrypoint: connect, then bring the schema up to date.
pub async fn bootstrap_db(
    profile: DbProfile,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile, owner).await?;
    migration::migrate(&conn, migration::MigrationCommand::Up)
        .await
        .map_err(|e| AppError::db(format!("migration failed during bootstrap: {e}")))?;
    info!(?profile, "database bootstrapped");
    Ok(conn)
}
