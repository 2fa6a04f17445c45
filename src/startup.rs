use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend};

use crate::{
    config::Config, error::Error, model::legacy::LegacyMigrationReport,
    service::legacy::LegacyMigrationService,
};

/// Connect to the database configured in `config`
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.max_connections)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    if db.get_database_backend() == DbBackend::Sqlite {
        db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
    }

    tracing::info!("Connected to {:?} database", db.get_database_backend());

    Ok(db)
}

/// Apply the schema and convert legacy estimates to views
///
/// Must complete before any service is used.
pub async fn prepare_database(db: &DatabaseConnection) -> Result<LegacyMigrationReport, Error> {
    use migration::{Migrator, MigratorTrait};

    Migrator::up(db, None).await?;
    tracing::info!("Database schema is up to date");

    LegacyMigrationService::new(db).run().await
}
