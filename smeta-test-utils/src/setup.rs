use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};
use tempfile::TempDir;

use crate::error::TestError;

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
    /// Directory holding the database file, removed once the pool above is dropped
    _database_dir: Option<TempDir>,
}

impl TestSetup {
    /// In-memory SQLite, a single connection so every query runs in order.
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            state: TestAppState { db },
            _database_dir: None,
        })
    }

    /// Migrated SQLite database file behind a pool of `max_connections`, so concurrent
    /// writers race for the database lock the way they do in a deployment.
    pub async fn with_database_file(max_connections: u32) -> Result<Self, TestError> {
        let database_dir = tempfile::tempdir()?;
        let url = format!(
            "sqlite://{}?mode=rwc",
            database_dir.path().join("smeta.db").display()
        );

        let mut opt = ConnectOptions::new(url);
        opt.max_connections(max_connections).sqlx_logging(false);
        let db = Database::connect(opt).await?;

        let setup = TestSetup {
            state: TestAppState { db },
            _database_dir: Some(database_dir),
        };
        setup.with_schema().await?;

        Ok(setup)
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Apply every migration, creating the composite unique indexes that
    /// `create_table_from_entity` can't express.
    pub async fn with_schema(&self) -> Result<(), TestError> {
        use migration::{Migrator, MigratorTrait};

        Migrator::up(&self.state.db, None).await?;

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates a [`TestSetup`] with the full migrated schema.
#[macro_export]
macro_rules! test_setup_with_schema {
    () => {{
        async {
            let setup = TestSetup::new().await?;
            setup.with_schema().await?;

            Ok::<_, $crate::error::TestError>(setup)
        }
        .await
    }};
}
