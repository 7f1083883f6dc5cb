

use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use tokio::sync::OnceCell;

static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Skip unless a database is configured and `SKIP_DB_TESTS` is not set.
pub(crate) fn db_tests_enabled() -> bool {
    std::env::var("SKIP_DB_TESTS").is_err() && std::env::var("DATABASE_URL").is_ok()
}

/// Setup test database with migrations applied once per process
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    MIGRATED
        .get_or_try_init(|| async {
            let db = crate::db::connect().await?;
            migration::Migrator::up(&db, None).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;
    crate::db::connect().await
}
