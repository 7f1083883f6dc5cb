#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// DB-backed tests run only against an explicit `DATABASE_URL`.
pub fn db_tests_enabled() -> bool {
    std::env::var("SKIP_DB_TESTS").is_err() && std::env::var("DATABASE_URL").is_ok()
}

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    MIGRATED
        .get_or_init(|| async {
            let db = models::db::connect().await.expect("connect db for migration");
            migration::Migrator::up(&db, None).await.expect("migrate up");
        })
        .await;

    // fresh connection bound to the current test's runtime
    models::db::connect().await
}
