//! Seed the wash catalog with the three standard offerings.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "INSERT INTO service (id, name, price, duration) VALUES \
                 (1, 'Basic Wash', 30.00, '30 minutes'), \
                 (2, 'Full Wash', 50.00, '1 hour'), \
                 (3, 'Premium Wash', 80.00, '1.5 hours') \
                 ON CONFLICT (id) DO NOTHING",
            )
            .await?;
        // keep the serial ahead of the explicit ids above
        manager
            .get_connection()
            .execute_unprepared("SELECT setval(pg_get_serial_sequence('service', 'id'), (SELECT MAX(id) FROM service))")
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DELETE FROM service WHERE id IN (1, 2, 3)")
            .await?;
        Ok(())
    }
}
