use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// At most one live (non-cancelled) appointment per (date, time). Partial
/// indexes are not expressible through the index builder, so this one is raw SQL.
const CREATE_LIVE_SLOT_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS uniq_appointment_live_slot \
     ON appointment (date, time) WHERE status <> 'cancelled'";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(CREATE_LIVE_SLOT_INDEX)
            .await?;

        // Appointment: lookups by owner and by day
        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_user")
                    .table(Appointment::Table)
                    .col(Appointment::UserId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_appointment_date")
                    .table(Appointment::Table)
                    .col(Appointment::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS uniq_appointment_live_slot")
            .await?;
        manager
            .drop_index(Index::drop().name("idx_appointment_user").table(Appointment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_appointment_date").table(Appointment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Appointment { Table, UserId, Date }
