//! Create `appointment` table with FKs to `user` and `service`.
//!
//! Cancellation is a status value; rows are never removed by the application.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(uuid(Appointment::Id).primary_key())
                    .col(uuid(Appointment::UserId).not_null())
                    .col(integer(Appointment::ServiceId).not_null())
                    .col(date(Appointment::Date).not_null())
                    .col(time(Appointment::Time).not_null())
                    .col(string_len(Appointment::Status, 16).not_null().default("pending"))
                    .col(timestamp_with_time_zone(Appointment::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Appointment::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_user")
                            .from(Appointment::Table, Appointment::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_appointment_service")
                            .from(Appointment::Table, Appointment::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Appointment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Appointment { Table, Id, UserId, ServiceId, Date, Time, Status, CreatedAt, UpdatedAt }

#[derive(DeriveIden)]
enum User { Table, Id }

#[derive(DeriveIden)]
enum Service { Table, Id }
