//! Migrator registering entity-specific migrations in dependency order.
//! Indexes and seed data are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240501_000001_create_user;
mod m20240501_000002_create_user_credentials;
mod m20240501_000003_create_service;
mod m20240501_000004_create_appointment;
mod m20240501_000005_add_indexes;
mod m20240501_000006_seed_services;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240501_000001_create_user::Migration),
            Box::new(m20240501_000002_create_user_credentials::Migration),
            Box::new(m20240501_000003_create_service::Migration),
            Box::new(m20240501_000004_create_appointment::Migration),
            Box::new(m20240501_000005_add_indexes::Migration),
            Box::new(m20240501_000006_seed_services::Migration),
        ]
    }
}
