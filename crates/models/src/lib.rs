//! SeaORM entities for the booking store plus column-level validation.

pub mod errors;
pub mod db;
pub mod user;
pub mod user_credentials;
pub mod service_offering;
pub mod appointment;

#[cfg(test)]
mod tests;
