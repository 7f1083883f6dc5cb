//! Business layer of the car-wash booking backend.
//! - Auth gate and credential store access (`auth`), admin checks (`authz`).
//! - Slot template and availability computation (`slots`).
//! - Booking ledger rules: create, move, cancel, admin status changes (`booking`).
//!
//! Everything here is framework independent; persistence sits behind
//! repository traits with SeaORM and in-memory implementations.

pub mod auth;
pub mod authz;
pub mod booking;
pub mod pagination;
pub mod slots;
#[cfg(test)]
pub mod test_support;
