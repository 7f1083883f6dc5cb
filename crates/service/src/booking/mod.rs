//! Booking ledger: appointments, their lifecycle, and the catalog they reference.

pub mod domain;
pub mod errors;
pub mod repo;
pub mod repository;
pub mod service;

pub use service::BookingService;
