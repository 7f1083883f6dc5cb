//! Auth module: three-layer architecture (domain, repository, service).
//!
//! Registration, login and bearer-token resolution live here; password
//! hashing is isolated in `password`.

pub mod domain;
pub mod errors;
pub mod password;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::AuthService;
