//! # homebase-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `HomeRepository` port defined in `homebase-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `homebase-app` (for port traits) and `homebase-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod home_repo;
mod pool;

pub use error::StorageError;
pub use home_repo::SqliteHomeRepository;
pub use pool::{Config, Database};
