//! # homebase-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters implement:
//!   - `HomeRepository` — CRUD for homes
//! - Define the **driving port** as a use-case struct:
//!   - `HomeService` — create, get, list, update, delete
//! - Turn "no such row" answers from the store into typed not-found errors
//!
//! ## Dependency rule
//! Depends on `homebase-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
