//! # homebase-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** under `/homes` (create, get, list, update, delete)
//! - Wrap every answer in a `{success, error, home|homes}` envelope
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application errors into status codes: `404` for missing homes,
//!   `400` for everything else that fails
//!
//! ## Dependency rule
//! Depends on `homebase-app` (for port traits and services) and `homebase-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod dto;
pub mod error;
pub mod router;
pub mod state;
