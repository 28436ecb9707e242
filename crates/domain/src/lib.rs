//! # homebase-domain
//!
//! Pure domain model for the homebase listing service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define the **Home** entity and its not-yet-persisted form, **`NewHome`**
//! - Make the "id is assigned by the store" rule a property of the types
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod home;
pub mod id;
