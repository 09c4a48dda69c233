//! Catalog domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by catalog logic.
//!
//! # Invariants
//! - Every record is identified by its catalog number.

pub mod pokemon;
