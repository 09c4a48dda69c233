//! Catalog use-case services.
//!
//! # Responsibility
//! - Layer domain queries over the collection primitives.
//! - Keep callers decoupled from the container's ordering details.

pub mod pokedex;
