//! Ordered, duplicate-free containers.
//!
//! # Responsibility
//! - Provide the set abstraction the catalog builds its views on.
//!
//! # Invariants
//! - Containers never hold two equal elements.
//! - Derived views are independent instances.

pub mod sorted_set;
