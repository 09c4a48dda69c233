//! Core catalog logic for the Pokedex.
//! This crate is the single source of truth for ordering and uniqueness
//! invariants.

pub mod collection;
pub mod logging;
pub mod model;
pub mod service;

pub use collection::sorted_set::{Comparator, SetError, SetResult, SortedSet};
pub use logging::{
    default_log_level, init_logging, logging_status, LogConfig, LogLevel, LoggingError,
};
pub use model::pokemon::{
    Pokemon, PokemonId, PokemonType, PokemonValidationError, UnknownPokemonType,
};
pub use service::pokedex::Pokedex;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
