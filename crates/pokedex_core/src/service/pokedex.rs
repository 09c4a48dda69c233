//! Pokedex catalog service.
//!
//! # Responsibility
//! - Record Pokemon the first time they are encountered.
//! - Derive alphabetical, grouped, by-type and by-range views.
//!
//! # Invariants
//! - The catalog owns exactly one set ordered by catalog number.
//! - Derived views are independent sets; the catalog is never exposed
//!   mutably.
//! - `list_by_type` and `list_range` results are ordered by catalog number.

use crate::collection::sorted_set::SortedSet;
use crate::model::pokemon::{Pokemon, PokemonId, PokemonType};
use log::debug;
use std::fmt::{Display, Formatter};

/// In-memory Pokemon encyclopedia.
pub struct Pokedex {
    set: SortedSet<Pokemon>,
}

impl Default for Pokedex {
    fn default() -> Self {
        Self::new()
    }
}

impl Pokedex {
    /// Creates an empty catalog ordered by catalog number.
    pub fn new() -> Self {
        Self {
            set: SortedSet::with_comparator(|a: &Pokemon, b: &Pokemon| a.cmp(b)),
        }
    }

    /// Records `pokemon`.
    ///
    /// Returns `false` when a Pokemon with the same number is already present.
    pub fn add(&mut self, pokemon: Pokemon) -> bool {
        let number = pokemon.number();
        let added = self.set.add(pokemon);
        debug!(
            "event=pokedex_add module=service status={} number={}",
            if added { "ok" } else { "duplicate" },
            number
        );
        added
    }

    pub fn count_pokemon(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn contains(&self, pokemon: &Pokemon) -> bool {
        self.set.contains(pokemon)
    }

    /// Clears the catalog and starts over.
    pub fn clear(&mut self) {
        let removed = self.set.len();
        self.set.clear();
        debug!("event=pokedex_clear module=service status=ok removed={removed}");
    }

    /// Iterates in encounter order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pokemon> {
        self.set.iter()
    }

    /// All Pokemon sorted by name.
    pub fn list_alphabetically(&self) -> SortedSet<Pokemon> {
        self.set.sort(|a: &Pokemon, b: &Pokemon| a.name().cmp(b.name()))
    }

    /// All Pokemon grouped by primary type; encounter order is kept within a
    /// group.
    pub fn group_by_primary_type(&self) -> SortedSet<Pokemon> {
        self.set
            .sort(|a: &Pokemon, b: &Pokemon| a.primary_type().cmp(&b.primary_type()))
    }

    /// Pokemon whose primary or secondary type is `kind`.
    pub fn list_by_type(&self, kind: PokemonType) -> SortedSet<Pokemon> {
        self.set.filter(|pokemon| pokemon.has_type(kind))
    }

    /// Pokemon numbered within `[start, end]`.
    pub fn list_range(&self, start: PokemonId, end: PokemonId) -> SortedSet<Pokemon> {
        self.set
            .filter(|pokemon| (start..=end).contains(&pokemon.number()))
    }
}

impl Display for Pokedex {
    /// Renders every Pokemon by catalog number, one per line.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let ordered = self.set.sort(|a: &Pokemon, b: &Pokemon| a.cmp(b));
        write!(f, "{ordered}")
    }
}
