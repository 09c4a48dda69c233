//! Pokemon domain model.
//!
//! # Responsibility
//! - Define the catalog record and its elemental type tags.
//! - Define the natural ordering and identity used by the catalog container.
//!
//! # Invariants
//! - `number` is the identity: equality, hashing and ordering all use it alone.
//! - `name` is never empty.
//! - Records are immutable after construction.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Catalog number of a Pokemon.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PokemonId = i32;

/// Elemental type tag.
///
/// Natural ordering is declaration order, which is what
/// `Pokedex::group_by_primary_type` groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl PokemonType {
    /// Every variant in natural order.
    pub const ALL: [PokemonType; 18] = [
        Self::Normal,
        Self::Fire,
        Self::Water,
        Self::Grass,
        Self::Electric,
        Self::Ice,
        Self::Fighting,
        Self::Poison,
        Self::Ground,
        Self::Flying,
        Self::Psychic,
        Self::Bug,
        Self::Rock,
        Self::Ghost,
        Self::Dragon,
        Self::Dark,
        Self::Steel,
        Self::Fairy,
    ];

    /// Upper-case display name, e.g. `FIRE`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Fire => "FIRE",
            Self::Water => "WATER",
            Self::Grass => "GRASS",
            Self::Electric => "ELECTRIC",
            Self::Ice => "ICE",
            Self::Fighting => "FIGHTING",
            Self::Poison => "POISON",
            Self::Ground => "GROUND",
            Self::Flying => "FLYING",
            Self::Psychic => "PSYCHIC",
            Self::Bug => "BUG",
            Self::Rock => "ROCK",
            Self::Ghost => "GHOST",
            Self::Dragon => "DRAGON",
            Self::Dark => "DARK",
            Self::Steel => "STEEL",
            Self::Fairy => "FAIRY",
        }
    }
}

impl Display for PokemonType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // `pad` keeps width/alignment flags working for the record line.
        f.pad(self.as_str())
    }
}

/// Error returned when a type name does not match any variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPokemonType(pub String);

impl Display for UnknownPokemonType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown pokemon type: `{}`", self.0)
    }
}

impl Error for UnknownPokemonType {}

impl FromStr for PokemonType {
    type Err = UnknownPokemonType;

    /// Parses a type name case-insensitively (`fire`, `Fire`, `FIRE`).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| UnknownPokemonType(normalized.to_string()))
    }
}

/// Validation errors for `Pokemon` construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PokemonValidationError {
    /// `name` is empty or whitespace only.
    EmptyName { number: PokemonId },
}

impl Display for PokemonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName { number } => write!(f, "pokemon #{number} must have a name"),
        }
    }
}

impl Error for PokemonValidationError {}

/// Catalog record: a numbered, named creature with two elemental types.
///
/// Serialization goes through `PokemonWire` so deserialized records are
/// validated exactly like constructed ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "PokemonWire", into = "PokemonWire")]
pub struct Pokemon {
    number: PokemonId,
    name: String,
    primary_type: PokemonType,
    secondary_type: PokemonType,
}

#[derive(Serialize, Deserialize)]
struct PokemonWire {
    number: PokemonId,
    name: String,
    primary_type: PokemonType,
    secondary_type: PokemonType,
}

impl Pokemon {
    /// Creates a validated record.
    ///
    /// # Errors
    /// - `EmptyName` when `name` is empty or whitespace only.
    pub fn new(
        number: PokemonId,
        name: impl Into<String>,
        primary_type: PokemonType,
        secondary_type: PokemonType,
    ) -> Result<Self, PokemonValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PokemonValidationError::EmptyName { number });
        }
        Ok(Self {
            number,
            name,
            primary_type,
            secondary_type,
        })
    }

    pub fn number(&self) -> PokemonId {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn primary_type(&self) -> PokemonType {
        self.primary_type
    }

    pub fn secondary_type(&self) -> PokemonType {
        self.secondary_type
    }

    /// Returns whether either type tag equals `kind`.
    pub fn has_type(&self, kind: PokemonType) -> bool {
        self.primary_type == kind || self.secondary_type == kind
    }
}

impl PartialEq for Pokemon {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Pokemon {}

impl Hash for Pokemon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

impl PartialOrd for Pokemon {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pokemon {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number.cmp(&other.number)
    }
}

impl Display for Pokemon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{:>5}: {:<12} Primary Type: {:<10} Secondary Type: {}",
            self.number, self.name, self.primary_type, self.secondary_type
        )
    }
}

impl TryFrom<PokemonWire> for Pokemon {
    type Error = PokemonValidationError;

    fn try_from(value: PokemonWire) -> Result<Self, Self::Error> {
        Self::new(
            value.number,
            value.name,
            value.primary_type,
            value.secondary_type,
        )
    }
}

impl From<Pokemon> for PokemonWire {
    fn from(value: Pokemon) -> Self {
        Self {
            number: value.number,
            name: value.name,
            primary_type: value.primary_type,
            secondary_type: value.secondary_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Pokemon, PokemonType};

    #[test]
    fn type_display_honors_width() {
        assert_eq!(format!("[{:<6}]", PokemonType::Ice), "[ICE   ]");
    }

    #[test]
    fn has_type_checks_both_tags() {
        let pokemon = Pokemon::new(6, "Charizard", PokemonType::Fire, PokemonType::Flying)
            .expect("valid pokemon");
        assert!(pokemon.has_type(PokemonType::Fire));
        assert!(pokemon.has_type(PokemonType::Flying));
        assert!(!pokemon.has_type(PokemonType::Water));
    }
}
