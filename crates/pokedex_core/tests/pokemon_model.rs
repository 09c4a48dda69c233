use pokedex_core::{Pokemon, PokemonType, PokemonValidationError, UnknownPokemonType};
use std::collections::HashSet;

#[test]
fn new_keeps_fields() {
    let pokemon = Pokemon::new(94, "Gengar", PokemonType::Ghost, PokemonType::Poison).unwrap();

    assert_eq!(pokemon.number(), 94);
    assert_eq!(pokemon.name(), "Gengar");
    assert_eq!(pokemon.primary_type(), PokemonType::Ghost);
    assert_eq!(pokemon.secondary_type(), PokemonType::Poison);
}

#[test]
fn new_rejects_blank_name() {
    let err = Pokemon::new(3, "  ", PokemonType::Grass, PokemonType::Poison).unwrap_err();
    assert_eq!(err, PokemonValidationError::EmptyName { number: 3 });
    assert_eq!(err.to_string(), "pokemon #3 must have a name");
}

#[test]
fn identity_and_ordering_use_number_only() {
    let pikachu = Pokemon::new(25, "Pikachu", PokemonType::Electric, PokemonType::Electric).unwrap();
    let renamed = Pokemon::new(25, "Raichu", PokemonType::Electric, PokemonType::Fairy).unwrap();
    let charizard = Pokemon::new(6, "Charizard", PokemonType::Fire, PokemonType::Flying).unwrap();

    assert_eq!(pikachu, renamed);
    assert!(charizard < pikachu);

    let unique: HashSet<Pokemon> = [pikachu, renamed, charizard].into_iter().collect();
    assert_eq!(unique.len(), 2);
}

#[test]
fn type_natural_order_is_declaration_order() {
    assert!(PokemonType::Normal < PokemonType::Fire);
    assert!(PokemonType::Water < PokemonType::Grass);
    assert!(PokemonType::Steel < PokemonType::Fairy);
    assert_eq!(PokemonType::ALL.len(), 18);
    assert!(PokemonType::ALL.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn type_parses_case_insensitively() {
    assert_eq!("fire".parse::<PokemonType>(), Ok(PokemonType::Fire));
    assert_eq!(" Psychic ".parse::<PokemonType>(), Ok(PokemonType::Psychic));
    assert_eq!(
        "shadow".parse::<PokemonType>(),
        Err(UnknownPokemonType("shadow".to_string()))
    );
}

#[test]
fn display_uses_fixed_width_line() {
    let pokemon = Pokemon::new(1, "Bulbasaur", PokemonType::Grass, PokemonType::Poison).unwrap();
    assert_eq!(
        pokemon.to_string(),
        "#    1: Bulbasaur    Primary Type: GRASS      Secondary Type: POISON"
    );
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let pokemon = Pokemon::new(130, "Gyarados", PokemonType::Water, PokemonType::Flying).unwrap();

    let json = serde_json::to_value(&pokemon).unwrap();
    assert_eq!(json["number"], 130);
    assert_eq!(json["name"], "Gyarados");
    assert_eq!(json["primary_type"], "water");
    assert_eq!(json["secondary_type"], "flying");

    let decoded: Pokemon = serde_json::from_value(json).unwrap();
    assert_eq!(decoded.name(), "Gyarados");
    assert_eq!(decoded.secondary_type(), PokemonType::Flying);
}

#[test]
fn deserialize_rejects_empty_name() {
    let value = serde_json::json!({
        "number": 7,
        "name": "",
        "primary_type": "water",
        "secondary_type": "water"
    });

    let err = serde_json::from_value::<Pokemon>(value).unwrap_err();
    assert!(
        err.to_string().contains("pokemon #7 must have a name"),
        "unexpected error: {err}"
    );
}
