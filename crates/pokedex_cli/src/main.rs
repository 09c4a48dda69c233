//! CLI demo entry point.
//!
//! # Responsibility
//! - Verify `pokedex_core` linkage.
//! - Print every catalog view for a small fixed Pokedex.
//!
//! Logging is enabled by setting `POKEDEX_LOG_DIR` to an absolute path;
//! `POKEDEX_LOG_LEVEL` overrides the build-mode default level.

use log::info;
use pokedex_core::{init_logging, LogConfig, Pokedex, Pokemon, PokemonType};
use std::process::ExitCode;

const DEMO_POKEMON: &[(i32, &str, PokemonType, PokemonType)] = &[
    (25, "Pikachu", PokemonType::Electric, PokemonType::Electric),
    (1, "Bulbasaur", PokemonType::Grass, PokemonType::Poison),
    (6, "Charizard", PokemonType::Fire, PokemonType::Flying),
    (7, "Squirtle", PokemonType::Water, PokemonType::Water),
    (94, "Gengar", PokemonType::Ghost, PokemonType::Poison),
    (130, "Gyarados", PokemonType::Water, PokemonType::Flying),
    (4, "Charmander", PokemonType::Fire, PokemonType::Fire),
];

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("pokedex_cli: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = LogConfig::from_env()?;
    if let Some(dir) = &config.log_dir {
        init_logging(config.level.as_str(), &dir.to_string_lossy())?;
    }

    println!("pokedex_core ping={}", pokedex_core::ping());
    println!("pokedex_core version={}", pokedex_core::core_version());

    let mut pokedex = Pokedex::new();
    for &(number, name, primary, secondary) in DEMO_POKEMON {
        pokedex.add(Pokemon::new(number, name, primary, secondary)?);
    }
    info!(
        "event=cli_demo module=cli status=ok count={}",
        pokedex.count_pokemon()
    );

    println!("\n-- by number --\n{pokedex}");
    println!("-- alphabetical --\n{}", pokedex.list_alphabetically());
    println!("-- grouped by primary type --\n{}", pokedex.group_by_primary_type());
    println!("-- type {} --\n{}", PokemonType::Poison, pokedex.list_by_type(PokemonType::Poison));
    println!("-- range 1..=25 --\n{}", pokedex.list_range(1, 25));
    Ok(())
}
