//! Built-in sample characters.

use mana_core::{Arcana, Tier};

use crate::character::Character;

fn sample(name: &str, arcana: &[(&str, Tier)]) -> Character {
    Character {
        name: name.to_owned(),
        highest_tier: Tier::Master,
        arcana: arcana
            .iter()
            .map(|(arcana, tier)| Arcana::new(*arcana, *tier))
            .collect(),
    }
}

/// Kirin: two Master arcana, pool 200.
pub fn kirin() -> Character {
    sample("Kirin", &[("Draoidh", Tier::Master), ("Zephyr", Tier::Master)])
}

/// Serapis: two Master arcana and one Journeyman, pool 211.
pub fn serapis() -> Character {
    sample(
        "Serapis",
        &[
            ("Exodus", Tier::Master),
            ("Fathom", Tier::Master),
            ("Syphon", Tier::Journeyman),
        ],
    )
}

/// Looks a sample up by name, ignoring case.
pub fn by_name(name: &str) -> Option<Character> {
    match name.trim().to_ascii_lowercase().as_str() {
        "kirin" => Some(kirin()),
        "serapis" => Some(serapis()),
        _ => None,
    }
}

pub const NAMES: [&str; 2] = ["Kirin", "Serapis"];
