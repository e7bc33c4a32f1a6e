//! Arena roster and opponent generation. Arenas gate on career rank; the
//! opponent's level and stats scale with the player's level.

use crate::character::{AttributeType, Attributes, Rank};
use crate::combat::CombatCharacter;
use crate::core::constants::{OPPONENT_ATTRIBUTE_VARIANCE, OPPONENT_BASE_ATTRIBUTE};
use rand::Rng;

/// A venue the player can compete in once their rank allows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arena {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Flavor conditions shown on the venue card.
    pub modifiers: &'static [&'static str],
    pub min_rank: Rank,
}

pub const ARENAS: &[Arena] = &[
    Arena {
        id: "local-dojo",
        name: "Local Dojo",
        description: "A small venue with a sparse crowd. A calm setting for beginners.",
        modifiers: &["Comfortable surroundings"],
        min_rank: Rank::Novice,
    },
    Arena {
        id: "regional-arena",
        name: "Regional Arena",
        description: "A mid-sized arena with a local crowd. Good for regional amateurs.",
        modifiers: &["Mixed crowd", "Moderate pressure"],
        min_rank: Rank::RegionalAmateur,
    },
    Arena {
        id: "national-stadium",
        name: "National Stadium",
        description: "A large arena with a national audience. Built for national amateurs.",
        modifiers: &["Hostile crowd", "High pressure"],
        min_rank: Rank::NationalAmateur,
    },
    Arena {
        id: "world-championship",
        name: "World Championship",
        description: "An international arena with a global audience. For the best amateurs.",
        modifiers: &["Mixed crowd", "Extreme pressure"],
        min_rank: Rank::WorldAmateur,
    },
    Arena {
        id: "kokugikan-arena",
        name: "Kokugikan Arena",
        description: "The legendary sumo hall in Japan. Professionals only.",
        modifiers: &["Hostile crowd", "Maximum pressure", "Tradition"],
        min_rank: Rank::Professional,
    },
];

const OPPONENT_NAMES: &[&str] = &[
    "Hakuho",
    "Kakuryu",
    "Kisenosato",
    "Harumafuji",
    "Terunofuji",
    "Takayasu",
    "Goeido",
    "Kotoshogiku",
];

const OPPONENT_COUNTRIES: &[&str] = &["Japan", "Mongolia", "Georgia", "Brazil", "USA", "Russia"];

const OPPONENT_SKILLS: &[&str] = &["basic-push", "basic-defense", "meditation"];

pub fn get_arena(id: &str) -> Option<&'static Arena> {
    ARENAS.iter().find(|a| a.id == id)
}

/// Whether a character of this rank may enter the arena.
pub fn arena_available(arena: &Arena, rank: Rank) -> bool {
    rank >= arena.min_rank
}

/// Arenas open to the given rank, in progression order.
pub fn available_arenas(rank: Rank) -> Vec<&'static Arena> {
    ARENAS.iter().filter(|a| arena_available(a, rank)).collect()
}

/// A generated rival: the minimal profile combat needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpponentProfile {
    pub name: String,
    pub country: String,
    pub level: u32,
    pub attributes: Attributes,
    pub skills: Vec<String>,
}

impl OpponentProfile {
    pub fn to_combat_character(&self) -> CombatCharacter {
        CombatCharacter::new(
            self.name.clone(),
            self.country.clone(),
            self.level,
            self.attributes,
            self.skills.clone(),
        )
    }
}

/// Rolls an opponent near the player's level: level is player's plus or
/// minus one step (never below 1), each attribute is `3 + level` plus an
/// independent 0..3 roll, and the moveset is the three basics.
pub fn generate_opponent(player_level: u32, rng: &mut impl Rng) -> OpponentProfile {
    let level = (player_level + rng.gen_range(0..2)).saturating_sub(1).max(1);
    let base = OPPONENT_BASE_ATTRIBUTE + level;

    let mut attributes = Attributes::uniform(base);
    for attr in AttributeType::all() {
        attributes.set(attr, base + rng.gen_range(0..OPPONENT_ATTRIBUTE_VARIANCE));
    }

    OpponentProfile {
        name: OPPONENT_NAMES[rng.gen_range(0..OPPONENT_NAMES.len())].to_string(),
        country: OPPONENT_COUNTRIES[rng.gen_range(0..OPPONENT_COUNTRIES.len())].to_string(),
        level,
        attributes,
        skills: OPPONENT_SKILLS.iter().map(|s| s.to_string()).collect(),
    }
}
