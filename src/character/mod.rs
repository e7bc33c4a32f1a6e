//! Persistent character state and career progression.

pub mod attributes;
pub mod progression;

pub use attributes::{AttributeType, Attributes};
pub use progression::{CombatOutcome, Rank};

use crate::combat::CombatCharacter;
use crate::core::constants::{STARTING_MONEY, STARTING_SKILL_POINTS};
use serde::{Deserialize, Serialize};

/// A persisted wrestler profile.
///
/// Owned by the save layer. The combat engine never mutates a `Character`
/// directly; it works on a derived [`CombatCharacter`] and the caller folds
/// the result back in via [`progression::record_combat_result`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    pub country: String,
    pub attributes: Attributes,
    pub level: u32,
    pub experience: u32,
    pub money: i64,
    pub learned_skills: Vec<String>,
    pub skill_points: u32,
    pub wins: u32,
    pub losses: u32,
    pub rank: Rank,
}

impl Character {
    /// Creates a fresh level-1 character straight out of the stable.
    pub fn new(name: impl Into<String>, country: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            attributes,
            level: 1,
            experience: 0,
            money: STARTING_MONEY,
            learned_skills: Vec::new(),
            skill_points: STARTING_SKILL_POINTS,
            wins: 0,
            losses: 0,
            rank: Rank::Novice,
        }
    }

    pub fn has_learned(&self, skill_id: &str) -> bool {
        self.learned_skills.iter().any(|s| s == skill_id)
    }

    /// Derives a fresh combat-scoped view of this character: full health and
    /// energy pools, no active effects, no cooldowns.
    pub fn to_combat_character(&self) -> CombatCharacter {
        CombatCharacter::new(
            self.name.clone(),
            self.country.clone(),
            self.level,
            self.attributes,
            self.learned_skills.clone(),
        )
    }
}
