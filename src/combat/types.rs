use crate::character::{AttributeType, Attributes};
use crate::core::constants::{
    BASE_ENERGY, BASE_HEALTH, ENERGY_PER_LEVEL, HEALTH_PER_LEVEL, MIN_EFFECTIVE_ATTRIBUTE,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// One of the two fixed roles in an encounter. Unrelated to which
/// participant is human-controlled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// A timed additive (buff) or subtractive (debuff) modifier on one
/// attribute. Entries never merge; repeated applications coexist and sum at
/// read time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeModifier {
    pub name: String,
    pub attribute: AttributeType,
    pub value: u32,
    /// Remaining duration in turns; the entry is dropped when it hits 0.
    pub duration: u32,
}

/// Combat-scoped view of a character: resource pools, active effects, and
/// cooldowns. Created fresh per encounter, discarded when it ends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CombatCharacter {
    pub name: String,
    pub country: String,
    pub level: u32,
    /// Base attributes copied from the persistent character; never mutated
    /// during combat.
    pub attributes: Attributes,
    pub max_health: u32,
    pub current_health: u32,
    pub max_energy: u32,
    pub current_energy: u32,
    /// Usable skill ids.
    pub skills: Vec<String>,
    pub active_buffs: Vec<AttributeModifier>,
    pub active_debuffs: Vec<AttributeModifier>,
    /// skill id -> remaining cooldown turns. Absence means not on cooldown;
    /// entries are dropped once they reach 0.
    pub skill_cooldowns: HashMap<String, u32>,
}

impl CombatCharacter {
    /// Derives combat pools from level. Health grows linearly; energy grows
    /// convexly so late-game skill costs and pools scale together (see
    /// `combat::pacing`).
    pub fn new(
        name: String,
        country: String,
        level: u32,
        attributes: Attributes,
        skills: Vec<String>,
    ) -> Self {
        let max_health = BASE_HEALTH + level * HEALTH_PER_LEVEL;
        let max_energy = BASE_ENERGY + level * ENERGY_PER_LEVEL + (level * level) / 2;

        Self {
            name,
            country,
            level,
            attributes,
            max_health,
            current_health: max_health,
            max_energy,
            current_energy: max_energy,
            skills,
            active_buffs: Vec::new(),
            active_debuffs: Vec::new(),
            skill_cooldowns: HashMap::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    pub fn knows_skill(&self, skill_id: &str) -> bool {
        self.skills.iter().any(|s| s == skill_id)
    }

    pub fn remaining_cooldown(&self, skill_id: &str) -> u32 {
        self.skill_cooldowns.get(skill_id).copied().unwrap_or(0)
    }

    pub fn is_on_cooldown(&self, skill_id: &str) -> bool {
        self.remaining_cooldown(skill_id) > 0
    }

    /// Base attribute plus active buffs, minus active debuffs, floored at 1.
    pub fn effective_attribute(&self, attribute: AttributeType) -> u32 {
        let mut value = self.attributes.get(attribute) as i64;
        for buff in &self.active_buffs {
            if buff.attribute == attribute {
                value += buff.value as i64;
            }
        }
        for debuff in &self.active_debuffs {
            if debuff.attribute == attribute {
                value -= debuff.value as i64;
            }
        }
        value.max(MIN_EFFECTIVE_ATTRIBUTE as i64) as u32
    }
}

/// One line of the append-only combat log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CombatLogEntry {
    pub turn: u32,
    pub actor: String,
    pub action: String,
    pub target: String,
    pub effect: String,
    pub damage: Option<u32>,
    pub healing: Option<u32>,
}

/// Full state of one encounter. Every accepted action produces a fresh
/// value; nothing is mutated in place across the engine boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CombatState {
    pub player: CombatCharacter,
    pub opponent: CombatCharacter,
    /// Starts at 1 and increments once per completed action.
    pub turn: u32,
    pub current_turn: Side,
    pub log: Vec<CombatLogEntry>,
    pub game_over: bool,
    pub winner: Option<Side>,
}

impl CombatState {
    pub fn character(&self, side: Side) -> &CombatCharacter {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub(crate) fn character_mut(&mut self, side: Side) -> &mut CombatCharacter {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }
}

/// Why an action was rejected. No state is mutated when one of these is
/// returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CombatError {
    #[error("unknown skill '{0}'")]
    UnknownSkill(String),
    #[error("skill '{0}' is not learned")]
    SkillNotLearned(String),
    #[error("skill '{skill}' is on cooldown for {remaining} more turns")]
    SkillOnCooldown { skill: String, remaining: u32 },
    #[error("not enough energy: need {required}, have {available}")]
    InsufficientEnergy { required: u32, available: u32 },
}
