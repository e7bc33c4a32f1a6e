use crate::character::AttributeType;
use serde::{Deserialize, Serialize};

/// Discriminates where a skill's effects land during combat: attacks hit the
/// target, defenses buff the user, utilities route by effect content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Attack,
    Defense,
    Utility,
}

/// Preconditions for learning a skill. All checks are AND-combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRequirements {
    pub min_level: u32,
    /// Per-attribute minimums; attributes not listed are unconstrained.
    pub attributes: Vec<(AttributeType, u32)>,
    /// Skill ids that must already be learned. Always earlier-tier skills,
    /// so the catalog forms a DAG by construction.
    pub prerequisites: Vec<&'static str>,
}

/// What a skill does when used. A skill may carry any combination; the
/// engine applies every present category to the routed character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillEffects {
    pub damage: Option<u32>,
    pub healing: Option<u32>,
    pub buffs: Vec<(AttributeType, u32)>,
    pub debuffs: Vec<(AttributeType, u32)>,
}

impl SkillEffects {
    pub fn has_buffs_or_healing(&self) -> bool {
        self.healing.is_some() || !self.buffs.is_empty()
    }
}

/// An immutable catalog entry. Defined once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub kind: SkillKind,
    /// Skill points required to learn.
    pub cost: u32,
    pub requirements: SkillRequirements,
    pub effects: SkillEffects,
    pub cooldown_turns: u32,
    pub energy_cost: u32,
}

/// Presentation-layer wrapper: a skill plus its position in the skill tree
/// diagram. Not consumed by the combat engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillTreeNode {
    pub id: &'static str,
    pub position: (i32, i32),
    pub connections: Vec<&'static str>,
    /// Whether the node is visible/unlocked in a fresh tree.
    pub unlocked: bool,
}
