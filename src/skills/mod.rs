//! Skill catalog, skill tree, and learnability rules.

pub mod catalog;
pub mod eligibility;
pub mod types;

pub use catalog::{standard_skill_tree, standard_skills, SkillCatalog};
pub use eligibility::{available_skills, can_learn, learn, learned_skills, LearnError};
pub use types::{Skill, SkillEffects, SkillKind, SkillRequirements, SkillTreeNode};
