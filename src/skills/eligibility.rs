//! Learnability rules: which skills a character may pick up, and the learn
//! transition itself.

use super::catalog::SkillCatalog;
use super::types::Skill;
use crate::character::{AttributeType, Character};
use thiserror::Error;

/// Why a skill cannot be learned right now.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LearnError {
    #[error("unknown skill '{0}'")]
    UnknownSkill(String),
    #[error("skill '{0}' is already learned")]
    AlreadyLearned(String),
    #[error("not enough skill points: need {required}, have {available}")]
    InsufficientSkillPoints { required: u32, available: u32 },
    #[error("level too low: need {required}, at {actual}")]
    LevelTooLow { required: u32, actual: u32 },
    #[error("{attribute:?} too low: need {required}, have {actual}")]
    AttributeTooLow {
        attribute: AttributeType,
        required: u32,
        actual: u32,
    },
    #[error("missing prerequisite skill '{0}'")]
    MissingPrerequisite(String),
}

/// Detailed eligibility check. Every precondition is verified; the first
/// failure is reported.
pub fn check_learn(
    catalog: &SkillCatalog,
    character: &Character,
    skill_id: &str,
) -> Result<(), LearnError> {
    let skill = catalog
        .get(skill_id)
        .ok_or_else(|| LearnError::UnknownSkill(skill_id.to_string()))?;

    if character.has_learned(skill_id) {
        return Err(LearnError::AlreadyLearned(skill_id.to_string()));
    }
    if character.skill_points < skill.cost {
        return Err(LearnError::InsufficientSkillPoints {
            required: skill.cost,
            available: character.skill_points,
        });
    }
    if character.level < skill.requirements.min_level {
        return Err(LearnError::LevelTooLow {
            required: skill.requirements.min_level,
            actual: character.level,
        });
    }
    for &(attribute, required) in &skill.requirements.attributes {
        let actual = character.attributes.get(attribute);
        if actual < required {
            return Err(LearnError::AttributeTooLow {
                attribute,
                required,
                actual,
            });
        }
    }
    for prereq in &skill.requirements.prerequisites {
        if !character.has_learned(prereq) {
            return Err(LearnError::MissingPrerequisite(prereq.to_string()));
        }
    }
    Ok(())
}

pub fn can_learn(catalog: &SkillCatalog, character: &Character, skill_id: &str) -> bool {
    check_learn(catalog, character, skill_id).is_ok()
}

/// Learns a skill: deducts the point cost and appends the id. Returns an
/// updated copy; the input character is untouched on failure.
pub fn learn(
    catalog: &SkillCatalog,
    character: &Character,
    skill_id: &str,
) -> Result<Character, LearnError> {
    check_learn(catalog, character, skill_id)?;
    let skill = catalog
        .get(skill_id)
        .ok_or_else(|| LearnError::UnknownSkill(skill_id.to_string()))?;

    let mut updated = character.clone();
    updated.skill_points -= skill.cost;
    updated.learned_skills.push(skill_id.to_string());
    Ok(updated)
}

/// Skills the character could learn right now.
pub fn available_skills<'a>(catalog: &'a SkillCatalog, character: &Character) -> Vec<&'a Skill> {
    catalog
        .all()
        .iter()
        .filter(|s| can_learn(catalog, character, s.id))
        .collect()
}

/// Catalog entries for everything the character has learned.
pub fn learned_skills<'a>(catalog: &'a SkillCatalog, character: &Character) -> Vec<&'a Skill> {
    catalog
        .all()
        .iter()
        .filter(|s| character.has_learned(s.id))
        .collect()
}
