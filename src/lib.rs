//! Dohyo - Turn-Based Sumo Wrestling RPG Core
//!
//! This library contains the combat engine, the skill catalog and
//! eligibility rules, career progression, and save management. Rendering
//! and input handling are the caller's concern.

pub mod arena;
pub mod character;
pub mod combat;
pub mod core;
pub mod save;
pub mod skills;

pub use character::Character;
pub use combat::{CombatCharacter, CombatState};
pub use skills::SkillCatalog;
