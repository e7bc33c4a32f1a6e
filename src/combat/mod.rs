//! Turn-based bout resolution: state machine, opponent policy, and the
//! energy pacing tables behind the resource formulas.

pub mod ai;
pub mod engine;
pub mod pacing;
pub mod types;

pub use ai::{choose_action, choose_action_for, OpponentAction};
pub use engine::{
    effective_damage, execute_action, initialize_combat, is_valid_action, pass_turn,
};
pub use pacing::{pacing_summary, progression_table, EnergyProgression};
pub use types::{
    AttributeModifier, CombatCharacter, CombatError, CombatLogEntry, CombatState, Side,
};
