// Character attributes
pub const NUM_ATTRIBUTES: usize = 5;
pub const CREATION_ATTRIBUTE_MIN: u32 = 1;
pub const CREATION_ATTRIBUTE_MAX: u32 = 10;

// Character creation
pub const STARTING_MONEY: i64 = 1000;
pub const STARTING_SKILL_POINTS: u32 = 3;

// Combat resource pools
// max_health = 100 + level * 10
pub const BASE_HEALTH: u32 = 100;
pub const HEALTH_PER_LEVEL: u32 = 10;
// max_energy = 30 + level * 8 + (level^2) / 2. The quadratic term keeps
// legendary skill costs near half the pool at level 8+ while basic skills
// stay cheap relative to early pools (see combat::pacing).
pub const BASE_ENERGY: u32 = 30;
pub const ENERGY_PER_LEVEL: u32 = 8;

// Per-turn energy recovery: 5 + level * 2
pub const ENERGY_RECOVERY_BASE: u32 = 5;
pub const ENERGY_RECOVERY_PER_LEVEL: u32 = 2;

// Effect application
pub const MODIFIER_DURATION_TURNS: u32 = 3;
pub const DEFENSE_DAMAGE_FACTOR: f64 = 0.5;
pub const MIN_EFFECTIVE_DAMAGE: u32 = 1;
pub const MIN_EFFECTIVE_ATTRIBUTE: u32 = 1;

// Opponent AI
pub const AI_HEAL_HEALTH_FRACTION: f64 = 0.3;

// Career progression
pub const XP_PER_LEVEL: u32 = 100;
pub const LEVEL_UP_SKILL_POINTS: u32 = 2;
pub const COMBAT_WIN_XP: u32 = 50;
pub const COMBAT_WIN_MONEY_PER_LEVEL: i64 = 500;
pub const CAREER_COMPLETE_WINS: u32 = 25;

// Opponent generation
pub const OPPONENT_BASE_ATTRIBUTE: u32 = 3;
pub const OPPONENT_ATTRIBUTE_VARIANCE: u32 = 3;
