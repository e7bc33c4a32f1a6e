//! Career progression: experience, ranks, daily activities, and the
//! bookkeeping that runs after a combat result is known.

use super::attributes::AttributeType;
use super::Character;
use crate::core::constants::{
    CAREER_COMPLETE_WINS, COMBAT_WIN_MONEY_PER_LEVEL, COMBAT_WIN_XP, LEVEL_UP_SKILL_POINTS,
    XP_PER_LEVEL,
};
use serde::{Deserialize, Serialize};

/// Career tiers, lowest to highest. Arena access is gated by rank.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    Novice,
    RegionalAmateur,
    NationalAmateur,
    WorldAmateur,
    Professional,
}

impl Rank {
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Novice => "Novice",
            Rank::RegionalAmateur => "Regional Amateur",
            Rank::NationalAmateur => "National Amateur",
            Rank::WorldAmateur => "World Amateur",
            Rank::Professional => "Professional",
        }
    }

    /// Win count at which this rank promotes to the next one.
    fn promotion_wins(&self) -> Option<u32> {
        match self {
            Rank::Novice => Some(5),
            Rank::RegionalAmateur => Some(10),
            Rank::NationalAmateur => Some(15),
            Rank::WorldAmateur => Some(20),
            Rank::Professional => None,
        }
    }

    fn next(&self) -> Option<Rank> {
        match self {
            Rank::Novice => Some(Rank::RegionalAmateur),
            Rank::RegionalAmateur => Some(Rank::NationalAmateur),
            Rank::NationalAmateur => Some(Rank::WorldAmateur),
            Rank::WorldAmateur => Some(Rank::Professional),
            Rank::Professional => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CombatOutcome {
    Win,
    Loss,
}

/// Events produced by post-combat or activity bookkeeping, for the caller
/// to surface however it likes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CareerEvent {
    RankUp(Rank),
    LevelUp { level: u32 },
    /// 25 wins at the top rank; the career is over.
    CareerComplete,
}

/// Folds a finished combat back into the persistent character: win/loss
/// counters, prize money, experience, rank checkpoints, level-up.
///
/// Returns the updated character plus any career events. The input is left
/// untouched, matching the engine's immutable-update style.
pub fn record_combat_result(
    character: &Character,
    outcome: CombatOutcome,
) -> (Character, Vec<CareerEvent>) {
    let mut updated = character.clone();
    let mut events = Vec::new();

    match outcome {
        CombatOutcome::Win => {
            updated.wins += 1;
            updated.money += COMBAT_WIN_MONEY_PER_LEVEL * updated.level as i64;
            updated.experience += COMBAT_WIN_XP;

            if updated.rank == Rank::Professional && updated.wins == CAREER_COMPLETE_WINS {
                events.push(CareerEvent::CareerComplete);
            } else if let (Some(threshold), Some(next)) =
                (updated.rank.promotion_wins(), updated.rank.next())
            {
                // Promotion fires exactly at the checkpoint, not above it.
                if updated.wins == threshold {
                    updated.rank = next;
                    events.push(CareerEvent::RankUp(next));
                }
            }
        }
        CombatOutcome::Loss => {
            updated.losses += 1;
        }
    }

    // Combat level-ups grant skill points; activity level-ups do not.
    if updated.experience >= updated.level * XP_PER_LEVEL {
        updated.level += 1;
        updated.experience = 0;
        updated.skill_points += LEVEL_UP_SKILL_POINTS;
        events.push(CareerEvent::LevelUp {
            level: updated.level,
        });
    }

    (updated, events)
}

/// What a daily activity does besides granting experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    /// Raises one attribute by a fixed amount, for a fee.
    Training { attribute: AttributeType, amount: u32 },
    /// Pays out money.
    Work { pay: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ActivityKind,
    pub cost: i64,
    pub experience: u32,
}

/// The daily training and work options.
pub fn daily_activities() -> Vec<Activity> {
    vec![
        Activity {
            name: "Weight Lifting",
            description: "Builds raw physical power",
            kind: ActivityKind::Training {
                attribute: AttributeType::Strength,
                amount: 1,
            },
            cost: 200,
            experience: 10,
        },
        Activity {
            name: "Agility Drills",
            description: "Sharpens footwork and reflexes",
            kind: ActivityKind::Training {
                attribute: AttributeType::Dexterity,
                amount: 1,
            },
            cost: 200,
            experience: 10,
        },
        Activity {
            name: "Meditation Practice",
            description: "Strengthens the mind",
            kind: ActivityKind::Training {
                attribute: AttributeType::MentalStrength,
                amount: 1,
            },
            cost: 200,
            experience: 10,
        },
        Activity {
            name: "Sprint Training",
            description: "Improves burst speed",
            kind: ActivityKind::Training {
                attribute: AttributeType::Speed,
                amount: 1,
            },
            cost: 200,
            experience: 10,
        },
        Activity {
            name: "Defensive Stance Drills",
            description: "Hardens your guard",
            kind: ActivityKind::Training {
                attribute: AttributeType::Defense,
                amount: 1,
            },
            cost: 200,
            experience: 10,
        },
        Activity {
            name: "Bar Security",
            description: "Simple work, fair pay",
            kind: ActivityKind::Work { pay: 300 },
            cost: 0,
            experience: 5,
        },
        Activity {
            name: "Cargo Loading",
            description: "Heavy lifting, good pay",
            kind: ActivityKind::Work { pay: 500 },
            cost: 0,
            experience: 8,
        },
        Activity {
            name: "Sumo Exhibition",
            description: "A show for tourists, great pay",
            kind: ActivityKind::Work { pay: 800 },
            cost: 0,
            experience: 12,
        },
    ]
}

/// Applies one activity: attribute/money changes, experience, and a level-up
/// check. Activity level-ups do not grant skill points.
pub fn perform_activity(character: &Character, activity: &Activity) -> (Character, Vec<CareerEvent>) {
    let mut updated = character.clone();
    let mut events = Vec::new();

    updated.money -= activity.cost;
    match activity.kind {
        ActivityKind::Training { attribute, amount } => {
            updated.attributes.increase(attribute, amount);
        }
        ActivityKind::Work { pay } => {
            updated.money += pay;
        }
    }
    updated.experience += activity.experience;

    if updated.experience >= updated.level * XP_PER_LEVEL {
        updated.level += 1;
        updated.experience = 0;
        events.push(CareerEvent::LevelUp {
            level: updated.level,
        });
    }

    (updated, events)
}
