//! Opponent decision policy. Deliberately shallow: no lookahead, no damage
//! maximization, just a survival instinct and a preference for attacking.

use super::types::{CombatState, Side};
use crate::core::constants::AI_HEAL_HEALTH_FRACTION;
use crate::skills::{SkillCatalog, SkillKind};
use rand::Rng;

/// What the policy wants to do with its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpponentAction {
    UseSkill(String),
    /// Nothing is affordable; the caller should advance the turn via
    /// `pass_turn` rather than `execute_action`.
    Pass,
}

/// Picks an action for the given side:
/// 1. Collect skills that are learned, off cooldown, and affordable.
/// 2. Nothing affordable: pass.
/// 3. Below 30% health: the first affordable healing skill, if any.
/// 4. Otherwise a uniformly random affordable attack, if any.
/// 5. Otherwise a uniformly random affordable skill.
///
/// The random source is injected so encounters can be replayed exactly.
pub fn choose_action_for(
    catalog: &SkillCatalog,
    state: &CombatState,
    side: Side,
    rng: &mut impl Rng,
) -> OpponentAction {
    let character = state.character(side);

    let affordable: Vec<&str> = character
        .skills
        .iter()
        .filter_map(|id| catalog.get(id).map(|skill| (id.as_str(), skill)))
        .filter(|(id, skill)| {
            !character.is_on_cooldown(id) && character.current_energy >= skill.energy_cost
        })
        .map(|(id, _)| id)
        .collect();

    if affordable.is_empty() {
        return OpponentAction::Pass;
    }

    let low_health =
        (character.current_health as f64) < character.max_health as f64 * AI_HEAL_HEALTH_FRACTION;
    if low_health {
        let healer = affordable.iter().find(|id| {
            catalog
                .get(id)
                .map(|skill| skill.effects.healing.is_some())
                .unwrap_or(false)
        });
        if let Some(id) = healer {
            return OpponentAction::UseSkill(id.to_string());
        }
    }

    let attacks: Vec<&str> = affordable
        .iter()
        .copied()
        .filter(|id| {
            catalog
                .get(id)
                .map(|skill| skill.kind == SkillKind::Attack)
                .unwrap_or(false)
        })
        .collect();
    if !attacks.is_empty() {
        let pick = attacks[rng.gen_range(0..attacks.len())];
        return OpponentAction::UseSkill(pick.to_string());
    }

    let pick = affordable[rng.gen_range(0..affordable.len())];
    OpponentAction::UseSkill(pick.to_string())
}

/// Convenience wrapper for the usual case: deciding for the opponent side.
pub fn choose_action(
    catalog: &SkillCatalog,
    state: &CombatState,
    rng: &mut impl Rng,
) -> OpponentAction {
    choose_action_for(catalog, state, Side::Opponent, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Attributes;
    use crate::combat::engine::initialize_combat;
    use crate::combat::types::CombatCharacter;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn combatant(name: &str, skills: &[&str]) -> CombatCharacter {
        CombatCharacter::new(
            name.to_string(),
            "Mongolia".to_string(),
            3,
            Attributes::uniform(5),
            skills.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn duel(opponent_skills: &[&str]) -> CombatState {
        initialize_combat(
            combatant("Taro", &["basic-push"]),
            combatant("Jiro", opponent_skills),
        )
    }

    #[test]
    fn test_passes_with_no_affordable_skill() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let catalog = SkillCatalog::standard();

        // No skills at all.
        let state = duel(&[]);
        assert_eq!(
            choose_action(catalog, &state, &mut rng),
            OpponentAction::Pass
        );

        // Skills exist but energy is gone.
        let mut state = duel(&["basic-push", "powerful-thrust"]);
        state.opponent.current_energy = 0;
        assert_eq!(
            choose_action(catalog, &state, &mut rng),
            OpponentAction::Pass
        );

        // Only skill is on cooldown.
        let mut state = duel(&["powerful-thrust"]);
        state
            .opponent
            .skill_cooldowns
            .insert("powerful-thrust".to_string(), 1);
        assert_eq!(
            choose_action(catalog, &state, &mut rng),
            OpponentAction::Pass
        );
    }

    #[test]
    fn test_heals_when_low() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let catalog = SkillCatalog::standard();
        let mut state = duel(&["basic-push", "meditation"]);
        state.opponent.current_health = state.opponent.max_health / 4;

        assert_eq!(
            choose_action(catalog, &state, &mut rng),
            OpponentAction::UseSkill("meditation".to_string())
        );
    }

    #[test]
    fn test_attacks_when_low_but_no_healer() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let catalog = SkillCatalog::standard();
        let mut state = duel(&["basic-push", "basic-defense"]);
        state.opponent.current_health = 1;

        assert_eq!(
            choose_action(catalog, &state, &mut rng),
            OpponentAction::UseSkill("basic-push".to_string())
        );
    }

    #[test]
    fn test_prefers_attacks_at_healthy_margins() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let catalog = SkillCatalog::standard();
        let state = duel(&["basic-defense", "meditation", "basic-push", "powerful-thrust"]);

        for _ in 0..20 {
            match choose_action(catalog, &state, &mut rng) {
                OpponentAction::UseSkill(id) => {
                    assert!(id == "basic-push" || id == "powerful-thrust");
                }
                OpponentAction::Pass => panic!("should always find an attack"),
            }
        }
    }

    #[test]
    fn test_falls_back_to_any_affordable_skill() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let catalog = SkillCatalog::standard();
        let state = duel(&["basic-defense", "meditation"]);

        match choose_action(catalog, &state, &mut rng) {
            OpponentAction::UseSkill(id) => {
                assert!(id == "basic-defense" || id == "meditation");
            }
            OpponentAction::Pass => panic!("both skills are affordable"),
        }
    }

    #[test]
    fn test_seeded_choices_replay_exactly() {
        let catalog = SkillCatalog::standard();
        let state = duel(&["basic-push", "powerful-thrust", "meditation"]);

        let mut first = ChaCha8Rng::seed_from_u64(99);
        let mut second = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(
                choose_action(catalog, &state, &mut first),
                choose_action(catalog, &state, &mut second)
            );
        }
    }
}
