//! The combat state machine: action validation, effect application, and
//! turn advancement.

use super::types::{
    AttributeModifier, CombatCharacter, CombatError, CombatLogEntry, CombatState, Side,
};
use crate::character::AttributeType;
use crate::core::constants::{
    DEFENSE_DAMAGE_FACTOR, ENERGY_RECOVERY_BASE, ENERGY_RECOVERY_PER_LEVEL, MIN_EFFECTIVE_DAMAGE,
    MODIFIER_DURATION_TURNS,
};
use crate::skills::{Skill, SkillCatalog, SkillKind};

/// Builds a fresh encounter. The player always acts first.
pub fn initialize_combat(player: CombatCharacter, opponent: CombatCharacter) -> CombatState {
    CombatState {
        player,
        opponent,
        turn: 1,
        current_turn: Side::Player,
        log: Vec::new(),
        game_over: false,
        winner: None,
    }
}

/// Resolves one skill use by the side whose turn it is.
///
/// The `target` argument does not decide where effects land (that is driven
/// by the skill's kind); it decides which character is labeled as the target
/// in the log and whose health is checked for the knockout. Callers pass the
/// opposing side under normal play.
///
/// All preconditions are checked before anything is touched, so on `Err` the
/// input state is exactly what the caller still holds.
pub fn execute_action(
    catalog: &SkillCatalog,
    state: &CombatState,
    skill_id: &str,
    target: Side,
) -> Result<CombatState, CombatError> {
    let actor_side = state.current_turn;
    let skill = catalog
        .get(skill_id)
        .ok_or_else(|| CombatError::UnknownSkill(skill_id.to_string()))?;

    let actor = state.character(actor_side);
    if !actor.knows_skill(skill_id) {
        return Err(CombatError::SkillNotLearned(skill_id.to_string()));
    }
    let remaining = actor.remaining_cooldown(skill_id);
    if remaining > 0 {
        return Err(CombatError::SkillOnCooldown {
            skill: skill_id.to_string(),
            remaining,
        });
    }
    if actor.current_energy < skill.energy_cost {
        return Err(CombatError::InsufficientEnergy {
            required: skill.energy_cost,
            available: actor.current_energy,
        });
    }

    let mut next = state.clone();

    // Costs land on the actor. Zero-cooldown skills never enter the map, so
    // absence always means ready.
    {
        let actor = next.character_mut(actor_side);
        actor.current_energy = actor.current_energy.saturating_sub(skill.energy_cost);
        if skill.cooldown_turns > 0 {
            actor
                .skill_cooldowns
                .insert(skill_id.to_string(), skill.cooldown_turns);
        }
    }

    // Effect routing is driven by the skill kind, not the target argument:
    // attacks land on the target, defenses on the actor, utilities on the
    // actor when they heal or buff and on the target otherwise. Every effect
    // category a skill carries is applied to that one recipient.
    let recipient = match skill.kind {
        SkillKind::Attack => target,
        SkillKind::Defense => actor_side,
        SkillKind::Utility => {
            if skill.effects.has_buffs_or_healing() {
                actor_side
            } else {
                target
            }
        }
    };
    apply_effects(next.character_mut(recipient), skill);

    let target_label = if skill.kind == SkillKind::Attack
        || (skill.kind == SkillKind::Utility && !skill.effects.debuffs.is_empty())
    {
        state.character(target).name.clone()
    } else {
        actor.name.clone()
    };
    next.log.push(CombatLogEntry {
        turn: state.turn,
        actor: actor.name.clone(),
        action: skill.name.to_string(),
        target: target_label,
        effect: effect_description(skill),
        damage: skill.effects.damage,
        healing: skill.effects.healing,
    });

    // Knockout check inspects the target-argument side. The winning action
    // does not advance the turn, so the final state shows the turn and side
    // the knockout happened on.
    if next.character(target).current_health == 0 {
        next.game_over = true;
        next.winner = Some(actor_side);
        return Ok(next);
    }

    advance_turn(&mut next);
    Ok(next)
}

/// A no-op turn: logs the pass and advances. Used when a side has nothing it
/// can afford to do; costs nothing and triggers no cooldowns, but the usual
/// end-of-turn recovery still applies.
pub fn pass_turn(state: &CombatState) -> CombatState {
    let actor = state.character(state.current_turn);
    let mut next = state.clone();
    next.log.push(CombatLogEntry {
        turn: state.turn,
        actor: actor.name.clone(),
        action: "Pass".to_string(),
        target: actor.name.clone(),
        effect: "Catches their breath".to_string(),
        damage: None,
        healing: None,
    });
    advance_turn(&mut next);
    next
}

/// Read-only version of the `execute_action` preconditions, for filtering
/// choices before committing to one.
pub fn is_valid_action(catalog: &SkillCatalog, state: &CombatState, skill_id: &str) -> bool {
    let actor = state.character(state.current_turn);
    match catalog.get(skill_id) {
        Some(skill) => {
            actor.knows_skill(skill_id)
                && !actor.is_on_cooldown(skill_id)
                && actor.current_energy >= skill.energy_cost
        }
        None => false,
    }
}

/// Base damage reduced by half the recipient's effective defense, floored,
/// with a minimum of 1 so attacks always land for something.
pub fn effective_damage(base: u32, target: &CombatCharacter) -> u32 {
    let defense = target.effective_attribute(AttributeType::Defense);
    let reduced = (base as f64 - defense as f64 * DEFENSE_DAMAGE_FACTOR).floor();
    if reduced < MIN_EFFECTIVE_DAMAGE as f64 {
        MIN_EFFECTIVE_DAMAGE
    } else {
        reduced as u32
    }
}

fn apply_effects(character: &mut CombatCharacter, skill: &Skill) {
    if let Some(base) = skill.effects.damage {
        let damage = effective_damage(base, character);
        character.current_health = character.current_health.saturating_sub(damage);
    }
    if let Some(healing) = skill.effects.healing {
        character.current_health = (character.current_health + healing).min(character.max_health);
    }
    for &(attribute, value) in &skill.effects.buffs {
        character.active_buffs.push(AttributeModifier {
            name: format!("{} Buff", skill.name),
            attribute,
            value,
            duration: MODIFIER_DURATION_TURNS,
        });
    }
    for &(attribute, value) in &skill.effects.debuffs {
        character.active_debuffs.push(AttributeModifier {
            name: format!("{} Debuff", skill.name),
            attribute,
            value,
            duration: MODIFIER_DURATION_TURNS,
        });
    }
}

/// End-of-action bookkeeping for both sides: modifiers tick down and expire,
/// cooldowns tick down and leave the map at 0, energy recovers by
/// `5 + level * 2` up to the cap. Then the turn counter bumps and the other
/// side takes over.
fn advance_turn(state: &mut CombatState) {
    for side in [Side::Player, Side::Opponent] {
        let character = state.character_mut(side);

        for modifier in character
            .active_buffs
            .iter_mut()
            .chain(character.active_debuffs.iter_mut())
        {
            modifier.duration = modifier.duration.saturating_sub(1);
        }
        character.active_buffs.retain(|m| m.duration > 0);
        character.active_debuffs.retain(|m| m.duration > 0);

        for remaining in character.skill_cooldowns.values_mut() {
            *remaining = remaining.saturating_sub(1);
        }
        character.skill_cooldowns.retain(|_, remaining| *remaining > 0);

        let recovery = ENERGY_RECOVERY_BASE + character.level * ENERGY_RECOVERY_PER_LEVEL;
        character.current_energy = (character.current_energy + recovery).min(character.max_energy);
    }

    state.turn += 1;
    state.current_turn = state.current_turn.other();
}

fn effect_description(skill: &Skill) -> String {
    let mut parts = Vec::new();
    if let Some(damage) = skill.effects.damage {
        parts.push(format!("Deals {damage} damage"));
    }
    if let Some(healing) = skill.effects.healing {
        parts.push(format!("Restores {healing} health"));
    }
    if !skill.effects.buffs.is_empty() {
        let names: Vec<&str> = skill.effects.buffs.iter().map(|(a, _)| a.label()).collect();
        parts.push(format!("Raises {}", names.join(", ")));
    }
    if !skill.effects.debuffs.is_empty() {
        let names: Vec<&str> = skill
            .effects
            .debuffs
            .iter()
            .map(|(a, _)| a.label())
            .collect();
        parts.push(format!("Lowers the opponent's {}", names.join(", ")));
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Attributes;

    fn combatant(name: &str, level: u32, skills: &[&str]) -> CombatCharacter {
        CombatCharacter::new(
            name.to_string(),
            "Japan".to_string(),
            level,
            Attributes::uniform(5),
            skills.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn fresh_duel() -> CombatState {
        initialize_combat(
            combatant("Taro", 1, &["basic-push", "meditation", "powerful-thrust"]),
            combatant("Jiro", 1, &["basic-push"]),
        )
    }

    #[test]
    fn test_initialize_combat() {
        let state = fresh_duel();
        assert_eq!(state.turn, 1);
        assert_eq!(state.current_turn, Side::Player);
        assert!(state.log.is_empty());
        assert!(!state.game_over);
        assert_eq!(state.winner, None);
    }

    #[test]
    fn test_basic_push_resolution() {
        // Level 1, all attributes 5: pools are 110 health / 38 energy.
        // basic-push deals floor(15 - 5*0.5) = 12 against defense 5.
        let state = fresh_duel();
        let state = execute_action(SkillCatalog::standard(), &state, "basic-push", Side::Opponent)
            .unwrap();

        assert_eq!(state.opponent.current_health, 98);
        // 38 - 10 cost, then +7 recovery at turn end.
        assert_eq!(state.player.current_energy, 35);
        // Zero-cooldown skill never enters the map.
        assert_eq!(state.player.remaining_cooldown("basic-push"), 0);
        assert!(!state.player.skill_cooldowns.contains_key("basic-push"));
        assert_eq!(state.turn, 2);
        assert_eq!(state.current_turn, Side::Opponent);

        let entry = state.log.last().unwrap();
        assert_eq!(entry.turn, 1);
        assert_eq!(entry.actor, "Taro");
        assert_eq!(entry.action, "Basic Push");
        assert_eq!(entry.target, "Jiro");
        assert_eq!(entry.effect, "Deals 15 damage");
        assert_eq!(entry.damage, Some(15));
        assert_eq!(entry.healing, None);
    }

    #[test]
    fn test_damage_floor_against_heavy_defense() {
        let mut state = fresh_duel();
        state.opponent.attributes.set(AttributeType::Defense, 100);
        let state = execute_action(SkillCatalog::standard(), &state, "basic-push", Side::Opponent)
            .unwrap();
        assert_eq!(state.opponent.current_health, 109);
    }

    #[test]
    fn test_healing_self_routes_and_caps() {
        // Scenario: wounded actor meditates; only the actor changes.
        let mut state = fresh_duel();
        state.player.current_health = 50;
        let before_opponent = state.opponent.clone();

        let state = execute_action(SkillCatalog::standard(), &state, "meditation", Side::Opponent)
            .unwrap();
        assert_eq!(state.player.current_health, 70);
        assert_eq!(state.opponent.current_health, before_opponent.current_health);

        let entry = state.log.last().unwrap();
        assert_eq!(entry.target, "Taro");
        assert_eq!(entry.healing, Some(20));

        // Healing near the cap clamps at max_health.
        let mut state = fresh_duel();
        state.player.current_health = 105;
        let state = execute_action(SkillCatalog::standard(), &state, "meditation", Side::Opponent)
            .unwrap();
        assert_eq!(state.player.current_health, 110);
    }

    #[test]
    fn test_defense_skill_buffs_actor() {
        let mut state = fresh_duel();
        state.player.skills.push("basic-defense".to_string());
        let state = execute_action(
            SkillCatalog::standard(),
            &state,
            "basic-defense",
            Side::Opponent,
        )
        .unwrap();

        assert_eq!(state.player.active_buffs.len(), 1);
        let buff = &state.player.active_buffs[0];
        assert_eq!(buff.name, "Defensive Posture Buff");
        assert_eq!(buff.attribute, AttributeType::Defense);
        assert_eq!(buff.value, 5);
        // Applied at duration 3, already ticked once by the turn advance.
        assert_eq!(buff.duration, 2);
        assert_eq!(state.log.last().unwrap().target, "Taro");
    }

    #[test]
    fn test_debuff_utility_routes_to_target() {
        let mut state = fresh_duel();
        state.player.skills.push("intimidate".to_string());
        let state = execute_action(SkillCatalog::standard(), &state, "intimidate", Side::Opponent)
            .unwrap();

        assert!(state.player.active_debuffs.is_empty());
        assert_eq!(state.opponent.active_debuffs.len(), 2);
        assert!(state
            .opponent
            .active_debuffs
            .iter()
            .all(|d| d.name == "Intimidate Debuff"));
        assert_eq!(state.log.last().unwrap().target, "Jiro");
    }

    #[test]
    fn test_defense_skill_with_healing_applies_both_to_actor() {
        let mut state = fresh_duel();
        state.player.skills.push("immortal-stance".to_string());
        state.player.current_health = 40;
        state.player.current_energy = 100;
        state.player.max_energy = 100;

        let state = execute_action(
            SkillCatalog::standard(),
            &state,
            "immortal-stance",
            Side::Opponent,
        )
        .unwrap();
        assert_eq!(state.player.current_health, 70);
        assert_eq!(state.player.active_buffs.len(), 1);
        assert_eq!(state.player.active_buffs[0].attribute, AttributeType::Defense);
        assert!(state.opponent.active_buffs.is_empty());
    }

    #[test]
    fn test_unknown_skill_rejected() {
        let state = fresh_duel();
        let err = execute_action(SkillCatalog::standard(), &state, "flying-kick", Side::Opponent)
            .unwrap_err();
        assert_eq!(err, CombatError::UnknownSkill("flying-kick".to_string()));
    }

    #[test]
    fn test_unlearned_skill_rejected_without_mutation() {
        // thunder-clap exists in the catalog but neither side knows it.
        let state = fresh_duel();
        let snapshot = state.clone();
        let err = execute_action(SkillCatalog::standard(), &state, "thunder-clap", Side::Opponent)
            .unwrap_err();
        assert_eq!(err, CombatError::SkillNotLearned("thunder-clap".to_string()));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_insufficient_energy_rejected() {
        let mut state = fresh_duel();
        state.player.current_energy = 5;
        let err = execute_action(SkillCatalog::standard(), &state, "basic-push", Side::Opponent)
            .unwrap_err();
        assert_eq!(
            err,
            CombatError::InsufficientEnergy {
                required: 10,
                available: 5
            }
        );
    }

    #[test]
    fn test_cooldown_lifecycle() {
        // powerful-thrust has a 2-turn cooldown. The entry appears at use,
        // ticks down on every turn advance, and leaves the map at 0.
        let catalog = SkillCatalog::standard();
        let mut state = fresh_duel();
        state.player.attributes.set(AttributeType::Strength, 6);

        let state = execute_action(catalog, &state, "powerful-thrust", Side::Opponent).unwrap();
        assert_eq!(state.player.remaining_cooldown("powerful-thrust"), 1);
        let err = {
            // Not the player's turn, but validate against a copy where it is.
            let mut replay = state.clone();
            replay.current_turn = Side::Player;
            execute_action(catalog, &replay, "powerful-thrust", Side::Opponent).unwrap_err()
        };
        assert_eq!(
            err,
            CombatError::SkillOnCooldown {
                skill: "powerful-thrust".to_string(),
                remaining: 1
            }
        );

        let state = execute_action(catalog, &state, "basic-push", Side::Player).unwrap();
        assert_eq!(state.player.remaining_cooldown("powerful-thrust"), 0);
        assert!(!state.player.skill_cooldowns.contains_key("powerful-thrust"));
        assert!(is_valid_action(catalog, &state, "powerful-thrust"));
    }

    #[test]
    fn test_modifiers_expire_after_three_turns() {
        let catalog = SkillCatalog::standard();
        let mut state = fresh_duel();
        state.player.skills.push("basic-defense".to_string());

        let mut state = execute_action(catalog, &state, "basic-defense", Side::Opponent).unwrap();
        assert_eq!(state.player.active_buffs[0].duration, 2);

        state = pass_turn(&state);
        assert_eq!(state.player.active_buffs[0].duration, 1);
        state = pass_turn(&state);
        assert!(state.player.active_buffs.is_empty());
    }

    #[test]
    fn test_knockout_ends_combat_immediately() {
        let mut state = fresh_duel();
        state.opponent.current_health = 5;
        let state = execute_action(SkillCatalog::standard(), &state, "basic-push", Side::Opponent)
            .unwrap();

        assert!(state.game_over);
        assert_eq!(state.winner, Some(Side::Player));
        assert_eq!(state.opponent.current_health, 0);
        // No turn advancement on the finishing action.
        assert_eq!(state.turn, 1);
        assert_eq!(state.current_turn, Side::Player);
        assert_eq!(state.player.current_energy, 28);
    }

    #[test]
    fn test_pass_turn_costs_nothing() {
        let mut state = fresh_duel();
        state.player.current_energy = 3;
        let state = pass_turn(&state);

        // Only recovery applies.
        assert_eq!(state.player.current_energy, 10);
        assert_eq!(state.turn, 2);
        assert_eq!(state.current_turn, Side::Opponent);
        let entry = state.log.last().unwrap();
        assert_eq!(entry.action, "Pass");
        assert_eq!(entry.actor, "Taro");
    }

    #[test]
    fn test_energy_recovery_caps_at_max() {
        let state = fresh_duel();
        let state = pass_turn(&state);
        assert_eq!(state.player.current_energy, state.player.max_energy);
        assert_eq!(state.opponent.current_energy, state.opponent.max_energy);
    }

    #[test]
    fn test_turns_alternate() {
        let catalog = SkillCatalog::standard();
        let mut state = fresh_duel();
        let mut expected = Side::Player;
        for _ in 0..6 {
            assert_eq!(state.current_turn, expected);
            state = if state.current_turn == Side::Player {
                execute_action(catalog, &state, "meditation", Side::Opponent).unwrap()
            } else {
                pass_turn(&state)
            };
            expected = expected.other();
        }
    }

    #[test]
    fn test_execute_action_is_deterministic() {
        let state = fresh_duel();
        let a = execute_action(SkillCatalog::standard(), &state, "basic-push", Side::Opponent)
            .unwrap();
        let b = execute_action(SkillCatalog::standard(), &state, "basic-push", Side::Opponent)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_is_valid_action_mirrors_preconditions() {
        let catalog = SkillCatalog::standard();
        let mut state = fresh_duel();
        assert!(is_valid_action(catalog, &state, "basic-push"));
        assert!(!is_valid_action(catalog, &state, "flying-kick"));
        assert!(!is_valid_action(catalog, &state, "thunder-clap"));

        state.player.current_energy = 0;
        assert!(!is_valid_action(catalog, &state, "basic-push"));
        assert!(is_valid_action(catalog, &state, "meditation"));
    }
}
