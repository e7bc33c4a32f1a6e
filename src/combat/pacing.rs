//! Energy curve diagnostics: how pools, recovery, and tier costs line up at
//! each level. Used for balance inspection, not by the engine itself.

use crate::core::constants::{
    BASE_ENERGY, ENERGY_PER_LEVEL, ENERGY_RECOVERY_BASE, ENERGY_RECOVERY_PER_LEVEL,
};

/// Snapshot of the energy economy at one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnergyProgression {
    pub level: u32,
    pub max_energy: u32,
    pub energy_recovery: u32,
    pub basic_skill_cost: u32,
    pub intermediate_skill_cost: u32,
    pub advanced_skill_cost: u32,
    /// 0 below level 8, where legendary skills are out of reach anyway.
    pub legendary_skill_cost: u32,
    pub turns_to_recover_basic: u32,
    pub turns_to_recover_legendary: u32,
}

impl EnergyProgression {
    pub fn at_level(level: u32) -> Self {
        let max_energy = BASE_ENERGY + level * ENERGY_PER_LEVEL + (level * level) / 2;
        let energy_recovery = ENERGY_RECOVERY_BASE + level * ENERGY_RECOVERY_PER_LEVEL;

        let basic_skill_cost: u32 = if level <= 2 { 5 } else { 8 };
        let intermediate_skill_cost: u32 = if level <= 4 { 12 } else { 15 };
        let advanced_skill_cost: u32 = if level <= 7 { 25 } else { 30 };
        let legendary_skill_cost: u32 = if level >= 8 { 45 } else { 0 };

        let turns_to_recover_basic = basic_skill_cost.div_ceil(energy_recovery);
        let turns_to_recover_legendary = if legendary_skill_cost > 0 {
            legendary_skill_cost.div_ceil(energy_recovery)
        } else {
            0
        };

        Self {
            level,
            max_energy,
            energy_recovery,
            basic_skill_cost,
            intermediate_skill_cost,
            advanced_skill_cost,
            legendary_skill_cost,
            turns_to_recover_basic,
            turns_to_recover_legendary,
        }
    }
}

/// The full levels 1..=10 table.
pub fn progression_table() -> Vec<EnergyProgression> {
    (1..=10).map(EnergyProgression::at_level).collect()
}

/// One-line characterization of how fights feel at this level.
pub fn pacing_summary(level: u32) -> &'static str {
    match level {
        0..=2 => "Fast bouts: basic skills are cheap and fights end quickly",
        3..=4 => "Moderate bouts: intermediate skills open up and order starts to matter",
        5..=7 => "Dynamic bouts: advanced skills make each turn a real decision",
        _ => "Epic bouts: legendary skills dominate long exchanges",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_levels() {
        let p = EnergyProgression::at_level(1);
        assert_eq!(p.max_energy, 38);
        assert_eq!(p.energy_recovery, 7);
        assert_eq!(p.basic_skill_cost, 5);
        assert_eq!(p.legendary_skill_cost, 0);
        assert_eq!(p.turns_to_recover_basic, 1);
        assert_eq!(p.turns_to_recover_legendary, 0);

        let p = EnergyProgression::at_level(5);
        assert_eq!(p.max_energy, 82);
        assert_eq!(p.energy_recovery, 15);
        assert_eq!(p.advanced_skill_cost, 25);

        let p = EnergyProgression::at_level(8);
        assert_eq!(p.max_energy, 126);
        assert_eq!(p.energy_recovery, 21);
        assert_eq!(p.legendary_skill_cost, 45);
        assert_eq!(p.turns_to_recover_legendary, 3);
    }

    #[test]
    fn test_table_covers_ten_levels() {
        let table = progression_table();
        assert_eq!(table.len(), 10);
        assert_eq!(table[0].level, 1);
        assert_eq!(table[9].level, 10);
    }

    #[test]
    fn test_recovery_keeps_pace_with_costs() {
        // A legendary skill should never take more than a few turns of
        // recovery once it becomes reachable.
        for p in progression_table() {
            if p.legendary_skill_cost > 0 {
                assert!(p.turns_to_recover_legendary <= 3);
                assert!(p.max_energy > p.legendary_skill_cost * 2);
            }
        }
    }

    #[test]
    fn test_pacing_summary_bands() {
        assert!(pacing_summary(1).starts_with("Fast"));
        assert!(pacing_summary(4).starts_with("Moderate"));
        assert!(pacing_summary(6).starts_with("Dynamic"));
        assert!(pacing_summary(9).starts_with("Epic"));
    }
}
