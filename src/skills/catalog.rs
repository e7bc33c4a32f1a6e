//! The static skill catalog and skill tree layout.

use super::types::{Skill, SkillEffects, SkillKind, SkillRequirements, SkillTreeNode};
use crate::character::AttributeType;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Read-only skill registry with O(1) lookup by id.
///
/// Constructed once (see [`SkillCatalog::standard`]) and passed by reference
/// into the engine and eligibility code; never mutated at runtime.
#[derive(Debug)]
pub struct SkillCatalog {
    skills: Vec<Skill>,
    index: HashMap<&'static str, usize>,
}

impl SkillCatalog {
    pub fn new(skills: Vec<Skill>) -> Self {
        let index = skills
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id, i))
            .collect::<HashMap<_, _>>();
        let catalog = Self { skills, index };
        debug_assert!(
            catalog.validate().is_ok(),
            "skill catalog invariant violated: {:?}",
            catalog.validate()
        );
        catalog
    }

    /// The built-in catalog, built on first use.
    pub fn standard() -> &'static SkillCatalog {
        static STANDARD: OnceLock<SkillCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| SkillCatalog::new(standard_skills()))
    }

    pub fn get(&self, id: &str) -> Option<&Skill> {
        self.index.get(id).map(|&i| &self.skills[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn all(&self) -> &[Skill] {
        &self.skills
    }

    /// Checks that ids are unique and that every prerequisite refers to an
    /// earlier catalog entry, which makes the prerequisite graph a DAG.
    fn validate(&self) -> Result<(), String> {
        if self.index.len() != self.skills.len() {
            return Err("duplicate skill id".to_string());
        }
        for (i, skill) in self.skills.iter().enumerate() {
            for prereq in &skill.requirements.prerequisites {
                match self.index.get(prereq) {
                    None => {
                        return Err(format!("{}: unknown prerequisite {}", skill.id, prereq));
                    }
                    Some(&j) if j >= i => {
                        return Err(format!(
                            "{}: prerequisite {} is not an earlier entry",
                            skill.id, prereq
                        ));
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(())
    }
}

/// All eleven skills, basic through legendary tier.
pub fn standard_skills() -> Vec<Skill> {
    vec![
        // Basic tier (level 1)
        Skill {
            id: "basic-push",
            name: "Basic Push",
            description: "A simple shove using brute force",
            kind: SkillKind::Attack,
            cost: 1,
            requirements: SkillRequirements {
                min_level: 1,
                attributes: vec![(AttributeType::Strength, 3)],
                prerequisites: vec![],
            },
            effects: SkillEffects {
                damage: Some(15),
                ..Default::default()
            },
            cooldown_turns: 0,
            energy_cost: 10,
        },
        Skill {
            id: "basic-defense",
            name: "Defensive Posture",
            description: "A braced stance that blunts incoming blows",
            kind: SkillKind::Defense,
            cost: 1,
            requirements: SkillRequirements {
                min_level: 1,
                attributes: vec![(AttributeType::Defense, 3)],
                prerequisites: vec![],
            },
            effects: SkillEffects {
                buffs: vec![(AttributeType::Defense, 5)],
                ..Default::default()
            },
            cooldown_turns: 2,
            energy_cost: 15,
        },
        Skill {
            id: "meditation",
            name: "Meditation",
            description: "Recovers vitality through stillness",
            kind: SkillKind::Utility,
            cost: 1,
            requirements: SkillRequirements {
                min_level: 1,
                attributes: vec![(AttributeType::MentalStrength, 3)],
                prerequisites: vec![],
            },
            effects: SkillEffects {
                healing: Some(20),
                ..Default::default()
            },
            cooldown_turns: 3,
            energy_cost: 0,
        },
        // Intermediate tier (level 3)
        Skill {
            id: "powerful-thrust",
            name: "Powerful Thrust",
            description: "A driving strike that lands hard",
            kind: SkillKind::Attack,
            cost: 2,
            requirements: SkillRequirements {
                min_level: 3,
                attributes: vec![(AttributeType::Strength, 6)],
                prerequisites: vec!["basic-push"],
            },
            effects: SkillEffects {
                damage: Some(25),
                ..Default::default()
            },
            cooldown_turns: 2,
            energy_cost: 20,
        },
        Skill {
            id: "agile-dodge",
            name: "Agile Dodge",
            description: "Slips past an attack in a blur",
            kind: SkillKind::Defense,
            cost: 2,
            requirements: SkillRequirements {
                min_level: 3,
                attributes: vec![(AttributeType::Dexterity, 6)],
                prerequisites: vec!["basic-defense"],
            },
            effects: SkillEffects {
                buffs: vec![(AttributeType::Speed, 3)],
                ..Default::default()
            },
            cooldown_turns: 3,
            energy_cost: 15,
        },
        Skill {
            id: "intimidate",
            name: "Intimidate",
            description: "Unnerves the opponent, sapping their edge",
            kind: SkillKind::Utility,
            cost: 2,
            requirements: SkillRequirements {
                min_level: 3,
                attributes: vec![(AttributeType::MentalStrength, 6)],
                prerequisites: vec!["meditation"],
            },
            effects: SkillEffects {
                debuffs: vec![
                    (AttributeType::Strength, 2),
                    (AttributeType::MentalStrength, 2),
                ],
                ..Default::default()
            },
            cooldown_turns: 4,
            energy_cost: 25,
        },
        // Advanced tier (level 5)
        Skill {
            id: "thunder-clap",
            name: "Thunder Clap",
            description: "A devastating open-palm blow",
            kind: SkillKind::Attack,
            cost: 3,
            requirements: SkillRequirements {
                min_level: 5,
                attributes: vec![
                    (AttributeType::Strength, 8),
                    (AttributeType::MentalStrength, 5),
                ],
                prerequisites: vec!["powerful-thrust"],
            },
            effects: SkillEffects {
                damage: Some(40),
                ..Default::default()
            },
            cooldown_turns: 4,
            energy_cost: 35,
        },
        Skill {
            id: "iron-wall",
            name: "Iron Wall",
            description: "An impenetrable defensive barrier",
            kind: SkillKind::Defense,
            cost: 3,
            requirements: SkillRequirements {
                min_level: 5,
                attributes: vec![(AttributeType::Defense, 8), (AttributeType::Strength, 5)],
                prerequisites: vec!["agile-dodge"],
            },
            effects: SkillEffects {
                buffs: vec![(AttributeType::Defense, 10)],
                ..Default::default()
            },
            cooldown_turns: 5,
            energy_cost: 30,
        },
        Skill {
            id: "battle-focus",
            name: "Battle Focus",
            description: "Heightens every attribute at once",
            kind: SkillKind::Utility,
            cost: 3,
            requirements: SkillRequirements {
                min_level: 5,
                attributes: vec![
                    (AttributeType::MentalStrength, 8),
                    (AttributeType::Speed, 5),
                ],
                prerequisites: vec!["intimidate"],
            },
            effects: SkillEffects {
                buffs: vec![
                    (AttributeType::Strength, 3),
                    (AttributeType::Dexterity, 3),
                    (AttributeType::MentalStrength, 3),
                    (AttributeType::Speed, 3),
                    (AttributeType::Defense, 3),
                ],
                ..Default::default()
            },
            cooldown_turns: 6,
            energy_cost: 40,
        },
        // Legendary tier (level 8)
        Skill {
            id: "dragon-rage",
            name: "Dragon Rage",
            description: "Unleashes inner power in a devastating assault",
            kind: SkillKind::Attack,
            cost: 5,
            requirements: SkillRequirements {
                min_level: 8,
                attributes: vec![
                    (AttributeType::Strength, 10),
                    (AttributeType::MentalStrength, 8),
                ],
                prerequisites: vec!["thunder-clap", "battle-focus"],
            },
            effects: SkillEffects {
                damage: Some(60),
                ..Default::default()
            },
            cooldown_turns: 6,
            energy_cost: 50,
        },
        Skill {
            id: "immortal-stance",
            name: "Immortal Stance",
            description: "Becomes all but untouchable",
            kind: SkillKind::Defense,
            cost: 5,
            requirements: SkillRequirements {
                min_level: 8,
                attributes: vec![
                    (AttributeType::Defense, 10),
                    (AttributeType::MentalStrength, 8),
                ],
                prerequisites: vec!["iron-wall", "battle-focus"],
            },
            effects: SkillEffects {
                healing: Some(30),
                buffs: vec![(AttributeType::Defense, 15)],
                ..Default::default()
            },
            cooldown_turns: 8,
            energy_cost: 45,
        },
    ]
}

/// Tree layout for rendering: node positions and the edges between tiers.
pub fn standard_skill_tree() -> Vec<SkillTreeNode> {
    vec![
        SkillTreeNode {
            id: "basic-push",
            position: (0, 0),
            connections: vec!["powerful-thrust"],
            unlocked: true,
        },
        SkillTreeNode {
            id: "basic-defense",
            position: (2, 0),
            connections: vec!["agile-dodge"],
            unlocked: true,
        },
        SkillTreeNode {
            id: "meditation",
            position: (4, 0),
            connections: vec!["intimidate"],
            unlocked: true,
        },
        SkillTreeNode {
            id: "powerful-thrust",
            position: (0, 2),
            connections: vec!["basic-push", "thunder-clap"],
            unlocked: false,
        },
        SkillTreeNode {
            id: "agile-dodge",
            position: (2, 2),
            connections: vec!["basic-defense", "iron-wall"],
            unlocked: false,
        },
        SkillTreeNode {
            id: "intimidate",
            position: (4, 2),
            connections: vec!["meditation", "battle-focus"],
            unlocked: false,
        },
        SkillTreeNode {
            id: "thunder-clap",
            position: (0, 4),
            connections: vec!["powerful-thrust", "dragon-rage"],
            unlocked: false,
        },
        SkillTreeNode {
            id: "iron-wall",
            position: (2, 4),
            connections: vec!["agile-dodge", "immortal-stance"],
            unlocked: false,
        },
        SkillTreeNode {
            id: "battle-focus",
            position: (4, 4),
            connections: vec!["intimidate", "dragon-rage", "immortal-stance"],
            unlocked: false,
        },
        SkillTreeNode {
            id: "dragon-rage",
            position: (1, 6),
            connections: vec!["thunder-clap", "battle-focus"],
            unlocked: false,
        },
        SkillTreeNode {
            id: "immortal-stance",
            position: (3, 6),
            connections: vec!["iron-wall", "battle-focus"],
            unlocked: false,
        },
    ]
}
