use crate::core::constants::NUM_ATTRIBUTES;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Strength,
    Dexterity,
    MentalStrength,
    Speed,
    Defense,
}

impl AttributeType {
    pub fn all() -> [AttributeType; NUM_ATTRIBUTES] {
        [
            AttributeType::Strength,
            AttributeType::Dexterity,
            AttributeType::MentalStrength,
            AttributeType::Speed,
            AttributeType::Defense,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttributeType::Strength => "strength",
            AttributeType::Dexterity => "dexterity",
            AttributeType::MentalStrength => "mental strength",
            AttributeType::Speed => "speed",
            AttributeType::Defense => "defense",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AttributeType::Strength => 0,
            AttributeType::Dexterity => 1,
            AttributeType::MentalStrength => 2,
            AttributeType::Speed => 3,
            AttributeType::Defense => 4,
        }
    }
}

/// The five raw stats shared by characters and opponents.
///
/// Raw values are never mutated by combat; buffs and debuffs are layered on
/// top at read time (see `CombatCharacter::effective_attribute`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attributes {
    values: [u32; NUM_ATTRIBUTES],
}

impl Default for Attributes {
    fn default() -> Self {
        Self::uniform(5)
    }
}

impl Attributes {
    pub fn new(
        strength: u32,
        dexterity: u32,
        mental_strength: u32,
        speed: u32,
        defense: u32,
    ) -> Self {
        Self {
            values: [strength, dexterity, mental_strength, speed, defense],
        }
    }

    /// All five stats set to the same value.
    pub fn uniform(value: u32) -> Self {
        Self {
            values: [value; NUM_ATTRIBUTES],
        }
    }

    pub fn get(&self, attr: AttributeType) -> u32 {
        self.values[attr.index()]
    }

    pub fn set(&mut self, attr: AttributeType, value: u32) {
        self.values[attr.index()] = value;
    }

    pub fn increase(&mut self, attr: AttributeType, amount: u32) {
        self.values[attr.index()] = self.values[attr.index()].saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_attributes() {
        let attrs = Attributes::uniform(5);
        for attr in AttributeType::all() {
            assert_eq!(attrs.get(attr), 5);
        }
    }

    #[test]
    fn test_get_set() {
        let mut attrs = Attributes::uniform(5);
        attrs.set(AttributeType::Strength, 8);
        assert_eq!(attrs.get(AttributeType::Strength), 8);
        assert_eq!(attrs.get(AttributeType::Dexterity), 5);
    }

    #[test]
    fn test_increase_saturates() {
        let mut attrs = Attributes::uniform(5);
        attrs.set(AttributeType::Speed, u32::MAX);
        attrs.increase(AttributeType::Speed, 1);
        assert_eq!(attrs.get(AttributeType::Speed), u32::MAX);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, attr) in AttributeType::all().iter().enumerate() {
            assert_eq!(attr.index(), i);
        }
    }

    #[test]
    fn test_new_field_order() {
        let attrs = Attributes::new(1, 2, 3, 4, 5);
        assert_eq!(attrs.get(AttributeType::Strength), 1);
        assert_eq!(attrs.get(AttributeType::Dexterity), 2);
        assert_eq!(attrs.get(AttributeType::MentalStrength), 3);
        assert_eq!(attrs.get(AttributeType::Speed), 4);
        assert_eq!(attrs.get(AttributeType::Defense), 5);
    }
}
