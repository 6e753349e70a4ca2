//! Character record: who is casting and what they own.

use mana_core::{Arcana, ManaError, ManaPool, Tier, compute_pool};
use serde::{Deserialize, Serialize};

/// A caster with a declared highest tier and a list of owned arcana.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,
    pub highest_tier: Tier,
    #[serde(default)]
    pub arcana: Vec<Arcana>,
}

impl Character {
    pub const DEFAULT_NAME: &'static str = "New Character";

    pub fn new(name: impl Into<String>, highest_tier: Tier) -> Self {
        Self {
            name: name.into(),
            highest_tier,
            arcana: Vec::new(),
        }
    }

    /// Adds an arcana at or below the highest tier.
    ///
    /// # Errors
    ///
    /// [`ManaError::TierExceedsCap`] when `tier` is above the highest tier.
    pub fn add_arcana(&mut self, name: impl Into<String>, tier: Tier) -> Result<(), ManaError> {
        tier.ensure_within(self.highest_tier)?;
        self.arcana.push(Arcana::new(name, tier));
        Ok(())
    }

    /// Builder form of [`Self::add_arcana`].
    pub fn with_arcana(mut self, name: impl Into<String>, tier: Tier) -> Result<Self, ManaError> {
        self.add_arcana(name, tier)?;
        Ok(self)
    }

    /// Removes the first arcana called `name`, returning it.
    pub fn remove_arcana(&mut self, name: &str) -> Option<Arcana> {
        let index = self.arcana.iter().position(|a| a.name == name)?;
        Some(self.arcana.remove(index))
    }

    pub fn has_arcana(&self, name: &str) -> bool {
        self.arcana.iter().any(|a| a.name == name)
    }

    pub fn arcana_tier(&self, name: &str) -> Option<Tier> {
        self.arcana.iter().find(|a| a.name == name).map(|a| a.tier)
    }

    pub fn pool(&self) -> ManaPool {
        compute_pool(&self.arcana)
    }

    /// Tiers this character may cast at, high → low.
    pub fn castable_tiers(&self) -> Vec<Tier> {
        self.highest_tier.at_or_below().collect()
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME, Tier::Master)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mana_core::Mana;

    #[test]
    fn default_character() {
        let character = Character::default();
        assert_eq!(character.name, "New Character");
        assert_eq!(character.highest_tier, Tier::Master);
        assert!(character.arcana.is_empty());
        assert_eq!(character.pool().total, Mana::from_integer(0));
    }

    #[test]
    fn arcana_above_highest_tier_is_rejected() {
        let mut character = Character::new("Vale", Tier::Expert);
        assert_eq!(
            character.add_arcana("Sunspire", Tier::Master),
            Err(ManaError::TierExceedsCap {
                tier: Tier::Master,
                cap: Tier::Expert
            })
        );
        assert!(character.arcana.is_empty());
    }

    #[test]
    fn add_and_remove() {
        let mut character = Character::new("Vale", Tier::Expert)
            .with_arcana("Tidecall", Tier::Expert)
            .unwrap()
            .with_arcana("Ember", Tier::Apprentice)
            .unwrap();
        assert_eq!(character.pool().total, Mana::from_integer(37));
        assert_eq!(character.arcana_tier("Ember"), Some(Tier::Apprentice));

        let removed = character.remove_arcana("Tidecall").unwrap();
        assert_eq!(removed.tier, Tier::Expert);
        assert!(!character.has_arcana("Tidecall"));
        assert_eq!(character.remove_arcana("Tidecall"), None);
        assert_eq!(character.pool().total, Mana::from_integer(4));
    }

    #[test]
    fn castable_tiers_stop_at_highest() {
        let character = Character::new("Vale", Tier::Journeyman);
        assert_eq!(
            character.castable_tiers(),
            vec![Tier::Journeyman, Tier::Apprentice, Tier::Novice]
        );
    }
}
