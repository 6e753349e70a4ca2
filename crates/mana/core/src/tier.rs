//! Power tiers and their absolute mana values.
//!
//! Tiers are indexed low → high: Novice=0 … Ascendant=5. The derived `Ord`
//! follows the index, so "spell tier must not exceed the character's highest
//! tier" is a plain `<=` comparison.

use crate::Mana;
use crate::config::ManaConfig;
use crate::error::ManaError;

/// One of the six ordered power tiers.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Tier {
    Novice = 0,
    Apprentice = 1,
    Journeyman = 2,
    Expert = 3,
    Master = 4,
    Ascendant = 5,
}

impl Tier {
    /// All tiers, low → high.
    pub const ALL: [Tier; 6] = [
        Tier::Novice,
        Tier::Apprentice,
        Tier::Journeyman,
        Tier::Expert,
        Tier::Master,
        Tier::Ascendant,
    ];

    pub const LOWEST: Tier = Tier::Novice;
    pub const HIGHEST: Tier = Tier::Ascendant;

    /// Parses a tier name, ignoring ASCII case and surrounding whitespace.
    pub fn parse(name: &str) -> Result<Self, ManaError> {
        name.trim()
            .parse()
            .map_err(|_| ManaError::UnknownTier(name.to_owned()))
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::ALL.len() {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Absolute mana value of the tier (Novice=1 … Ascendant=300).
    pub const fn value(self) -> i64 {
        ManaConfig::TIER_VALUES[self.index()]
    }

    /// [`Self::value`] as an exact [`Mana`] amount.
    pub fn mana(self) -> Mana {
        Mana::from_integer(self.value())
    }

    /// The tier one step lower, or `None` for Novice.
    pub const fn below(self) -> Option<Self> {
        match self.index() {
            0 => None,
            index => Self::from_index(index - 1),
        }
    }

    /// The tier one step higher, or `None` for Ascendant.
    pub const fn above(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Tiers at or below `self`, high → low.
    ///
    /// This is the list of tiers a character whose highest tier is `self`
    /// may own arcana at or cast spells at.
    pub fn at_or_below(self) -> impl Iterator<Item = Tier> {
        Self::ALL.into_iter().take(self.index() + 1).rev()
    }

    /// Fails with [`ManaError::TierExceedsCap`] when `self` is above `cap`.
    pub fn ensure_within(self, cap: Tier) -> Result<Self, ManaError> {
        if self > cap {
            Err(ManaError::TierExceedsCap { tier: self, cap })
        } else {
            Ok(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_ordering() {
        assert!(Tier::Novice < Tier::Apprentice);
        assert!(Tier::Apprentice < Tier::Journeyman);
        assert!(Tier::Journeyman < Tier::Expert);
        assert!(Tier::Expert < Tier::Master);
        assert!(Tier::Master < Tier::Ascendant);
        for (index, tier) in Tier::ALL.iter().enumerate() {
            assert_eq!(tier.index(), index);
        }
    }

    #[test]
    fn values_match_table() {
        let values: Vec<i64> = Tier::ALL.iter().map(|t| t.value()).collect();
        assert_eq!(values, vec![1, 4, 11, 33, 100, 300]);
    }

    #[test]
    fn below_and_above() {
        assert_eq!(Tier::Novice.below(), None);
        assert_eq!(Tier::Apprentice.below(), Some(Tier::Novice));
        assert_eq!(Tier::Ascendant.below(), Some(Tier::Master));
        assert_eq!(Tier::Ascendant.above(), None);
        assert_eq!(Tier::Expert.above(), Some(Tier::Master));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Tier::parse("master"), Ok(Tier::Master));
        assert_eq!(Tier::parse("NOVICE"), Ok(Tier::Novice));
        assert_eq!(Tier::parse(" Expert "), Ok(Tier::Expert));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(
            Tier::parse("Grandmaster"),
            Err(ManaError::UnknownTier("Grandmaster".to_owned()))
        );
        assert!(Tier::parse("").is_err());
    }

    #[test]
    fn display_uses_title_case() {
        assert_eq!(Tier::Journeyman.to_string(), "Journeyman");
        assert_eq!(Tier::Ascendant.as_ref(), "Ascendant");
    }

    #[test]
    fn at_or_below_runs_high_to_low() {
        let tiers: Vec<Tier> = Tier::Expert.at_or_below().collect();
        assert_eq!(
            tiers,
            vec![Tier::Expert, Tier::Journeyman, Tier::Apprentice, Tier::Novice]
        );
        assert_eq!(Tier::Novice.at_or_below().count(), 1);
    }

    #[test]
    fn ensure_within_cap() {
        assert_eq!(Tier::Expert.ensure_within(Tier::Master), Ok(Tier::Expert));
        assert_eq!(Tier::Master.ensure_within(Tier::Master), Ok(Tier::Master));
        assert_eq!(
            Tier::Ascendant.ensure_within(Tier::Master),
            Err(ManaError::TierExceedsCap {
                tier: Tier::Ascendant,
                cap: Tier::Master
            })
        );
    }
}
