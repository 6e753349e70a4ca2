//! Spell efficiency classes.
//!
//! Standard spells cost their tier's own value. Every other class costs a
//! fixed multiple of the tier below:
//!
//! | Class       | Multiplier | Novice fixed cost |
//! |-------------|-----------:|------------------:|
//! | Optimal     | 1×         | 0.33              |
//! | Efficient   | 2×         | 0.66              |
//! | Standard    | –          | 1.00              |
//! | Inefficient | 4×         | 1.33              |
//! | Strenuous   | 5×         | 1.66              |

use crate::Mana;
use crate::error::ManaError;

/// Cost class applied to a spell.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[strum(ascii_case_insensitive)]
pub enum Efficiency {
    #[default]
    Standard,
    Optimal,
    Efficient,
    Inefficient,
    Strenuous,
}

impl Efficiency {
    /// All classes in menu order.
    pub const ALL: [Efficiency; 5] = [
        Efficiency::Standard,
        Efficiency::Optimal,
        Efficiency::Efficient,
        Efficiency::Inefficient,
        Efficiency::Strenuous,
    ];

    /// All classes, cheapest first.
    pub const BY_COST: [Efficiency; 5] = [
        Efficiency::Optimal,
        Efficiency::Efficient,
        Efficiency::Standard,
        Efficiency::Inefficient,
        Efficiency::Strenuous,
    ];

    /// Parses an efficiency name, ignoring ASCII case and surrounding whitespace.
    pub fn parse(name: &str) -> Result<Self, ManaError> {
        name.trim()
            .parse()
            .map_err(|_| ManaError::UnknownEfficiency(name.to_owned()))
    }

    /// Multiple of the tier-below value, or `None` for Standard.
    pub const fn below_multiplier(self) -> Option<i64> {
        match self {
            Self::Standard => None,
            Self::Optimal => Some(1),
            Self::Efficient => Some(2),
            Self::Inefficient => Some(4),
            Self::Strenuous => Some(5),
        }
    }

    /// Fixed cost at Novice, where there is no tier below to derive from.
    pub fn novice_cost(self) -> Mana {
        let cents = match self {
            Self::Optimal => 33,
            Self::Efficient => 66,
            Self::Standard => 100,
            Self::Inefficient => 133,
            Self::Strenuous => 166,
        };
        Mana::new(cents, 100)
    }
}
