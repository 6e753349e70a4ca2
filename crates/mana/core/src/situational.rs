//! Situational modifiers: ad hoc multipliers for contextual bonuses.
//!
//! A modifier enters the pipeline at one of two points: straight after the
//! base cost, or after the order discount. Both points are multiplicative
//! and the ceiling is taken once at the end, so on exact values they agree.

use crate::Mana;
use crate::arith::{checked_mul, ensure_in_range};
use crate::error::ManaError;
use crate::rounding::parse_amount;

/// Point in the cost pipeline where a situational modifier is applied.
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
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Insertion {
    /// Right after the efficiency-based base cost.
    #[default]
    AfterEfficiency,
    /// After the Orders of Expression discount.
    AfterExpression,
}

/// A multiplier and the point where it applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Situational {
    pub factor: Mana,
    pub insertion: Insertion,
}

impl Situational {
    /// Modifier applied at the default point (after efficiency).
    pub fn new(factor: Mana) -> Self {
        Self {
            factor,
            insertion: Insertion::AfterEfficiency,
        }
    }

    pub fn after_expression(factor: Mana) -> Self {
        Self {
            factor,
            insertion: Insertion::AfterExpression,
        }
    }

    #[must_use]
    pub fn with_insertion(mut self, insertion: Insertion) -> Self {
        self.insertion = insertion;
        self
    }

    /// Reads free-text input such as `"1/4"` or `"0.25"`.
    ///
    /// Blank or unreadable text (including amounts beyond
    /// [`crate::ManaConfig::MAX_AMOUNT_PART`]) and negative factors yield `None`: free-text
    /// modifiers are lenient and fall back to "no modifier".
    pub fn parse(text: &str, insertion: Insertion) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let factor = parse_amount(trimmed).ok()?;
        if factor < Mana::from_integer(0) {
            return None;
        }
        Some(Self { factor, insertion })
    }

    /// Multiplies `cost` when `point` is this modifier's insertion point.
    ///
    /// # Errors
    ///
    /// [`ManaError::AmountOutOfRange`] when the factor or the product is too
    /// large to price.
    pub fn apply_at(&self, point: Insertion, cost: Mana) -> Result<Mana, ManaError> {
        if self.insertion == point {
            checked_mul(cost, ensure_in_range(self.factor)?)
        } else {
            Ok(cost)
        }
    }
}

/// Applies an optional modifier at `point`.
pub(crate) fn apply_optional(
    situational: Option<&Situational>,
    point: Insertion,
    cost: Mana,
) -> Result<Mana, ManaError> {
    match situational {
        Some(modifier) => modifier.apply_at(point, cost),
        None => Ok(cost),
    }
}
