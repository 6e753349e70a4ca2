//! Checked arithmetic on [`Mana`].
//!
//! Every amount the engine produces stays within
//! [`ManaConfig::MAX_AMOUNT_PART`], so rounding and formatting never overflow.
//! Operations that would leave that range fail with
//! [`ManaError::AmountOutOfRange`].

use num_traits::{CheckedAdd, CheckedMul, CheckedSub};

use crate::Mana;
use crate::config::ManaConfig;
use crate::error::ManaError;

/// Returns `value` when both its numerator and denominator are in range.
pub fn ensure_in_range(value: Mana) -> Result<Mana, ManaError> {
    if part_in_range(*value.numer()) && part_in_range(*value.denom()) {
        Ok(value)
    } else {
        Err(ManaError::AmountOutOfRange)
    }
}

pub(crate) fn part_in_range(part: i64) -> bool {
    part.unsigned_abs() <= ManaConfig::MAX_AMOUNT_PART.unsigned_abs()
}

pub fn checked_add(lhs: Mana, rhs: Mana) -> Result<Mana, ManaError> {
    lhs.checked_add(&rhs)
        .ok_or(ManaError::AmountOutOfRange)
        .and_then(ensure_in_range)
}

pub fn checked_sub(lhs: Mana, rhs: Mana) -> Result<Mana, ManaError> {
    lhs.checked_sub(&rhs)
        .ok_or(ManaError::AmountOutOfRange)
        .and_then(ensure_in_range)
}

pub fn checked_mul(lhs: Mana, rhs: Mana) -> Result<Mana, ManaError> {
    lhs.checked_mul(&rhs)
        .ok_or(ManaError::AmountOutOfRange)
        .and_then(ensure_in_range)
}
