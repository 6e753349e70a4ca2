//! Spreadsheet compatibility mode.
//!
//! Reproduces the reference spreadsheet's arithmetic: flat integer tier
//! values, multiplier × tier-below for non-Standard classes, the Novice fixed
//! costs, and a plain `unit × quantity` charge. No order discount, no
//! situational modifier, no ceiling.
//!
//! The tables below are kept separate from [`crate::config::ManaConfig`] on
//! purpose: retuning the primary engine must not move spreadsheet output.

use crate::error::ManaError;

/// Tier names and values, high → low, as laid out in the sheet.
const SHEET_TIERS: [(&str, f64); 6] = [
    ("Ascendant", 300.0),
    ("Master", 100.0),
    ("Expert", 33.0),
    ("Journeyman", 11.0),
    ("Apprentice", 4.0),
    ("Novice", 1.0),
];

const SHEET_NOVICE_COSTS: [(&str, f64); 5] = [
    ("Standard", 1.00),
    ("Efficient", 0.66),
    ("Optimal", 0.33),
    ("Inefficient", 1.33),
    ("Strenuous", 1.66),
];

const SHEET_BELOW_MULTIPLIERS: [(&str, f64); 4] = [
    ("Efficient", 2.0),
    ("Optimal", 1.0),
    ("Inefficient", 4.0),
    ("Strenuous", 5.0),
];

fn lookup(table: &[(&str, f64)], name: &str) -> Option<f64> {
    let name = name.trim();
    table
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| *value)
}

fn tier_position(name: &str) -> Result<usize, ManaError> {
    let trimmed = name.trim();
    SHEET_TIERS
        .iter()
        .position(|(key, _)| key.eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| ManaError::UnknownTier(name.to_owned()))
}

fn known_efficiency(name: &str) -> Result<(), ManaError> {
    match lookup(&SHEET_NOVICE_COSTS, name) {
        Some(_) => Ok(()),
        None => Err(ManaError::UnknownEfficiency(name.to_owned())),
    }
}

/// Sheet value of a tier.
pub fn tier_value(tier: &str) -> Result<f64, ManaError> {
    Ok(SHEET_TIERS[tier_position(tier)?].1)
}

/// Cost of one cast in spreadsheet mode.
pub fn spell_cost(tier: &str, efficiency: &str) -> Result<f64, ManaError> {
    let position = tier_position(tier)?;
    known_efficiency(efficiency)?;

    // Novice is the last row: nothing below it.
    let Some((_, below)) = SHEET_TIERS.get(position + 1) else {
        return lookup(&SHEET_NOVICE_COSTS, efficiency)
            .ok_or_else(|| ManaError::UnknownEfficiency(efficiency.to_owned()));
    };

    match lookup(&SHEET_BELOW_MULTIPLIERS, efficiency) {
        Some(multiplier) => Ok(multiplier * below),
        None => Ok(SHEET_TIERS[position].1),
    }
}

/// Total pool for a list of arcana tier names.
pub fn pool<'a>(tiers: impl IntoIterator<Item = &'a str>) -> Result<f64, ManaError> {
    tiers
        .into_iter()
        .try_fold(0.0, |total, tier| -> Result<f64, ManaError> {
            Ok(total + tier_value(tier)?)
        })
}

/// One row of the sheet's spell log.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetCast<'a> {
    pub tier: &'a str,
    pub efficiency: &'a str,
    pub quantity: u32,
}

impl<'a> SheetCast<'a> {
    pub const fn new(tier: &'a str, efficiency: &'a str, quantity: u32) -> Self {
        Self {
            tier,
            efficiency,
            quantity,
        }
    }
}

/// `pool − Σ(unit cost × quantity)` over the log.
pub fn remaining(pool: f64, log: &[SheetCast<'_>]) -> Result<f64, ManaError> {
    log.iter().try_fold(pool, |left, cast| -> Result<f64, ManaError> {
        let unit = spell_cost(cast.tier, cast.efficiency)?;
        Ok(left - unit * f64::from(cast.quantity))
    })
}
