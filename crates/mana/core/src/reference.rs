//! Reference tables for display and audit.
//!
//! [`relative_value`] is the exact "each tier is one third of the next"
//! relationship. The engine itself prices from the fixed tier table; this
//! helper only documents how far the rounded table sits from the ideal.

use crate::Mana;
use crate::cast::base_cost;
use crate::efficiency::Efficiency;
use crate::error::ManaError;
use crate::tier::Tier;

/// Exact value of `target` relative to `highest`: `1 / 3^(highest − target)`.
///
/// # Errors
///
/// [`ManaError::TierExceedsCap`] when `target` is above `highest`.
pub fn relative_value(highest: Tier, target: Tier) -> Result<Mana, ManaError> {
    target.ensure_within(highest)?;
    let steps = (highest.index() - target.index()) as u32;
    Ok(Mana::new(1, 3i64.pow(steps)))
}

/// `(tier, relative value)` for every tier at or below `highest`, low → high.
pub fn relative_value_matrix(highest: Tier) -> Vec<(Tier, Mana)> {
    Tier::ALL
        .iter()
        .take_while(|tier| **tier <= highest)
        .map(|&tier| (tier, Mana::new(1, 3i64.pow((highest.index() - tier.index()) as u32))))
        .collect()
}

/// One row of the tier/efficiency price table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostRow {
    pub tier: Tier,
    /// What one arcana of this tier adds to a pool.
    pub pool_value: Mana,
    /// Base cost per efficiency, in [`Efficiency::ALL`] order.
    pub costs: [(Efficiency, Mana); 5],
}

/// Price table for every tier, high → low.
pub fn cost_matrix() -> Vec<CostRow> {
    Tier::ALL
        .iter()
        .rev()
        .map(|&tier| CostRow {
            tier,
            pool_value: tier.mana(),
            costs: Efficiency::ALL.map(|efficiency| (efficiency, base_cost(tier, efficiency))),
        })
        .collect()
}
