//! Mana pool accumulation.
//!
//! `pool = Σ value(arcana.tier)` over every owned arcana. Each arcana adds its
//! absolute tier value; the character's highest tier plays no part.

use std::collections::BTreeMap;

use crate::Mana;
use crate::error::ManaError;
use crate::tier::Tier;

/// A named possession granting mana at its tier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arcana {
    pub name: String,
    pub tier: Tier,
}

impl Arcana {
    pub fn new(name: impl Into<String>, tier: Tier) -> Self {
        Self {
            name: name.into(),
            tier,
        }
    }

    pub fn value(&self) -> Mana {
        self.tier.mana()
    }
}

/// Total pool plus the per-arcana values behind it.
///
/// Pool amounts are never ceiling-rounded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ManaPool {
    pub total: Mana,
    /// Value per arcana name. A repeated name keeps the last value written.
    pub breakdown: BTreeMap<String, Mana>,
}

impl ManaPool {
    fn add(&mut self, name: &str, tier: Tier) {
        let value = tier.mana();
        self.total += value;
        self.breakdown.insert(name.to_owned(), value);
    }
}

/// Sums the tier values of `arcana`.
///
/// An empty list yields a zero total and an empty breakdown.
pub fn compute_pool<'a>(arcana: impl IntoIterator<Item = &'a Arcana>) -> ManaPool {
    let mut pool = ManaPool::default();
    for item in arcana {
        pool.add(&item.name, item.tier);
    }
    pool
}

/// Like [`compute_pool`], for `(name, tier name)` pairs given as text.
///
/// # Errors
///
/// [`ManaError::UnknownTier`] for the first tier name that does not parse.
pub fn compute_pool_from_names<'a>(
    arcana: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<ManaPool, ManaError> {
    let mut pool = ManaPool::default();
    for (name, tier) in arcana {
        pool.add(name, Tier::parse(tier)?);
    }
    Ok(pool)
}
