//! Ordered cast ledger.
//!
//! Append-only apart from undo-last and clear-all. Ids are assigned from a
//! monotonically increasing counter; undo does not rewind the counter, clear
//! resets it to 1.

use mana_core::{Mana, ManaError, checked_add, checked_sub};

use crate::entry::LedgerEntry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
    next_id: u64,
}

/// A ledger entry together with the pool left after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerRow<'a> {
    pub entry: &'a LedgerEntry,
    pub cost: Mana,
    pub remaining: Mana,
}

impl Ledger {
    pub const FIRST_ID: u64 = 1;

    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: Self::FIRST_ID,
        }
    }

    /// Rebuilds a ledger from stored entries; the next id follows the largest.
    pub fn from_entries(entries: Vec<LedgerEntry>) -> Self {
        let next_id = entries
            .iter()
            .map(|entry| entry.id)
            .max()
            .map_or(Self::FIRST_ID, |max| max + 1);
        Self { entries, next_id }
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn last(&self) -> Option<&LedgerEntry> {
        self.entries.last()
    }

    /// Hands out the next id.
    pub(crate) fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn push(&mut self, entry: LedgerEntry) -> &LedgerEntry {
        self.entries.push(entry);
        let last = self.entries.len() - 1;
        &self.entries[last]
    }

    /// Removes and returns the most recent entry.
    pub fn undo_last(&mut self) -> Option<LedgerEntry> {
        self.entries.pop()
    }

    /// Removes every entry and restarts ids at 1.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_id = Self::FIRST_ID;
    }

    /// Sum of every entry's charged cost.
    pub fn total_spent(&self) -> Result<Mana, ManaError> {
        sum_costs(&self.entries)
    }

    /// Each entry with the pool remaining after it, starting from `pool`.
    pub fn rows(&self, pool: Mana) -> Result<Vec<LedgerRow<'_>>, ManaError> {
        let mut remaining = pool;
        let mut rows = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let cost = entry.cost()?;
            remaining = checked_sub(remaining, cost)?;
            rows.push(LedgerRow {
                entry,
                cost,
                remaining,
            });
        }
        Ok(rows)
    }
}

/// Checked sum of stored costs; fails on unreadable or oversized totals.
pub(crate) fn sum_costs(entries: &[LedgerEntry]) -> Result<Mana, ManaError> {
    entries
        .iter()
        .try_fold(Mana::from_integer(0), |total, entry| checked_add(total, entry.cost()?))
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
