//! Casting workflow over one character and its ledger.
//!
//! A [`Session`] is single-writer state for one user. It validates a
//! [`CastOrder`] against the character, prices it through the engine, and
//! appends the result to the ledger.

use mana_core::{
    CastRequest, Efficiency, HybridComponent, HybridRequest, Insertion, Mana, ManaPool,
    QuantityMode, Situational, Tier, checked_sub, exact_string,
};

use crate::character::Character;
use crate::entry::LedgerEntry;
use crate::error::LedgerError;
use crate::export::{ExportDocument, ImportDocument};
use crate::ledger::{Ledger, LedgerRow};
use crate::macros::SpellMacro;

/// What the caster asked for, before validation and pricing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastOrder {
    pub spell_name: String,
    pub arcana_name: String,
    pub tier: Tier,
    pub efficiency: Efficiency,
    pub orders: u32,
    pub quantity: u32,
    pub quantity_mode: QuantityMode,
    /// Free-text situational modifier; blank for none.
    pub situational: String,
    /// Second spell of a hybrid cast.
    pub hybrid: Option<HybridComponent>,
}

impl CastOrder {
    pub fn new(spell_name: impl Into<String>, tier: Tier, efficiency: Efficiency) -> Self {
        Self {
            spell_name: spell_name.into(),
            arcana_name: String::new(),
            tier,
            efficiency,
            orders: 0,
            quantity: 1,
            quantity_mode: QuantityMode::default(),
            situational: String::new(),
            hybrid: None,
        }
    }

    #[must_use]
    pub fn with_arcana(mut self, arcana_name: impl Into<String>) -> Self {
        self.arcana_name = arcana_name.into();
        self
    }

    #[must_use]
    pub fn with_orders(mut self, orders: u32) -> Self {
        self.orders = orders;
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub fn with_quantity_mode(mut self, quantity_mode: QuantityMode) -> Self {
        self.quantity_mode = quantity_mode;
        self
    }

    #[must_use]
    pub fn with_situational(mut self, situational: impl Into<String>) -> Self {
        self.situational = situational.into();
        self
    }

    #[must_use]
    pub fn with_hybrid(mut self, tier: Tier, efficiency: Efficiency) -> Self {
        self.hybrid = Some(HybridComponent::new(tier, efficiency));
        self
    }

    fn orders(&self) -> i32 {
        i32::try_from(self.orders).unwrap_or(i32::MAX)
    }
}

/// Price preview for an order that has not been logged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quote {
    pub cost: Mana,
    pub remaining_after: Mana,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    character: Character,
    ledger: Ledger,
    insertion: Insertion,
}

impl Session {
    pub fn new(character: Character) -> Self {
        Self {
            character,
            ledger: Ledger::new(),
            insertion: Insertion::default(),
        }
    }

    /// Sets where situational modifiers enter the pipeline for every cast.
    #[must_use]
    pub fn with_insertion(mut self, insertion: Insertion) -> Self {
        self.insertion = insertion;
        self
    }

    pub fn set_insertion(&mut self, insertion: Insertion) {
        self.insertion = insertion;
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Character edits never touch the ledger.
    pub fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn pool(&self) -> ManaPool {
        self.character.pool()
    }

    /// Pool total minus every charged cost.
    pub fn remaining(&self) -> Result<Mana, LedgerError> {
        Ok(checked_sub(self.pool().total, self.ledger.total_spent()?)?)
    }

    /// Ledger entries with the pool remaining after each.
    pub fn rows(&self) -> Result<Vec<LedgerRow<'_>>, LedgerError> {
        Ok(self.ledger.rows(self.pool().total)?)
    }

    /// Prices `order` without logging it.
    ///
    /// Quotes skip the spell-name and quantity checks so that a form can
    /// preview a half-filled order, including quantity 0.
    pub fn quote(&self, order: &CastOrder) -> Result<Quote, LedgerError> {
        let cost = self.price(order)?;
        Ok(Quote {
            cost,
            remaining_after: checked_sub(self.remaining()?, cost)?,
        })
    }

    /// Validates, prices and appends `order`.
    pub fn cast(&mut self, order: CastOrder) -> Result<&LedgerEntry, LedgerError> {
        let entry = self.prepare(order)?;
        let entry = self.commit(entry);
        tracing::info!(
            id = entry.id,
            spell = %entry.spell_name,
            cost = %entry.exact_cost,
            hybrid = entry.is_hybrid,
            "cast logged"
        );
        Ok(entry)
    }

    /// Logs every step of `spell_macro` through `arcana_name`.
    ///
    /// Either every step is logged or none is. Returns the new entry ids.
    pub fn cast_macro(
        &mut self,
        spell_macro: &SpellMacro,
        arcana_name: &str,
        quantity_mode: QuantityMode,
    ) -> Result<Vec<u64>, LedgerError> {
        let prepared = spell_macro
            .steps
            .iter()
            .map(|step| self.prepare(step.to_order(arcana_name, quantity_mode)))
            .collect::<Result<Vec<_>, _>>()?;

        let ids = prepared
            .into_iter()
            .map(|entry| self.commit(entry).id)
            .collect();
        tracing::info!(name = %spell_macro.name, ?ids, "macro logged");
        Ok(ids)
    }

    /// Removes the last cast.
    pub fn undo_last(&mut self) -> Option<LedgerEntry> {
        let removed = self.ledger.undo_last();
        if let Some(entry) = &removed {
            tracing::info!(id = entry.id, spell = %entry.spell_name, "cast undone");
        }
        removed
    }

    pub fn clear_ledger(&mut self) {
        tracing::info!(entries = self.ledger.len(), "ledger cleared");
        self.ledger.clear();
    }

    /// Replaces the character and starts a fresh ledger.
    pub fn load_character(&mut self, character: Character) {
        tracing::info!(name = %character.name, "character loaded");
        self.character = character;
        self.ledger.clear();
    }

    pub fn export(&self) -> Result<ExportDocument, LedgerError> {
        Ok(ExportDocument {
            character: self.character.clone(),
            total_pool: exact_string(self.pool().total),
            remaining: exact_string(self.remaining()?),
            ledger: self.ledger.entries().to_vec(),
        })
    }

    /// Applies whichever parts `document` carries.
    pub fn import(&mut self, document: ImportDocument) {
        if let Some(character) = document.character {
            tracing::info!(name = %character.name, "character imported");
            self.character = character;
        }
        if let Some(entries) = document.ledger {
            self.ledger = Ledger::from_entries(entries);
            tracing::info!(
                entries = self.ledger.len(),
                next_id = self.ledger.next_id(),
                "ledger imported"
            );
        }
    }

    fn commit(&mut self, mut entry: LedgerEntry) -> &LedgerEntry {
        entry.id = self.ledger.allocate_id();
        self.ledger.push(entry)
    }

    /// Validates and prices `order`, leaving the id to [`Self::commit`].
    fn prepare(&self, order: CastOrder) -> Result<LedgerEntry, LedgerError> {
        let spell_name = order.spell_name.trim();
        if spell_name.is_empty() {
            return Err(LedgerError::MissingSpellName);
        }
        if order.quantity == 0 {
            return Err(mana_core::ManaError::InvalidQuantity(0).into());
        }
        let arcana_name = order.arcana_name.trim();
        if !arcana_name.is_empty() && !self.character.has_arcana(arcana_name) {
            return Err(LedgerError::UnknownArcana(arcana_name.to_owned()));
        }

        let cost = self.price(&order)?;

        Ok(LedgerEntry {
            id: 0,
            spell_name: spell_name.to_owned(),
            arcana_name: arcana_name.to_owned(),
            spell_tier: order.tier,
            efficiency: order.efficiency,
            orders: order.orders,
            quantity: order.quantity,
            quantity_mode: order.quantity_mode,
            situational: order.situational.trim().to_owned(),
            is_hybrid: order.hybrid.is_some(),
            hybrid_b_tier: order.hybrid.map(|b| b.tier),
            hybrid_b_efficiency: order.hybrid.map(|b| b.efficiency),
            exact_cost: exact_string(cost),
        })
    }

    fn price(&self, order: &CastOrder) -> Result<Mana, LedgerError> {
        let cap = self.character.highest_tier;
        order.tier.ensure_within(cap)?;
        let situational = self.situational(&order.situational);

        match order.hybrid {
            Some(second) => {
                second.tier.ensure_within(cap)?;
                if second.tier != order.tier {
                    return Err(LedgerError::HybridTierMismatch {
                        first: order.tier,
                        second: second.tier,
                    });
                }
                if order.quantity != 1 {
                    return Err(LedgerError::HybridQuantity(order.quantity));
                }
                let first = HybridComponent::new(order.tier, order.efficiency);
                Ok(HybridRequest::new(first, second)
                    .with_orders(order.orders())
                    .with_situational(situational)
                    .cost()?)
            }
            None => Ok(CastRequest::new(order.tier, order.efficiency)
                .with_orders(order.orders())
                .with_quantity(i64::from(order.quantity))
                .with_quantity_mode(order.quantity_mode)
                .with_situational(situational)
                .cost()?),
        }
    }

    /// Unreadable modifier text counts as no modifier.
    fn situational(&self, text: &str) -> Option<Situational> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let parsed = Situational::parse(trimmed, self.insertion);
        if parsed.is_none() {
            tracing::warn!(text = trimmed, "ignoring unreadable situational modifier");
        }
        parsed
    }
}
