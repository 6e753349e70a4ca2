//! Spell macros: named sequences of casts logged together.
//!
//! Some effects need several separate casts. A macro records each step as its
//! own ledger entry so the ledger stays auditable.

use mana_core::{Efficiency, QuantityMode, Tier};
use serde::{Deserialize, Serialize};

use crate::session::CastOrder;

/// One cast template inside a macro.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroStep {
    pub spell_name: String,
    pub tier: Tier,
    #[serde(default)]
    pub efficiency: Efficiency,
    #[serde(default)]
    pub orders: u32,
    #[serde(default = "one")]
    pub quantity: u32,
}

fn one() -> u32 {
    1
}

impl MacroStep {
    pub fn new(spell_name: impl Into<String>, tier: Tier, efficiency: Efficiency) -> Self {
        Self {
            spell_name: spell_name.into(),
            tier,
            efficiency,
            orders: 0,
            quantity: 1,
        }
    }

    /// Cast order for this step, channelled through `arcana_name`.
    pub fn to_order(&self, arcana_name: &str, quantity_mode: QuantityMode) -> CastOrder {
        CastOrder::new(self.spell_name.clone(), self.tier, self.efficiency)
            .with_arcana(arcana_name)
            .with_orders(self.orders)
            .with_quantity(self.quantity)
            .with_quantity_mode(quantity_mode)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellMacro {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub steps: Vec<MacroStep>,
}

/// Macros shipped with the calculator.
pub fn builtin_macros() -> Vec<SpellMacro> {
    vec![SpellMacro {
        name: "Apparating (Frequency Up + Down)".to_owned(),
        description: "Teleportation requires two separate casts: Frequency Up and \
                      Frequency Down. Logging them as one 'Apparating' entry is a known \
                      audit error."
            .to_owned(),
        steps: vec![
            MacroStep::new("Frequency Up", Tier::Journeyman, Efficiency::Standard),
            MacroStep::new("Frequency Down", Tier::Journeyman, Efficiency::Standard),
        ],
    }]
}

/// Finds a built-in macro whose name starts with `prefix`, ignoring case.
pub fn find_builtin(prefix: &str) -> Option<SpellMacro> {
    let prefix = prefix.trim().to_ascii_lowercase();
    builtin_macros()
        .into_iter()
        .find(|m| m.name.to_ascii_lowercase().starts_with(&prefix))
}
