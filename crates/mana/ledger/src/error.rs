//! Errors raised by the casting workflow and import path.

use mana_core::{ManaError, Tier};

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error(transparent)]
    Engine(#[from] ManaError),

    #[error("spell name is required")]
    MissingSpellName,

    /// Hybrid components must share a tier.
    #[error("hybrid spells must share a tier (got {first} and {second})")]
    HybridTierMismatch { first: Tier, second: Tier },

    /// Hybrid casts are priced once; there is no quantity step.
    #[error("hybrid spells are cast one at a time (got quantity {0})")]
    HybridQuantity(u32),

    #[error("character has no arcana named `{0}`")]
    UnknownArcana(String),

    #[error("malformed import document: {0}")]
    MalformedImport(#[source] serde_json::Error),
}

impl LedgerError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Engine(err) => err.error_code(),
            Self::MissingSpellName => "missing_spell_name",
            Self::HybridTierMismatch { .. } => "hybrid_tier_mismatch",
            Self::HybridQuantity(_) => "hybrid_quantity",
            Self::UnknownArcana(_) => "unknown_arcana",
            Self::MalformedImport(_) => "malformed_import",
        }
    }
}
