//! Error type shared by every engine operation.
//!
//! All failures are synchronous and total: an operation returns either a
//! complete value or one of these errors, never a partial result.

use crate::tier::Tier;

/// Failure raised by an engine operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ManaError {
    #[error("unknown tier `{0}`")]
    UnknownTier(String),

    #[error("unknown efficiency `{0}`")]
    UnknownEfficiency(String),

    /// Spell or arcana tier above the character's declared highest tier.
    #[error("tier {tier} exceeds the character's highest tier {cap}")]
    TierExceedsCap { tier: Tier, cap: Tier },

    #[error("invalid quantity {0}")]
    InvalidQuantity(i64),

    /// Text that is neither a decimal nor a `numerator/denominator` ratio.
    #[error("cannot parse amount `{0}`")]
    InvalidAmount(String),

    #[error("unknown display mode `{0}`")]
    UnknownDisplayMode(String),

    /// A cost, factor or total too large to price exactly.
    #[error("amount is outside the supported range")]
    AmountOutOfRange,
}

impl ManaError {
    /// Stable identifier for the variant, used in logs and CLI output.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownTier(_) => "unknown_tier",
            Self::UnknownEfficiency(_) => "unknown_efficiency",
            Self::TierExceedsCap { .. } => "tier_exceeds_cap",
            Self::InvalidQuantity(_) => "invalid_quantity",
            Self::InvalidAmount(_) => "invalid_amount",
            Self::UnknownDisplayMode(_) => "unknown_display_mode",
            Self::AmountOutOfRange => "amount_out_of_range",
        }
    }
}
