//! Hybrid (two-spell combo) cost pipeline.
//!
//! 1. Base cost of each component via [`base_cost`] (nothing else applied).
//! 2. `combined = a + b`
//! 3. `hybrid = combined × 2/3`, the Efficient discount on the pair,
//!    whatever each component's own efficiency.
//! 4. Situational modifier and order discount as for single casts.
//! 5. One ceiling to the hundredth. Hybrid casts have no quantity step.
//!
//! Components conventionally share a tier. That rule belongs to the caller;
//! the pipeline prices mismatched tiers the same way.

use crate::Mana;
use crate::arith::ensure_in_range;
use crate::cast::{base_cost, modify};
use crate::config::ManaConfig;
use crate::efficiency::Efficiency;
use crate::error::ManaError;
use crate::rounding::ceil_to_hundredths;
use crate::situational::Situational;
use crate::tier::Tier;

/// One half of a hybrid spell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HybridComponent {
    pub tier: Tier,
    pub efficiency: Efficiency,
}

impl HybridComponent {
    pub const fn new(tier: Tier, efficiency: Efficiency) -> Self {
        Self { tier, efficiency }
    }

    pub fn base_cost(&self) -> Mana {
        base_cost(self.tier, self.efficiency)
    }
}

/// Inputs for one hybrid cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HybridRequest {
    pub first: HybridComponent,
    pub second: HybridComponent,
    pub orders: i32,
    pub situational: Option<Situational>,
}

impl HybridRequest {
    pub const fn new(first: HybridComponent, second: HybridComponent) -> Self {
        Self {
            first,
            second,
            orders: 0,
            situational: None,
        }
    }

    #[must_use]
    pub const fn with_orders(mut self, orders: i32) -> Self {
        self.orders = orders;
        self
    }

    #[must_use]
    pub fn with_situational(mut self, situational: Option<Situational>) -> Self {
        self.situational = situational;
        self
    }

    /// Sum of both component base costs.
    pub fn combined(&self) -> Mana {
        self.first.base_cost() + self.second.base_cost()
    }

    /// Combined cost after the fixed hybrid multiplier.
    pub fn hybrid_base(&self) -> Mana {
        self.combined() * Mana::new(ManaConfig::HYBRID_NUMER, ManaConfig::HYBRID_DENOM)
    }

    /// Exact cost after modifiers, before rounding.
    pub fn unrounded_cost(&self) -> Result<Mana, ManaError> {
        modify(self.hybrid_base(), self.orders, self.situational.as_ref())
    }

    /// Rounded cost charged for the hybrid cast.
    ///
    /// # Errors
    ///
    /// [`ManaError::AmountOutOfRange`] when a situational factor pushes the
    /// cost beyond what can be priced.
    pub fn cost(&self) -> Result<Mana, ManaError> {
        ensure_in_range(ceil_to_hundredths(self.unrounded_cost()?))
    }
}
