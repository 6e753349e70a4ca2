//! Single-spell cost pipeline.
//!
//! ```text
//! base        = Novice fixed cost            (tier = Novice)
//!             | value(tier)                  (Standard)
//!             | multiplier × value(tier − 1)  (other classes)
//! running     = base × situational           (after_efficiency only)
//! running     = running × (1 − discount)
//! running     = running × situational        (after_expression only)
//! bundled     = ceil₂(running × quantity)
//! per_cast    = ceil₂(running) × quantity
//! ```
//!
//! `ceil₂` is applied exactly once, on exact rationals. Every step is
//! checked; an amount too large to price is [`ManaError::AmountOutOfRange`].

use crate::Mana;
use crate::arith::{checked_mul, ensure_in_range};
use crate::config::ManaConfig;
use crate::efficiency::Efficiency;
use crate::error::ManaError;
use crate::expression::apply_order_discount;
use crate::rounding::ceil_to_hundredths;
use crate::situational::{Insertion, Situational, apply_optional};
use crate::tier::Tier;

/// How the ceiling interacts with a multi-cast quantity.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum QuantityMode {
    /// Multiply first, ceil the total once.
    #[default]
    Bundled,
    /// Ceil each cast, then multiply.
    PerCast,
}

/// Unmodified cost of one cast, before orders or situational modifiers.
///
/// Standard → the tier's own value (Expert = 33).
/// Others   → multiplier × tier below (Expert Efficient = 2 × 11 = 22).
/// Novice   → fixed decimal (Novice Efficient = 0.66).
pub fn base_cost(tier: Tier, efficiency: Efficiency) -> Mana {
    match (tier.below(), efficiency.below_multiplier()) {
        (None, _) => efficiency.novice_cost(),
        (Some(_), None) => tier.mana(),
        (Some(below), Some(multiplier)) => below.mana() * Mana::from_integer(multiplier),
    }
}

/// Runs the base cost through the situational and discount steps.
pub(crate) fn modify(
    base: Mana,
    orders: i32,
    situational: Option<&Situational>,
) -> Result<Mana, ManaError> {
    let running = apply_optional(situational, Insertion::AfterEfficiency, base)?;
    let running = apply_order_discount(running, orders)?;
    apply_optional(situational, Insertion::AfterExpression, running)
}

/// Inputs for one single-spell cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastRequest {
    pub tier: Tier,
    pub efficiency: Efficiency,
    /// Orders of Expression; values ≤ 0 mean no discount.
    pub orders: i32,
    pub quantity: i64,
    pub quantity_mode: QuantityMode,
    pub situational: Option<Situational>,
}

impl CastRequest {
    /// One cast, no orders, no modifier, bundled rounding.
    pub const fn new(tier: Tier, efficiency: Efficiency) -> Self {
        Self {
            tier,
            efficiency,
            orders: 0,
            quantity: 1,
            quantity_mode: ManaConfig::DEFAULT_QUANTITY_MODE,
            situational: None,
        }
    }

    #[must_use]
    pub const fn with_orders(mut self, orders: i32) -> Self {
        self.orders = orders;
        self
    }

    #[must_use]
    pub const fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    #[must_use]
    pub const fn with_quantity_mode(mut self, quantity_mode: QuantityMode) -> Self {
        self.quantity_mode = quantity_mode;
        self
    }

    #[must_use]
    pub fn with_situational(mut self, situational: Option<Situational>) -> Self {
        self.situational = situational;
        self
    }

    /// Base cost of one cast.
    pub fn base_cost(&self) -> Mana {
        base_cost(self.tier, self.efficiency)
    }

    /// Exact cost of one cast after modifiers, before any rounding.
    pub fn unit_cost(&self) -> Result<Mana, ManaError> {
        modify(self.base_cost(), self.orders, self.situational.as_ref())
    }

    /// Rounded total charged for `quantity` casts.
    ///
    /// # Errors
    ///
    /// - [`ManaError::InvalidQuantity`] when `quantity` is negative.
    /// - [`ManaError::AmountOutOfRange`] when the cost is too large to price.
    pub fn cost(&self) -> Result<Mana, ManaError> {
        if self.quantity < 0 {
            return Err(ManaError::InvalidQuantity(self.quantity));
        }
        let quantity = Mana::from_integer(self.quantity);
        let unit = self.unit_cost()?;

        let total = match self.quantity_mode {
            QuantityMode::Bundled => ceil_to_hundredths(checked_mul(unit, quantity)?),
            QuantityMode::PerCast => checked_mul(ceil_to_hundredths(unit), quantity)?,
        };
        ensure_in_range(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whole(value: i64) -> Mana {
        Mana::from_integer(value)
    }

    #[test]
    fn standard_costs_the_tier_value() {
        for tier in Tier::ALL {
            assert_eq!(base_cost(tier, Efficiency::Standard), tier.mana(), "{tier}");
        }
    }

    #[test]
    fn non_standard_costs_multiple_of_tier_below() {
        assert_eq!(base_cost(Tier::Master, Efficiency::Efficient), whole(66));
        assert_eq!(base_cost(Tier::Master, Efficiency::Optimal), whole(33));
        assert_eq!(base_cost(Tier::Master, Efficiency::Inefficient), whole(132));
        assert_eq!(base_cost(Tier::Master, Efficiency::Strenuous), whole(165));
        assert_eq!(base_cost(Tier::Expert, Efficiency::Efficient), whole(22));
        assert_eq!(base_cost(Tier::Journeyman, Efficiency::Efficient), whole(8));
        assert_eq!(base_cost(Tier::Apprentice, Efficiency::Efficient), whole(2));
        assert_eq!(base_cost(Tier::Ascendant, Efficiency::Efficient), whole(200));
    }

    #[test]
    fn novice_uses_fixed_table() {
        assert_eq!(base_cost(Tier::Novice, Efficiency::Standard), whole(1));
        assert_eq!(base_cost(Tier::Novice, Efficiency::Efficient), Mana::new(66, 100));
        assert_eq!(base_cost(Tier::Novice, Efficiency::Strenuous), Mana::new(166, 100));
    }

    #[test]
    fn efficiency_ordering_holds_at_every_tier() {
        for tier in Tier::ALL {
            let costs: Vec<Mana> = Efficiency::BY_COST
                .iter()
                .map(|&efficiency| base_cost(tier, efficiency))
                .collect();
            assert!(costs.windows(2).all(|w| w[0] <= w[1]), "{tier}: {costs:?}");
            assert!(costs.iter().all(|c| *c >= whole(0)));
        }
    }

    #[test]
    fn expert_standard_plain() {
        let cost = CastRequest::new(Tier::Expert, Efficiency::Standard).cost();
        assert_eq!(cost, Ok(whole(33)));
    }

    #[test]
    fn expert_standard_third_order() {
        let cost = CastRequest::new(Tier::Expert, Efficiency::Standard)
            .with_orders(3)
            .cost();
        assert_eq!(cost, Ok(Mana::new(2805, 100)));
    }

    #[test]
    fn sixth_order_is_max() {
        let request = CastRequest::new(Tier::Expert, Efficiency::Standard);
        assert_eq!(
            request.with_orders(6).cost(),
            request.with_orders(7).cost()
        );
    }

    #[test]
    fn situational_after_efficiency() {
        let cost = CastRequest::new(Tier::Expert, Efficiency::Standard)
            .with_situational(Some(Situational::new(Mana::new(1, 4))))
            .unit_cost();
        assert_eq!(cost, Ok(Mana::new(825, 100)));
    }

    #[test]
    fn situational_after_expression() {
        let cost = CastRequest::new(Tier::Expert, Efficiency::Standard)
            .with_orders(3)
            .with_situational(Some(Situational::after_expression(Mana::new(1, 4))))
            .unit_cost();
        assert_eq!(cost, Ok(Mana::new(70125, 10000)));
    }

    #[test]
    fn insertion_points_agree_on_exact_values() {
        // Journeyman Standard (11), 1st order, ×1/3 → 209/60 ≈ 3.4833 → 3.49.
        let third = Mana::new(1, 3);
        let efficiency_first = CastRequest::new(Tier::Journeyman, Efficiency::Standard)
            .with_orders(1)
            .with_situational(Some(Situational::new(third)));
        let expression_first =
            efficiency_first.with_situational(Some(Situational::after_expression(third)));

        assert_eq!(efficiency_first.unit_cost(), Ok(Mana::new(209, 60)));
        assert_eq!(expression_first.unit_cost(), Ok(Mana::new(209, 60)));
        assert_eq!(efficiency_first.cost(), Ok(Mana::new(349, 100)));
        assert_eq!(expression_first.cost(), Ok(Mana::new(349, 100)));
    }

    #[test]
    fn bundled_whole_quantity() {
        let request = CastRequest::new(Tier::Expert, Efficiency::Standard).with_quantity(3);
        assert_eq!(request.cost(), Ok(whole(99)));
        assert_eq!(
            request.with_quantity_mode(QuantityMode::PerCast).cost(),
            Ok(whole(99))
        );
    }

    #[test]
    fn bundled_is_never_more_than_per_cast() {
        // Novice Efficient with 1st order: 0.66 × 0.95 = 0.627 per cast.
        let request = CastRequest::new(Tier::Novice, Efficiency::Efficient)
            .with_orders(1)
            .with_quantity(3);
        let bundled = request.cost().unwrap();
        let per_cast = request
            .with_quantity_mode(QuantityMode::PerCast)
            .cost()
            .unwrap();
        // bundled: ceil(1.881) = 1.89; per_cast: 0.63 × 3 = 1.89
        assert_eq!(bundled, Mana::new(189, 100));
        assert_eq!(per_cast, Mana::new(189, 100));

        let request = CastRequest::new(Tier::Expert, Efficiency::Standard)
            .with_situational(Some(Situational::new(Mana::new(1, 3))))
            .with_quantity(3);
        let bundled = request.cost().unwrap();
        let per_cast = request
            .with_quantity_mode(QuantityMode::PerCast)
            .cost()
            .unwrap();
        // 11 per cast exactly either way.
        assert_eq!(bundled, whole(33));
        assert_eq!(per_cast, whole(33));

        let request = CastRequest::new(Tier::Journeyman, Efficiency::Standard)
            .with_situational(Some(Situational::new(Mana::new(1, 3))))
            .with_quantity(3);
        // 11/3 per cast: bundled = 11, per_cast = 3.67 × 3 = 11.01
        assert_eq!(request.cost(), Ok(whole(11)));
        assert_eq!(
            request.with_quantity_mode(QuantityMode::PerCast).cost(),
            Ok(Mana::new(1101, 100))
        );
    }

    #[test]
    fn zero_quantity_costs_nothing() {
        let request = CastRequest::new(Tier::Master, Efficiency::Strenuous)
            .with_orders(2)
            .with_quantity(0);
        assert_eq!(request.cost(), Ok(whole(0)));
        assert_eq!(
            request.with_quantity_mode(QuantityMode::PerCast).cost(),
            Ok(whole(0))
        );
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let request = CastRequest::new(Tier::Expert, Efficiency::Standard).with_quantity(-1);
        assert_eq!(request.cost(), Err(ManaError::InvalidQuantity(-1)));
    }

    #[test]
    fn oversized_costs_are_errors_not_panics() {
        let huge = Situational::new(Mana::from_integer(100_000_000_000_000));
        let request = CastRequest::new(Tier::Master, Efficiency::Standard)
            .with_situational(Some(huge));
        assert_eq!(request.cost(), Err(ManaError::AmountOutOfRange));

        let request = CastRequest::new(Tier::Ascendant, Efficiency::Strenuous)
            .with_quantity(i64::MAX);
        assert_eq!(request.cost(), Err(ManaError::AmountOutOfRange));
        assert_eq!(
            request.with_quantity_mode(QuantityMode::PerCast).cost(),
            Err(ManaError::AmountOutOfRange)
        );
    }

    #[test]
    fn exact_boundary_does_not_creep_up() {
        // 1/20 of Novice Standard is exactly 0.05.
        let cost = CastRequest::new(Tier::Novice, Efficiency::Standard)
            .with_situational(Some(Situational::new(Mana::new(1, 20))))
            .cost();
        assert_eq!(cost, Ok(Mana::new(5, 100)));
    }

    #[test]
    fn quantity_mode_names() {
        assert_eq!(QuantityMode::PerCast.to_string(), "per_cast");
        assert_eq!("bundled".parse(), Ok(QuantityMode::Bundled));
    }
}
