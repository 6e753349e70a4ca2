//! Orders of Expression discount.
//!
//! Each order takes 5% off the running cost, capped at 30% from the sixth
//! order on. Non-positive orders give no discount.

use crate::Mana;
use crate::arith::checked_mul;
use crate::config::ManaConfig;
use crate::error::ManaError;

/// Fractional discount for `orders` (0, 1/20, 1/10, … 3/10).
pub fn order_discount(orders: i32) -> Mana {
    let index = orders.clamp(0, ManaConfig::MAX_ORDER) as usize;
    Mana::new(ManaConfig::ORDER_DISCOUNT_PERCENT[index], 100)
}

/// `cost × (1 − order_discount(orders))`.
pub fn apply_order_discount(cost: Mana, orders: i32) -> Result<Mana, ManaError> {
    checked_mul(cost, Mana::from_integer(1) - order_discount(orders))
}
