//! Deterministic mana cost engine.
//!
//! `mana-core` defines the canonical rules for the mana economy: the tier value
//! table, the single-spell and hybrid cost pipelines, pool accumulation, and the
//! rounding rules that decide exactly what a caster is charged. Every function
//! is pure; state such as characters and ledgers lives in the calling layer.
//!
//! All costs are carried as exact rationals ([`Mana`]) and only converted to
//! text at format time, so a value that is mathematically `28.05` never
//! ceilings up to `28.06`.
pub mod arith;
pub mod cast;
pub mod config;
pub mod efficiency;
pub mod error;
pub mod expression;
pub mod hybrid;
pub mod legacy;
pub mod pool;
pub mod reference;
pub mod rounding;
pub mod situational;
pub mod tier;

pub use arith::{checked_add, checked_mul, checked_sub, ensure_in_range};
pub use cast::{CastRequest, QuantityMode, base_cost};
pub use config::ManaConfig;
pub use efficiency::Efficiency;
pub use error::ManaError;
pub use expression::{apply_order_discount, order_discount};
pub use hybrid::{HybridComponent, HybridRequest};
pub use pool::{Arcana, ManaPool, compute_pool, compute_pool_from_names};
pub use reference::{CostRow, cost_matrix, relative_value, relative_value_matrix};
pub use rounding::{
    DisplayMode, ceil_to_hundredths, ceil_to_ones, exact_string, format_cost, format_pool,
    parse_amount, round_cost,
};
pub use situational::{Insertion, Situational};
pub use tier::Tier;

/// Exact mana quantity.
///
/// Tier values are whole numbers, but discounts, the hybrid multiplier and
/// the Novice fixed costs introduce fractions, so every cost is a rational.
pub type Mana = num_rational::Ratio<i64>;

/// Lets serde read name enums through their `FromStr`, so stored names match
/// the same way typed ones do: ASCII case is ignored and whitespace trimmed.
macro_rules! parse_from_text {
    ($($ty:ty),* $(,)?) => {$(
        impl TryFrom<String> for $ty {
            type Error = strum::ParseError;

            fn try_from(text: String) -> Result<Self, Self::Error> {
                text.trim().parse()
            }
        }
    )*};
}

parse_from_text!(Tier, Efficiency, QuantityMode, DisplayMode, Insertion);

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn names_deserialize_like_they_parse() {
        let tier: Tier = serde_json::from_str(r#"" expert ""#).unwrap();
        let efficiency: Efficiency = serde_json::from_str(r#""EFFICIENT""#).unwrap();
        let mode: QuantityMode = serde_json::from_str(r#""Per_Cast""#).unwrap();
        let display: DisplayMode = serde_json::from_str(r#""Hundreds""#).unwrap();
        let insertion: Insertion = serde_json::from_str(r#""after_expression""#).unwrap();
        assert_eq!(tier, Tier::Expert);
        assert_eq!(efficiency, Efficiency::Efficient);
        assert_eq!(mode, QuantityMode::PerCast);
        assert_eq!(display, DisplayMode::Hundreds);
        assert_eq!(insertion, Insertion::AfterExpression);

        assert!(serde_json::from_str::<Tier>(r#""Grandmaster""#).is_err());
        assert_eq!(serde_json::to_string(&Tier::Expert).unwrap(), r#""Expert""#);
        assert_eq!(serde_json::to_string(&QuantityMode::PerCast).unwrap(), r#""per_cast""#);
    }
}
