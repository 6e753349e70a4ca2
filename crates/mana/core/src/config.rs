//! Mana economy constants and tunable presentation defaults.
use crate::cast::QuantityMode;
use crate::rounding::DisplayMode;
use crate::situational::Insertion;

/// Rule tables and per-session defaults.
///
/// The tables are compile-time constants shared by the whole process. The
/// fields are presentation defaults a front end may override.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ManaConfig {
    /// How costs and pools are rendered.
    pub display_mode: DisplayMode,
    /// Rounding mode used when a cast does not name one.
    pub quantity_mode: QuantityMode,
    /// Where a situational modifier enters the pipeline.
    pub situational_insertion: Insertion,
}

impl ManaConfig {
    // ===== rule tables =====
    /// Absolute tier values, indexed low → high (Novice … Ascendant).
    ///
    /// Each value is close to one third of the next; the numbers are fixed
    /// rather than derived.
    pub const TIER_VALUES: [i64; 6] = [1, 4, 11, 33, 100, 300];

    /// Orders of Expression discount, in percent, indexed by order.
    pub const ORDER_DISCOUNT_PERCENT: [i64; 7] = [0, 5, 10, 15, 20, 25, 30];

    /// Highest order with its own table entry; larger orders reuse it.
    pub const MAX_ORDER: i32 = 6;

    /// Hybrid casts pay `combined × NUMER / DENOM`.
    pub const HYBRID_NUMER: i64 = 2;
    pub const HYBRID_DENOM: i64 = 3;

    /// Largest numerator or denominator an amount may carry.
    ///
    /// Keeps `value × 100` and the ceiling step well inside `i64`.
    pub const MAX_AMOUNT_PART: i64 = 1_000_000_000_000_000;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DISPLAY_MODE: DisplayMode = DisplayMode::Ones;
    pub const DEFAULT_QUANTITY_MODE: QuantityMode = QuantityMode::Bundled;
    pub const DEFAULT_INSERTION: Insertion = Insertion::AfterEfficiency;

    pub const fn new() -> Self {
        Self {
            display_mode: Self::DEFAULT_DISPLAY_MODE,
            quantity_mode: Self::DEFAULT_QUANTITY_MODE,
            situational_insertion: Self::DEFAULT_INSERTION,
        }
    }

    pub const fn with_display_mode(mut self, display_mode: DisplayMode) -> Self {
        self.display_mode = display_mode;
        self
    }

    pub const fn with_quantity_mode(mut self, quantity_mode: QuantityMode) -> Self {
        self.quantity_mode = quantity_mode;
        self
    }

    pub const fn with_insertion(mut self, insertion: Insertion) -> Self {
        self.situational_insertion = insertion;
        self
    }
}

impl Default for ManaConfig {
    fn default() -> Self {
        Self::new()
    }
}
