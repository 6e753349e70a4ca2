//! Rounding and formatting rules.
//!
//! Spell costs are always rounded UP (ceiling) to the hundredth before they
//! are shown or charged. Pools use standard rounding: a pool shows what is
//! actually available.
//!
//! Display modes
//! ─────────────
//!   `ones`     : clean decimal, e.g. `28.05`, `33`
//!   `hundreds` : value × 100 as a whole number, e.g. `2805`
//!   `fractions`: exact rational, e.g. `34/100` → `17/50` (no rounding)

use crate::Mana;
use crate::arith::{ensure_in_range, part_in_range};
use crate::error::ManaError;

/// How a mana amount is rendered.
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
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DisplayMode {
    #[default]
    Ones,
    Hundreds,
    Fractions,
}

impl DisplayMode {
    pub fn parse(name: &str) -> Result<Self, ManaError> {
        name.trim()
            .parse()
            .map_err(|_| ManaError::UnknownDisplayMode(name.to_owned()))
    }
}

fn hundred() -> Mana {
    Mana::from_integer(100)
}

/// Rounds up to two decimal places: `ceil(value × 100) / 100`, exactly.
pub fn ceil_to_hundredths(value: Mana) -> Mana {
    (value * hundred()).ceil() / hundred()
}

/// Rounds up to the next whole number.
pub fn ceil_to_ones(value: Mana) -> Mana {
    value.ceil()
}

/// Rounds half away from zero to two decimal places.
pub fn round_to_hundredths(value: Mana) -> Mana {
    (value * hundred()).round() / hundred()
}

/// Applies the cost ceiling for `mode`; `Fractions` keeps the exact value.
pub fn round_cost(value: Mana, mode: DisplayMode) -> Mana {
    match mode {
        DisplayMode::Ones | DisplayMode::Hundreds => ceil_to_hundredths(value),
        DisplayMode::Fractions => value,
    }
}

/// Formats a spell cost; the ceiling is applied here.
pub fn format_cost(value: Mana, mode: DisplayMode) -> String {
    match mode {
        DisplayMode::Ones => format_cents(cents_of(ceil_to_hundredths(value))),
        DisplayMode::Hundreds => cents_of(ceil_to_hundredths(value)).to_string(),
        DisplayMode::Fractions => format_fraction(value),
    }
}

/// Formats a pool or remaining amount with standard rounding.
pub fn format_pool(value: Mana, mode: DisplayMode) -> String {
    match mode {
        DisplayMode::Ones => format_cents(cents_of(round_to_hundredths(value))),
        DisplayMode::Hundreds => cents_of(round_to_hundredths(value)).to_string(),
        DisplayMode::Fractions => format_fraction(value),
    }
}

/// Renders `n/d`, or just `n` for whole numbers.
pub fn format_fraction(value: Mana) -> String {
    if value.is_integer() {
        value.to_integer().to_string()
    } else {
        format!("{}/{}", value.numer(), value.denom())
    }
}

/// Lossless text form used when storing a cost.
///
/// Values with at most two decimals print as clean decimals (`28.05`, `44`);
/// anything finer falls back to the exact ratio so that
/// [`parse_amount`] always recovers the same number.
pub fn exact_string(value: Mana) -> String {
    let scaled = value * hundred();
    if scaled.is_integer() {
        format_cents(scaled.to_integer())
    } else {
        format_fraction(value)
    }
}

/// Parses a decimal (`"28.05"`, `"-3"`, `".5"`) or a ratio (`"1/4"`) exactly.
///
/// Numerators and denominators beyond [`crate::ManaConfig::MAX_AMOUNT_PART`]
/// are rejected like any other unreadable text.
pub fn parse_amount(text: &str) -> Result<Mana, ManaError> {
    let trimmed = text.trim();
    let invalid = || ManaError::InvalidAmount(text.to_owned());

    if let Some((numer, denom)) = trimmed.split_once('/') {
        let numer: i64 = numer.trim().parse().map_err(|_| invalid())?;
        let denom: i64 = denom.trim().parse().map_err(|_| invalid())?;
        if denom == 0 || !part_in_range(numer) || !part_in_range(denom) {
            return Err(invalid());
        }
        return Ok(Mana::new(numer, denom));
    }

    parse_decimal(trimmed)
        .and_then(|value| ensure_in_range(value).ok())
        .ok_or_else(invalid)
}

fn parse_decimal(text: &str) -> Option<Mana> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (whole, frac) = digits.split_once('.').unwrap_or((digits, ""));
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(whole) || !is_digits(frac) {
        return None;
    }

    let scale = 10i64.checked_pow(u32::try_from(frac.len()).ok()?)?;
    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let frac: i64 = if frac.is_empty() { 0 } else { frac.parse().ok()? };
    let value = Mana::new(whole.checked_mul(scale)?.checked_add(frac)?, scale);

    Some(if negative { -value } else { value })
}

/// Whole hundredths of a value already rounded to two places.
fn cents_of(value: Mana) -> i64 {
    (value * hundred()).to_integer()
}

fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    match abs % 100 {
        0 => format!("{sign}{}", abs / 100),
        frac => format!("{sign}{}.{frac:02}", abs / 100),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_repeating_decimals_up() {
        assert_eq!(ceil_to_hundredths(Mana::new(1, 3)), Mana::new(34, 100));
        assert_eq!(ceil_to_hundredths(Mana::new(400, 3)), Mana::new(13334, 100));
    }

    #[test]
    fn exact_hundredths_stay_put() {
        assert_eq!(ceil_to_hundredths(Mana::new(1, 4)), Mana::new(25, 100));
        assert_eq!(ceil_to_hundredths(Mana::new(2805, 100)), Mana::new(2805, 100));
        assert_eq!(ceil_to_hundredths(Mana::new(5, 100)), Mana::new(5, 100));
    }

    #[test]
    fn ceil_to_ones_rounds_up() {
        assert_eq!(ceil_to_ones(Mana::new(4, 3)), Mana::from_integer(2));
        assert_eq!(ceil_to_ones(Mana::new(3, 3)), Mana::from_integer(1));
    }

    #[test]
    fn cost_formatting_collapses_whole_numbers() {
        assert_eq!(format_cost(Mana::from_integer(33), DisplayMode::Ones), "33");
        assert_eq!(format_cost(Mana::new(2805, 100), DisplayMode::Ones), "28.05");
        assert_eq!(format_cost(Mana::new(66, 100), DisplayMode::Ones), "0.66");
        assert_eq!(format_cost(Mana::new(1, 2), DisplayMode::Ones), "0.50");
        assert_eq!(format_cost(Mana::new(1, 3), DisplayMode::Ones), "0.34");
    }

    #[test]
    fn cost_formatting_in_other_modes() {
        assert_eq!(format_cost(Mana::new(1, 3), DisplayMode::Hundreds), "34");
        assert_eq!(format_cost(Mana::new(1, 3), DisplayMode::Fractions), "1/3");
        assert_eq!(format_cost(Mana::from_integer(44), DisplayMode::Fractions), "44");
    }

    #[test]
    fn pool_formatting_never_ceils() {
        assert_eq!(format_pool(Mana::from_integer(211), DisplayMode::Ones), "211");
        assert_eq!(format_pool(Mana::new(1, 3), DisplayMode::Ones), "0.33");
        assert_eq!(format_pool(Mana::new(2, 3), DisplayMode::Ones), "0.67");
        assert_eq!(format_pool(Mana::new(-1, 3), DisplayMode::Ones), "-0.33");
        assert_eq!(format_pool(Mana::new(1, 3), DisplayMode::Hundreds), "33");
    }

    #[test]
    fn round_cost_modes() {
        let third = Mana::new(1, 3);
        assert_eq!(round_cost(third, DisplayMode::Ones), Mana::new(34, 100));
        assert_eq!(round_cost(third, DisplayMode::Hundreds), Mana::new(34, 100));
        assert_eq!(round_cost(third, DisplayMode::Fractions), third);
    }

    #[test]
    fn parse_amount_accepts_decimals_and_ratios() {
        assert_eq!(parse_amount("28.05"), Ok(Mana::new(2805, 100)));
        assert_eq!(parse_amount("33.0"), Ok(Mana::from_integer(33)));
        assert_eq!(parse_amount("34/100"), Ok(Mana::new(34, 100)));
        assert_eq!(parse_amount(".5"), Ok(Mana::new(1, 2)));
        assert_eq!(parse_amount("-3"), Ok(Mana::from_integer(-3)));
        assert_eq!(parse_amount(" 7 / 2 "), Ok(Mana::new(7, 2)));
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        for text in ["", ".", "abc", "1/0", "1.2.3", "1e5", "--1"] {
            assert_eq!(
                parse_amount(text),
                Err(ManaError::InvalidAmount(text.to_owned())),
                "{text:?}"
            );
        }
    }

    #[test]
    fn exact_string_round_trips() {
        for value in [
            Mana::from_integer(44),
            Mana::new(2805, 100),
            Mana::new(13334, 100),
            Mana::new(1, 3),
            Mana::new(-7, 4),
        ] {
            assert_eq!(parse_amount(&exact_string(value)), Ok(value));
        }
        assert_eq!(exact_string(Mana::new(1, 3)), "1/3");
        assert_eq!(exact_string(Mana::new(701, 100)), "7.01");
    }

    #[test]
    fn display_mode_names() {
        assert_eq!(DisplayMode::parse("Fractions"), Ok(DisplayMode::Fractions));
        assert_eq!(DisplayMode::Hundreds.to_string(), "hundreds");
        assert!(DisplayMode::parse("tens").is_err());
    }

    #[test]
    fn parse_amount_rejects_out_of_range_parts() {
        for text in [
            "-9223372036854775808/-1",
            "9223372036854775807",
            "100000000000000000",
            "1/10000000000000000",
            "0.0000000000000001",
        ] {
            assert_eq!(
                parse_amount(text),
                Err(ManaError::InvalidAmount(text.to_owned())),
                "{text:?}"
            );
        }
        assert_eq!(
            parse_amount("1000000000000000"),
            Ok(Mana::from_integer(1_000_000_000_000_000))
        );
    }
}
