//! Text rendering for terminal output.
//!
//! Costs are shown with [`format_cost`] (ceiling) and pool figures with
//! [`format_pool`] (round half up), in the active [`DisplayMode`].
use std::fmt::Write as _;

use anyhow::Result;
use console::style;
use mana_core::{DisplayMode, Mana, Tier, cost_matrix, format_cost, format_pool, relative_value_matrix};
use mana_ledger::{LedgerEntry, LedgerRow, Quote, Session, SpellMacro};

pub fn cost(value: Mana, mode: DisplayMode) -> String {
    format_cost(value, mode)
}

pub fn pool(value: Mana, mode: DisplayMode) -> String {
    format_pool(value, mode)
}

/// `Expert Standard`, or `Expert Standard + Expert Efficient` for hybrids.
pub fn describe(entry: &LedgerEntry) -> String {
    let first = format!("{} {}", entry.spell_tier, entry.efficiency);
    match (entry.hybrid_b_tier, entry.hybrid_b_efficiency) {
        (Some(tier), Some(efficiency)) if entry.is_hybrid => {
            format!("{first} + {tier} {efficiency}")
        }
        _ => first,
    }
}

/// One-line confirmation after a cast is logged.
pub fn logged(entry: &LedgerEntry, remaining: Mana, mode: DisplayMode) -> Result<String> {
    Ok(format!(
        "{} #{} {} ({}) cost {} | remaining {}",
        style("✓").green().bold(),
        entry.id,
        entry.spell_name,
        describe(entry),
        cost(entry.cost()?, mode),
        pool(remaining, mode),
    ))
}

pub fn quote(quote: &Quote, mode: DisplayMode) -> String {
    format!(
        "cost {} | remaining after {}",
        cost(quote.cost, mode),
        pool(quote.remaining_after, mode)
    )
}

pub fn ledger(rows: &[LedgerRow<'_>], mode: DisplayMode) -> String {
    if rows.is_empty() {
        return format!("{}\n", style("(ledger is empty)").dim());
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        style(format!(
            "{:>4}  {:<24} {:<36} {:>3} {:>3} {:>10} {:>10}",
            "id", "spell", "cast", "ord", "qty", "cost", "remaining"
        ))
        .bold()
    );
    for row in rows {
        let entry = row.entry;
        let _ = writeln!(
            out,
            "{:>4}  {:<24} {:<36} {:>3} {:>3} {:>10} {:>10}",
            entry.id,
            entry.spell_name,
            describe(entry),
            entry.orders,
            entry.quantity,
            cost(row.cost, mode),
            pool(row.remaining, mode),
        );
    }
    out
}

/// Character sheet, pool and ledger.
pub fn status(session: &Session, mode: DisplayMode) -> Result<String> {
    let character = session.character();
    let pool_info = session.pool();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} (highest tier {})",
        style(&character.name).cyan().bold(),
        character.highest_tier
    );
    for arcana in &character.arcana {
        let _ = writeln!(
            out,
            "  {:<16} {:<11} {:>8}",
            arcana.name,
            arcana.tier.to_string(),
            pool(arcana.value(), mode)
        );
    }
    let _ = writeln!(
        out,
        "pool {} | remaining {}",
        pool(pool_info.total, mode),
        pool(session.remaining()?, mode)
    );
    out.push('\n');
    out.push_str(&ledger(&session.rows()?, mode));
    Ok(out)
}

/// Pool value and base cost per efficiency for every tier, high → low.
pub fn cost_table(mode: DisplayMode) -> String {
    let rows = cost_matrix();
    let mut out = String::new();
    let mut header = format!("{:<11} {:>8}", "tier", "pool");
    if let Some(first) = rows.first() {
        for (efficiency, _) in &first.costs {
            let _ = write!(header, " {:>11}", efficiency.to_string());
        }
    }
    let _ = writeln!(out, "{}", style(header).bold());
    for row in &rows {
        let _ = write!(out, "{:<11} {:>8}", row.tier.to_string(), pool(row.pool_value, mode));
        for (_, value) in &row.costs {
            let _ = write!(out, " {:>11}", cost(*value, mode));
        }
        out.push('\n');
    }
    out
}

/// Relative value of each tier against `highest`, as exact fractions.
pub fn relative_table(highest: Tier) -> String {
    let mut out = format!("{}\n", style(format!("relative to {highest}")).bold());
    for (tier, value) in relative_value_matrix(highest) {
        let _ = writeln!(
            out,
            "{:<11} {:>8}",
            tier.to_string(),
            format_pool(value, DisplayMode::Fractions)
        );
    }
    out
}

pub fn macros(list: &[SpellMacro]) -> String {
    let mut out = String::new();
    for spell_macro in list {
        let _ = writeln!(out, "{}", style(&spell_macro.name).bold());
        if !spell_macro.description.is_empty() {
            let _ = writeln!(out, "  {}", spell_macro.description);
        }
        for step in &spell_macro.steps {
            let _ = writeln!(out, "  - {} ({} {})", step.spell_name, step.tier, step.efficiency);
        }
    }
    out
}
