//! Subcommand execution against the persisted session.
use std::io::Write;

use anyhow::{Context, Result, anyhow, bail};
use console::style;
use mana_core::{DisplayMode, Insertion, QuantityMode, legacy};
use mana_ledger::{CastOrder, Character, ImportDocument, Session, builtin_macros, macros, samples};

use crate::cli::{
    ArcanaCommand, CastArgs, Command, ExportFormat, HybridArgs, LegacyCommand, MacroArgs, QuoteArgs,
};
use crate::config::CliConfig;
use crate::render;
use crate::store::SessionStore;

/// Resolved settings for one invocation.
pub struct Invocation {
    pub store: SessionStore,
    pub display: DisplayMode,
    pub quantity_mode: QuantityMode,
    pub insertion: Insertion,
}

impl Invocation {
    pub fn new(config: &CliConfig) -> Self {
        Self {
            store: SessionStore::new(config.session_path()),
            display: config.mana.display_mode,
            quantity_mode: config.mana.quantity_mode,
            insertion: config.mana.situational_insertion,
        }
    }

    fn load(&self) -> Result<Session> {
        let mut session = self.store.load()?;
        session.set_insertion(self.insertion);
        Ok(session)
    }
}

/// Runs `command`, writing user-facing output to `out`.
pub fn run(command: Command, ctx: &Invocation, out: &mut impl Write) -> Result<()> {
    match command {
        Command::New { name, highest } => {
            let mut session = ctx.load()?;
            session.load_character(Character::new(name, highest));
            ctx.store.save(&session)?;
            write!(out, "{}", render::status(&session, ctx.display)?)?;
        }
        Command::Sample { name } => {
            let character = samples::by_name(&name).ok_or_else(|| {
                anyhow!("Unknown sample `{name}` (available: {})", samples::NAMES.join(", "))
            })?;
            let mut session = ctx.load()?;
            session.load_character(character);
            ctx.store.save(&session)?;
            write!(out, "{}", render::status(&session, ctx.display)?)?;
        }
        Command::Arcana(command) => arcana(command, ctx, out)?,
        Command::Cast(args) => {
            let order = cast_order(args, ctx.quantity_mode);
            log_cast(order, ctx, out)?;
        }
        Command::Hybrid(args) => log_cast(hybrid_order(args), ctx, out)?,
        Command::Macro(args) => run_macro(args, ctx, out)?,
        Command::Quote(args) => {
            let session = ctx.load()?;
            let quote = session.quote(&quote_order(args, ctx.quantity_mode))?;
            writeln!(out, "{}", render::quote(&quote, ctx.display))?;
        }
        Command::Status => {
            let session = ctx.load()?;
            write!(out, "{}", render::status(&session, ctx.display)?)?;
        }
        Command::Table { relative } => {
            write!(out, "{}", render::cost_table(ctx.display))?;
            if let Some(highest) = relative {
                write!(out, "\n{}", render::relative_table(highest))?;
            }
        }
        Command::Undo => {
            let mut session = ctx.load()?;
            match session.undo_last() {
                Some(entry) => {
                    ctx.store.save(&session)?;
                    writeln!(out, "Removed #{} {}", entry.id, entry.spell_name)?;
                }
                None => writeln!(out, "Nothing to undo")?,
            }
        }
        Command::Clear => {
            let mut session = ctx.load()?;
            session.clear_ledger();
            ctx.store.save(&session)?;
            writeln!(out, "Ledger cleared")?;
        }
        Command::Export { format, output } => {
            let document = ctx.load()?.export()?;
            let text = match format {
                ExportFormat::Json => document.to_json()?,
                ExportFormat::Csv => document.to_csv(),
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, text)
                        .with_context(|| format!("Failed to write export: {}", path.display()))?;
                    writeln!(out, "Exported to {}", path.display())?;
                }
                None => writeln!(out, "{}", text.trim_end())?,
            }
        }
        Command::Import { path } => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read import: {}", path.display()))?;
            let document = ImportDocument::from_json(&text)?;
            let mut session = ctx.load()?;
            session.import(document);
            ctx.store.save(&session)?;
            write!(out, "{}", render::status(&session, ctx.display)?)?;
        }
        Command::Legacy(command) => run_legacy(command, out)?,
    }
    Ok(())
}

fn arcana(command: ArcanaCommand, ctx: &Invocation, out: &mut impl Write) -> Result<()> {
    let mut session = ctx.load()?;
    match command {
        ArcanaCommand::Add { name, tier } => {
            session.character_mut().add_arcana(name.trim(), tier)?;
        }
        ArcanaCommand::Remove { name } => {
            if session.character_mut().remove_arcana(name.trim()).is_none() {
                bail!("Character has no arcana named `{}`", name.trim());
            }
        }
    }
    ctx.store.save(&session)?;
    write!(out, "{}", render::status(&session, ctx.display)?)?;
    Ok(())
}

fn log_cast(order: CastOrder, ctx: &Invocation, out: &mut impl Write) -> Result<()> {
    let mut session = ctx.load()?;
    let entry = session.cast(order)?.clone();
    ctx.store.save(&session)?;
    writeln!(out, "{}", render::logged(&entry, session.remaining()?, ctx.display)?)?;
    Ok(())
}

fn run_macro(args: MacroArgs, ctx: &Invocation, out: &mut impl Write) -> Result<()> {
    let name = match args.name {
        Some(name) if !args.list => name,
        _ => {
            write!(out, "{}", render::macros(&builtin_macros()))?;
            return Ok(());
        }
    };
    let spell_macro =
        macros::find_builtin(&name).ok_or_else(|| anyhow!("Unknown macro `{name}`"))?;

    let mut session = ctx.load()?;
    let quantity_mode = args.quantity_mode.unwrap_or(ctx.quantity_mode);
    let ids = session.cast_macro(&spell_macro, &args.arcana, quantity_mode)?;
    ctx.store.save(&session)?;

    let rows = session.rows()?;
    for row in rows.iter().filter(|row| ids.contains(&row.entry.id)) {
        writeln!(out, "{}", render::logged(row.entry, row.remaining, ctx.display)?)?;
    }
    Ok(())
}

fn run_legacy(command: LegacyCommand, out: &mut impl Write) -> Result<()> {
    match command {
        LegacyCommand::Pool { tiers } => {
            let total = legacy::pool(tiers.iter().map(String::as_str))?;
            writeln!(out, "{total}")?;
        }
        LegacyCommand::Remaining { pool, casts } => {
            let parsed = casts
                .iter()
                .map(|text| parse_sheet_cast(text))
                .collect::<Result<Vec<_>>>()?;
            let remaining = legacy::remaining(pool, &parsed)?;
            writeln!(out, "{remaining}")?;
        }
    }
    Ok(())
}

/// Reads `TIER:EFFICIENCY[:QUANTITY]`.
fn parse_sheet_cast(text: &str) -> Result<legacy::SheetCast<'_>> {
    let mut parts = text.split(':');
    let (Some(tier), Some(efficiency)) = (parts.next(), parts.next()) else {
        bail!("Expected TIER:EFFICIENCY[:QUANTITY], got `{text}`");
    };
    let quantity = match parts.next() {
        Some(quantity) => quantity
            .trim()
            .parse()
            .with_context(|| format!("Bad quantity in `{text}`"))?,
        None => 1,
    };
    if parts.next().is_some() {
        bail!("Expected TIER:EFFICIENCY[:QUANTITY], got `{text}`");
    }
    Ok(legacy::SheetCast::new(tier.trim(), efficiency.trim(), quantity))
}

fn cast_order(args: CastArgs, default_mode: QuantityMode) -> CastOrder {
    CastOrder::new(args.spell, args.tier, args.efficiency)
        .with_arcana(args.arcana)
        .with_orders(args.orders)
        .with_quantity(args.quantity)
        .with_quantity_mode(args.quantity_mode.unwrap_or(default_mode))
        .with_situational(args.situational)
}

fn hybrid_order(args: HybridArgs) -> CastOrder {
    CastOrder::new(args.spell, args.tier, args.efficiency)
        .with_arcana(args.arcana)
        .with_orders(args.orders)
        .with_situational(args.situational)
        .with_hybrid(args.second_tier.unwrap_or(args.tier), args.second_efficiency)
}

fn quote_order(args: QuoteArgs, default_mode: QuantityMode) -> CastOrder {
    let order = CastOrder::new(String::new(), args.tier, args.efficiency)
        .with_orders(args.orders)
        .with_quantity(args.quantity)
        .with_quantity_mode(args.quantity_mode.unwrap_or(default_mode))
        .with_situational(args.situational);
    match args.hybrid {
        Some(second) => order.with_hybrid(args.tier, second),
        None => order,
    }
}

/// Prints an error chain to stderr.
pub fn report(err: &anyhow::Error) {
    eprintln!("{} {err}", style("error:").red().bold());
    for cause in err.chain().skip(1) {
        eprintln!("  {} {cause}", style("caused by:").dim());
    }
}
