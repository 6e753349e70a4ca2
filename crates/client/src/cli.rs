//! Command-line surface.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use mana_core::{DisplayMode, Efficiency, Insertion, QuantityMode, Tier};

/// Mana cost calculator and casting ledger
#[derive(Parser, Debug)]
#[command(name = "mana")]
#[command(about = "Mana cost calculator and casting ledger", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Session file (overrides MANA_SESSION_FILE)
    #[arg(long, global = true, value_name = "FILE")]
    pub session: Option<PathBuf>,

    /// How amounts are shown: ones, hundreds or fractions
    #[arg(long, global = true, value_name = "MODE")]
    pub display: Option<DisplayMode>,

    /// Where situational modifiers apply: after_efficiency or after_expression
    #[arg(long, global = true, value_name = "POINT")]
    pub insertion: Option<Insertion>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start a new character and an empty ledger
    New {
        /// Character name
        #[arg(default_value = "New Character")]
        name: String,

        /// Highest tier the character may cast
        #[arg(long, default_value = "Master")]
        highest: Tier,
    },

    /// Load a built-in sample character (Kirin, Serapis)
    Sample { name: String },

    /// Manage the character's arcana
    #[command(subcommand)]
    Arcana(ArcanaCommand),

    /// Log a single-spell cast
    Cast(CastArgs),

    /// Log a hybrid (two-spell) cast
    Hybrid(HybridArgs),

    /// Log every step of a built-in macro, or list macros
    Macro(MacroArgs),

    /// Price a cast without logging it
    Quote(QuoteArgs),

    /// Show the character, pool and ledger
    Status,

    /// Show the reference cost table
    Table {
        /// Also list relative values up to this tier
        #[arg(long)]
        relative: Option<Tier>,
    },

    /// Remove the last ledger entry
    Undo,

    /// Remove every ledger entry
    Clear,

    /// Write the session as JSON or the ledger as CSV
    Export {
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Replace the character and/or ledger from a JSON document
    Import { path: PathBuf },

    /// Spreadsheet-compatible calculations
    #[command(subcommand)]
    Legacy(LegacyCommand),
}

#[derive(Subcommand, Debug)]
pub enum ArcanaCommand {
    /// Add an arcana at or below the highest tier
    Add { name: String, tier: Tier },
    /// Remove the first arcana with this name
    Remove { name: String },
}

#[derive(Args, Debug, Clone)]
pub struct CastArgs {
    /// Spell name
    pub spell: String,

    #[arg(short, long)]
    pub tier: Tier,

    #[arg(short, long, default_value = "Standard")]
    pub efficiency: Efficiency,

    /// Arcana the spell is channelled through
    #[arg(short, long, default_value = "")]
    pub arcana: String,

    /// Orders of Expression
    #[arg(short, long, default_value_t = 0)]
    pub orders: u32,

    #[arg(short, long, default_value_t = 1)]
    pub quantity: u32,

    /// bundled or per_cast (defaults to MANA_QUANTITY_MODE)
    #[arg(long, value_name = "MODE")]
    pub quantity_mode: Option<QuantityMode>,

    /// Situational multiplier such as 1/4 or 0.5
    #[arg(short, long, default_value = "")]
    pub situational: String,
}

#[derive(Args, Debug, Clone)]
pub struct HybridArgs {
    /// Spell name
    pub spell: String,

    /// Tier shared by both spells
    #[arg(short, long)]
    pub tier: Tier,

    /// Efficiency of the first spell
    #[arg(short, long, default_value = "Standard")]
    pub efficiency: Efficiency,

    /// Tier of the second spell (defaults to --tier)
    #[arg(long)]
    pub second_tier: Option<Tier>,

    /// Efficiency of the second spell
    #[arg(long, default_value = "Standard")]
    pub second_efficiency: Efficiency,

    #[arg(short, long, default_value = "")]
    pub arcana: String,

    #[arg(short, long, default_value_t = 0)]
    pub orders: u32,

    #[arg(short, long, default_value = "")]
    pub situational: String,
}

#[derive(Args, Debug, Clone)]
pub struct MacroArgs {
    /// Macro name or prefix, e.g. "apparating"
    pub name: Option<String>,

    #[arg(short, long, default_value = "")]
    pub arcana: String,

    #[arg(long, value_name = "MODE")]
    pub quantity_mode: Option<QuantityMode>,

    /// List built-in macros
    #[arg(long)]
    pub list: bool,
}

#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    #[arg(short, long)]
    pub tier: Tier,

    #[arg(short, long, default_value = "Standard")]
    pub efficiency: Efficiency,

    /// Price as a hybrid with a second spell of this efficiency
    #[arg(long, value_name = "EFFICIENCY", conflicts_with_all = ["quantity", "quantity_mode"])]
    pub hybrid: Option<Efficiency>,

    #[arg(short, long, default_value_t = 0)]
    pub orders: u32,

    #[arg(short, long, default_value_t = 1)]
    pub quantity: u32,

    #[arg(long, value_name = "MODE")]
    pub quantity_mode: Option<QuantityMode>,

    #[arg(short, long, default_value = "")]
    pub situational: String,
}

#[derive(Subcommand, Debug)]
pub enum LegacyCommand {
    /// Pool total from arcana tiers
    Pool {
        /// Arcana tiers, e.g. Master Master Journeyman
        #[arg(required = true)]
        tiers: Vec<String>,
    },
    /// Remaining pool after a casting log
    Remaining {
        /// Starting pool
        #[arg(long)]
        pool: f64,

        /// Casts as TIER:EFFICIENCY[:QUANTITY], e.g. Expert:Efficient:2
        casts: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    /// Full session document
    Json,
    /// Ledger rows only
    Csv,
}
