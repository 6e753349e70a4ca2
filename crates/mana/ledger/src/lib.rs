//! Character, ledger and casting workflow built on the mana engine.
//!
//! This crate is the stateful side of the calculator:
//! - Character record (name, highest tier, owned arcana)
//! - Ordered cast ledger with undo-last and clear-all
//! - Casting workflow that validates input and prices it through `mana-core`
//! - Built-in sample characters and spell macros
//! - JSON export/import and CSV export of a session
//!
//! The engine never sees this state; a [`Session`] reads values out of it,
//! calls the engine, and appends the priced result.

pub mod character;
pub mod entry;
pub mod error;
pub mod export;
pub mod ledger;
pub mod macros;
pub mod samples;
pub mod session;

pub use character::Character;
pub use entry::LedgerEntry;
pub use error::LedgerError;
pub use export::{ExportDocument, ImportDocument};
pub use ledger::{Ledger, LedgerRow};
pub use macros::{MacroStep, SpellMacro, builtin_macros};
pub use session::{CastOrder, Quote, Session};
