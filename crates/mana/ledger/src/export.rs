//! Session export and import.
//!
//! JSON export carries the character, pool summary and every ledger entry.
//! CSV export carries the ledger only, one row per entry. Import accepts any
//! JSON object with an optional `character` and an optional `ledger`.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::character::Character;
use crate::entry::LedgerEntry;
use crate::error::LedgerError;
use crate::ledger::sum_costs;

/// Snapshot written by `export`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub character: Character,
    /// Pool total, exact.
    pub total_pool: String,
    /// Pool left after every ledger entry, exact.
    pub remaining: String,
    pub ledger: Vec<LedgerEntry>,
}

impl ExportDocument {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Ledger as CSV with a header row. Lines end in `\n`.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        push_record(&mut out, LedgerEntry::FIELDS.iter().copied());
        for entry in &self.ledger {
            let record = entry.record();
            push_record(&mut out, record.iter().map(String::as_str));
        }
        out
    }
}

impl From<ExportDocument> for ImportDocument {
    fn from(document: ExportDocument) -> Self {
        Self {
            character: Some(document.character),
            ledger: Some(document.ledger),
        }
    }
}

/// Parsed import. Absent parts leave the session untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ImportDocument {
    #[serde(default)]
    pub character: Option<Character>,
    #[serde(default)]
    pub ledger: Option<Vec<LedgerEntry>>,
}

impl ImportDocument {
    /// Reads an import document. Unknown top-level keys, such as the pool
    /// summary in an export, are ignored.
    ///
    /// Ledger costs must be readable and their total must stay in range.
    pub fn from_json(text: &str) -> Result<Self, LedgerError> {
        let document: Self = serde_json::from_str(text).map_err(LedgerError::MalformedImport)?;
        if let Some(entries) = &document.ledger {
            sum_costs(entries)?;
        }
        Ok(document)
    }
}

fn push_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (index, field) in fields.enumerate() {
        if index > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\r', '\n']) {
        let _ = write!(out, "\"{}\"", field.replace('"', "\"\""));
    } else {
        out.push_str(field);
    }
}
