//! Ledger entry: the persisted record of one cast.

use mana_core::{Efficiency, Mana, ManaError, QuantityMode, Tier, parse_amount};
use serde::{Deserialize, Serialize};

/// One priced cast. Entries are never edited once appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: u64,
    pub spell_name: String,
    /// Arcana the spell was channelled through; empty when unspecified.
    #[serde(default)]
    pub arcana_name: String,
    pub spell_tier: Tier,
    pub efficiency: Efficiency,
    #[serde(default)]
    pub orders: u32,
    #[serde(default = "one")]
    pub quantity: u32,
    #[serde(default)]
    pub quantity_mode: QuantityMode,
    /// Situational modifier as typed (decimal or ratio), or empty.
    #[serde(default)]
    pub situational: String,
    #[serde(default)]
    pub is_hybrid: bool,
    #[serde(default, with = "blank_as_none")]
    pub hybrid_b_tier: Option<Tier>,
    #[serde(default, with = "blank_as_none")]
    pub hybrid_b_efficiency: Option<Efficiency>,
    /// Charged cost as text, see [`mana_core::exact_string`].
    pub exact_cost: String,
}

fn one() -> u32 {
    1
}

impl LedgerEntry {
    /// Charged cost parsed back from [`Self::exact_cost`].
    pub fn cost(&self) -> Result<Mana, ManaError> {
        parse_amount(&self.exact_cost)
    }

    /// Column names for tabular export, in field order.
    pub const FIELDS: [&'static str; 13] = [
        "id",
        "spell_name",
        "arcana_name",
        "spell_tier",
        "efficiency",
        "orders",
        "quantity",
        "quantity_mode",
        "situational",
        "is_hybrid",
        "hybrid_b_tier",
        "hybrid_b_efficiency",
        "exact_cost",
    ];

    /// Field values as text, matching [`Self::FIELDS`].
    pub fn record(&self) -> [String; 13] {
        let blank = |value: Option<String>| value.unwrap_or_default();
        [
            self.id.to_string(),
            self.spell_name.clone(),
            self.arcana_name.clone(),
            self.spell_tier.to_string(),
            self.efficiency.to_string(),
            self.orders.to_string(),
            self.quantity.to_string(),
            self.quantity_mode.to_string(),
            self.situational.clone(),
            self.is_hybrid.to_string(),
            blank(self.hybrid_b_tier.map(|t| t.to_string())),
            blank(self.hybrid_b_efficiency.map(|e| e.to_string())),
            self.exact_cost.clone(),
        ]
    }
}

/// Serializes `None` as `""` and reads `""` back as `None`.
mod blank_as_none {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        match value {
            Some(value) => serializer.collect_str(value),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let text = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse()
            .map(Some)
            .map_err(|err| de::Error::custom(format!("`{trimmed}`: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> LedgerEntry {
        LedgerEntry {
            id: 3,
            spell_name: "Wind Gust".to_owned(),
            arcana_name: "Zephyr".to_owned(),
            spell_tier: Tier::Expert,
            efficiency: Efficiency::Standard,
            orders: 3,
            quantity: 1,
            quantity_mode: QuantityMode::Bundled,
            situational: String::new(),
            is_hybrid: false,
            hybrid_b_tier: None,
            hybrid_b_efficiency: None,
            exact_cost: "28.05".to_owned(),
        }
    }

    #[test]
    fn json_uses_snake_case_and_blank_hybrid_fields() {
        let json = serde_json::to_value(sample_entry()).unwrap();
        assert_eq!(json["spell_name"], "Wind Gust");
        assert_eq!(json["spell_tier"], "Expert");
        assert_eq!(json["quantity_mode"], "bundled");
        assert_eq!(json["hybrid_b_tier"], "");
        assert_eq!(json["hybrid_b_efficiency"], "");
        assert_eq!(json["exact_cost"], "28.05");
    }

    #[test]
    fn reads_entries_written_by_older_exports() {
        let json = r#"{
            "id": 7,
            "spell_name": "Frequency Up",
            "arcana_name": "",
            "spell_tier": "Journeyman",
            "efficiency": "Standard",
            "orders": 0,
            "quantity": 1,
            "quantity_mode": "per_cast",
            "situational": "1/4",
            "is_hybrid": true,
            "hybrid_b_tier": "Journeyman",
            "hybrid_b_efficiency": "efficient",
            "exact_cost": "34/100"
        }"#;
        let entry: LedgerEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.quantity_mode, QuantityMode::PerCast);
        assert_eq!(entry.hybrid_b_tier, Some(Tier::Journeyman));
        assert_eq!(entry.hybrid_b_efficiency, Some(Efficiency::Efficient));
        assert_eq!(entry.cost(), Ok(Mana::new(34, 100)));
    }

    #[test]
    fn enum_fields_ignore_case_alike() {
        let json = r#"{
            "id": 2,
            "spell_name": "Grove Song",
            "spell_tier": "expert",
            "efficiency": "EFFICIENT",
            "quantity_mode": "Per_Cast",
            "is_hybrid": true,
            "hybrid_b_tier": "expert",
            "hybrid_b_efficiency": "efficient",
            "exact_cost": "22"
        }"#;
        let entry: LedgerEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.spell_tier, Tier::Expert);
        assert_eq!(entry.efficiency, Efficiency::Efficient);
        assert_eq!(entry.quantity_mode, QuantityMode::PerCast);
        assert_eq!(entry.hybrid_b_tier, Some(entry.spell_tier));
        assert_eq!(entry.hybrid_b_efficiency, Some(entry.efficiency));

        let bad = json.replace(r#""expert","#, r#""Grandmaster","#);
        assert!(serde_json::from_str::<LedgerEntry>(&bad).is_err());
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let json = r#"{
            "id": 1,
            "spell_name": "Spark",
            "spell_tier": "Novice",
            "efficiency": "Optimal",
            "exact_cost": "0.33"
        }"#;
        let entry: LedgerEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.quantity, 1);
        assert_eq!(entry.orders, 0);
        assert!(!entry.is_hybrid);
        assert_eq!(entry.hybrid_b_tier, None);
    }

    #[test]
    fn record_matches_field_order() {
        let record = sample_entry().record();
        assert_eq!(record[0], "3");
        assert_eq!(record[3], "Expert");
        assert_eq!(record[7], "bundled");
        assert_eq!(record[10], "");
        assert_eq!(record[12], "28.05");
    }
}
