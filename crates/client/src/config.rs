//! Client configuration: presentation defaults and the session file location.
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use mana_core::{DisplayMode, Insertion, ManaConfig, QuantityMode};
use serde::Deserialize;

/// Settings resolved from an optional TOML file and the environment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    #[serde(flatten)]
    pub mana: ManaConfig,
    pub session_file: Option<PathBuf>,
}

impl CliConfig {
    pub const CONFIG_VAR: &'static str = "MANA_CONFIG";

    /// Loads `MANA_CONFIG` (if set) and then applies environment overrides.
    ///
    /// Environment variables:
    /// - `MANA_CONFIG` - TOML file read before the variables below
    /// - `MANA_DISPLAY_MODE` - `ones`, `hundreds` or `fractions` (default: ones)
    /// - `MANA_QUANTITY_MODE` - `bundled` or `per_cast` (default: bundled)
    /// - `MANA_SITUATIONAL_INSERTION` - `after_efficiency` or `after_expression`
    /// - `MANA_SESSION_FILE` - session file path (default: platform data dir)
    pub fn load() -> Result<Self> {
        let base = match env::var_os(Self::CONFIG_VAR) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        Ok(base.with_overrides(|key| env::var(key).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config TOML: {}", path.display()))
    }

    /// Applies overrides from `lookup`. Unparseable values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(mode) = read_var::<DisplayMode>(&lookup, "MANA_DISPLAY_MODE") {
            self.mana = self.mana.with_display_mode(mode);
        }
        if let Some(mode) = read_var::<QuantityMode>(&lookup, "MANA_QUANTITY_MODE") {
            self.mana = self.mana.with_quantity_mode(mode);
        }
        if let Some(point) = read_var::<Insertion>(&lookup, "MANA_SITUATIONAL_INSERTION") {
            self.mana = self.mana.with_insertion(point);
        }
        if let Some(path) = lookup("MANA_SESSION_FILE").filter(|p| !p.trim().is_empty()) {
            self.session_file = Some(PathBuf::from(path));
        }
        self
    }

    /// Session file path, falling back to the platform data directory.
    ///
    /// - Linux: `~/.local/share/mana/session.json`
    /// - macOS: `~/Library/Application Support/mana/session.json`
    /// - Fallback: `./mana-session.json`
    pub fn session_path(&self) -> PathBuf {
        if let Some(path) = &self.session_file {
            return path.clone();
        }
        directories::ProjectDirs::from("", "", "mana")
            .map(|dirs| dirs.data_dir().join("session.json"))
            .unwrap_or_else(|| PathBuf::from("./mana-session.json"))
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    let value = lookup(key)?;
    match value.trim().parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!(key, value = %value, "ignoring unreadable setting");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = CliConfig::default().with_overrides(lookup(&[]));
        assert_eq!(config.mana, ManaConfig::default());
        assert_eq!(config.session_file, None);
        assert!(config.session_path().ends_with("session.json"));
    }

    #[test]
    fn environment_overrides() {
        let config = CliConfig::default().with_overrides(lookup(&[
            ("MANA_DISPLAY_MODE", "Fractions"),
            ("MANA_QUANTITY_MODE", "per_cast"),
            ("MANA_SITUATIONAL_INSERTION", "after_expression"),
            ("MANA_SESSION_FILE", "/tmp/kirin.json"),
        ]));
        assert_eq!(config.mana.display_mode, DisplayMode::Fractions);
        assert_eq!(config.mana.quantity_mode, QuantityMode::PerCast);
        assert_eq!(config.mana.situational_insertion, Insertion::AfterExpression);
        assert_eq!(config.session_path(), PathBuf::from("/tmp/kirin.json"));
    }

    #[test]
    fn unreadable_values_are_ignored() {
        let config = CliConfig::default()
            .with_overrides(lookup(&[("MANA_DISPLAY_MODE", "thousands"), ("MANA_SESSION_FILE", " ")]));
        assert_eq!(config.mana.display_mode, DisplayMode::Ones);
        assert_eq!(config.session_file, None);
    }

    #[test]
    fn toml_file_then_environment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mana.toml");
        std::fs::write(
            &path,
            "display_mode = \"hundreds\"\nquantity_mode = \"per_cast\"\nsession_file = \"a.json\"\n",
        )
        .unwrap();

        let config = CliConfig::from_file(&path)
            .unwrap()
            .with_overrides(lookup(&[("MANA_QUANTITY_MODE", "bundled")]));
        assert_eq!(config.mana.display_mode, DisplayMode::Hundreds);
        assert_eq!(config.mana.quantity_mode, QuantityMode::Bundled);
        assert_eq!(config.session_file, Some(PathBuf::from("a.json")));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CliConfig::from_file(&dir.path().join("absent.toml")).is_err());
    }
}
