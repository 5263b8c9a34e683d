use anyhow::{Context, Result};
use std::path::Path;
use toml::Table;

/// Deployment secrets file, Streamlit-style flat TOML.
pub const SECRETS_FILE: &str = "secrets.toml";

#[derive(Debug, Default)]
pub struct Secrets(Table);

impl Secrets {
    /// Loads the secrets file; a missing file is simply an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    fn parse(raw: &str) -> Result<Self> {
        Ok(Self(raw.parse::<Table>()?))
    }

    /// String form of a secret. Non-string scalars are stringified, so
    /// `STROOP_INTERVAL_SECONDS = 30` and `= "30"` behave identically.
    pub fn get(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            toml::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_and_integer_values_both_stringify() {
        let secrets = Secrets::parse(
            "OPENAI_API_KEY = \"sk-test\"\nSTROOP_INTERVAL_SECONDS = 30\n",
        )
        .unwrap();
        assert_eq!(secrets.get("OPENAI_API_KEY").as_deref(), Some("sk-test"));
        assert_eq!(
            secrets.get("STROOP_INTERVAL_SECONDS").as_deref(),
            Some("30")
        );
        assert_eq!(secrets.get("MISSING"), None);
    }

    #[test]
    fn missing_file_is_an_empty_store() {
        let secrets = Secrets::load(Path::new("definitely-not-here.toml")).unwrap();
        assert_eq!(secrets.get("OPENAI_API_KEY"), None);
    }
}
