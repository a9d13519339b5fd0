use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Which drafting backend to wire into `AppState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrafterBackend {
    Template,
    Llm,
}

impl FromStr for DrafterBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "template" => Ok(Self::Template),
            "llm" => Ok(Self::Llm),
            other => bail!("DRAFTER must be 'template' or 'llm', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub run_log_path: PathBuf,
    /// Replaces the built-in skill vocabulary when set.
    pub vocabulary_path: Option<PathBuf>,
    pub drafter: DrafterBackend,
    /// Required only when `drafter` is `Llm`.
    pub anthropic_api_key: Option<String>,
    pub anthropic_api_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key → value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let drafter = match non_empty("DRAFTER") {
            Some(value) => value.parse::<DrafterBackend>()?,
            None => DrafterBackend::Template,
        };

        let anthropic_api_key = non_empty("ANTHROPIC_API_KEY");
        if drafter == DrafterBackend::Llm && anthropic_api_key.is_none() {
            bail!("Required environment variable 'ANTHROPIC_API_KEY' is not set (DRAFTER=llm)");
        }

        Ok(Config {
            port: non_empty("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: non_empty("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            run_log_path: non_empty("RUN_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("runs_log.jsonl")),
            vocabulary_path: non_empty("SKILL_VOCABULARY_PATH").map(PathBuf::from),
            drafter,
            anthropic_api_key,
            anthropic_api_url: non_empty("ANTHROPIC_API_URL"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.run_log_path, PathBuf::from("runs_log.jsonl"));
        assert_eq!(config.vocabulary_path, None);
        assert_eq!(config.drafter, DrafterBackend::Template);
        assert_eq!(config.anthropic_api_key, None);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9090"),
            ("RUST_LOG", "debug"),
            ("RUN_LOG_PATH", "/var/log/jobmatch/runs.jsonl"),
            ("SKILL_VOCABULARY_PATH", "vocab.json"),
            ("DRAFTER", "LLM"),
            ("ANTHROPIC_API_KEY", "sk-test"),
        ])
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.run_log_path, PathBuf::from("/var/log/jobmatch/runs.jsonl"));
        assert_eq!(config.vocabulary_path, Some(PathBuf::from("vocab.json")));
        assert_eq!(config.drafter, DrafterBackend::Llm);
        assert_eq!(config.anthropic_api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_llm_drafter_requires_api_key() {
        let err = config_from(&[("DRAFTER", "llm")]).unwrap_err();
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_unknown_drafter_is_rejected() {
        assert!(config_from(&[("DRAFTER", "gpt")]).is_err());
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = config_from(&[("PORT", "  "), ("SKILL_VOCABULARY_PATH", "")]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.vocabulary_path, None);
    }
}
