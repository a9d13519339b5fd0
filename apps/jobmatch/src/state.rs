use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::audit::AuditLog;
use crate::config::{Config, DrafterBackend};
use crate::drafting::{Drafter, LlmDrafter, TemplateDrafter};
use crate::llm_client::{LlmClient, MODEL};
use crate::matching::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Loaded once at startup; never mutated.
    pub vocabulary: Arc<SkillVocabulary>,
    /// Pluggable drafter. Default: TemplateDrafter. Swap via DRAFTER env.
    pub drafter: Arc<dyn Drafter>,
    pub audit: AuditLog,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self> {
        let vocabulary = match &config.vocabulary_path {
            Some(path) => {
                let vocabulary = SkillVocabulary::from_json_file(path)
                    .with_context(|| format!("Failed to load skill vocabulary from {}", path.display()))?;
                info!("Loaded {} skills from {}", vocabulary.len(), path.display());
                vocabulary
            }
            None => SkillVocabulary::builtin().clone(),
        };

        let drafter: Arc<dyn Drafter> = match config.drafter {
            DrafterBackend::Template => Arc::new(TemplateDrafter),
            DrafterBackend::Llm => {
                let api_key = config
                    .anthropic_api_key
                    .clone()
                    .context("ANTHROPIC_API_KEY is required for the LLM drafter")?;
                let mut llm = LlmClient::new(api_key);
                if let Some(url) = &config.anthropic_api_url {
                    llm = llm.with_api_url(url.clone());
                }
                info!("LLM drafter enabled (model: {MODEL})");
                Arc::new(LlmDrafter(llm))
            }
        };

        let audit = AuditLog::new(config.run_log_path.clone());

        Ok(AppState {
            config,
            vocabulary: Arc::new(vocabulary),
            drafter,
            audit,
        })
    }
}
