//! Drafting: turns a validated match into human-readable prose.
//!
//! Default: `TemplateDrafter` (deterministic, no network).
//! Optional: `LlmDrafter` (hosted model via `llm_client`).
//!
//! `AppState` holds an `Arc<dyn Drafter>`, chosen at startup via `DRAFTER`.

pub mod prompts;
pub mod templates;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::errors::AppError;
use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;
use crate::matching::models::{CandidateProfile, JobRequisition, MatchResult};
use crate::drafting::prompts::{DRAFT_PROMPT_TEMPLATE, DRAFT_SYSTEM};

/// Everything downstream of the match: the text artifacts handed to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drafts {
    pub explanation: String,
    pub resume_edits: String,
    pub suggested_bullets: String,
    pub email: String,
}

/// Inputs to a drafter. `result` must already be validated.
#[derive(Debug, Clone, Copy)]
pub struct DraftInput<'a> {
    pub candidate: &'a CandidateProfile,
    pub job: &'a JobRequisition,
    pub result: &'a MatchResult,
}

/// Implement this to swap drafting backends without touching the pipeline,
/// handlers or CLI.
#[async_trait]
pub trait Drafter: Send + Sync {
    /// Backend label, reported on run output.
    fn backend(&self) -> &'static str;

    async fn draft(&self, input: DraftInput<'_>) -> Result<Drafts, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// TemplateDrafter
// ────────────────────────────────────────────────────────────────────────────

pub struct TemplateDrafter;

impl TemplateDrafter {
    pub fn render(input: DraftInput<'_>) -> Drafts {
        Drafts {
            explanation: templates::explain_match(input.result),
            resume_edits: templates::suggest_resume_edits(input.job, input.result),
            suggested_bullets: templates::generate_targeted_bullets(input.candidate, input.job),
            email: templates::draft_outreach_email(input.job, input.result),
        }
    }
}

#[async_trait]
impl Drafter for TemplateDrafter {
    fn backend(&self) -> &'static str {
        "template"
    }

    async fn draft(&self, input: DraftInput<'_>) -> Result<Drafts, AppError> {
        Ok(Self::render(input))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmDrafter
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmDrafter(pub LlmClient);

#[async_trait]
impl Drafter for LlmDrafter {
    fn backend(&self) -> &'static str {
        "llm"
    }

    async fn draft(&self, input: DraftInput<'_>) -> Result<Drafts, AppError> {
        let prompt = build_draft_prompt(input)?;
        let system = format!("{DRAFT_SYSTEM} {JSON_ONLY_SYSTEM}");
        let drafts = self.0.call_json::<Drafts>(&prompt, &system).await?;
        Ok(drafts)
    }
}

/// Fills the drafting template. Raw document text is left out; the model only
/// sees extracted fields.
fn build_draft_prompt(input: DraftInput<'_>) -> Result<String, AppError> {
    let to_json = |value: serde_json::Value| {
        serde_json::to_string_pretty(&value)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize prompt context: {e}")))
    };

    let match_json = to_json(json!(input.result))?;
    let candidate_json = to_json(json!({
        "name": input.result.candidate_name,
        "candidate_skills": input.candidate.skills,
    }))?;
    let job_json = to_json(json!({
        "role_title": input.result.role_title,
        "location": input.job.location,
        "required_skills": input.job.required_skills,
    }))?;

    Ok(DRAFT_PROMPT_TEMPLATE
        .replace("{grounding_instruction}", GROUNDING_INSTRUCTION)
        .replace("{match_json}", &match_json)
        .replace("{candidate_json}", &candidate_json)
        .replace("{job_json}", &job_json))
}
