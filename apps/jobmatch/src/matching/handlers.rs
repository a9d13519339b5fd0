//! Axum route handlers for the Matching API.
//!
//! Bodies are taken as untyped JSON so a non-text field surfaces as
//! `INPUT_TYPE_ERROR` instead of a generic deserialization rejection.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::matching::models::{CandidateProfile, JobRequisition, MatchResult, SkillToken};
use crate::matching::vocabulary::SkillCategory;
use crate::matching::{require_text, validate_match_value, ProfileExtractor};
use crate::pipeline::{match_documents, run_pipeline, MatchOutcome, RunReport};
use crate::state::AppState;

const CATEGORIES: [SkillCategory; 5] = [
    SkillCategory::Language,
    SkillCategory::Framework,
    SkillCategory::Database,
    SkillCategory::CloudDevops,
    SkillCategory::Architecture,
];

#[derive(Debug, Serialize)]
pub struct VocabularyResponse {
    pub total: usize,
    pub categories: BTreeMap<SkillCategory, Vec<SkillToken>>,
}

/// POST /api/v1/resumes/parse
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<CandidateProfile>, AppError> {
    let resume_text = require_text(&body, "resume_text")?;
    let extractor = ProfileExtractor::new(&state.vocabulary);
    Ok(Json(extractor.parse_resume(resume_text)))
}

/// POST /api/v1/jobs/parse
pub async fn handle_parse_job(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<JobRequisition>, AppError> {
    let job_text = require_text(&body, "job_text")?;
    let extractor = ProfileExtractor::new(&state.vocabulary);
    Ok(Json(extractor.parse_job_description(job_text)))
}

/// POST /api/v1/match
pub async fn handle_match(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<MatchOutcome>, AppError> {
    let resume_text = require_text(&body, "resume_text")?;
    let job_text = require_text(&body, "job_text")?;
    Ok(Json(match_documents(&state.vocabulary, resume_text, job_text)))
}

/// POST /api/v1/match/validate
/// Repairs any JSON into a well-formed match result. Never fails.
pub async fn handle_validate(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Json<MatchResult> {
    Json(validate_match_value(&body, &state.vocabulary))
}

/// POST /api/v1/runs
pub async fn handle_run(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<RunReport>, AppError> {
    let resume_text = require_text(&body, "resume_text")?;
    let job_text = require_text(&body, "job_text")?;
    let report = run_pipeline(
        &state.vocabulary,
        state.drafter.as_ref(),
        &state.audit,
        resume_text,
        job_text,
    )
    .await?;
    tracing::info!(run_id = %report.run_id, "{}", report.headline());
    Ok(Json(report))
}

/// GET /api/v1/vocabulary
pub async fn handle_vocabulary(State(state): State<AppState>) -> Json<VocabularyResponse> {
    let categories = CATEGORIES
        .into_iter()
        .map(|category| {
            let skills = state
                .vocabulary
                .in_category(category)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>();
            (category, skills)
        })
        .filter(|(_, skills)| !skills.is_empty())
        .collect();

    Json(VocabularyResponse {
        total: state.vocabulary.len(),
        categories,
    })
}
