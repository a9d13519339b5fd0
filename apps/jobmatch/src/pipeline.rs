//! Run pipeline: one resume × one job description, end to end.
//!
//! Flow: parse_resume / parse_job_description → compute_match →
//!       validate_match_output → drafter.draft → audit append.
//!
//! The first three steps are the pure matching core; drafting and audit are the
//! only steps that touch the network or the filesystem.

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::audit::{AuditLog, AuditRecord};
use crate::drafting::{DraftInput, Drafter, Drafts};
use crate::errors::AppError;
use crate::matching::models::{
    join_skills, CandidateProfile, JobRequisition, MatchResult, SkillToken,
};
use crate::matching::{compute_match, validate_match_output, ProfileExtractor, SkillVocabulary};

/// Structured records plus the validated match for a pair of documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchOutcome {
    pub candidate: CandidateProfile,
    pub job: JobRequisition,
    pub result: MatchResult,
}

/// Everything a single run produces.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub candidate: CandidateProfile,
    pub job: JobRequisition,
    pub result: MatchResult,
    pub drafts: Drafts,
    pub drafter_backend: String,
    pub audit_logged: bool,
}

/// Extract → Match → Validate. Pure.
pub fn match_documents(
    vocabulary: &SkillVocabulary,
    resume_text: &str,
    job_text: &str,
) -> MatchOutcome {
    let extractor = ProfileExtractor::new(vocabulary);
    let candidate = extractor.parse_resume(resume_text);
    let job = extractor.parse_job_description(job_text);
    let result = validate_match_output(compute_match(&candidate, &job));
    MatchOutcome {
        candidate,
        job,
        result,
    }
}

/// Runs the full pipeline and appends an audit record.
///
/// A failed audit append is logged and reported on the report; it does not fail
/// the run.
pub async fn run_pipeline(
    vocabulary: &SkillVocabulary,
    drafter: &dyn Drafter,
    audit: &AuditLog,
    resume_text: &str,
    job_text: &str,
) -> Result<RunReport, AppError> {
    let run_id = Uuid::new_v4();

    let MatchOutcome {
        candidate,
        job,
        result,
    } = match_documents(vocabulary, resume_text, job_text);
    info!(
        %run_id,
        candidate = %result.candidate_name,
        role = %result.role_title,
        score = result.score,
        "Match computed"
    );

    let drafts = drafter
        .draft(DraftInput {
            candidate: &candidate,
            job: &job,
            result: &result,
        })
        .await?;

    let record = AuditRecord::new(run_id, &job, &result, &drafts.email);
    let audit_logged = match audit.append(&record).await {
        Ok(()) => true,
        Err(e) => {
            warn!(%run_id, "Failed to log run to {}: {e}", audit.path().display());
            false
        }
    };

    Ok(RunReport {
        run_id,
        candidate,
        job,
        result,
        drafts,
        drafter_backend: drafter.backend().to_string(),
        audit_logged,
    })
}

impl RunReport {
    /// Plain-text summary for terminal output.
    pub fn render_summary(&self) -> String {
        let bulleted = |skills: &[SkillToken], empty: &str| {
            if skills.is_empty() {
                format!("  ({empty})")
            } else {
                skills
                    .iter()
                    .map(|s| format!("  - {s}"))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        };

        let mut out = vec![
            "=== Job–Resume Match Summary ===".to_string(),
            format!("Match score: {:.2} (0–1 scale)", self.result.score),
            String::new(),
            "Overlapping skills:".to_string(),
            bulleted(&self.result.overlapping_skills, "none detected"),
            String::new(),
            "Missing skills (from job requirements):".to_string(),
            bulleted(&self.result.missing_skills, "none"),
        ];

        for (heading, body) in [
            ("Explanation", &self.drafts.explanation),
            ("Suggested Resume Edits", &self.drafts.resume_edits),
            ("Suggested Targeted Bullets", &self.drafts.suggested_bullets),
            ("Generated Outreach Email", &self.drafts.email),
        ] {
            out.push(String::new());
            out.push(format!("=== {heading} ==="));
            out.push(String::new());
            out.push(body.trim_end().to_string());
        }

        out.join("\n")
    }

    /// One-line form used in logs.
    pub fn headline(&self) -> String {
        format!(
            "{} vs {}: {:.2} (overlap: {}; missing: {})",
            self.result.candidate_name,
            self.result.role_title,
            self.result.score,
            join_skills(&self.result.overlapping_skills),
            join_skills(&self.result.missing_skills),
        )
    }
}
