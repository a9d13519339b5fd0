//! Append-only JSON-lines audit log: one record per pipeline run.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::matching::models::{JobRequisition, MatchResult, SkillToken};

/// Characters of the drafted email kept in the audit record.
pub const EMAIL_PREVIEW_CHARS: usize = 300;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditRecord {
    pub run_id: Uuid,
    pub timestamp_utc: DateTime<Utc>,
    pub candidate_name: String,
    pub role_title: String,
    pub location: Option<String>,
    pub score: f64,
    pub overlapping_skills: Vec<SkillToken>,
    pub missing_skills: Vec<SkillToken>,
    pub email_preview: String,
}

impl AuditRecord {
    pub fn new(run_id: Uuid, job: &JobRequisition, result: &MatchResult, email: &str) -> Self {
        Self {
            run_id,
            timestamp_utc: Utc::now(),
            candidate_name: result.candidate_name.clone(),
            role_title: result.role_title.clone(),
            location: job.location.clone(),
            score: result.score,
            overlapping_skills: result.overlapping_skills.clone(),
            missing_skills: result.missing_skills.clone(),
            email_preview: email.chars().take(EMAIL_PREVIEW_CHARS).collect(),
        }
    }
}

/// Appends records to a file, one JSON object per line.
///
/// Clones share a lock so concurrent runs never interleave partial lines.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn append(&self, record: &AuditRecord) -> std::io::Result<()> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let _guard = self.write_lock.lock().await;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await
    }
}
