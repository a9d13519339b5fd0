//! Output Validator: the contract boundary between the match engine and
//! everything that consumes a `MatchResult`.
//!
//! A validated result always satisfies:
//! - `score` is finite and in `[0.0, 1.0]`
//! - both skill lists are sorted and free of duplicates
//! - the lists are disjoint (a token in both stays in the overlap)
//! - `candidate_name` and `role_title` are non-empty
//! - `explanation` agrees with the lists
//!
//! Validation is idempotent.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::matching::engine::describe_overlap;
use crate::matching::models::{MatchResult, SkillToken, UNKNOWN_CANDIDATE, UNKNOWN_ROLE};
use crate::matching::vocabulary::SkillVocabulary;

pub fn validate_match_output(result: MatchResult) -> MatchResult {
    let overlap: BTreeSet<SkillToken> = result.overlapping_skills.iter().cloned().collect();
    let missing: BTreeSet<SkillToken> = result
        .missing_skills
        .iter()
        .filter(|skill| !overlap.contains(*skill))
        .cloned()
        .collect();
    let overlapping_skills: Vec<SkillToken> = overlap.into_iter().collect();
    let missing_skills: Vec<SkillToken> = missing.into_iter().collect();

    // A stale explanation would contradict the repaired lists.
    let lists_repaired = overlapping_skills != result.overlapping_skills
        || missing_skills != result.missing_skills;
    let explanation = result.explanation.trim();
    let explanation = if lists_repaired || explanation.is_empty() {
        describe_overlap(
            &overlapping_skills,
            &missing_skills,
            overlapping_skills.len() + missing_skills.len(),
        )
    } else {
        explanation.to_string()
    };

    MatchResult {
        score: clamp_score(result.score),
        overlapping_skills,
        missing_skills,
        candidate_name: non_empty_or(&result.candidate_name, UNKNOWN_CANDIDATE),
        role_title: non_empty_or(&result.role_title, UNKNOWN_ROLE),
        explanation,
    }
}

/// Validates a loosely-typed match JSON string produced outside the core.
///
/// Unparseable input is treated as `{}`. See [`validate_match_value`].
pub fn validate_match_json(json: &str, vocabulary: &SkillVocabulary) -> MatchResult {
    let value = serde_json::from_str::<Value>(json).unwrap_or_else(|e| {
        tracing::warn!("Failed to parse match JSON, validating as empty: {e}");
        Value::Object(Default::default())
    });
    validate_match_value(&value, vocabulary)
}

/// Validates a loosely-typed match object.
///
/// - `score` may be a number or a numeric string; anything else is 0.0
/// - skill lists may hold any JSON values; they are stringified, lower-cased and
///   kept only if the vocabulary recognizes them
/// - absent names fall back to placeholders
pub fn validate_match_value(value: &Value, vocabulary: &SkillVocabulary) -> MatchResult {
    let score = match value.get("score") {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };

    validate_match_output(MatchResult {
        score,
        overlapping_skills: loose_skills(value.get("overlapping_skills"), vocabulary),
        missing_skills: loose_skills(value.get("missing_skills"), vocabulary),
        candidate_name: loose_text(value.get("candidate_name")),
        role_title: loose_text(value.get("role_title")),
        explanation: loose_text(value.get("explanation")),
    })
}

/// NaN becomes 0.0; everything else is clamped into `[0.0, 1.0]`. `-0.0` comes
/// out as `0.0`.
fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0) + 0.0
    }
}

fn non_empty_or(value: &str, placeholder: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        placeholder.to_string()
    } else {
        trimmed.to_string()
    }
}

fn loose_skills(value: Option<&Value>, vocabulary: &SkillVocabulary) -> Vec<SkillToken> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::String(s) => vocabulary.canonical(s),
            Value::Null => None,
            other => vocabulary.canonical(&other.to_string()),
        })
        .collect()
}

fn loose_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}
