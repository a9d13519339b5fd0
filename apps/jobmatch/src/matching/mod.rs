// Matching core: vocabulary → normalization → extraction → scoring → validation.
// Pure and synchronous apart from `handlers` (HTTP surface) and the vocabulary file loader.

pub mod engine;
pub mod extractor;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod validator;
pub mod vocabulary;

use serde_json::Value;
use thiserror::Error;

pub use engine::compute_match;
pub use extractor::{parse_job_description, parse_resume, ProfileExtractor};
pub use models::{CandidateProfile, JobRequisition, MatchResult, SkillToken};
pub use validator::{validate_match_json, validate_match_output, validate_match_value};
pub use vocabulary::{SkillCategory, SkillVocabulary, VocabularyError};

/// A caller handed over a non-text value where text is required.
///
/// This is a contract violation at the boundary, not a data-quality issue, so it
/// is never absorbed into a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected text for `{field}`, got {found}")]
pub struct InputTypeError {
    pub field: String,
    pub found: &'static str,
}

/// Reads `field` from an untyped JSON object, requiring a string.
pub fn require_text<'a>(body: &'a Value, field: &str) -> Result<&'a str, InputTypeError> {
    match body.get(field) {
        Some(Value::String(text)) => Ok(text.as_str()),
        other => Err(InputTypeError {
            field: field.to_string(),
            found: json_type_name(other),
        }),
    }
}

fn json_type_name(value: Option<&Value>) -> &'static str {
    match value {
        None => "nothing",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "a boolean",
        Some(Value::Number(_)) => "a number",
        Some(Value::String(_)) => "a string",
        Some(Value::Array(_)) => "an array",
        Some(Value::Object(_)) => "an object",
    }
}
