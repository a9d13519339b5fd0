use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Placeholder used when no candidate name can be extracted.
pub const UNKNOWN_CANDIDATE: &str = "Unknown Candidate";

/// Placeholder used when no role title can be extracted.
pub const UNKNOWN_ROLE: &str = "Unknown Role";

/// Canonical lower-case identifier of one recognized skill.
///
/// Only a `SkillVocabulary` can mint tokens, so every token in circulation is a
/// vocabulary member.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SkillToken(String);

impl SkillToken {
    pub(crate) fn new(canonical: String) -> Self {
        Self(canonical)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SkillToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SkillToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateProfile {
    pub name: String,
    pub skills: BTreeSet<SkillToken>,
    pub raw_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobRequisition {
    pub title: String,
    pub required_skills: BTreeSet<SkillToken>,
    pub location: Option<String>,
    pub raw_text: String,
}

/// Outcome of matching one candidate against one requisition.
///
/// Holds no reference back to the profiles it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Fraction of required skills the candidate covers, in `[0.0, 1.0]`.
    pub score: f64,
    pub overlapping_skills: Vec<SkillToken>,
    pub missing_skills: Vec<SkillToken>,
    pub candidate_name: String,
    pub role_title: String,
    pub explanation: String,
}

/// Joins skill tokens with `", "`.
pub fn join_skills(skills: &[SkillToken]) -> String {
    skills
        .iter()
        .map(SkillToken::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
