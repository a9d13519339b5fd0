//! Document Normalizer: lower-cases free text, scans it for vocabulary hits and
//! pulls out best-effort header fields.
//!
//! Every function here is total: inability to find a value yields a placeholder
//! or `None`, never an error.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::matching::models::{SkillToken, UNKNOWN_CANDIDATE, UNKNOWN_ROLE};
use crate::matching::vocabulary::{canonicalize, SkillVocabulary};

/// Lower-cases text and collapses whitespace runs (including newlines) to one space.
pub fn normalize_text(text: &str) -> String {
    canonicalize(text)
}

/// Skills from the built-in vocabulary that appear in `text`.
pub fn extract_skills(text: &str) -> BTreeSet<SkillToken> {
    extract_skills_with(SkillVocabulary::builtin(), text)
}

/// Skills from `vocabulary` that appear in `text` as whole phrases.
///
/// Multi-word skills must appear contiguously. There is no fuzzy matching and no
/// partial credit.
pub fn extract_skills_with(vocabulary: &SkillVocabulary, text: &str) -> BTreeSet<SkillToken> {
    let haystack = normalize_text(text);
    vocabulary
        .iter()
        .filter(|token| contains_phrase(&haystack, token.as_str()))
        .cloned()
        .collect()
}

/// Value of a leading `Name:` label, otherwise the first non-empty line.
pub fn extract_name(text: &str) -> String {
    let name = match label_capture(name_label(), text) {
        Some(value) => value,
        None => first_nonempty_line(text).unwrap_or_default(),
    };
    non_empty_or(name, UNKNOWN_CANDIDATE)
}

/// Value of a `Job Title:` label if present, otherwise the first non-empty line.
pub fn extract_title(text: &str) -> String {
    let title = match label_capture(job_title_label(), text) {
        Some(value) => value,
        None => first_nonempty_line(text).unwrap_or_default(),
    };
    non_empty_or(title, UNKNOWN_ROLE)
}

/// Value of a `Location:` label, if any.
pub fn extract_location(text: &str) -> Option<String> {
    label_capture(location_label(), text)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

// ────────────────────────────────────────────────────────────────────────────
// Phrase scanning
// ────────────────────────────────────────────────────────────────────────────

/// Characters that continue a skill token, so a hit next to one is not a whole word.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '+' || c == '#'
}

/// True if `needle` occurs in `haystack` with a non-word character (or the text
/// edge) on both sides.
fn contains_phrase(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(start, _)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + needle.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Header fields
// ────────────────────────────────────────────────────────────────────────────

// Label patterns allow the value on the following line: `\s*` spans newlines,
// `(.*)` stops at the end of the value's line.

fn name_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\A\s*name\s*:\s*(.*)").expect("valid name regex"))
}

fn job_title_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\bjob\s*title\s*[:\-]\s*(.*)").expect("valid job title regex")
    })
}

fn location_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\blocation\s*[:\-]\s*(.*)").expect("valid location regex")
    })
}

/// Trimmed value captured after the first match of `label`. Empty when the
/// label is present but carries no value.
fn label_capture<'t>(label: &Regex, text: &'t str) -> Option<&'t str> {
    label
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|value| value.as_str().trim())
}

fn first_nonempty_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|line| !line.is_empty())
}

fn non_empty_or(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}
