//! Skill Vocabulary: the curated set of skill tokens the matcher recognizes.
//!
//! The built-in vocabulary is compiled in. Deployments can replace it with a JSON
//! file keyed by category; there is no way to mutate a vocabulary once loaded.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matching::models::SkillToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Language,
    Framework,
    Database,
    CloudDevops,
    Architecture,
}

#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read vocabulary file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid vocabulary JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("vocabulary contains no skills")]
    Empty,
}

const LANGUAGES: &[&str] = &[
    "java",
    "python",
    "javascript",
    "typescript",
    "c",
    "c++",
    "c#",
    "html",
    "css",
];

const FRAMEWORKS: &[&str] = &[
    "react",
    "angular",
    "vue",
    "spring",
    "spring boot",
    "django",
    "flask",
    "fastapi",
    "node.js",
    "nodejs",
    "express",
    "kafka",
    "spark",
];

const DATABASES: &[&str] = &["sql", "mongodb", "postgresql", "mysql"];

const CLOUD_DEVOPS: &[&str] = &["aws", "azure", "gcp", "docker", "kubernetes"];

const ARCHITECTURE: &[&str] = &["rest", "restful", "graphql", "microservices"];

/// A fixed, lower-case, deduplicated set of skill tokens grouped by category.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillVocabulary {
    entries: BTreeMap<SkillToken, SkillCategory>,
}

impl SkillVocabulary {
    /// The compiled-in vocabulary, built once per process.
    pub fn builtin() -> &'static SkillVocabulary {
        static BUILTIN: OnceLock<SkillVocabulary> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::from_categories([
                (SkillCategory::Language, LANGUAGES),
                (SkillCategory::Framework, FRAMEWORKS),
                (SkillCategory::Database, DATABASES),
                (SkillCategory::CloudDevops, CLOUD_DEVOPS),
                (SkillCategory::Architecture, ARCHITECTURE),
            ])
        })
    }

    /// Builds a vocabulary from category lists. Terms are trimmed, lower-cased
    /// and whitespace-collapsed; the first category a term appears under wins.
    pub fn from_categories<I, T, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = (SkillCategory, T)>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = BTreeMap::new();
        for (category, terms) in categories {
            for term in terms {
                let canonical = canonicalize(term.as_ref());
                if canonical.is_empty() {
                    continue;
                }
                entries.entry(SkillToken::new(canonical)).or_insert(category);
            }
        }
        Self { entries }
    }

    /// Parses `{"language": ["rust", ...], "database": [...], ...}`.
    pub fn from_json_str(json: &str) -> Result<Self, VocabularyError> {
        let categories: BTreeMap<SkillCategory, Vec<String>> = serde_json::from_str(json)?;
        let vocabulary = Self::from_categories(categories);
        if vocabulary.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(vocabulary)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| VocabularyError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Maps a raw term onto its canonical token, if the vocabulary knows it.
    pub fn canonical(&self, raw: &str) -> Option<SkillToken> {
        let key = SkillToken::new(canonicalize(raw));
        self.entries.get_key_value(&key).map(|(token, _)| token.clone())
    }

    pub fn category_of(&self, token: &SkillToken) -> Option<SkillCategory> {
        self.entries.get(token).copied()
    }

    /// Tokens in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &SkillToken> {
        self.entries.keys()
    }

    pub fn in_category(&self, category: SkillCategory) -> BTreeSet<&SkillToken> {
        self.entries
            .iter()
            .filter(|(_, c)| **c == category)
            .map(|(token, _)| token)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Lower-cases and collapses whitespace runs to a single space.
pub(crate) fn canonicalize(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_lowercase_and_nonempty() {
        let vocab = SkillVocabulary::builtin();
        assert!(!vocab.is_empty());
        for token in vocab.iter() {
            assert_eq!(token.as_str(), token.as_str().to_lowercase());
            assert_eq!(token.as_str(), token.as_str().trim());
        }
    }

    #[test]
    fn test_builtin_covers_every_category() {
        let vocab = SkillVocabulary::builtin();
        for category in [
            SkillCategory::Language,
            SkillCategory::Framework,
            SkillCategory::Database,
            SkillCategory::CloudDevops,
            SkillCategory::Architecture,
        ] {
            assert!(
                !vocab.in_category(category).is_empty(),
                "no skills for {category:?}"
            );
        }
    }

    #[test]
    fn test_canonical_is_case_insensitive() {
        let vocab = SkillVocabulary::builtin();
        let token = vocab.canonical("  Spring   BOOT ").unwrap();
        assert_eq!(token.as_str(), "spring boot");
        assert_eq!(
            vocab.category_of(&token),
            Some(SkillCategory::Framework)
        );
    }

    #[test]
    fn test_canonical_rejects_unknown_terms() {
        assert!(SkillVocabulary::builtin().canonical("cobol").is_none());
        assert!(SkillVocabulary::builtin().canonical("").is_none());
    }

    #[test]
    fn test_duplicate_terms_keep_first_category() {
        let vocab = SkillVocabulary::from_categories([
            (SkillCategory::Language, vec!["SQL", "rust"]),
            (SkillCategory::Database, vec!["sql"]),
        ]);
        assert_eq!(vocab.len(), 2);
        let sql = vocab.canonical("sql").unwrap();
        assert_eq!(vocab.category_of(&sql), Some(SkillCategory::Language));
    }

    #[test]
    fn test_from_json_str_loads_categories() {
        let vocab = SkillVocabulary::from_json_str(
            r#"{"language": ["Rust", "Go"], "cloud_devops": ["terraform", " "]}"#,
        )
        .unwrap();
        assert_eq!(vocab.len(), 3);
        let names: Vec<&str> = vocab.iter().map(SkillToken::as_str).collect();
        assert_eq!(names, vec!["go", "rust", "terraform"]);
    }

    #[test]
    fn test_from_json_str_rejects_empty_vocabulary() {
        let err = SkillVocabulary::from_json_str(r#"{"language": []}"#).unwrap_err();
        assert!(matches!(err, VocabularyError::Empty));
    }

    #[test]
    fn test_from_json_str_rejects_unknown_category() {
        let err = SkillVocabulary::from_json_str(r#"{"soft_skills": ["empathy"]}"#).unwrap_err();
        assert!(matches!(err, VocabularyError::Parse(_)));
    }

    #[test]
    fn test_from_json_file_reports_missing_path() {
        let err = SkillVocabulary::from_json_file("/nonexistent/vocab.json").unwrap_err();
        assert!(matches!(err, VocabularyError::Io { .. }));
    }
}
