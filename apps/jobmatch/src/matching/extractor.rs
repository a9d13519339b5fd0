//! Profile Extractor: turns raw resume and job text into structured records.

use crate::matching::models::{CandidateProfile, JobRequisition};
use crate::matching::normalizer::{
    extract_location, extract_name, extract_skills_with, extract_title,
};
use crate::matching::vocabulary::SkillVocabulary;

/// Binds a vocabulary to the extraction functions.
#[derive(Debug, Clone, Copy)]
pub struct ProfileExtractor<'v> {
    vocabulary: &'v SkillVocabulary,
}

impl ProfileExtractor<'static> {
    pub fn builtin() -> Self {
        Self::new(SkillVocabulary::builtin())
    }
}

impl<'v> ProfileExtractor<'v> {
    pub fn new(vocabulary: &'v SkillVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn parse_resume(&self, text: &str) -> CandidateProfile {
        CandidateProfile {
            name: extract_name(text),
            skills: extract_skills_with(self.vocabulary, text),
            raw_text: text.to_string(),
        }
    }

    pub fn parse_job_description(&self, text: &str) -> JobRequisition {
        JobRequisition {
            title: extract_title(text),
            required_skills: extract_skills_with(self.vocabulary, text),
            location: extract_location(text),
            raw_text: text.to_string(),
        }
    }
}

/// Parses resume text with the built-in vocabulary. Never fails.
pub fn parse_resume(text: &str) -> CandidateProfile {
    ProfileExtractor::builtin().parse_resume(text)
}

/// Parses job-description text with the built-in vocabulary. Never fails.
pub fn parse_job_description(text: &str) -> JobRequisition {
    ProfileExtractor::builtin().parse_job_description(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::models::{UNKNOWN_CANDIDATE, UNKNOWN_ROLE};
    use crate::matching::vocabulary::SkillCategory;

    const RESUME: &str = "Jane Doe\njane@example.com\n\nBackend engineer experienced with Python, AWS, Docker, Flask, Kubernetes.\n";

    const JOB: &str = "Acme Cloud\nJob Title: Senior Backend Engineer\nLocation: Remote (US)\n\nRequirements: Python, AWS, GCP, Azure, Docker.\n";

    #[test]
    fn test_parse_resume_extracts_name_and_skills() {
        let profile = parse_resume(RESUME);
        assert_eq!(profile.name, "Jane Doe");
        let skills: Vec<&str> = profile.skills.iter().map(|s| s.as_str()).collect();
        assert_eq!(skills, vec!["aws", "docker", "flask", "kubernetes", "python"]);
        assert_eq!(profile.raw_text, RESUME);
    }

    #[test]
    fn test_parse_job_description_extracts_title_location_skills() {
        let job = parse_job_description(JOB);
        assert_eq!(job.title, "Senior Backend Engineer");
        assert_eq!(job.location.as_deref(), Some("Remote (US)"));
        let skills: Vec<&str> = job.required_skills.iter().map(|s| s.as_str()).collect();
        assert_eq!(skills, vec!["aws", "azure", "docker", "gcp", "python"]);
        assert_eq!(job.raw_text, JOB);
    }

    #[test]
    fn test_parse_resume_empty_input_is_total() {
        let profile = parse_resume("");
        assert_eq!(profile.name, UNKNOWN_CANDIDATE);
        assert!(profile.skills.is_empty());
        assert_eq!(profile.raw_text, "");
    }

    #[test]
    fn test_parse_job_description_empty_input_is_total() {
        let job = parse_job_description("");
        assert_eq!(job.title, UNKNOWN_ROLE);
        assert!(job.required_skills.is_empty());
        assert_eq!(job.location, None);
    }

    #[test]
    fn test_duplicate_mentions_collapse() {
        let profile = parse_resume("Dev\npython python PYTHON Python3 python");
        assert_eq!(profile.skills.len(), 1);
    }

    #[test]
    fn test_custom_vocabulary_is_used() {
        let vocab = SkillVocabulary::from_categories([(SkillCategory::Language, ["rust", "go"])]);
        let extractor = ProfileExtractor::new(&vocab);
        let profile = extractor.parse_resume("Sam\nRust and Python on AWS");
        let skills: Vec<&str> = profile.skills.iter().map(|s| s.as_str()).collect();
        assert_eq!(skills, vec!["rust"]);
    }
}
