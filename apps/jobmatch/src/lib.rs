//! Resume ↔ job matching: extract skills from free text against a fixed
//! vocabulary, score the overlap, draft follow-up material and keep an audit
//! trail of every run.

pub mod audit;
pub mod config;
pub mod drafting;
pub mod errors;
pub mod llm_client;
pub mod matching;
pub mod pipeline;
pub mod routes;
pub mod state;

pub use matching::{compute_match, parse_job_description, parse_resume, validate_match_output};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_operations_compose() {
        let candidate = parse_resume("Jane Doe\nKubernetes, GraphQL and TypeScript");
        let job = parse_job_description("Job Title: Platform Engineer\nKubernetes, Go, GraphQL");
        let result = validate_match_output(compute_match(&candidate, &job));

        assert_eq!(result.candidate_name, "Jane Doe");
        assert_eq!(result.role_title, "Platform Engineer");
        assert!((result.score - 1.0).abs() < f64::EPSILON);
        assert!(result.missing_skills.is_empty());
    }
}
