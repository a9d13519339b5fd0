//! Match Engine: flat set-overlap scoring between a candidate and a requisition.
//!
//! Algorithm:
//! 1. overlap = candidate.skills ∩ job.required_skills
//! 2. missing = job.required_skills − candidate.skills
//! 3. score = |overlap| / |required|, or 0.0 when nothing is required
//!
//! Skills are unweighted. Both sequences come out sorted because the inputs are
//! `BTreeSet`s.

use crate::matching::models::{
    join_skills, CandidateProfile, JobRequisition, MatchResult, SkillToken,
};

/// Computes the overlap, gap and score for one candidate against one requisition.
pub fn compute_match(candidate: &CandidateProfile, job: &JobRequisition) -> MatchResult {
    let overlapping_skills: Vec<SkillToken> = job
        .required_skills
        .intersection(&candidate.skills)
        .cloned()
        .collect();
    let missing_skills: Vec<SkillToken> = job
        .required_skills
        .difference(&candidate.skills)
        .cloned()
        .collect();

    let score = overlap_ratio(overlapping_skills.len(), job.required_skills.len());
    let explanation = describe_overlap(
        &overlapping_skills,
        &missing_skills,
        job.required_skills.len(),
    );

    MatchResult {
        score,
        overlapping_skills,
        missing_skills,
        candidate_name: candidate.name.clone(),
        role_title: job.title.clone(),
        explanation,
    }
}

/// `matched / required`, clamped to `[0.0, 1.0]`; 0.0 when `required` is zero.
pub fn overlap_ratio(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    (matched as f64 / required as f64).clamp(0.0, 1.0)
}

pub(crate) fn describe_overlap(
    overlap: &[SkillToken],
    missing: &[SkillToken],
    required: usize,
) -> String {
    let list = |skills: &[SkillToken]| {
        if skills.is_empty() {
            "none".to_string()
        } else {
            join_skills(skills)
        }
    };
    format!(
        "Matched {} out of {} required skills. Overlap: {}. Missing: {}.",
        overlap.len(),
        required,
        list(overlap),
        list(missing)
    )
}
