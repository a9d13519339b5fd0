//! Deterministic prose drafts built from a validated match.
//!
//! Same inputs, same text. Used as the default drafting backend and as the
//! fallback shape the LLM backend is asked to follow.

use crate::matching::models::{
    join_skills, CandidateProfile, JobRequisition, MatchResult, SkillToken, UNKNOWN_CANDIDATE,
};

const EXPLAIN_SKILL_LIMIT: usize = 8;
const EDIT_SKILL_LIMIT: usize = 10;
const EDIT_KEYWORD_LIMIT: usize = 12;
const BULLET_SKILL_LIMIT: usize = 5;

/// Qualitative band for a score.
pub fn fit_label(score: f64) -> &'static str {
    if score >= 0.8 {
        "strong"
    } else if score >= 0.5 {
        "moderate"
    } else {
        "limited"
    }
}

pub fn explain_match(result: &MatchResult) -> String {
    let strengths = listed_or(
        &result.overlapping_skills,
        EXPLAIN_SKILL_LIMIT,
        "no clear overlapping skills detected",
    );
    let gaps = listed_or(
        &result.missing_skills,
        EXPLAIN_SKILL_LIMIT,
        "no major skill gaps identified",
    );

    format!(
        "Overall, {name} appears to be a {label} match for {role} with a score of {score:.2}. \
         Key overlapping skills include: {strengths}. \
         Skills the job description asks for that the resume does not show include: {gaps}. \
         The candidate lines up with part of the core requirements and can strengthen the \
         application by gaining or better highlighting experience in the missing areas.",
        name = result.candidate_name,
        label = fit_label(result.score),
        role = result.role_title,
        score = result.score,
    )
}

pub fn suggest_resume_edits(job: &JobRequisition, result: &MatchResult) -> String {
    let mut lines = vec![
        format!(
            "Tailoring suggestions for {} targeting {}:",
            result.candidate_name, result.role_title
        ),
        String::new(),
    ];

    if !result.overlapping_skills.is_empty() {
        lines.push(
            "- Surface these matching skills in your summary and skills section:".to_string(),
        );
        lines.push(format!(
            "  {}",
            join_limited(&result.overlapping_skills, EDIT_SKILL_LIMIT)
        ));
        lines.push(String::new());
    }

    if !result.missing_skills.is_empty() {
        lines.push("- The job asks for these skills, which your resume does not show:".to_string());
        lines.push(format!(
            "  {}",
            join_limited(&result.missing_skills, EDIT_SKILL_LIMIT)
        ));
        lines.push(
            "  If you have any exposure (courses, projects, internships), add bullets that name them."
                .to_string(),
        );
        lines.push(String::new());
    }

    if !job.required_skills.is_empty() {
        let keywords: Vec<SkillToken> = job.required_skills.iter().cloned().collect();
        lines.push(
            "- Reword existing bullets to mirror the job's terminology, without overstating experience:"
                .to_string(),
        );
        lines.push(format!(
            "  Job keywords: {}",
            join_limited(&keywords, EDIT_KEYWORD_LIMIT)
        ));
        lines.push(String::new());
    }

    lines.push(format!(
        "- Add one line to your professional summary that names {} as your target role.",
        result.role_title
    ));

    lines.join("\n")
}

pub fn generate_targeted_bullets(candidate: &CandidateProfile, job: &JobRequisition) -> String {
    let top: Vec<&SkillToken> = job.required_skills.iter().take(BULLET_SKILL_LIMIT).collect();

    let mut bullets = vec![format!("Suggested bullets tailored for {}:", job.title)];

    if !top.is_empty() {
        let lead: Vec<&str> = top.iter().take(3).map(|s| s.as_str()).collect();
        bullets.push(format!(
            "- Designed and implemented features with {} to meet project requirements, \
             focusing on reliability and performance.",
            lead.join(", ")
        ));
        if let [first, second, ..] = top.as_slice() {
            bullets.push(format!(
                "- Built end-to-end functionality combining {first} and {second} in a team \
                 setting, using Git-based workflows and code review."
            ));
        }
    }

    bullets.push(
        "- Applied engineering practices (version control, automated testing, CI/CD where \
         applicable) to keep changes safe and maintainable."
            .to_string(),
    );
    bullets.push(
        "- Explained technical decisions and trade-offs to technical and non-technical \
         collaborators."
            .to_string(),
    );

    if candidate.name != UNKNOWN_CANDIDATE {
        bullets.push(format!(
            "- As {}, picked up new tools relevant to {} and put them to use in projects.",
            candidate.name, job.title
        ));
    }

    bullets.join("\n")
}

pub fn draft_outreach_email(job: &JobRequisition, result: &MatchResult) -> String {
    let name = &result.candidate_name;
    let role = &result.role_title;

    let mut intro = format!(
        "I hope you're doing well. My name is {name}, and I'm very interested in the {role} opportunity"
    );
    if let Some(location) = &job.location {
        intro.push_str(&format!(" in {location}"));
    }
    intro.push('.');

    let strengths = if result.overlapping_skills.is_empty() {
        "relevant experience".to_string()
    } else {
        join_skills(&result.overlapping_skills)
    };
    let strengths_line = format!(
        "From reviewing the job description, I believe my background is a good match, \
         especially in {strengths}."
    );

    let growth_line = if result.missing_skills.is_empty() {
        "My current skill set already lines up closely with the listed requirements.".to_string()
    } else {
        format!(
            "I'm also keen to grow further in {}, and I'm actively learning them through recent projects.",
            join_skills(&result.missing_skills)
        )
    };

    format!(
        "Subject: Interest in {role}\n\
         \n\
         Hi,\n\
         \n\
         {intro}\n\
         {strengths_line}\n\
         {growth_line}\n\
         \n\
         (Approximate skill match score: {score:.2}.)\n\
         \n\
         If you think there could be a fit, I would love the chance to discuss how I can contribute to your team.\n\
         \n\
         Best regards,\n\
         {name}\n",
        score = result.score,
    )
}

fn join_limited(skills: &[SkillToken], limit: usize) -> String {
    let end = skills.len().min(limit);
    join_skills(&skills[..end])
}

fn listed_or(skills: &[SkillToken], limit: usize, fallback: &str) -> String {
    if skills.is_empty() {
        fallback.to_string()
    } else {
        join_limited(skills, limit)
    }
}
