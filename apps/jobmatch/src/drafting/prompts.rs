// Prompt constants for the LLM drafting backend.

/// System prompt for drafting. Combined with `JSON_ONLY_SYSTEM` at call time.
pub const DRAFT_SYSTEM: &str = "You are a careful career coach who writes concise, \
    factual job-application material from a structured skill match.";

/// Drafting prompt template.
/// Replace: {grounding_instruction}, {match_json}, {candidate_json}, {job_json}
pub const DRAFT_PROMPT_TEMPLATE: &str = r#"{grounding_instruction}

VALIDATED MATCH RESULT (score is 0.0-1.0, skills are lower-case tokens):
{match_json}

CANDIDATE:
{candidate_json}

JOB:
{job_json}

Return a JSON object with this EXACT schema (no extra fields):
{
  "explanation": "3-4 sentences: how strong the match is (strong >= 0.8, moderate >= 0.5, otherwise limited), key overlapping skills, key missing skills",
  "resume_edits": "multi-line plain text, one '- ' suggestion per line",
  "suggested_bullets": "multi-line plain text, 3-5 '- ' resume bullets using the job's required skills",
  "email": "plain-text outreach email starting with 'Subject: '"
}"#;
