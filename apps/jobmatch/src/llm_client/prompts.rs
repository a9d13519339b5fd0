// Cross-cutting prompt fragments. Feature-specific prompts live next to the
// feature (see drafting/prompts.rs).

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keeps drafted prose inside what the match result actually says.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Only claim skills listed under overlapping_skills or candidate_skills. \
    Skills under missing_skills are gaps: you may mention willingness to learn them, \
    never experience with them. Do NOT invent employers, projects, dates or metrics.";
