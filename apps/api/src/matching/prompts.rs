// LLM prompt constants for match prediction.

/// Role half of the system prompt; `JSON_ONLY_SYSTEM` is appended at call time.
pub const MATCH_SYSTEM_ROLE: &str = "You are an experienced technical recruiter. \
    You compare a candidate's resume with a job description and judge how well they fit.";

/// Match prompt template. Replace `{job_description}` and `{resume}` before sending.
pub const MATCH_PROMPT_TEMPLATE: &str = r#"Assess how well the candidate's resume matches the job description.

Return a JSON object with this EXACT schema (no extra fields):
{
  "matchScore": 0.72,
  "reasons": "Two or three sentences explaining the strongest overlaps and the most important gaps."
}

Rules:
- matchScore is a number between 0.0 (no fit) and 1.0 (ideal fit).
- reasons must reference concrete skills or experience from both texts.
- Judge only what is written. Do NOT assume experience the resume does not state.

JOB DESCRIPTION:
{job_description}

RESUME:
{resume}
"#;
