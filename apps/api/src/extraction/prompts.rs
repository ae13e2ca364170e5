// LLM prompt constants for the extraction module.
// Templates embed user text verbatim inside delimited sections so the model
// can tell instruction apart from content. Replace `{placeholders}` before
// sending.

/// System prompt for contact extraction — enforces JSON-only output.
pub const CONTACT_EXTRACT_SYSTEM: &str =
    "You are a precise resume data extractor. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Contact extraction prompt template. Replace `{resume_text}` before sending.
pub const CONTACT_EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract the candidate's contact details from the resume below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "name": "string",
  "address": "string",
  "phone": "string",
  "email": "string",
  "linkedin": "string"
}

Rules:
- Every field MUST be present as a string.
- If a value does not appear in the resume, use an empty string "" — never null, never omit the key.
- Copy values verbatim from the resume; do not reformat phone numbers or URLs.

=== RESUME TEXT START ===
{resume_text}
=== RESUME TEXT END ==="#;

/// System prompt for job-info extraction — enforces JSON-only output.
pub const JOB_INFO_EXTRACT_SYSTEM: &str =
    "You are a precise job posting analyst. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Job-info extraction prompt template. Replace `{jd_text}` before sending.
pub const JOB_INFO_EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract the role, company, and hiring manager from the job description below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "role": "string",
  "company": "string",
  "hiring_manager_name": "string"
}

Rules:
- Every field MUST be present as a string.
- If a value does not appear in the posting, use an empty string "" — never null, never omit the key.
- "hiring_manager_name" is the named person applications go to, if any. Most postings have none; return "" in that case.

=== JOB DESCRIPTION START ===
{jd_text}
=== JOB DESCRIPTION END ==="#;
