// All LLM prompt constants for the generation module.
// User-supplied text is always embedded inside delimited sections so the
// model can tell instruction apart from content.

/// System prompt for cover-letter generation — plain text output.
pub const COVER_LETTER_SYSTEM: &str =
    "You are an expert career writer drafting tailored cover letters. \
    Respond with the letter text only. \
    Do NOT use markdown code fences. \
    Do NOT include commentary before or after the letter.";

/// Cover-letter prompt template.
/// Replace: {date_line}, {salutation}, {subject_line}, {candidate_name},
///          {jd_text}, {resume_text}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a tailored, professional cover letter for the job below, grounded ONLY in the candidate's resume.

Formatting rules:
- Open with the date line exactly as given: {date_line}
- Follow with the subject line: {subject_line}
- Use this salutation exactly as given: {salutation}
- Three to four short paragraphs; confident but not boastful.
- Close with "Sincerely," and the candidate's name: {candidate_name}
- Do not invent experience, employers, or qualifications that are not in the resume.

=== JOB DESCRIPTION START ===
{jd_text}
=== JOB DESCRIPTION END ===

=== RESUME TEXT START ===
{resume_text}
=== RESUME TEXT END ==="#;

/// System prompt for ATS scoring — enforces JSON-only output.
pub const ATS_SCORE_SYSTEM: &str =
    "You are an applicant tracking system simulator scoring a resume against a job description. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// ATS scoring prompt template. Replace `{jd_text}` and `{resume_text}`.
pub const ATS_SCORE_PROMPT_TEMPLATE: &str = r#"Score how well the resume below matches the job description, the way an applicant tracking system would: keyword coverage, required skills, title alignment, measurable impact.

Return a JSON object with this EXACT schema (no extra fields):
{
  "score": 0,
  "strengths": "string",
  "suggestions": "string"
}

Rules:
- "score" is a number from 0 to 100 inclusive.
- "strengths" summarizes what already matches well, as short prose.
- "suggestions" lists concrete edits that would raise the score, as short prose.

=== JOB DESCRIPTION START ===
{jd_text}
=== JOB DESCRIPTION END ===

=== RESUME TEXT START ===
{resume_text}
=== RESUME TEXT END ==="#;

/// System prompt for résumé optimization — plain text output.
pub const OPTIMIZE_SYSTEM: &str =
    "You are an expert resume writer rewriting a resume body for a specific job. \
    Respond with the rewritten resume text only. \
    Do NOT use markdown code fences. \
    Do NOT include commentary before or after the resume.";

/// Résumé optimization prompt template. Replace `{jd_text}` and `{resume_text}`.
pub const OPTIMIZE_PROMPT_TEMPLATE: &str = r#"Rewrite the resume below so it aligns with the job description: reorder and reword content to surface relevant experience and keywords, keep every fact truthful, drop nothing important.

Rules:
- Do NOT include the contact header (name, address, phone, email, links). It is re-attached separately.
- Start directly with the first content section (summary or experience).
- Keep the candidate's real experience; never invent roles, dates, or metrics.
- Use wording from the job description where it honestly applies.

=== JOB DESCRIPTION START ===
{jd_text}
=== JOB DESCRIPTION END ===

=== RESUME TEXT START ===
{resume_text}
=== RESUME TEXT END ==="#;
