// Prompt constants for job description authoring.
// Reuses cross-cutting fragments from llm_client::prompts.

/// System prompt for posting generation. JSON-only output.
pub const JD_WRITE_SYSTEM: &str = "You are an experienced technical recruiter and hiring-manager partner. \
    You write clear, accurate, well-structured job descriptions. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences around the JSON.";

/// Generation prompt template. Replace `{brief}`, `{grounding}` and
/// `{inclusive}` before sending.
pub const JD_WRITE_PROMPT_TEMPLATE: &str = r#"Write a job description from the following brief.

BRIEF:
{brief}

Return a JSON object with this EXACT schema (no extra fields):
{
  "title": "Senior Backend Engineer",
  "summary": "Two or three sentences on the role and its impact.",
  "responsibilities": ["Design and operate Python services on AWS"],
  "requirements": ["5+ years of Python"],
  "nice_to_have": ["Experience with Kubernetes"],
  "description_markdown": "Full posting as markdown with headed sections."
}

Rules:
- "requirements" must cover every listed skill and tool.
- "description_markdown" must contain the summary, responsibilities, requirements and nice-to-haves as sections.
- Keep the title close to the one in the brief; fix only casing and obvious typos.

{grounding}

{inclusive}
"#;
