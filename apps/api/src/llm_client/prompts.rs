// Cross-cutting prompt fragments. Each feature that calls the model keeps its
// own prompts.rs next to it.

/// Keeps generated postings inside the facts the recruiter supplied.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Only mention skills, tools, benefits and company facts that appear in the brief. \
    Do NOT invent salary figures, locations, team sizes or certifications. \
    If a detail is missing from the brief, leave it out.";

/// Keeps postings free of exclusionary wording.
pub const INCLUSIVE_LANGUAGE_INSTRUCTION: &str = "\
    Use gender-neutral, inclusive language. Avoid age-coded terms such as 'digital native' \
    or 'young and energetic'. Separate hard requirements from nice-to-haves.";
