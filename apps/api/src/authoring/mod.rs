// Job description authoring: turns a recruiter's brief into a full posting
// via the hosted model, and stores postings for later ranking runs.
// All model calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod writer;
