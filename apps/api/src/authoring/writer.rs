//! Job description writer — pluggable backend that expands a brief into a posting.
//!
//! Default: `LlmJobWriter` (hosted model via `LlmClient`).
//! `AppState` holds an `Arc<dyn JobDescriptionWriter>`, so tests and
//! alternative backends swap in without touching handlers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::authoring::prompts::{JD_WRITE_PROMPT_TEMPLATE, JD_WRITE_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, INCLUSIVE_LANGUAGE_INSTRUCTION};
use crate::llm_client::LlmClient;
use crate::matching::models::JobDescriptionAttributes;

/// What the recruiter knows about the role before anything is written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobBrief {
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub seniority: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub tools: String,
    #[serde(default)]
    pub extra_notes: Option<String>,
}

impl JobBrief {
    /// The ranking query this brief implies.
    pub fn attributes(&self) -> JobDescriptionAttributes {
        JobDescriptionAttributes {
            skills: self.skills.clone(),
            tools: self.tools.clone(),
            job_type: self.job_type.clone(),
        }
    }

    /// Renders the brief as labelled lines, skipping empty fields.
    pub fn render(&self) -> String {
        let fields = [
            ("Title", Some(self.title.as_str())),
            ("Company", self.company.as_deref()),
            ("Seniority", self.seniority.as_deref()),
            ("Location", self.location.as_deref()),
            ("Employment type", self.job_type.as_deref()),
            ("Required skills", Some(self.skills.as_str())),
            ("Tools", Some(self.tools.as_str())),
            ("Notes", self.extra_notes.as_deref()),
        ];
        fields
            .iter()
            .filter_map(|(label, value)| {
                value
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| format!("{label}: {v}"))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Structured posting returned by the writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedDescription {
    pub title: String,
    pub summary: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    #[serde(default)]
    pub nice_to_have: Vec<String>,
    pub description_markdown: String,
}

#[async_trait]
pub trait JobDescriptionWriter: Send + Sync {
    async fn write(&self, brief: &JobBrief) -> Result<GeneratedDescription, AppError>;
}

pub struct LlmJobWriter(pub LlmClient);

#[async_trait]
impl JobDescriptionWriter for LlmJobWriter {
    async fn write(&self, brief: &JobBrief) -> Result<GeneratedDescription, AppError> {
        let prompt = build_prompt(brief);
        let generated = self
            .0
            .call_json::<GeneratedDescription>(&prompt, JD_WRITE_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Job description generation failed: {e}")))?;
        info!("Generated job description for '{}'", generated.title);
        Ok(generated)
    }
}

pub fn build_prompt(brief: &JobBrief) -> String {
    JD_WRITE_PROMPT_TEMPLATE
        .replace("{brief}", &brief.render())
        .replace("{grounding}", GROUNDING_INSTRUCTION)
        .replace("{inclusive}", INCLUSIVE_LANGUAGE_INSTRUCTION)
}
