//! Plain records flowing through the matching core.
//!
//! Everything here is constructed fresh per request from caller-supplied text
//! and never mutated once scoring has produced it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::matching::keywords::extract_categorized_keywords;

// ────────────────────────────────────────────────────────────────────────────
// Keyword taxonomy
// ────────────────────────────────────────────────────────────────────────────

/// Fixed keyword taxonomy. Declaration order is the dictionary scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    ProgrammingLanguages,
    Frameworks,
    Databases,
    Cloud,
    Tools,
}

impl KeywordCategory {
    pub const ALL: [KeywordCategory; 5] = [
        KeywordCategory::ProgrammingLanguages,
        KeywordCategory::Frameworks,
        KeywordCategory::Databases,
        KeywordCategory::Cloud,
        KeywordCategory::Tools,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordCategory::ProgrammingLanguages => "programming_languages",
            KeywordCategory::Frameworks => "frameworks",
            KeywordCategory::Databases => "databases",
            KeywordCategory::Cloud => "cloud",
            KeywordCategory::Tools => "tools",
        }
    }

    /// Categories that make up the "skills" half of a job posting.
    fn is_skill(&self) -> bool {
        matches!(
            self,
            KeywordCategory::ProgrammingLanguages
                | KeywordCategory::Frameworks
                | KeywordCategory::Databases
        )
    }
}

/// Keyword hits grouped by category. Every category is always present,
/// possibly with an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorizedKeywords(BTreeMap<KeywordCategory, Vec<String>>);

impl Default for CategorizedKeywords {
    fn default() -> Self {
        Self(
            KeywordCategory::ALL
                .iter()
                .map(|c| (*c, Vec::new()))
                .collect(),
        )
    }
}

impl CategorizedKeywords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: KeywordCategory, keyword: impl Into<String>) {
        self.0.entry(category).or_default().push(keyword.into());
    }

    pub fn get(&self, category: KeywordCategory) -> &[String] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (KeywordCategory, &[String])> {
        self.0.iter().map(|(c, kws)| (*c, kws.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Languages, frameworks and databases joined as a comma list.
    pub fn skills_text(&self) -> String {
        self.join_where(|c| c.is_skill())
    }

    /// Cloud platforms and tooling joined as a comma list.
    pub fn tools_text(&self) -> String {
        self.join_where(|c| !c.is_skill())
    }

    fn join_where(&self, keep: impl Fn(&KeywordCategory) -> bool) -> String {
        self.0
            .iter()
            .filter(|(c, _)| keep(c))
            .flat_map(|(_, kws)| kws.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// The ranking query: skills and tools pulled from a job posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptionAttributes {
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub tools: String,
    #[serde(default)]
    pub job_type: Option<String>,
}

impl JobDescriptionAttributes {
    /// Derives attributes from a free-form posting by dictionary lookup.
    pub fn from_description(text: &str, job_type: Option<String>) -> Self {
        let keywords = extract_categorized_keywords(text);
        Self {
            skills: keywords.skills_text(),
            tools: keywords.tools_text(),
            job_type,
        }
    }

    pub(crate) fn keyword_text(&self) -> String {
        format!("{} {}", self.skills, self.tools)
    }
}

/// A resume's extracted attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateAttributes {
    pub id: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub tools: String,
    #[serde(default)]
    pub certifications: String,
}

impl CandidateAttributes {
    pub(crate) fn keyword_text(&self) -> String {
        format!("{} {}", self.skills, self.tools)
    }

    pub(crate) fn full_text(&self) -> String {
        format!("{} {} {}", self.skills, self.tools, self.certifications)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Outputs
// ────────────────────────────────────────────────────────────────────────────

/// Overlap between the job's and the candidate's keywords in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub category: KeywordCategory,
    /// |job ∩ candidate| / |job|, or 0 when the job lists nothing here.
    pub ratio: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: CandidateAttributes,
    /// 0.7 × skill_score + 0.3 × text_similarity, in [0, 1].
    pub score: f64,
    pub skill_score: f64,
    pub text_similarity: f64,
    pub categories: Vec<CategoryMatch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    High,
    Medium,
    Low,
}

/// Score floors for the high and medium tiers; anything below `medium` is low.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            high: 0.25,
            medium: 0.20,
        }
    }
}

impl MatchThresholds {
    pub fn new(high: f64, medium: f64) -> Option<Self> {
        let valid = (0.0..=1.0).contains(&high) && (0.0..=high).contains(&medium);
        valid.then_some(Self { high, medium })
    }

    pub fn tier_for(&self, score: f64) -> MatchTier {
        if score >= self.high {
            MatchTier::High
        } else if score >= self.medium {
            MatchTier::Medium
        } else {
            MatchTier::Low
        }
    }
}

/// A candidate that could not be scored and was left out of the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExcludedCandidate {
    /// Index in the caller's input sequence.
    pub position: usize,
    pub reason: String,
}

/// Candidates sorted by descending score, plus the tier boundaries.
///
/// Tiers and the shortlist are borrowed views into `ranked`; a descending list
/// bucketed by fixed floors makes each tier one contiguous range.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingResult {
    ranked: Vec<ScoredCandidate>,
    thresholds: MatchThresholds,
    high_end: usize,
    medium_end: usize,
    pub excluded: Vec<ExcludedCandidate>,
}

impl RankingResult {
    /// `ranked` must already be sorted by descending score.
    pub(crate) fn from_sorted(
        ranked: Vec<ScoredCandidate>,
        thresholds: MatchThresholds,
        excluded: Vec<ExcludedCandidate>,
    ) -> Self {
        let high_end = ranked.partition_point(|c| thresholds.tier_for(c.score) == MatchTier::High);
        let medium_end = ranked.partition_point(|c| thresholds.tier_for(c.score) != MatchTier::Low);
        Self {
            ranked,
            thresholds,
            high_end,
            medium_end,
            excluded,
        }
    }

    pub fn ranked(&self) -> &[ScoredCandidate] {
        &self.ranked
    }

    pub fn top_3(&self) -> &[ScoredCandidate] {
        &self.ranked[..self.ranked.len().min(3)]
    }

    pub fn high(&self) -> &[ScoredCandidate] {
        &self.ranked[..self.high_end]
    }

    pub fn medium(&self) -> &[ScoredCandidate] {
        &self.ranked[self.high_end..self.medium_end]
    }

    pub fn low(&self) -> &[ScoredCandidate] {
        &self.ranked[self.medium_end..]
    }

    pub fn thresholds(&self) -> MatchThresholds {
        self.thresholds
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

#[derive(Serialize)]
struct RankingView<'a> {
    top_3: &'a [ScoredCandidate],
    high: &'a [ScoredCandidate],
    medium: &'a [ScoredCandidate],
    low: &'a [ScoredCandidate],
    excluded: &'a [ExcludedCandidate],
    thresholds: MatchThresholds,
}

impl Serialize for RankingResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RankingView {
            top_3: self.top_3(),
            high: self.high(),
            medium: self.medium(),
            low: self.low(),
            excluded: &self.excluded,
            thresholds: self.thresholds,
        }
        .serialize(serializer)
    }
}
