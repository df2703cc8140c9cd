//! Similarity Scorer — one scalar match score per (job, candidate) pair.
//!
//! Algorithm:
//! 1. Extract categorized keywords from job skills+tools and candidate skills+tools.
//! 2. Per category: |job ∩ candidate| / |job|, or 0 when the job lists nothing there.
//! 3. skill_score = mean of the five category ratios.
//! 4. text_similarity = pairwise TF-IDF cosine between the normalized job text
//!    (skills+tools) and candidate text (skills+tools+certifications).
//! 5. score = 0.7 × skill_score + 0.3 × text_similarity.

use std::collections::HashSet;

use tracing::debug;

use crate::matching::keywords::extract_categorized_keywords;
use crate::matching::models::{
    CandidateAttributes, CategorizedKeywords, CategoryMatch, JobDescriptionAttributes,
    ScoredCandidate,
};
use crate::matching::normalize::normalize_text;
use crate::matching::tfidf::pairwise_similarity;

pub const SKILL_WEIGHT: f64 = 0.7;
pub const TEXT_WEIGHT: f64 = 0.3;

/// Per-category overlap. Categories the job leaves empty still count, with a
/// ratio of 0, so sparse postings dilute the mean.
pub fn category_matches(
    job: &CategorizedKeywords,
    candidate: &CategorizedKeywords,
) -> Vec<CategoryMatch> {
    job.iter()
        .map(|(category, job_keywords)| {
            let held: HashSet<&str> = candidate.get(category).iter().map(String::as_str).collect();
            let (matched, missing): (Vec<String>, Vec<String>) = job_keywords
                .iter()
                .cloned()
                .partition(|kw| held.contains(kw.as_str()));
            let ratio = if job_keywords.is_empty() {
                0.0
            } else {
                matched.len() as f64 / job_keywords.len() as f64
            };
            CategoryMatch {
                category,
                ratio,
                matched,
                missing,
            }
        })
        .collect()
}

pub fn skill_score(categories: &[CategoryMatch]) -> f64 {
    if categories.is_empty() {
        return 0.0;
    }
    categories.iter().map(|c| c.ratio).sum::<f64>() / categories.len() as f64
}

/// TF-IDF cosine between two raw texts after normalization. Degenerate inputs
/// score 0 instead of failing.
pub fn text_similarity(job_text: &str, candidate_text: &str) -> f64 {
    let job_doc = normalize_text(job_text);
    let candidate_doc = normalize_text(candidate_text);
    match pairwise_similarity(&job_doc, &candidate_doc) {
        Ok(sim) => sim,
        Err(e) => {
            debug!("Text similarity defaulted to 0: {e}");
            0.0
        }
    }
}

pub fn combine(skill_score: f64, text_similarity: f64) -> f64 {
    (SKILL_WEIGHT * skill_score + TEXT_WEIGHT * text_similarity).clamp(0.0, 1.0)
}

/// Scores one candidate against a job. Pure; shares no state between calls.
pub fn score_candidate(
    job: &JobDescriptionAttributes,
    candidate: &CandidateAttributes,
) -> ScoredCandidate {
    let job_keywords = extract_categorized_keywords(&job.keyword_text());
    score_with_job_keywords(job, &job_keywords, candidate)
}

/// Same as [`score_candidate`] with the job's keywords extracted up front, so
/// a ranking run scans the job text once.
pub(crate) fn score_with_job_keywords(
    job: &JobDescriptionAttributes,
    job_keywords: &CategorizedKeywords,
    candidate: &CandidateAttributes,
) -> ScoredCandidate {
    let candidate_keywords = extract_categorized_keywords(&candidate.keyword_text());
    let categories = category_matches(job_keywords, &candidate_keywords);
    let skill = skill_score(&categories);
    let text = text_similarity(&job.keyword_text(), &candidate.full_text());

    ScoredCandidate {
        candidate: candidate.clone(),
        score: combine(skill, text),
        skill_score: skill,
        text_similarity: text,
        categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::models::KeywordCategory;

    fn job(skills: &str, tools: &str) -> JobDescriptionAttributes {
        JobDescriptionAttributes {
            skills: skills.to_string(),
            tools: tools.to_string(),
            job_type: None,
        }
    }

    fn candidate(id: &str, skills: &str, tools: &str, certs: &str) -> CandidateAttributes {
        CandidateAttributes {
            id: id.to_string(),
            skills: skills.to_string(),
            tools: tools.to_string(),
            certifications: certs.to_string(),
        }
    }

    fn ratio(scored: &ScoredCandidate, category: KeywordCategory) -> f64 {
        scored
            .categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.ratio)
            .unwrap()
    }

    #[test]
    fn test_full_overlap_on_job_categories() {
        let j = job("Python, Java", "Docker");
        let a = score_candidate(&j, &candidate("A", "Python, Java, SQL", "Docker, Git", ""));
        assert_eq!(ratio(&a, KeywordCategory::ProgrammingLanguages), 1.0);
        assert_eq!(ratio(&a, KeywordCategory::Cloud), 1.0);
        // frameworks, databases and tools are empty in the job: 2 of 5 ratios are 1.0
        assert!((a.skill_score - 0.4).abs() < 1e-9);
        assert!(a.text_similarity > 0.5);
    }

    #[test]
    fn test_unrelated_candidate_scores_near_zero() {
        let j = job("Python, Java", "Docker");
        let b = score_candidate(&j, &candidate("B", "Ruby", "none", ""));
        assert_eq!(b.skill_score, 0.0);
        assert_eq!(b.text_similarity, 0.0);
        assert_eq!(b.score, 0.0);
    }

    #[test]
    fn test_partial_category_ratio() {
        let j = job("Python, Java, Rust, Go", "");
        let c = score_candidate(&j, &candidate("C", "Rust", "", ""));
        assert!((ratio(&c, KeywordCategory::ProgrammingLanguages) - 1.0 / 3.0).abs() < 1e-9);
        let langs = c
            .categories
            .iter()
            .find(|m| m.category == KeywordCategory::ProgrammingLanguages)
            .unwrap();
        assert_eq!(langs.matched, vec!["rust"]);
        assert_eq!(langs.missing, vec!["python", "java"]);
    }

    #[test]
    fn test_identical_text_covering_every_category_scores_one() {
        let skills = "Python, Django, PostgreSQL";
        let tools = "AWS, Git";
        let j = job(skills, tools);
        let c = score_candidate(&j, &candidate("same", skills, tools, ""));
        assert!((c.skill_score - 1.0).abs() < 1e-9);
        assert!((c.text_similarity - 1.0).abs() < 1e-9);
        assert!((c.score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_certifications_only_feed_text_similarity() {
        let j = job("Python", "AWS");
        let without = score_candidate(&j, &candidate("x", "Python", "", ""));
        let with = score_candidate(&j, &candidate("x", "Python", "", "AWS Certified"));
        assert_eq!(without.skill_score, with.skill_score);
        assert!(with.text_similarity > without.text_similarity);
    }

    #[test]
    fn test_empty_everything_scores_zero_without_error() {
        let c = score_candidate(&job("", ""), &candidate("empty", "", "", ""));
        assert_eq!(c.score, 0.0);
        assert_eq!(c.categories.len(), 5);
    }

    #[test]
    fn test_score_bounded() {
        let j = job("Python, Java, React, MySQL", "AWS, Docker, Git, Jenkins");
        let pool = [
            candidate("1", "Python", "AWS", ""),
            candidate("2", "Java, React, MySQL", "Docker, Git, Jenkins", "AWS"),
            candidate("3", "", "", "Scrum master"),
        ];
        for c in &pool {
            let s = score_candidate(&j, c);
            assert!((0.0..=1.0).contains(&s.score), "score {}", s.score);
        }
    }

    #[test]
    fn test_deterministic_and_independent_of_call_order() {
        let j = job("Python, Kubernetes", "Git");
        let a = candidate("a", "Python", "Git", "");
        let b = candidate("b", "Rust, Go", "Kubernetes", "CKA");
        let first = score_candidate(&j, &a);
        let _ = score_candidate(&j, &b);
        let again = score_candidate(&j, &a);
        assert_eq!(first, again);
    }

    #[test]
    fn test_singular_and_plural_texts_are_identical() {
        let sim = text_similarity("cache size tuning", "caches sizes tuning");
        assert!((sim - 1.0).abs() < 1e-9, "sim was {sim}");
    }

    #[test]
    fn test_combine_weights() {
        assert!((combine(1.0, 0.0) - 0.7).abs() < 1e-12);
        assert!((combine(0.0, 1.0) - 0.3).abs() < 1e-12);
        assert_eq!(combine(2.0, 2.0), 1.0);
    }
}
