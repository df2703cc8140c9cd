//! Categorizer/Ranker — sorts scored candidates and buckets them into tiers.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::matching::keywords::extract_categorized_keywords;
use crate::matching::models::{
    CandidateAttributes, ExcludedCandidate, JobDescriptionAttributes, MatchThresholds,
    RankingResult, ScoredCandidate,
};
use crate::matching::similarity::score_with_job_keywords;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RankingOptions {
    pub thresholds: MatchThresholds,
    /// Score candidates on the rayon pool. The sort stays single-threaded.
    pub parallel: bool,
}

/// Ranks candidates with the default thresholds (0.25 / 0.20), sequentially.
pub fn rank_candidates(
    job: &JobDescriptionAttributes,
    candidates: &[CandidateAttributes],
) -> RankingResult {
    rank_candidates_with(job, candidates, &RankingOptions::default())
}

pub fn rank_candidates_with(
    job: &JobDescriptionAttributes,
    candidates: &[CandidateAttributes],
    options: &RankingOptions,
) -> RankingResult {
    let mut excluded = Vec::new();
    let eligible: Vec<&CandidateAttributes> = candidates
        .iter()
        .enumerate()
        .filter_map(|(position, candidate)| match check_candidate(candidate) {
            Ok(()) => Some(candidate),
            Err(reason) => {
                warn!("Excluding candidate at position {position} from ranking: {reason}");
                excluded.push(ExcludedCandidate { position, reason });
                None
            }
        })
        .collect();

    let job_keywords = extract_categorized_keywords(&job.keyword_text());
    let score = |c: &&CandidateAttributes| score_with_job_keywords(job, &job_keywords, c);

    // Both paths yield scores in input order.
    let mut scored: Vec<ScoredCandidate> = if options.parallel {
        eligible.par_iter().map(score).collect()
    } else {
        eligible.iter().map(score).collect()
    };

    // Vec::sort_by is stable: equal scores keep input order.
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!(
        "Ranked {} candidates ({} excluded)",
        scored.len(),
        excluded.len()
    );

    RankingResult::from_sorted(scored, options.thresholds, excluded)
}

fn check_candidate(candidate: &CandidateAttributes) -> Result<(), String> {
    if candidate.id.trim().is_empty() {
        return Err("candidate identifier is blank".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> JobDescriptionAttributes {
        JobDescriptionAttributes {
            skills: "Python, Java".to_string(),
            tools: "Docker".to_string(),
            job_type: Some("Full-time".to_string()),
        }
    }

    fn candidate(id: &str, skills: &str, tools: &str) -> CandidateAttributes {
        CandidateAttributes {
            id: id.to_string(),
            skills: skills.to_string(),
            tools: tools.to_string(),
            certifications: String::new(),
        }
    }

    fn ids(slice: &[ScoredCandidate]) -> Vec<&str> {
        slice.iter().map(|s| s.candidate.id.as_str()).collect()
    }

    #[test]
    fn test_strong_candidate_ranks_above_weak() {
        let pool = vec![
            candidate("B", "Ruby", "none"),
            candidate("A", "Python, Java, SQL", "Docker, Git"),
        ];
        let result = rank_candidates(&job(), &pool);
        assert_eq!(ids(result.ranked()), vec!["A", "B"]);
        assert_eq!(ids(result.high()), vec!["A"]);
        assert_eq!(ids(result.low()), vec!["B"]);
        assert!(result.medium().is_empty());
    }

    #[test]
    fn test_empty_candidate_list() {
        let result = rank_candidates(&job(), &[]);
        assert!(result.top_3().is_empty());
        assert!(result.high().is_empty());
        assert!(result.medium().is_empty());
        assert!(result.low().is_empty());
        assert!(result.excluded.is_empty());
    }

    #[test]
    fn test_top_3_is_prefix_of_sorted_list() {
        let pool = vec![
            candidate("1", "Python", ""),
            candidate("2", "Python, Java", "Docker"),
            candidate("3", "", ""),
            candidate("4", "Java", "Docker"),
            candidate("5", "Python, Java", ""),
        ];
        let result = rank_candidates(&job(), &pool);
        assert_eq!(result.top_3(), &result.ranked()[..3]);
        assert_eq!(result.top_3()[0].candidate.id, "2");
    }

    #[test]
    fn test_short_list_top_3_takes_all() {
        let pool = vec![candidate("only", "Python", "")];
        let result = rank_candidates(&job(), &pool);
        assert_eq!(result.top_3().len(), 1);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let pool = vec![
            candidate("first", "Ruby", ""),
            candidate("second", "Ruby", ""),
            candidate("third", "Ruby", ""),
            candidate("best", "Python", "Docker"),
        ];
        let result = rank_candidates(&job(), &pool);
        assert_eq!(ids(result.ranked()), vec!["best", "first", "second", "third"]);
    }

    #[test]
    fn test_every_candidate_in_exactly_one_tier() {
        let pool: Vec<_> = [
            ("a", "Python, Java", "Docker"),
            ("b", "Python", "Docker"),
            ("c", "Java", ""),
            ("d", "Python", ""),
            ("e", "Rust", "Terraform"),
            ("f", "", ""),
        ]
        .iter()
        .map(|(id, s, t)| candidate(id, s, t))
        .collect();
        let result = rank_candidates(&job(), &pool);

        assert_eq!(
            result.high().len() + result.medium().len() + result.low().len(),
            pool.len()
        );
        let t = result.thresholds();
        for c in result.high() {
            assert!(c.score >= t.high);
        }
        for c in result.medium() {
            assert!(c.score >= t.medium && c.score < t.high);
        }
        for c in result.low() {
            assert!(c.score < t.medium);
        }
        for c in &pool {
            let hits = [result.high(), result.medium(), result.low()]
                .iter()
                .filter(|tier| tier.iter().any(|s| s.candidate.id == c.id))
                .count();
            assert_eq!(hits, 1, "candidate {} in {hits} tiers", c.id);
        }
    }

    #[test]
    fn test_idempotent() {
        let pool = vec![
            candidate("a", "Python", "Git"),
            candidate("b", "Java", "Docker"),
            candidate("c", "Python, Java", "Docker"),
        ];
        let first = serde_json::to_string(&rank_candidates(&job(), &pool)).unwrap();
        let second = serde_json::to_string(&rank_candidates(&job(), &pool)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let pool: Vec<_> = (0..40)
            .map(|i| {
                let skills = if i % 3 == 0 { "Python, Java" } else { "Ruby" };
                let tools = if i % 2 == 0 { "Docker" } else { "" };
                candidate(&format!("c{i}"), skills, tools)
            })
            .collect();
        let sequential = rank_candidates(&job(), &pool);
        let parallel = rank_candidates_with(
            &job(),
            &pool,
            &RankingOptions {
                parallel: true,
                ..Default::default()
            },
        );
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_blank_identifier_excluded_not_fatal() {
        let pool = vec![
            candidate("ok", "Python", ""),
            candidate("  ", "Python, Java", "Docker"),
        ];
        let result = rank_candidates(&job(), &pool);
        assert_eq!(result.len(), 1);
        assert_eq!(result.excluded.len(), 1);
        assert_eq!(result.excluded[0].position, 1);
    }

    #[test]
    fn test_custom_thresholds_move_tier_boundaries() {
        let pool = vec![candidate("a", "Python", "")];
        let strict = RankingOptions {
            thresholds: MatchThresholds::new(0.9, 0.8).unwrap(),
            parallel: false,
        };
        let result = rank_candidates_with(&job(), &pool, &strict);
        assert_eq!(result.low().len(), 1);
        assert!(result.high().is_empty());
    }
}
