// Resume matching engine: keyword extraction, text normalization,
// similarity scoring and tiered ranking. Pure functions only; HTTP glue
// lives in handlers.rs.

pub mod handlers;
pub mod keywords;
pub mod lemma;
pub mod models;
pub mod normalize;
pub mod ranking;
pub mod similarity;
pub mod tfidf;

pub use keywords::extract_categorized_keywords;
pub use ranking::{rank_candidates, rank_candidates_with, RankingOptions};
