//! Text Normalizer — canonical token stream for similarity comparison.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

use crate::matching::lemma::lemmatize;

/// Standard English stopword list, alphabetic entries only.
const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
    "for", "with", "about", "against", "between", "into", "through", "during", "before",
    "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
    "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such", "no",
    "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can", "will",
    "just", "don", "should", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren",
    "couldn", "didn", "doesn", "hadn", "hasn", "haven", "isn", "ma", "mightn", "mustn",
    "needn", "shan", "shouldn", "wasn", "weren", "won", "wouldn",
];

static STOPWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH_STOPWORDS.iter().copied().collect());

static NON_ALPHA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z\s]").expect("static regex is valid"));

/// Lowercases, strips everything but ASCII letters and whitespace, tokenizes,
/// drops stopwords and lemmatizes. Tokens are rejoined with single spaces.
///
/// Lossy by construction: `C++` becomes `c`, `node.js` becomes `node js`.
pub fn normalize_text(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let letters_only = NON_ALPHA.replace_all(&lowered, " ");

    letters_only
        .unicode_words()
        .filter(|token| !STOPWORDS.contains(*token))
        .map(lemmatize)
        .collect::<Vec<_>>()
        .join(" ")
}
