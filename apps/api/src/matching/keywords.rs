//! Attribute Extractor — dictionary lookup of categorized keywords in free text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::matching::models::{CategorizedKeywords, KeywordCategory};

// Matching is purely lexical. Entries that are also plain English words
// (`express`, `spring`, `swift`, `oracle`, `excel`, `spark`, `lambda`) hit on
// prose too, so a free-text posting run through
// `JobDescriptionAttributes::from_description` can pick up a keyword nobody
// asked for. Structured skills/tools fields do not have this problem.
const PROGRAMMING_LANGUAGES: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "c++",
    "c#",
    "golang",
    "rust",
    "ruby",
    "php",
    "scala",
    "kotlin",
    "swift",
    "perl",
    "matlab",
    "bash",
];

const FRAMEWORKS: &[&str] = &[
    "django",
    "flask",
    "fastapi",
    "spring",
    "spring boot",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    ".net",
    "rails",
    "laravel",
    "tensorflow",
    "pytorch",
    "pandas",
    "numpy",
    "scikit-learn",
];

const DATABASES: &[&str] = &[
    "sql",
    "mysql",
    "postgresql",
    "postgres",
    "mongodb",
    "redis",
    "oracle",
    "sql server",
    "sqlite",
    "cassandra",
    "dynamodb",
    "elasticsearch",
];

const CLOUD: &[&str] = &[
    "aws",
    "azure",
    "gcp",
    "google cloud",
    "docker",
    "kubernetes",
    "terraform",
    "lambda",
    "ec2",
    "s3",
    "cloudformation",
    "openshift",
];

const TOOLS: &[&str] = &[
    "git",
    "github",
    "gitlab",
    "jenkins",
    "jira",
    "confluence",
    "ansible",
    "maven",
    "gradle",
    "linux",
    "tableau",
    "power bi",
    "excel",
    "postman",
    "airflow",
    "kafka",
    "spark",
];

struct KeywordPattern {
    keyword: &'static str,
    regex: Regex,
}

/// Whole-word, case-insensitive pattern. `\b` is not usable here because it
/// never fires after a trailing symbol such as the `+` in `c++`.
fn whole_word(keyword: &str) -> String {
    format!(r"(?i)(?:^|\W){}(?:\W|$)", regex::escape(keyword))
}

static DICTIONARY: Lazy<Vec<(KeywordCategory, Vec<KeywordPattern>)>> = Lazy::new(|| {
    KeywordCategory::ALL
        .iter()
        .map(|&category| {
            let patterns = keywords_for(category)
                .iter()
                .map(|&keyword| KeywordPattern {
                    keyword,
                    regex: Regex::new(&whole_word(keyword))
                        .expect("escaped keyword is a valid regex"),
                })
                .collect();
            (category, patterns)
        })
        .collect()
});

/// The fixed dictionary for one category, in scan order.
pub fn keywords_for(category: KeywordCategory) -> &'static [&'static str] {
    match category {
        KeywordCategory::ProgrammingLanguages => PROGRAMMING_LANGUAGES,
        KeywordCategory::Frameworks => FRAMEWORKS,
        KeywordCategory::Databases => DATABASES,
        KeywordCategory::Cloud => CLOUD,
        KeywordCategory::Tools => TOOLS,
    }
}

/// Scans `text` against every category dictionary.
///
/// A keyword is recorded once, in dictionary order, if it appears anywhere as
/// a whole word. Categories with no hits map to an empty list.
pub fn extract_categorized_keywords(text: &str) -> CategorizedKeywords {
    let mut found = CategorizedKeywords::new();
    if text.trim().is_empty() {
        return found;
    }

    for (category, patterns) in DICTIONARY.iter() {
        for pattern in patterns {
            if pattern.regex.is_match(text) {
                found.push(*category, pattern.keyword);
            }
        }
    }

    found
}
