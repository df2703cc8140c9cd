//! Rule-based noun lemmatizer.
//!
//! Irregular plurals come from a lookup table; regular plurals are reduced by
//! suffix rules. Words that merely end in `s` (`analysis`, `status`, `class`)
//! are left alone.

/// Plurals the suffix rules get wrong → base form. Covers irregular nouns,
/// `-ie` and `-che` bases (the rules would yield `-y` and `-ch`) and `-oes`.
const EXCEPTIONS: &[(&str, &str)] = &[
    ("analyses", "analysis"),
    ("avalanches", "avalanche"),
    ("bases", "basis"),
    ("caches", "cache"),
    ("calories", "calorie"),
    ("children", "child"),
    ("cliches", "cliche"),
    ("cookies", "cookie"),
    ("criteria", "criterion"),
    ("diagnoses", "diagnosis"),
    ("echoes", "echo"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("goes", "go"),
    ("headaches", "headache"),
    ("heroes", "hero"),
    ("hoodies", "hoodie"),
    ("hypotheses", "hypothesis"),
    ("indices", "index"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("matrices", "matrix"),
    ("men", "man"),
    ("mice", "mouse"),
    ("movies", "movie"),
    ("moustaches", "moustache"),
    ("niches", "niche"),
    ("people", "person"),
    ("phenomena", "phenomenon"),
    ("potatoes", "potato"),
    ("quizzes", "quiz"),
    ("rookies", "rookie"),
    ("selfies", "selfie"),
    ("selves", "self"),
    ("teeth", "tooth"),
    ("theses", "thesis"),
    ("tomatoes", "tomato"),
    ("vertices", "vertex"),
    ("vetoes", "veto"),
    ("waltzes", "waltz"),
    ("wives", "wife"),
    ("women", "woman"),
    ("zombies", "zombie"),
];

/// Words whose trailing `s` is part of the base form.
const INVARIANT: &[&str] = &[
    "always",
    "analytics",
    "aws",
    "business",
    "canvas",
    "chaos",
    "jenkins",
    "kubernetes",
    "news",
    "redis",
    "series",
    "species",
    "various",
];

/// Returns the dictionary base form of a lowercase token.
pub fn lemmatize(token: &str) -> String {
    if let Some((_, base)) = EXCEPTIONS.iter().find(|(plural, _)| *plural == token) {
        return (*base).to_string();
    }
    if INVARIANT.contains(&token) || token.len() <= 3 {
        return token.to_string();
    }

    if let Some(stem) = token.strip_suffix("ies") {
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }

    for suffix in ["sses", "xes", "zzes", "ches", "shes"] {
        if token.ends_with(suffix) {
            return token[..token.len() - 2].to_string();
        }
    }
    // size, prize, maze: the `e` belongs to the base.
    if let Some(stem) = token.strip_suffix("zes") {
        return format!("{stem}ze");
    }

    if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
        return token.to_string();
    }

    match token.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plurals() {
        assert_eq!(lemmatize("developers"), "developer");
        assert_eq!(lemmatize("skills"), "skill");
        assert_eq!(lemmatize("databases"), "database");
    }

    #[test]
    fn test_ies_plural() {
        assert_eq!(lemmatize("technologies"), "technology");
        assert_eq!(lemmatize("libraries"), "library");
    }

    #[test]
    fn test_es_plurals() {
        assert_eq!(lemmatize("processes"), "process");
        assert_eq!(lemmatize("boxes"), "box");
        assert_eq!(lemmatize("batches"), "batch");
        assert_eq!(lemmatize("dashes"), "dash");
    }

    #[test]
    fn test_plurals_keeping_trailing_e() {
        assert_eq!(lemmatize("sizes"), "size");
        assert_eq!(lemmatize("prizes"), "prize");
        assert_eq!(lemmatize("caches"), "cache");
        assert_eq!(lemmatize("niches"), "niche");
        assert_eq!(lemmatize("movies"), "movie");
        assert_eq!(lemmatize("cookies"), "cookie");
    }

    #[test]
    fn test_zz_and_oes_plurals() {
        assert_eq!(lemmatize("quizzes"), "quiz");
        assert_eq!(lemmatize("buzzes"), "buzz");
        assert_eq!(lemmatize("goes"), "go");
        assert_eq!(lemmatize("heroes"), "hero");
    }

    #[test]
    fn test_irregular_plurals() {
        assert_eq!(lemmatize("people"), "person");
        assert_eq!(lemmatize("analyses"), "analysis");
        assert_eq!(lemmatize("criteria"), "criterion");
    }

    #[test]
    fn test_non_plural_s_endings_untouched() {
        assert_eq!(lemmatize("analysis"), "analysis");
        assert_eq!(lemmatize("status"), "status");
        assert_eq!(lemmatize("class"), "class");
        assert_eq!(lemmatize("kubernetes"), "kubernetes");
    }

    #[test]
    fn test_short_and_singular_words_untouched() {
        assert_eq!(lemmatize("aws"), "aws");
        assert_eq!(lemmatize("gas"), "gas");
        assert_eq!(lemmatize("python"), "python");
    }
}
