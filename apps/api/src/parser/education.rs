use std::sync::LazyLock;

use regex::Regex;

// A degree keyword followed by the words that trail it on the same run of
// single-whitespace separated words.
static EDUCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:Diploma|Dip\.\w+|\bB\.\w+|\bM\.\w+|\bPh\.D|\bBachelor(?:'s)?|\bMasters(?:'s)?|\bB\.Tech|\bM\.Tech|\bB\.E\.|\bM\.E\.|\bB\.Sc|\bM\.Sc|\bB\.Com|\bM\.Com)\s(?:\w+\s)*\w+",
    )
    .expect("valid education regex")
});

/// Every degree mention in the text, in order. Empty when none is found.
pub fn extract_education(text: &str) -> Vec<String> {
    EDUCATION
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
