//! Gender and years of experience.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static STRUCTURED_GENDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Gender\s*:\s*(Male|Female)").expect("valid structured gender regex")
});

static GENDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(Male|Female)\b").expect("valid gender regex"));

static STRUCTURED_EXPERIENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Experience\s*:\s*(\d+)\s*(?:years?|yrs?)")
        .expect("valid structured experience regex")
});

static EXPERIENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s*(?:years?|months?)\s*(?:of)?\s*(?:experience)?")
        .expect("valid experience regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    fn from_match(word: &str) -> Self {
        if word.eq_ignore_ascii_case("female") {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("Male"),
            Gender::Female => f.write_str("Female"),
        }
    }
}

/// `Gender: value` if labelled, else the first standalone "male"/"female".
pub fn extract_gender(text: &str) -> Option<Gender> {
    STRUCTURED_GENDER
        .captures(text)
        .or_else(|| GENDER.captures(text))
        .map(|caps| Gender::from_match(&caps[1]))
}

/// `Experience: N years` normalizes to "N yrs"; otherwise the first free-text
/// "N years/months (of experience)" phrase is returned as written.
pub fn extract_experience(text: &str) -> Option<String> {
    if let Some(caps) = STRUCTURED_EXPERIENCE.captures(text) {
        return Some(format!("{} yrs", &caps[1]));
    }
    EXPERIENCE.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_gender() {
        assert_eq!(extract_gender("Gender : FEMALE"), Some(Gender::Female));
        assert_eq!(extract_gender("gender:male"), Some(Gender::Male));
    }

    #[test]
    fn test_free_text_gender_case_insensitive() {
        assert_eq!(extract_gender("I am a female engineer"), Some(Gender::Female));
    }

    #[test]
    fn test_gender_requires_whole_word() {
        assert_eq!(extract_gender("Maleficent Femaleish"), None);
    }

    #[test]
    fn test_gender_display() {
        assert_eq!(Gender::Female.to_string(), "Female");
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), r#""Male""#);
    }

    #[test]
    fn test_structured_experience_normalized() {
        assert_eq!(
            extract_experience("Experience: 5 years").as_deref(),
            Some("5 yrs")
        );
        assert_eq!(
            extract_experience("EXPERIENCE:12yrs").as_deref(),
            Some("12 yrs")
        );
    }

    #[test]
    fn test_free_text_experience_verbatim() {
        assert_eq!(
            extract_experience("I have 7 years of experience in Rust").as_deref(),
            Some("7 years of experience")
        );
        assert_eq!(
            extract_experience("Internship of 6 months").as_deref(),
            Some("6 months")
        );
    }

    #[test]
    fn test_no_experience() {
        assert_eq!(extract_experience("Fresh graduate"), None);
    }
}
