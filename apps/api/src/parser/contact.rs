//! Contact details: email address and phone numbers.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Country code prepended to numbers that do not carry one.
pub const DEFAULT_COUNTRY_CODE: &str = "+91";

pub const DEFAULT_MAX_PHONE_NUMBERS: usize = 3;

static STRUCTURED_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Email\s*:\s*([a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})")
        .expect("valid structured email regex")
});

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid email regex")
});

// Optional country code, optional (area) code, then one to three digit
// groups. Groups take up to five digits so "98765 43210" is kept whole.
static STRUCTURED_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)Phone\s*:\s*((?:\+?\d{1,3}[-.\s]?)?(?:\(?\d{1,4}\)?[-.\s]?)?\d{3,5}(?:[-. \t]?\d{3,5}){0,2})\b",
    )
    .expect("valid structured phone regex")
});

static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:\+91[-\s]?\d{10}|\d{11}|\d{10}|\d{3}[-\s]?\d{3}[-\s]?\d{4}|\d{5}[-\s]?\d{5})\b",
    )
    .expect("valid phone regex")
});

/// First email address in the text. A labelled `Email: value` wins over any
/// address appearing earlier in free text.
pub fn extract_email(text: &str) -> Option<String> {
    if let Some(caps) = STRUCTURED_EMAIL.captures(text) {
        debug!("email resolved from labelled field");
        return Some(caps[1].to_string());
    }
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// Up to `max_numbers` distinct phone numbers in order of discovery.
///
/// Labelled `Phone: value` numbers come first. Free-text numbers are only
/// searched when fewer than `max_numbers` labelled ones exist, and are
/// appended after them. Numbers without a leading `+` get the default
/// country code.
pub fn extract_mobile_numbers(text: &str, max_numbers: usize) -> Vec<String> {
    let mut matches: Vec<&str> = STRUCTURED_PHONE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect();
    debug!(structured = matches.len(), "labelled phone numbers found");

    if matches.len() < max_numbers {
        matches.extend(PHONE.find_iter(text).map(|m| m.as_str()));
    }

    let mut unique: Vec<&str> = Vec::with_capacity(max_numbers);
    for number in matches {
        if unique.len() == max_numbers {
            break;
        }
        if !unique.contains(&number) {
            unique.push(number);
        }
    }

    unique
        .into_iter()
        .map(|number| {
            if number.starts_with('+') {
                number.to_string()
            } else {
                format!("{DEFAULT_COUNTRY_CODE}{number}")
            }
        })
        .collect()
}
