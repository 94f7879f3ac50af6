use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use crate::nlp::{EntityLabel, LanguageModel};
use crate::parser::dates::{calculate_age_on, parse_date};

static STRUCTURED_DOB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:DOB|Date\s*of\s*Birth|D.O.B)\s*:\s*(.*)").expect("valid dob regex")
});

static STRUCTURED_AGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Age\s*:\s*(\d+)").expect("valid age regex"));

static FREE_TEXT_AGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:age|aged)\s*[:\-]?\s*(\d{1,2})\b").expect("valid free-text age regex")
});

/// Date of birth and age, resolved in priority order:
///
/// 1. `DOB: ...` / `Date of Birth: ...` labelled line
/// 2. `Age: N` labelled value
/// 3. first DATE entity from the model that parses as a date (only if no DOB yet)
/// 4. free-text "aged N" (only if no age yet)
/// 5. age derived from the DOB as of `today` (only if still no age)
pub fn extract_dob_age(
    text: &str,
    model: &dyn LanguageModel,
    today: NaiveDate,
) -> (Option<NaiveDate>, Option<i32>) {
    let mut dob = STRUCTURED_DOB
        .captures(text)
        .and_then(|caps| parse_date(caps[1].trim()));
    let mut age = STRUCTURED_AGE
        .captures(text)
        .and_then(|caps| caps[1].parse::<i32>().ok());

    if dob.is_none() {
        dob = model
            .entities(text)
            .iter()
            .filter(|e| e.label == EntityLabel::Date)
            .find_map(|e| parse_date(&e.text));
        if dob.is_some() {
            debug!("date of birth resolved from DATE entity");
        }
    }

    if age.is_none() {
        age = FREE_TEXT_AGE
            .captures(text)
            .and_then(|caps| caps[1].parse::<i32>().ok());
    }

    if let (Some(born), None) = (dob, age) {
        age = Some(calculate_age_on(born, today));
        debug!("age derived from date of birth");
    }

    (dob, age)
}
