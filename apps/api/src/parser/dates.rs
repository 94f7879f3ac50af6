//! Date normalization shared by the date-of-birth extractor.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

static ORDINAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)(st|nd|rd|th)").expect("valid ordinal regex"));

/// Accepted input layouts, tried in order. Day-first layouts shadow the
/// year-first one. "%d %b%Y" is a lenient near-duplicate of "%d %b %Y".
const DATE_FORMATS: &[&str] = &[
    "%d %B %Y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%d-%B-%Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%Y-%m-%d",
    "%d,%B,%Y",
    "%d %b%Y",
    "%d:%b:%Y",
    "%d:%B:%Y",
];

const OUTPUT_FORMAT: &str = "%d-%b-%Y";

/// "1st" -> "1", "22nd" -> "22".
pub fn remove_ordinal_suffix(date_str: &str) -> String {
    ORDINAL_SUFFIX.replace_all(date_str, "$1").into_owned()
}

/// Parses a free-form date, returning `None` when no known layout fits.
pub fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let cleaned = remove_ordinal_suffix(date_str);
    let cleaned = cleaned.trim();
    DATE_FORMATS.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(cleaned, fmt)
            .ok()
            // the year field is four digits wide
            .filter(|d| (1000..=9999).contains(&d.year()))
    })
}

/// Formats as "dd-Mon-yyyy", e.g. "05-Jan-1990".
pub fn format_date_to_custom(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(OUTPUT_FORMAT).to_string())
}

/// Age in whole years on `today`, one less if the birthday has not yet
/// occurred that year.
pub fn calculate_age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let birthday_pending = (today.month(), today.day()) < (dob.month(), dob.day());
    today.year() - dob.year() - i32::from(birthday_pending)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_remove_ordinal_suffix() {
        assert_eq!(remove_ordinal_suffix("1st May 2001"), "1 May 2001");
        assert_eq!(remove_ordinal_suffix("22nd of June"), "22 of June");
        assert_eq!(remove_ordinal_suffix("August 3rd"), "August 3");
        assert_eq!(remove_ordinal_suffix("no digits"), "no digits");
    }

    #[test]
    fn test_parse_full_month_name() {
        assert_eq!(parse_date("15th March 2020"), Some(ymd(2020, 3, 15)));
        assert_eq!(parse_date("5 January 1990"), Some(ymd(1990, 1, 5)));
    }

    #[test]
    fn test_parse_abbreviated_and_separated_layouts() {
        assert_eq!(parse_date("01-Jan-1990"), Some(ymd(1990, 1, 1)));
        assert_eq!(parse_date("7 Aug 1988"), Some(ymd(1988, 8, 7)));
        assert_eq!(parse_date("12-October-1995"), Some(ymd(1995, 10, 12)));
        assert_eq!(parse_date("3,July,2000"), Some(ymd(2000, 7, 3)));
        assert_eq!(parse_date("3 Jul2000"), Some(ymd(2000, 7, 3)));
        assert_eq!(parse_date("9:Feb:1999"), Some(ymd(1999, 2, 9)));
        assert_eq!(parse_date("9:February:1999"), Some(ymd(1999, 2, 9)));
    }

    #[test]
    fn test_parse_numeric_layouts_are_day_first() {
        assert_eq!(parse_date("01/02/2020"), Some(ymd(2020, 2, 1)));
        assert_eq!(parse_date("01-02-2020"), Some(ymd(2020, 2, 1)));
        assert_eq!(parse_date("2020-02-01"), Some(ymd(2020, 2, 1)));
    }

    #[test]
    fn test_parse_rejects_unknown_or_invalid() {
        assert_eq!(parse_date("March 2020"), None);
        assert_eq!(parse_date("31/02/2020"), None);
        assert_eq!(parse_date("01-01-90"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("two years"), None);
    }

    #[test]
    fn test_format_date_to_custom() {
        assert_eq!(format_date_to_custom(None), None);
        assert_eq!(
            format_date_to_custom(Some(ymd(1990, 1, 5))).as_deref(),
            Some("05-Jan-1990")
        );
        assert_eq!(
            format_date_to_custom(parse_date("15th March 2020")).as_deref(),
            Some("15-Mar-2020")
        );
    }

    #[test]
    fn test_calculate_age_birthday_passed() {
        assert_eq!(calculate_age_on(ymd(1990, 1, 1), ymd(2024, 6, 1)), 34);
    }

    #[test]
    fn test_calculate_age_birthday_pending() {
        assert_eq!(calculate_age_on(ymd(1990, 12, 31), ymd(2024, 6, 1)), 33);
    }

    #[test]
    fn test_calculate_age_on_birthday() {
        assert_eq!(calculate_age_on(ymd(1990, 6, 1), ymd(2024, 6, 1)), 34);
    }
}
