//! Field extraction pipeline.
//!
//! Each extractor is a pure function of the resume text and prefers, in
//! order: a labelled `Label: value` line, a free-text pattern, and finally
//! the language model. Extractors run independently; only the date of birth
//! feeds into the age.

pub mod contact;
pub mod dates;
pub mod dob;
pub mod education;
pub mod fields;
pub mod name;
pub mod profile;

use std::path::Path;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::info;

use crate::nlp::LanguageModel;
use crate::pdf::{extract_text_from_pdf, PdfError};

pub use contact::DEFAULT_MAX_PHONE_NUMBERS;
pub use fields::ParsedFields;

/// Runs every extractor against resume text. Holds only read-only
/// collaborators, so one instance is shared across requests.
#[derive(Clone)]
pub struct ResumeParser {
    model: Arc<dyn LanguageModel>,
    max_phone_numbers: usize,
}

impl ResumeParser {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self {
            model,
            max_phone_numbers: DEFAULT_MAX_PHONE_NUMBERS,
        }
    }

    pub fn with_max_phone_numbers(mut self, max_phone_numbers: usize) -> Self {
        self.max_phone_numbers = max_phone_numbers;
        self
    }

    /// Extracts the PDF's text and parses it. Only the text extraction can fail.
    pub fn parse_resume(&self, pdf_path: &Path) -> Result<ParsedFields, PdfError> {
        let text = extract_text_from_pdf(pdf_path)?;
        Ok(self.parse_text(&text))
    }

    pub fn parse_text(&self, text: &str) -> ParsedFields {
        self.parse_text_on(text, Local::now().date_naive())
    }

    /// As `parse_text`, deriving any age as of `today`.
    pub fn parse_text_on(&self, text: &str, today: NaiveDate) -> ParsedFields {
        let model = self.model.as_ref();
        let (dob, age) = dob::extract_dob_age(text, model, today);

        let fields = ParsedFields {
            name: name::extract_name(text, model),
            email: contact::extract_email(text),
            phone: contact::extract_mobile_numbers(text, self.max_phone_numbers),
            education: education::extract_education(text),
            date_of_birth: dates::format_date_to_custom(dob),
            age,
            gender: profile::extract_gender(text),
            experience: profile::extract_experience(text),
        };

        info!(
            chars = text.len(),
            has_name = fields.name.is_some(),
            has_email = fields.email.is_some(),
            phones = fields.phone.len(),
            degrees = fields.education.len(),
            has_dob = fields.date_of_birth.is_some(),
            "resume parsed"
        );
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::testing::StubModel;
    use crate::nlp::RuleBasedModel;
    use crate::parser::profile::Gender;

    const SAMPLE: &str = "Curriculum Vitae\n\
        Aarav Mehta\n\
        Email: aarav.mehta@example.com\n\
        Phone: +91 98765 43210\n\
        Alternate: 9123456789\n\
        Date of Birth: 12th August 1994\n\
        Gender: male\n\
        Experience: 4 years\n\
        Education\n\
        B.Tech in Mechanical Engineering\n";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_parse_full_resume() {
        let parser = ResumeParser::new(Arc::new(RuleBasedModel::new()));
        let fields = parser.parse_text_on(SAMPLE, today());

        assert_eq!(fields.name.as_deref(), Some("Aarav Mehta"));
        assert_eq!(fields.email.as_deref(), Some("aarav.mehta@example.com"));
        // the free-text scan also sees the labelled digits without the country code
        assert_eq!(
            fields.phone,
            vec!["+91 98765 43210", "+9198765 43210", "+919123456789"]
        );
        assert_eq!(fields.education, vec!["B.Tech in Mechanical Engineering"]);
        assert_eq!(fields.date_of_birth.as_deref(), Some("12-Aug-1994"));
        assert_eq!(fields.age, Some(29));
        assert_eq!(fields.gender, Some(Gender::Male));
        assert_eq!(fields.experience.as_deref(), Some("4 yrs"));
    }

    #[test]
    fn test_parse_empty_text_degrades_to_not_found() {
        let parser = ResumeParser::new(Arc::new(StubModel::default()));
        assert_eq!(parser.parse_text_on("", today()), ParsedFields::default());
    }

    #[test]
    fn test_max_phone_numbers_respected() {
        let parser =
            ResumeParser::new(Arc::new(StubModel::default())).with_max_phone_numbers(1);
        let fields = parser.parse_text_on("9876543210 9123456789", today());
        assert_eq!(fields.phone, vec!["+919876543210"]);
    }

    #[test]
    fn test_parse_resume_missing_file_is_error() {
        let parser = ResumeParser::new(Arc::new(RuleBasedModel::new()));
        let result = parser.parse_resume(Path::new("/definitely/not/here.pdf"));
        assert!(matches!(result, Err(PdfError::Read { .. })));
    }
}
