use serde::{Deserialize, Serialize};

use crate::parser::profile::Gender;

/// Everything extracted from one resume. Any field may be absent; list
/// fields are empty rather than absent.
///
/// Serializes with the output keys of the upload endpoint, including the
/// trailing space in `"date of birth "`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Vec<String>,
    pub education: Vec<String>,
    /// "dd-Mon-yyyy"
    #[serde(rename = "date of birth ")]
    pub date_of_birth: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub experience: Option<String>,
}
