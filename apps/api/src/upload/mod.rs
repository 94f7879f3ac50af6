// Single-file resume upload: validate, store, extract, respond.

pub mod handlers;
pub mod storage;

const ALLOWED_EXTENSIONS: &[&str] = &["pdf"];

/// True when the filename has an extension and it is an allowed one
/// (case-insensitive).
pub fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_file() {
        assert!(allowed_file("resume.pdf"));
        assert!(allowed_file("Resume.Final.PDF"));
        assert!(!allowed_file("resume.docx"));
        assert!(!allowed_file("pdf"));
        assert!(!allowed_file("resume."));
    }
}
