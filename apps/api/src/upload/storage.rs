use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;
use uuid::Uuid;

/// Writes an uploaded file under `upload_dir` and returns its path.
///
/// Only the final path component of the client filename is kept, prefixed
/// with a random id so concurrent uploads of the same name do not collide.
pub async fn save_upload(upload_dir: &Path, filename: &str, data: &[u8]) -> Result<PathBuf> {
    let base = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .context("Upload has no usable filename")?;

    tokio::fs::create_dir_all(upload_dir)
        .await
        .with_context(|| format!("Failed to create upload dir {}", upload_dir.display()))?;

    let path = upload_dir.join(format!("{}_{base}", Uuid::new_v4()));
    tokio::fs::write(&path, data)
        .await
        .with_context(|| format!("Failed to store upload at {}", path.display()))?;

    info!(path = %path.display(), bytes = data.len(), "stored upload");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_upload_strips_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = save_upload(dir.path(), "../../etc/resume.pdf", b"%PDF-1.4")
            .await
            .unwrap();

        assert_eq!(path.parent(), Some(dir.path()));
        let stored = path.file_name().unwrap().to_str().unwrap();
        assert!(stored.ends_with("_resume.pdf"), "stored as {stored}");
        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_save_upload_creates_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("Resumes");
        let path = save_upload(&nested, "cv.pdf", b"data").await.unwrap();
        assert!(path.starts_with(&nested));
    }

    #[tokio::test]
    async fn test_save_upload_rejects_bare_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(save_upload(dir.path(), "..", b"data").await.is_err());
    }
}
