use std::path::{Path, PathBuf};

use tokio::fs;

use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Filesystem storage. Reads resolve the given path as-is (input files are
/// caller-provided paths); writes land under the configured output directory.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    output_dir: PathBuf,
}

impl LocalStorage {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = fs::read(Path::new(path)).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.output_dir.join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).await?;
        }

        fs::write(full_path, data).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_lands_in_output_dir() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write_file("alice.html", b"<html>").await.unwrap();

        let written = std::fs::read(dir.path().join("alice.html")).unwrap();
        assert_eq!(written, b"<html>");
    }

    #[tokio::test]
    async fn test_read_uses_path_as_given() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("entries.txt");
        std::fs::write(&input, b"A\nB").unwrap();

        // Output dir differs from where the input lives.
        let storage = LocalStorage::new("/nonexistent-output");
        let data = storage.read_file(input.to_str().unwrap()).await.unwrap();
        assert_eq!(data, b"A\nB");
    }

    #[tokio::test]
    async fn test_read_missing_file_is_io_error() {
        let storage = LocalStorage::new(".");
        assert!(storage.read_file("/no/such/file.txt").await.is_err());
    }
}
