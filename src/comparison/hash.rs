//! File hashing for content comparison using SHA-256

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{Result, SyncError};

/// File hash result
pub type FileHash = [u8; 32];

/// File hasher
pub struct FileHasher;

impl FileHasher {
    /// Compute SHA-256 hash of a file by streaming its contents
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn hash(path: &Path) -> Result<FileHash> {
        let file = File::open(path).map_err(|e| SyncError::fs("open", path, e))?;

        let mut reader = BufReader::new(file);
        let mut hasher = Sha256::new();
        let mut buffer = [0; 8192]; // 8KB buffer for streaming

        loop {
            let bytes_read = reader
                .read(&mut buffer)
                .map_err(|e| SyncError::fs("read", path, e))?;

            if bytes_read == 0 {
                break;
            }

            hasher.update(&buffer[..bytes_read]);
        }

        Ok(hasher.finalize().into())
    }

    /// Whether two files hold identical bytes
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read.
    pub fn identical(a: &Path, b: &Path) -> Result<bool> {
        Ok(Self::hash(a)? == Self::hash(b)?)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_identical_files_hash_the_same() {
        let tmp = TempDir::new().unwrap();
        let file1 = tmp.path().join("file1.ma");
        let file2 = tmp.path().join("file2.ma");

        fs::write(&file1, "same content").unwrap();
        fs::write(&file2, "same content").unwrap();

        assert!(FileHasher::identical(&file1, &file2).unwrap());
    }

    #[test]
    fn test_different_files_hash_differently() {
        let tmp = TempDir::new().unwrap();
        let file1 = tmp.path().join("file1.ma");
        let file2 = tmp.path().join("file2.ma");

        fs::write(&file1, "content 1").unwrap();
        fs::write(&file2, "content 2").unwrap();

        assert!(!FileHasher::identical(&file1, &file2).unwrap());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("missing.ma");
        assert!(FileHasher::hash(&missing).is_err());
    }

    #[test]
    fn test_hash_streams_large_files() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("large.mb");

        // Larger than the streaming buffer
        fs::write(&file, vec![7u8; 64 * 1024]).unwrap();
        assert!(FileHasher::hash(&file).is_ok());
    }
}
