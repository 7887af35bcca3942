//! Output-file handling.
//!
//! Each artifact is written to a temporary file in the destination directory
//! and renamed into place, so a concurrent reader never observes a partially
//! written PEM file. Existing files are replaced without confirmation.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{CertGenError, Result};

/// Write a PEM artifact atomically, replacing any existing file.
pub fn write_pem_atomic(path: &Path, contents: &str) -> Result<()> {
    write_atomic(path, contents, 0o644)
}

/// Write a private key PEM atomically. On Unix the file is created with mode
/// 0600 before it becomes visible at its final path.
pub fn write_key_pem_atomic(path: &Path, contents: &str) -> Result<()> {
    write_atomic(path, contents, 0o600)
}

fn write_atomic(
    path: &Path,
    contents: &str,
    #[cfg_attr(not(unix), allow(unused_variables))] mode: u32,
) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| file_write_error(path, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| file_write_error(path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(mode))
            .map_err(|e| file_write_error(path, e))?;
    }

    tmp.persist(path)
        .map_err(|e| file_write_error(path, e.error))?;

    Ok(())
}

fn file_write_error(path: &Path, source: std::io::Error) -> CertGenError {
    CertGenError::FileWriteError {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_write_pem_atomic() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cert.pem");

        write_pem_atomic(&path, "-----BEGIN CERTIFICATE-----\n").unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("BEGIN CERTIFICATE"));
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cert.pem");

        write_pem_atomic(&path, "old").unwrap();
        write_pem_atomic(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does-not-exist").join("key.pem");

        let result = write_key_pem_atomic(&path, "secret");
        assert!(matches!(
            result,
            Err(CertGenError::FileWriteError { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_key_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("key.pem");

        write_key_pem_atomic(&path, "secret").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
