//! Filesystem helpers

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Result, SiteError};

/// Read a whole file into a string
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| SiteError::io(path, e))
}

/// Write a file, creating parent directories as needed
pub fn write_file(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
    }
    fs::write(path, text).map_err(|e| SiteError::io(path, e))
}

/// Remove a directory tree if it exists
pub fn remove_dir(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path).map_err(|e| SiteError::io(path, e))?;
    }
    Ok(())
}

/// Recursively copy `src` into `dst` verbatim
pub fn copy_dir(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst).map_err(|e| SiteError::io(dst, e))?;

    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            SiteError::io(path, e.into())
        })?;
        let path = entry.path();
        let relative = match path.strip_prefix(src) {
            Ok(relative) => relative,
            Err(_) => continue,
        };
        let dest = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest).map_err(|e| SiteError::io(&dest, e))?;
        } else {
            fs::copy(path, &dest).map_err(|e| SiteError::io(path, e))?;
            tracing::debug!("Copied {:?}", relative);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_file_creates_parents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("a/b/index.html");
        write_file(&path, "hello").unwrap();
        assert_eq!(read_file(&path).unwrap(), "hello");
    }

    #[test]
    fn test_copy_dir() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("static");
        write_file(&src.join("css/style.css"), "body {}").unwrap();
        write_file(&src.join("favicon.ico"), "icon").unwrap();

        let dst = tmp.path().join("_site");
        copy_dir(&src, &dst).unwrap();

        assert_eq!(read_file(&dst.join("css/style.css")).unwrap(), "body {}");
        assert_eq!(read_file(&dst.join("favicon.ico")).unwrap(), "icon");
    }

    #[test]
    fn test_read_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = read_file(&tmp.path().join("missing.html")).unwrap_err();
        assert!(matches!(err, SiteError::Io { .. }));
    }
}
