//! File output writer for downstream CI steps

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Output file writer
///
/// Writes named result lists into an output directory so later pipeline
/// steps can consume them without re-running the extraction.
pub struct OutputWriter;

impl OutputWriter {
    /// Write a list of values to `<output_dir>/<name>.txt`
    pub fn write_text(
        output_dir: &Path,
        name: &str,
        values: &[&str],
        separator: &str,
    ) -> Result<()> {
        let path = Self::target_path(output_dir, name, "txt")?;
        std::fs::write(&path, values.join(separator))?;
        Ok(())
    }

    /// Write a list of values to `<output_dir>/<name>.json` as a JSON array
    pub fn write_json(output_dir: &Path, name: &str, values: &[&str]) -> Result<()> {
        let path = Self::target_path(output_dir, name, "json")?;
        std::fs::write(&path, super::json_format::format_json_array(values))?;
        Ok(())
    }

    fn target_path(output_dir: &Path, name: &str, ext: &str) -> Result<PathBuf> {
        if !output_dir.is_dir() {
            return Err(Error::Config(format!(
                "output directory '{}' does not exist",
                output_dir.display()
            )));
        }
        Ok(output_dir.join(format!("{}.{}", name, ext)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    #[test]
    fn test_write_text() {
        let dir = TempDir::new().unwrap();
        OutputWriter::write_text(dir.path(), "issues", &["TEST-1", "TEST-2"], "\n").unwrap();
        let content = std::fs::read_to_string(dir.path().join("issues.txt")).unwrap();
        assert_eq!(content, "TEST-1\nTEST-2");
    }

    #[test]
    fn test_write_text_custom_separator() {
        let dir = TempDir::new().unwrap();
        OutputWriter::write_text(dir.path(), "issues", &["TEST-1", "TEST-2"], ",").unwrap();
        let content = std::fs::read_to_string(dir.path().join("issues.txt")).unwrap();
        assert_eq!(content, "TEST-1,TEST-2");
    }

    #[test]
    fn test_write_json() {
        let dir = TempDir::new().unwrap();
        OutputWriter::write_json(dir.path(), "issues", &["TEST-1", "TEST-2"]).unwrap();
        let content = std::fs::read_to_string(dir.path().join("issues.json")).unwrap();
        assert_eq!(content, r#"["TEST-1","TEST-2"]"#);
    }

    #[test]
    fn test_write_json_empty() {
        let dir = TempDir::new().unwrap();
        OutputWriter::write_json(dir.path(), "issues", &[]).unwrap();
        let content = std::fs::read_to_string(dir.path().join("issues.json")).unwrap();
        assert_eq!(content, "[]");
    }

    #[test]
    fn test_missing_output_dir_is_config_error() {
        let err = OutputWriter::write_json(Path::new("/nonexistent/issuelink"), "issues", &[])
            .unwrap_err();
        assert_matches!(err, Error::Config(_));
        assert_eq!(err.kind(), ErrorKind::Config);
    }
}
