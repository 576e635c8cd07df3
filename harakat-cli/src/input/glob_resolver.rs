//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

use super::InputSource;
use crate::error::CliError;

/// Pattern that stands for standard input
pub const STDIN_MARKER: &str = "-";

/// Resolve file patterns to actual file paths
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern)
            .map_err(|_| CliError::InvalidPattern(pattern.clone()))
            .with_context(|| format!("Invalid glob pattern: {}", pattern))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoInputFiles(patterns.join(", ")))
            .context("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

/// Resolve `-i` arguments, where a lone `-` means standard input
pub fn resolve_inputs(patterns: &[String]) -> Result<Vec<InputSource>> {
    if patterns.iter().any(|p| p == STDIN_MARKER) {
        if patterns.len() > 1 {
            return Err(CliError::StdinConflict.into());
        }
        return Ok(vec![InputSource::Stdin]);
    }

    Ok(resolve_patterns(patterns)?
        .into_iter()
        .map(InputSource::File)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_glob_sorted_and_deduplicated() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "ب").unwrap();
        fs::write(dir.path().join("a.txt"), "أ").unwrap();
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let pattern = dir.path().join("*.txt").display().to_string();
        let files = resolve_patterns(&[pattern.clone(), pattern]).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.txt"));
        assert!(files[1].ends_with("b.txt"));
    }

    #[test]
    fn test_no_match_is_error() {
        let err = resolve_patterns(&["/nonexistent/*.txt".to_string()]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_stdin_marker() {
        let sources = resolve_inputs(&["-".to_string()]).unwrap();
        assert!(matches!(sources.as_slice(), [InputSource::Stdin]));

        let err = resolve_inputs(&["-".to_string(), "a.txt".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::StdinConflict)
        ));
    }
}
