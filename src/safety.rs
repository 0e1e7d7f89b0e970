//! Safety utilities to prevent overwriting source exports.
//!
//! Outputs are written with truncation, so an output path that points at a
//! CRM or mailing-list export would destroy the input it was computed from.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Resolve symlinks and `..` when the file exists; fall back to the path as given.
fn resolved(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Validates that an output path is safe to overwrite.
///
/// Checks:
/// - Output must have the expected extension (e.g., "json", "csv")
/// - Output cannot be the same file as any of the provided source paths
pub fn validate_output_path(output: &Path, extension: &str, source_paths: &[&Path]) -> Result<()> {
    let has_extension = output
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension));
    if !has_extension {
        bail!(
            "Safety check failed: output file '{}' must have a .{} extension",
            output.display(),
            extension
        );
    }

    let output_resolved = resolved(output);
    for source in source_paths {
        if output == *source || output_resolved == resolved(source) {
            bail!(
                "Safety check failed: output '{}' cannot be the same as source '{}'",
                output.display(),
                source.display()
            );
        }
    }

    Ok(())
}

/// Validates every output of a run: each against the sources and against
/// the outputs before it, so no two outputs share a file.
pub fn validate_output_paths(outputs: &[(&Path, &str)], source_paths: &[&Path]) -> Result<()> {
    let mut taken: Vec<&Path> = source_paths.to_vec();
    for &(output, extension) in outputs {
        validate_output_path(output, extension, &taken)?;
        taken.push(output);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_output() {
        let output = PathBuf::from("/tmp/changes.json");
        let source = PathBuf::from("/data/contacts.csv");
        assert!(validate_output_path(&output, "json", &[&source]).is_ok());
    }

    #[test]
    fn test_wrong_extension() {
        let output = PathBuf::from("/tmp/changes.csv");
        let result = validate_output_path(&output, "json", &[]);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("must have a .json extension"));
    }

    #[test]
    fn test_output_equals_source() {
        let path = PathBuf::from("/data/contacts.csv");
        let result = validate_output_path(&path, "csv", &[&path]);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("cannot be the same as source"));
    }

    #[test]
    fn test_output_aliases_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("contacts.csv");
        std::fs::write(&source, "Id\n").unwrap();
        let alias = dir.path().join("sub").join("..").join("contacts.csv");
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        assert!(validate_output_path(&alias, "csv", &[&source]).is_err());
    }

    #[test]
    fn test_outputs_cannot_collide() {
        let crm = Path::new("/data/contacts.csv");
        let changes = Path::new("/tmp/out.json");
        let stats = Path::new("/tmp/stats.json");
        assert!(validate_output_paths(&[(changes, "json"), (stats, "json")], &[crm]).is_ok());

        let result = validate_output_paths(&[(changes, "json"), (changes, "json")], &[crm]);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("cannot be the same as source"));
    }
}
