use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::DEFAULT_EXPORT_FILE;
use crate::radar::{to_csv, to_table};
use crate::scoring::AxisScores;

/// Resolve an export target: directories get the default file name appended.
pub fn resolve_export_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        path.join(DEFAULT_EXPORT_FILE)
    } else {
        path.to_path_buf()
    }
}

/// Write the profile table as CSV atomically
///
/// Uses atomic-write-file so a partially written export never replaces an existing one.
/// Returns the path actually written.
pub fn export_csv(path: &Path, scores: &AxisScores) -> Result<PathBuf> {
    let target = resolve_export_path(path);

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create export directory at {}", parent.display()))?;
    }

    let csv = to_csv(&to_table(scores));

    let mut file = AtomicWriteFile::open(&target)
        .with_context(|| format!("Failed to open atomic write file at {}", target.display()))?;
    file.write_all(csv.as_bytes())
        .context("Failed to write CSV export")?;
    file.commit().context("Failed to save CSV export")?;

    tracing::debug!(path = %target.display(), bytes = csv.len(), "exported profile");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radar::scores_from_csv;
    use std::env;

    #[test]
    fn test_export_and_reimport() {
        let path = env::temp_dir().join("jvdt_test_export.csv");
        let _ = fs::remove_file(&path);

        let scores = AxisScores::from_values(&[1, 22, 33, 44, 55, 66, 100]).unwrap();
        let written = export_csv(&path, &scores).unwrap();
        assert_eq!(written, path);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Axis,Score\n"));
        assert_eq!(scores_from_csv(&text).unwrap(), scores);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_export_into_directory_uses_default_name() {
        let dir = env::temp_dir().join("jvdt_test_export_dir");
        fs::create_dir_all(&dir).unwrap();

        let written = export_csv(&dir, &AxisScores::uniform(70).unwrap()).unwrap();
        assert_eq!(written, dir.join("jvdt7_profile.csv"));
        assert!(written.exists());

        let _ = fs::remove_file(&written);
    }
}
