//! Artifact destination resolution and persistence.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::config::OutputConfig;

/// Resolve where the generated document goes.
///
/// An explicit path is used as-is. Otherwise a fresh `{uuid}.md` under the
/// configured output directory, which is created if absent.
pub fn resolve_destination(
    explicit: Option<PathBuf>,
    config: &OutputConfig,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }

    if !config.dir.is_dir() {
        std::fs::create_dir_all(&config.dir).with_context(|| {
            format!("Failed to create output directory: {}", config.dir.display())
        })?;
    }

    let filename = format!("{}.md", Uuid::new_v4());
    Ok(config.dir.join(filename))
}

/// Persist the sanitized document.
pub fn write_artifact(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Error writing to output file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_used_verbatim() {
        let config = OutputConfig::default();
        let dest = resolve_destination(Some(PathBuf::from("out/README.md")), &config).unwrap();
        assert_eq!(dest, PathBuf::from("out/README.md"));
    }

    #[test]
    fn default_destination_is_unique_markdown_under_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = OutputConfig {
            dir: tmp.path().join("generated"),
        };

        let a = resolve_destination(None, &config).unwrap();
        let b = resolve_destination(None, &config).unwrap();

        assert!(a.starts_with(tmp.path().join("generated")));
        assert_eq!(a.extension().unwrap(), "md");
        assert_ne!(a, b);
        assert!(config.dir.is_dir());
    }

    #[test]
    fn write_then_read_back() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("README.md");
        write_artifact(&path, "# Title\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# Title\n");
    }

    #[test]
    fn write_to_missing_parent_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("missing").join("README.md");
        assert!(write_artifact(&path, "x").is_err());
    }
}
