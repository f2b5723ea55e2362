//! Copying bundled assets into a build output directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::{ASSET_DIR, STATIC_DIR, get, iter};

/// Asset publishing error.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// Creating a directory or writing a file failed.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A bundled file listed by the embed index could not be loaded.
    #[error("Bundled asset missing: {0}")]
    Missing(String),
}

/// What [`AssetPublisher::publish`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The output format does not use page assets.
    SkippedIncompatible,
    /// An earlier build step failed.
    SkippedAfterFailure,
    /// This many files were copied.
    Copied(usize),
}

/// Copies the bundled files to `<output>/_static/tabset/`.
#[derive(Clone, Copy, Debug, Default)]
pub struct AssetPublisher;

impl AssetPublisher {
    /// Create a publisher.
    pub fn new() -> Self {
        Self
    }

    /// Directory the bundled files are copied to.
    pub fn install_dir(output_dir: &Path) -> PathBuf {
        output_dir.join(STATIC_DIR).join(ASSET_DIR)
    }

    /// Publish the bundled files.
    ///
    /// Nothing is copied when `compatible` is false or `prior_failed` is true.
    /// Existing files are overwritten.
    pub fn publish(
        &self,
        output_dir: &Path,
        compatible: bool,
        prior_failed: bool,
    ) -> Result<PublishOutcome, AssetError> {
        if !compatible {
            tracing::info!("Not copying tab assets: output format does not use them");
            return Ok(PublishOutcome::SkippedIncompatible);
        }
        if prior_failed {
            tracing::warn!("Not copying tab assets: an error occurred previously");
            return Ok(PublishOutcome::SkippedAfterFailure);
        }

        let install_dir = Self::install_dir(output_dir);
        fs::create_dir_all(&install_dir).map_err(|source| AssetError::Io {
            path: install_dir.clone(),
            source,
        })?;

        let mut copied = 0;
        for name in iter() {
            let data = get(&name).ok_or_else(|| AssetError::Missing(name.to_string()))?;
            let dest = install_dir.join(name.as_ref());
            fs::write(&dest, data.as_ref()).map_err(|source| AssetError::Io {
                path: dest.clone(),
                source,
            })?;
            tracing::debug!(path = %dest.display(), "Copied asset");
            copied += 1;
        }

        tracing::info!(count = copied, dir = %install_dir.display(), "Copied tab assets");
        Ok(PublishOutcome::Copied(copied))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_publish_copies_bundled_files() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("site");

        let outcome = AssetPublisher::new().publish(&output, true, false).unwrap();

        assert_eq!(outcome, PublishOutcome::Copied(2));
        let dir = output.join("_static/tabset");
        assert!(dir.join("tabs.css").is_file());
        assert!(dir.join("tabs.js").is_file());
        assert_eq!(
            fs::read(dir.join("tabs.js")).unwrap(),
            get("tabs.js").unwrap().as_ref()
        );
    }

    #[test]
    fn test_publish_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let dir = AssetPublisher::install_dir(temp.path());
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("tabs.css"), "stale").unwrap();

        AssetPublisher::new().publish(temp.path(), true, false).unwrap();

        assert_ne!(fs::read_to_string(dir.join("tabs.css")).unwrap(), "stale");
    }

    #[test]
    fn test_publish_skips_incompatible_format() {
        let temp = TempDir::new().unwrap();

        let outcome = AssetPublisher::new().publish(temp.path(), false, false).unwrap();

        assert_eq!(outcome, PublishOutcome::SkippedIncompatible);
        assert!(!temp.path().join("_static").exists());
    }

    #[test]
    fn test_publish_skips_after_failure() {
        let temp = TempDir::new().unwrap();

        let outcome = AssetPublisher::new().publish(temp.path(), true, true).unwrap();

        assert_eq!(outcome, PublishOutcome::SkippedAfterFailure);
        assert!(!temp.path().join("_static").exists());
    }

    #[test]
    fn test_publish_reports_unwritable_dir() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("site");
        fs::write(&blocker, "not a directory").unwrap();

        let err = AssetPublisher::new().publish(&blocker, true, false).unwrap_err();

        assert!(matches!(err, AssetError::Io { .. }));
    }
}
