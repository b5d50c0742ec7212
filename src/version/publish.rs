//! Versioned copies of source files into a publish area
//!
//! Each source file gets its own folder under the target root named after
//! its stem. A new version is only written when the content differs from
//! the latest published version.
//!
//! ```text
//! source:      work/textures/body_dif.1001.tif
//! target root: publish/textures
//!
//! publish/textures/body_dif.1001/
//!     body_dif.1001_v001.tif
//!     body_dif.1001_v002.tif
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::version::error::PublishError;
use crate::version::listing::FileLister;
use crate::version::resolver::resolve;

/// What [`publish_file`] did with the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "path", rename_all = "snake_case")]
pub enum PublishOutcome {
    /// Source was copied to a new version
    Copied(PathBuf),
    /// Latest version already had identical content
    Reused(PathBuf),
}

impl PublishOutcome {
    pub fn path(&self) -> &Path {
        match self {
            PublishOutcome::Copied(path) | PublishOutcome::Reused(path) => path,
        }
    }
}

/// Publish `source` as the next version under `target_root`.
///
/// `version_pattern` is inserted between the file stem and extension,
/// e.g. "_v###" turns `body_dif.1001.tif` into `body_dif.1001_v###.tif`.
pub fn publish_file<L: FileLister + ?Sized>(
    lister: &L,
    source: &Path,
    target_root: &Path,
    version_pattern: &str,
) -> Result<PublishOutcome, PublishError> {
    if !source.is_file() {
        return Err(PublishError::NotAFile(source.to_path_buf()));
    }
    let Some(stem) = source.file_stem().map(|s| s.to_string_lossy()) else {
        return Err(PublishError::NotAFile(source.to_path_buf()));
    };
    let extension = source
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default();

    let folder = target_root.join(&*stem);
    std::fs::create_dir_all(&folder).map_err(|source| PublishError::Io {
        path: folder.clone(),
        source,
    })?;

    let pattern = format!("{stem}{version_pattern}{extension}");
    let resolution = resolve(&pattern, lister.list(&folder)?)?;

    if !resolution.latest_file.is_empty() {
        let latest = folder.join(&resolution.latest_file);
        if file_digest(&latest)? == file_digest(source)? {
            debug!("{:?} matches {:?}, reusing", source, latest);
            return Ok(PublishOutcome::Reused(latest));
        }
    }

    let target = folder.join(&resolution.current_file);
    if target.exists() {
        // Versions past the padding width no longer match the pattern.
        warn!(
            "{:?} already exists and will be overwritten (latest matched: {})",
            target, resolution.latest_version
        );
    }
    std::fs::copy(source, &target).map_err(|e| PublishError::Io {
        path: target.clone(),
        source: e,
    })?;
    info!("Published {:?} to {:?}", source, target);
    Ok(PublishOutcome::Copied(target))
}

fn file_digest(path: &Path) -> Result<Vec<u8>, PublishError> {
    let to_err = |source: std::io::Error| PublishError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(to_err)?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher).map_err(to_err)?;
    Ok(hasher.finalize().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::listing::{DirectoryLister, MockFileLister};
    use tempfile::TempDir;

    struct Fixture {
        _temp_dir: TempDir,
        source: PathBuf,
        target_root: PathBuf,
    }

    fn fixture(content: &[u8]) -> Fixture {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("work").join("body_dif.1001.tif");
        std::fs::create_dir_all(source.parent().unwrap()).unwrap();
        std::fs::write(&source, content).unwrap();
        let target_root = temp_dir.path().join("publish");
        Fixture {
            _temp_dir: temp_dir,
            source,
            target_root,
        }
    }

    #[test]
    fn publish_first_version_creates_folder_and_copies() {
        let fx = fixture(b"pixels");

        let outcome = publish_file(&DirectoryLister, &fx.source, &fx.target_root, "_v###").unwrap();

        let expected = fx
            .target_root
            .join("body_dif.1001")
            .join("body_dif.1001_v001.tif");
        assert_eq!(outcome, PublishOutcome::Copied(expected.clone()));
        assert_eq!(std::fs::read(expected).unwrap(), b"pixels");
    }

    #[test]
    fn publish_identical_content_reuses_latest() {
        let fx = fixture(b"pixels");
        publish_file(&DirectoryLister, &fx.source, &fx.target_root, "_v###").unwrap();

        let outcome = publish_file(&DirectoryLister, &fx.source, &fx.target_root, "_v###").unwrap();

        assert_eq!(
            outcome,
            PublishOutcome::Reused(
                fx.target_root
                    .join("body_dif.1001")
                    .join("body_dif.1001_v001.tif")
            )
        );
    }

    #[test]
    fn publish_changed_content_copies_next_version() {
        let fx = fixture(b"pixels");
        publish_file(&DirectoryLister, &fx.source, &fx.target_root, "_v###").unwrap();
        std::fs::write(&fx.source, b"repainted").unwrap();

        let outcome = publish_file(&DirectoryLister, &fx.source, &fx.target_root, "_v###").unwrap();

        assert_eq!(
            outcome.path(),
            fx.target_root
                .join("body_dif.1001")
                .join("body_dif.1001_v002.tif")
        );
        assert!(matches!(outcome, PublishOutcome::Copied(_)));
    }

    #[test]
    fn publish_past_padding_width_overwrites_unmatched_version() {
        let fx = fixture(b"new pixels");
        let folder = fx.target_root.join("body_dif.1001");
        std::fs::create_dir_all(&folder).unwrap();
        std::fs::write(folder.join("body_dif.1001_v999.tif"), b"v999").unwrap();
        std::fs::write(folder.join("body_dif.1001_v1000.tif"), b"v1000").unwrap();

        let outcome = publish_file(&DirectoryLister, &fx.source, &fx.target_root, "_v###").unwrap();

        let target = folder.join("body_dif.1001_v1000.tif");
        assert_eq!(outcome, PublishOutcome::Copied(target.clone()));
        assert_eq!(std::fs::read(target).unwrap(), b"new pixels");
    }

    #[test]
    fn publish_missing_source_is_error() {
        let fx = fixture(b"");
        let lister = MockFileLister::new();

        let err = publish_file(
            &lister,
            &fx.source.with_file_name("missing.tif"),
            &fx.target_root,
            "_v###",
        )
        .unwrap_err();

        assert!(matches!(err, PublishError::NotAFile(_)));
    }

    #[test]
    fn outcome_serializes_with_action_tag() {
        let value =
            serde_json::to_value(PublishOutcome::Reused(PathBuf::from("/p/a_v001.tif"))).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "action": "reused", "path": "/p/a_v001.tif" })
        );
    }
}
