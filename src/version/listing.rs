//! Directory listing collaborator
//!
//! The resolver works on a snapshot of filenames; this trait is how the
//! higher-level operations obtain one.

use std::path::Path;

#[cfg(test)]
use mockall::automock;
use tracing::debug;

use crate::version::error::ListingError;

/// Trait for listing the entry names of a directory
#[cfg_attr(test, automock)]
pub trait FileLister: Send + Sync {
    /// List entry names (not paths) in `dir`.
    ///
    /// A directory that does not exist yields an empty listing.
    fn list(&self, dir: &Path) -> Result<Vec<String>, ListingError>;
}

/// [`FileLister`] backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryLister;

impl FileLister for DirectoryLister {
    fn list(&self, dir: &Path) -> Result<Vec<String>, ListingError> {
        let to_err = |source: std::io::Error| ListingError::Io {
            path: dir.to_path_buf(),
            source,
        };

        if !dir.exists() {
            debug!("Directory {:?} does not exist, listing is empty", dir);
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(to_err)? {
            let entry = entry.map_err(to_err)?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        // read_dir order is platform dependent
        names.sort();

        debug!("Listed {} entries in {:?}", names.len(), dir);
        Ok(names)
    }
}
