//! Next-version lookups against a directory listing

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::info;

use crate::version::error::VersionUpError;
use crate::version::listing::FileLister;
use crate::version::resolver::{VersionResolution, resolve};

static REPEATED_UNDERSCORES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_{2,}").unwrap());

/// Collapse runs of underscores left behind by empty name fields.
///
/// "001__model___v002.ma" -> "001_model_v002.ma"
pub fn normalize_filename(name: &str) -> String {
    REPEATED_UNDERSCORES_RE.replace_all(name, "_").into_owned()
}

/// Resolve `pattern` against the listing of `dir`.
pub fn resolve_in_dir<L: FileLister + ?Sized>(
    lister: &L,
    dir: &Path,
    pattern: &str,
) -> Result<VersionResolution, VersionUpError> {
    let files = lister.list(dir)?;
    Ok(resolve(pattern, &files)?)
}

/// Path of the next version of the file at `path`.
///
/// The file name (placeholder or concrete form) is resolved against its
/// sibling files, e.g. `/shots/001_01_model_v002.ma` with `v001..v003`
/// present gives `/shots/001_01_model_v004.ma`.
pub fn next_version_path<L: FileLister + ?Sized>(
    lister: &L,
    path: &Path,
    normalize: bool,
) -> Result<PathBuf, VersionUpError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| VersionUpError::NoFileName(path.to_path_buf()))?
        .to_string_lossy();
    let file_name = if normalize {
        normalize_filename(&file_name)
    } else {
        file_name.into_owned()
    };

    let folder = path.parent().unwrap_or(Path::new(""));
    let list_dir = if folder.as_os_str().is_empty() {
        Path::new(".")
    } else {
        folder
    };

    let resolution = resolve_in_dir(lister, list_dir, &file_name)?;
    let next = folder.join(&resolution.current_file);
    info!(
        "Next version of {:?} is {:?} (latest: {})",
        path,
        next,
        if resolution.latest_file.is_empty() {
            "none"
        } else {
            resolution.latest_file.as_str()
        }
    );
    Ok(next)
}

/// Next formatted version for a bare version pattern such as "v###".
///
/// Used for version folders: with `v001` and `v002` in `folder` the
/// result is "v003".
pub fn next_version<L: FileLister + ?Sized>(
    lister: &L,
    folder: &Path,
    pattern: &str,
) -> Result<String, VersionUpError> {
    Ok(resolve_in_dir(lister, folder, pattern)?.current_version)
}
