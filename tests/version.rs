use std::path::Path;

use tempfile::TempDir;
use version_up::version::error::{PatternError, VersionUpError};
use version_up::version::listing::{DirectoryLister, FileLister};
use version_up::version::next::{next_version, next_version_path};
use version_up::version::pattern::to_version_wildcard;
use version_up::version::resolver::resolve;

fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        std::fs::write(dir.join(name), b"").unwrap();
    }
}

#[test]
fn resolve_against_real_directory_listing() {
    let temp_dir = TempDir::new().unwrap();
    touch(
        temp_dir.path(),
        &["tst_lgt_v002.ma", "tst_lgt_v001.ma", "tst_lgt_v003.ma.swp", "notes.txt"],
    );

    let files = DirectoryLister.list(temp_dir.path()).unwrap();
    let result = resolve("tst_lgt_v###.ma", &files).unwrap();

    assert_eq!(result.latest_version, "v003");
    assert_eq!(result.latest_file, "tst_lgt_v003.ma.swp");
    assert_eq!(result.current_version, "v004");
    assert_eq!(result.current_file, "tst_lgt_v004.ma");
}

#[test]
fn next_version_path_in_real_directory() {
    let temp_dir = TempDir::new().unwrap();
    touch(
        temp_dir.path(),
        &["001_01_model_v001.ma", "001_01_model_v002.ma", "001_01_model_v003.ma"],
    );

    let next = next_version_path(
        &DirectoryLister,
        &temp_dir.path().join("001_01__model_v002.ma"),
        true,
    )
    .unwrap();

    assert_eq!(next, temp_dir.path().join("001_01_model_v004.ma"));
}

#[test]
fn next_version_path_in_missing_directory_starts_at_one() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("not_created").join("layout_v###.ma");

    let next = next_version_path(&DirectoryLister, &path, true).unwrap();

    assert_eq!(
        next,
        temp_dir.path().join("not_created").join("layout_v001.ma")
    );
}

#[test]
fn next_version_counts_versioned_files_in_folder() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), &["shot_v001.ma", "shot_v002.ma"]);

    let next = next_version(&DirectoryLister, temp_dir.path(), "v###").unwrap();

    assert_eq!(next, "v003");
}

#[test]
fn next_version_for_version_folders() {
    let temp_dir = TempDir::new().unwrap();
    for name in ["v001", "v002", "v010"] {
        std::fs::create_dir(temp_dir.path().join(name)).unwrap();
    }

    let next = next_version(&DirectoryLister, temp_dir.path(), "v###").unwrap();

    assert_eq!(next, "v011");
}

#[test]
fn next_version_path_without_token_fails() {
    let temp_dir = TempDir::new().unwrap();

    let err = next_version_path(&DirectoryLister, &temp_dir.path().join("model.ma"), true)
        .unwrap_err();

    assert!(matches!(
        err,
        VersionUpError::Pattern(PatternError(ref p)) if p == "model.ma"
    ));
}

#[test]
fn wildcard_matches_listing_shape() {
    assert_eq!(
        to_version_wildcard("tst_lgt_v002.ma").as_deref(),
        Some("tst_lgt_v???.ma")
    );
}
