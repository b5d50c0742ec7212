//! Latest/next version resolution over a filename listing
//!
//! Given a filename pattern (placeholder form `tst_lgt_v###.ma` or concrete
//! form `tst_lgt_v002.ma`) and the names already present in a directory,
//! determines the latest existing version and the filename of the next one.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::version::error::PatternError;
use crate::version::pattern::{VersionPattern, to_version_pattern};

/// Result of resolving a filename pattern against a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionResolution {
    /// Version token in placeholder form, e.g. "v###"
    pub version_pattern: String,
    /// printf-style version format, e.g. "v%03d"
    pub version_format: String,
    /// printf-style filename format, e.g. "tst_lgt_v%03d.ma"
    pub file_format: String,
    /// Formatted latest version ("" when nothing matched)
    pub latest_version: String,
    pub latest_version_number: u64,
    /// First listed file carrying the latest version ("" when nothing matched)
    pub latest_file: String,
    pub current_version: String,
    pub current_version_number: u64,
    /// The pattern filled in with `current_version_number`
    pub current_file: String,
}

/// Parse `filename_pattern`, falling back to concrete-form conversion.
pub fn parse_pattern(filename_pattern: &str) -> Result<VersionPattern, PatternError> {
    if let Some(pattern) = VersionPattern::parse(filename_pattern) {
        return Ok(pattern);
    }

    to_version_pattern(filename_pattern)
        .and_then(|placeholder| {
            debug!(
                "Converted concrete filename '{}' to pattern '{}'",
                filename_pattern, placeholder
            );
            VersionPattern::parse(&placeholder)
        })
        .ok_or_else(|| PatternError(filename_pattern.to_string()))
}

/// Resolve the latest and next version of `filename_pattern` among `files`.
///
/// Files sharing a version number are bucketed together; the first one in
/// iteration order represents the bucket. With no matching files the latest
/// version number is 0 and the next is 1.
pub fn resolve<I, S>(filename_pattern: &str, files: I) -> Result<VersionResolution, PatternError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let pattern = parse_pattern(filename_pattern)?;

    let mut buckets: BTreeMap<u64, Vec<String>> = BTreeMap::new();
    for file in files {
        let file = file.as_ref();
        if let Some(number) = pattern.capture(file) {
            buckets.entry(number).or_default().push(file.to_string());
        }
    }
    debug!(
        "Pattern '{}' matched {} version(s)",
        filename_pattern,
        buckets.len()
    );

    let (latest_version_number, latest_version, latest_file) = match buckets.last_key_value() {
        Some((&number, names)) => (
            number,
            pattern.format_version(number),
            names.first().cloned().unwrap_or_default(),
        ),
        None => (0, String::new(), String::new()),
    };

    let current_version_number = latest_version_number.saturating_add(1);

    Ok(VersionResolution {
        version_pattern: pattern.token(),
        version_format: pattern.version_format(),
        file_format: pattern.file_format(),
        latest_version,
        latest_version_number,
        latest_file,
        current_version: pattern.format_version(current_version_number),
        current_version_number,
        current_file: pattern.format_file(current_version_number),
    })
}
