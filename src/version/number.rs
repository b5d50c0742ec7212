//! Version token lookup inside arbitrary strings

use crate::version::error::PatternError;
use crate::version::pattern::VersionPattern;

/// Find the last concrete occurrence of a version pattern in `input`.
///
/// `pattern` is a bare token such as "v###" (or a longer placeholder
/// pattern); its literal text must appear with exactly `width` digits.
///
/// Examples:
/// - ("shot_v003_cam_v012.abc", "v###") -> Some("v012")
/// - ("shot_v3.abc", "v###") -> None
pub fn find_version(input: &str, pattern: &str) -> Result<Option<String>, PatternError> {
    let parsed =
        VersionPattern::parse(pattern).ok_or_else(|| PatternError(pattern.to_string()))?;

    Ok(parsed.find_last(input).map(String::from))
}
