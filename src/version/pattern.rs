//! Version token derivation for filename patterns
//!
//! A filename pattern marks its version slot with a run of `#` characters,
//! optionally preceded by an alphabetic prefix (`tst_lgt_v###.ma`). Concrete
//! filenames (`tst_lgt_v002.ma`) are converted back into that form by
//! [`to_version_pattern`]. When several candidate runs exist, the last one in
//! the string is the version slot.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

/// Marker character for one version digit.
pub const PLACEHOLDER: char = '#';

/// Marker character used by [`to_version_wildcard`] for glob queries.
pub const WILDCARD: char = '?';

static PLACEHOLDER_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z]+)?(#+)").unwrap());

static DIGIT_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z]+)?([0-9]+)").unwrap());

/// Byte span of the last `(prefix)?(run)` match in `s`.
struct TokenSpan {
    prefix: String,
    run_start: usize,
    run_end: usize,
}

fn last_token(re: &Regex, s: &str) -> Option<TokenSpan> {
    let caps = re.captures_iter(s).last()?;
    let run = caps.get(2)?;
    Some(TokenSpan {
        prefix: caps
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        run_start: run.start(),
        run_end: run.end(),
    })
}

/// A parsed placeholder-form filename pattern such as `tst_lgt_v###.ma`
#[derive(Debug, Clone)]
pub struct VersionPattern {
    regex: Regex,
    prefix: String,
    width: usize,
    head: String,
    tail: String,
}

impl VersionPattern {
    /// Parse a placeholder-form pattern.
    ///
    /// Returns `None` when `pattern` contains no `#` run. Only the last
    /// `(prefix)?#+` match is the version token; earlier runs are kept as
    /// literal text.
    ///
    /// Examples:
    /// - "tst_lgt_v###.ma" -> token "v###", regex `tst_lgt_v([0-9]{3})\.ma`
    /// - "##_shot_v##.ma" -> token "v##"
    pub fn parse(pattern: &str) -> Option<Self> {
        let span = last_token(&PLACEHOLDER_TOKEN_RE, pattern)?;
        let width = span.run_end - span.run_start;
        let head = &pattern[..span.run_start];
        let tail = &pattern[span.run_end..];

        let source = format!(
            "{}([0-9]{{{}}}){}",
            regex::escape(head),
            width,
            regex::escape(tail)
        );
        let regex = match Regex::new(&source) {
            Ok(re) => re,
            Err(e) => {
                warn!("Failed to compile version regex for '{}': {}", pattern, e);
                return None;
            }
        };

        Some(Self {
            regex,
            prefix: span.prefix,
            width,
            head: head.to_string(),
            tail: tail.to_string(),
        })
    }

    /// Unanchored regex for the concrete form; group 1 is the version digits.
    ///
    /// Literal text is escaped, so `.` only matches a dot.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of digits the version is zero-padded to.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The version token in placeholder form, e.g. "v###"
    pub fn token(&self) -> String {
        format!(
            "{}{}",
            self.prefix,
            PLACEHOLDER.to_string().repeat(self.width)
        )
    }

    /// printf-style version format, e.g. "v%03d"
    pub fn version_format(&self) -> String {
        format!("{}%0{}d", self.prefix, self.width)
    }

    /// printf-style filename format, e.g. "tst_lgt_v%03d.ma"
    pub fn file_format(&self) -> String {
        format!("{}%0{}d{}", self.head, self.width, self.tail)
    }

    /// Format a version number with the token prefix, e.g. 3 -> "v003".
    ///
    /// Numbers wider than the padding are written in full (1000 -> "v1000").
    pub fn format_version(&self, number: u64) -> String {
        format!("{}{:0width$}", self.prefix, number, width = self.width)
    }

    /// Format the full filename for a version number, e.g. 3 -> "tst_lgt_v003.ma"
    pub fn format_file(&self, number: u64) -> String {
        format!(
            "{}{:0width$}{}",
            self.head,
            number,
            self.tail,
            width = self.width
        )
    }

    /// Last occurrence of the pattern anywhere inside `input`.
    pub fn find_last<'a>(&self, input: &'a str) -> Option<&'a str> {
        self.regex.find_iter(input).last().map(|m| m.as_str())
    }

    /// Version number of the first match of this pattern inside `filename`.
    ///
    /// The match may sit anywhere in the name, so `v###` finds `v002` in
    /// `shot_v002.ma` and `tst_lgt_v###.ma` finds `tst_lgt_v004.ma.bak`.
    pub fn capture(&self, filename: &str) -> Option<u64> {
        let digits = self.regex.captures(filename)?.get(1)?.as_str();
        match digits.parse::<u64>() {
            Ok(n) => Some(n),
            Err(e) => {
                warn!("Skipping '{}': version '{}' out of range: {}", filename, digits, e);
                None
            }
        }
    }
}

/// Convert a concrete filename into placeholder form.
///
/// The last `(prefix)?digits` run is the version; its digits are replaced
/// in place by the same number of `#`.
///
/// Examples:
/// - "tst_lgt_v002.ma" -> Some("tst_lgt_v###.ma")
/// - "model.ma" -> None
pub fn to_version_pattern(filename: &str) -> Option<String> {
    replace_last_digits(filename, PLACEHOLDER)
}

/// Like [`to_version_pattern`] but with `?` markers for glob queries.
///
/// "tst_lgt_v002.ma" -> Some("tst_lgt_v???.ma")
pub fn to_version_wildcard(filename: &str) -> Option<String> {
    replace_last_digits(filename, WILDCARD)
}

fn replace_last_digits(filename: &str, marker: char) -> Option<String> {
    let span = last_token(&DIGIT_TOKEN_RE, filename)?;
    let width = span.run_end - span.run_start;
    Some(format!(
        "{}{}{}",
        &filename[..span.run_start],
        marker.to_string().repeat(width),
        &filename[span.run_end..]
    ))
}
