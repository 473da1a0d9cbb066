//! Classification of `git describe` output
//!
//! The describe operation only ever produces one of two tag-based shapes
//! (an exact release tag, or a tag annotated with distance/hash/dirty
//! suffixes) or a bare commit hash when no tag is reachable. Two fixed
//! patterns are matched deliberately instead of one general grammar, so
//! that malformed input surfaces as `Unrecognized` rather than being
//! absorbed by an over-permissive parse.

use crate::error::{GitverError, Result};

/// Exactly vX.Y.Z, no suffix (a release build)
const EXACT_PATTERN: &str = r"^v\d+\.\d+\.\d+$";

/// vX.Y.Z followed by any subset of -<distance>, -g<hash>, -dirty, in that order
const DESCRIBE_PATTERN: &str = r"^(v\d+\.\d+)\.(\d+)(?:-(\d+))?(?:-(g[0-9a-f]+))?(?:-(dirty))?";

/// Fields extracted from a describe string that sits past a release tag.
///
/// The distance is 0 when the marker was absent; both cases compose
/// identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRelease {
    /// Tag major.minor prefix including the leading 'v' (e.g. "v1.2")
    pub major_minor: String,
    /// Tag patch component
    pub patch: u32,
    /// Commits since the tag
    pub distance: u32,
    /// Short hash marker including the 'g' prefix (e.g. "g1a2b3c4")
    pub short_hash: Option<String>,
    /// Working tree has uncommitted changes
    pub dirty: bool,
}

/// Classified shape of a describe string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescribeKind {
    /// The whole string is a release tag; it already is the version
    ExactRelease(String),
    /// A tag plus distance/hash/dirty annotations
    PostRelease(PostRelease),
    /// Neither shape matched (e.g. a bare hash when no tag exists)
    Unrecognized,
}

/// Classifies a raw describe string into one of the known shapes.
///
/// Classification is a pure function of the input: the same string always
/// yields the same result. An empty or foreign-format string is
/// `Unrecognized`, never an error — callers decide the fallback.
///
/// # Arguments
/// * `desc` - Raw output of `git describe --tags --dirty --always`
///
/// # Returns
/// * `Ok(DescribeKind)` - The classified shape
/// * `Err` - Only if a numeric field fails to parse after its pattern
///   matched; git is trusted to emit well-formed numbers, so this is an
///   internal consistency failure, not a normal outcome
///
/// # Example
/// ```ignore
/// assert_eq!(classify("v1.0.0")?, DescribeKind::ExactRelease("v1.0.0".into()));
/// assert!(matches!(classify("gabcdef1")?, DescribeKind::Unrecognized));
/// ```
pub fn classify(desc: &str) -> Result<DescribeKind> {
    if let Ok(re) = regex::Regex::new(EXACT_PATTERN) {
        if re.is_match(desc) {
            return Ok(DescribeKind::ExactRelease(desc.to_string()));
        }
    }

    if let Ok(re) = regex::Regex::new(DESCRIBE_PATTERN) {
        if let Some(captures) = re.captures(desc) {
            if let (Some(major_minor), Some(patch)) = (captures.get(1), captures.get(2)) {
                let patch = patch.as_str().parse::<u32>().map_err(|_| {
                    GitverError::version(format!(
                        "patch component of '{}' is not a valid number (pattern: {})",
                        desc, DESCRIBE_PATTERN
                    ))
                })?;

                let distance = match captures.get(3) {
                    Some(m) => m.as_str().parse::<u32>().map_err(|_| {
                        GitverError::version(format!(
                            "distance component of '{}' is not a valid number (pattern: {})",
                            desc, DESCRIBE_PATTERN
                        ))
                    })?,
                    None => 0,
                };

                let short_hash = captures.get(4).map(|m| m.as_str().to_string());
                let dirty = captures.get(5).is_some();

                return Ok(DescribeKind::PostRelease(PostRelease {
                    major_minor: major_minor.as_str().to_string(),
                    patch,
                    distance,
                    short_hash,
                    dirty,
                }));
            }
        }
    }

    Ok(DescribeKind::Unrecognized)
}
