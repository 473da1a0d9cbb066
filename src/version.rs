//! Composition of the final version string
//!
//! An exact release tag already is the version. Anything past a tag becomes
//! a pre-release of the next patch level: every commit after v1.2.3 belongs
//! to v1.2.4's development line, so the composed string is one patch ahead
//! with a `-pre<distance>` segment. The short hash and dirty flag ride along
//! as semver build metadata, which is ignored for precedence but kept for
//! traceability.

use crate::describe::{self, DescribeKind};
use crate::error::Result;

/// Composes the version string for a classified describe result.
///
/// Pure function of its input. Produces:
/// - the tag itself for `ExactRelease`;
/// - `<major.minor>.<patch+1>-pre<distance>[+<hash>[-dirty]]` for
///   `PostRelease`, where `dirty` follows `+` directly when no hash is
///   present;
/// - the empty string for `Unrecognized` (the caller picks the fallback).
///
/// # Example
/// ```ignore
/// // v1.2.4-pre3+g1a2b3c4-dirty, 3 commits past v1.2.3, dirty tree
/// let kind = classify("v1.2.3-3-g1a2b3c4-dirty")?;
/// assert_eq!(compose(&kind), "v1.2.4-pre3+g1a2b3c4-dirty");
/// ```
pub fn compose(kind: &DescribeKind) -> String {
    match kind {
        DescribeKind::ExactRelease(tag) => tag.clone(),
        DescribeKind::PostRelease(post) => {
            let mut version = format!(
                "{}.{}-pre{}",
                post.major_minor,
                post.patch + 1,
                post.distance
            );

            if post.short_hash.is_some() || post.dirty {
                version.push('+');
                if let Some(hash) = &post.short_hash {
                    version.push_str(hash);
                    if post.dirty {
                        version.push('-');
                    }
                }
                if post.dirty {
                    version.push_str("dirty");
                }
            }

            version
        }
        DescribeKind::Unrecognized => String::new(),
    }
}

/// Derives the version string straight from a raw describe string.
///
/// Classification followed by composition; the only error path is the
/// classifier's internal consistency check on numeric fields.
pub fn derive_version(desc: &str) -> Result<String> {
    Ok(compose(&describe::classify(desc)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::describe::classify;

    #[test]
    fn test_compose_exact_tag_is_identity() {
        let kind = classify("v1.0.0").unwrap();
        assert_eq!(compose(&kind), "v1.0.0");
    }

    #[test]
    fn test_compose_bumps_patch_and_adds_pre() {
        let kind = classify("v1.2.3-4-g1a2b3c4").unwrap();
        assert_eq!(compose(&kind), "v1.2.4-pre4+g1a2b3c4");
    }

    #[test]
    fn test_compose_dirty_with_hash() {
        let kind = classify("v2.3.1-7-gabcdef1-dirty").unwrap();
        assert_eq!(compose(&kind), "v2.3.2-pre7+gabcdef1-dirty");
    }

    #[test]
    fn test_compose_dirty_without_hash() {
        // dirty follows '+' directly when no hash marker is present
        let kind = classify("v1.0.0-dirty").unwrap();
        assert_eq!(compose(&kind), "v1.0.1-pre0+dirty");
    }

    #[test]
    fn test_compose_distance_without_hash_or_dirty() {
        // no build metadata segment at all
        let kind = classify("v1.0.0-3").unwrap();
        assert_eq!(compose(&kind), "v1.0.1-pre3");
    }

    #[test]
    fn test_compose_hash_without_distance() {
        // absent distance renders as pre0
        let kind = classify("v1.0.0-g0000000").unwrap();
        assert_eq!(compose(&kind), "v1.0.1-pre0+g0000000");
    }

    #[test]
    fn test_compose_unrecognized_is_empty() {
        let kind = classify("gabcdef1").unwrap();
        assert_eq!(compose(&kind), "");
    }

    #[test]
    fn test_derive_version_release() {
        assert_eq!(derive_version("v0.9.0").unwrap(), "v0.9.0");
    }

    #[test]
    fn test_derive_version_snapshot() {
        assert_eq!(
            derive_version("v2.3.1-7-gabcdef1-dirty").unwrap(),
            "v2.3.2-pre7+gabcdef1-dirty"
        );
    }

    #[test]
    fn test_derive_version_untagged() {
        assert_eq!(derive_version("gabcdef1").unwrap(), "");
    }

    #[test]
    fn test_derive_version_propagates_classifier_error() {
        assert!(derive_version("v1.0.0-99999999999-gabc").is_err());
    }

    #[test]
    fn test_exact_tag_round_trips_through_classifier() {
        // The release path is the only stable fixed point: its output is a
        // valid classifier input again. Pre-release output is intentionally
        // a different shape from describe output.
        let composed = derive_version("v0.9.0").unwrap();
        let kind = classify(&composed).unwrap();
        assert_eq!(compose(&kind), composed);
    }

    #[test]
    fn test_dirty_does_not_change_pre_segment() {
        let clean = derive_version("v1.2.3-4-g1a2b3c4").unwrap();
        let dirty = derive_version("v1.2.3-4-g1a2b3c4-dirty").unwrap();
        assert_eq!(dirty, format!("{}-dirty", clean));
        assert!(clean.contains("-pre4"));
        assert!(dirty.contains("-pre4"));
    }
}
