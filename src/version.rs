//! Semantic version parsing and normalization
//!
//! Versions are represented with [semver::Version]; every transformation
//! here returns a new value and leaves its input untouched.

use semver::{BuildMetadata, Prerelease, Version};

use crate::error::{Result, SemverBuildError};

/// Pre-release marker emitted by JVM-style release tooling.
pub const SNAPSHOT_MARKER: &str = "SNAPSHOT";

/// Replacement marker for snapshot builds.
pub const UNSTABLE_MARKER: &str = "unstable";

/// Parses a raw version string into a semver value.
///
/// An empty string is a contract violation (the resolver guarantees a
/// non-empty value) and yields a distinct error from a parse failure.
///
/// # Arguments
/// * `raw` - Version string, e.g. "1.2.3" or "1.2.3-rc.1+build5"
///
/// # Returns
/// * `Ok(Version)` - Successfully parsed version
/// * `Err` - `MissingArgument` for an empty string, `InvalidVersion` otherwise
pub fn parse(raw: &str) -> Result<Version> {
    if raw.is_empty() {
        return Err(SemverBuildError::MissingArgument("version"));
    }

    Version::parse(raw).map_err(|e| SemverBuildError::invalid_version(raw, e))
}

/// Rewrites a `SNAPSHOT` snapshot marker to `unstable`.
///
/// The rewrite applies only when the first pre-release token equals
/// `SNAPSHOT` exactly (case-sensitive, whole token). All other tokens, the
/// numeric triple, and any build metadata pass through unchanged, so the
/// operation is idempotent.
///
/// # Example
/// ```ignore
/// let v = parse("1.1.0-SNAPSHOT")?;
/// assert_eq!(normalize(&v).to_string(), "1.1.0-unstable");
/// ```
pub fn normalize(version: &Version) -> Version {
    if version.pre.is_empty() {
        return version.clone();
    }

    let mut tokens: Vec<&str> = version.pre.as_str().split('.').collect();
    if tokens[0] != SNAPSHOT_MARKER {
        return version.clone();
    }

    tokens[0] = UNSTABLE_MARKER;

    let mut normalized = version.clone();
    // Token-wise substitution keeps the pre-release grammar intact
    normalized.pre = Prerelease::new(&tokens.join(".")).unwrap_or_else(|_| version.pre.clone());
    normalized
}

/// Returns a copy of `version` whose build metadata is exactly `build`.
///
/// Any pre-existing build metadata is fully replaced, never concatenated.
///
/// # Arguments
/// * `version` - Version to qualify
/// * `build` - Build qualifier (revision id, timestamp, or both)
///
/// # Returns
/// * `Ok(Version)` - Qualified copy
/// * `Err` - If `build` is not valid semver build metadata
pub fn with_build(version: &Version, build: &str) -> Result<Version> {
    let metadata =
        BuildMetadata::new(build).map_err(|_| SemverBuildError::invalid_build_metadata(build))?;

    let mut qualified = version.clone();
    qualified.build = metadata;
    Ok(qualified)
}
