//! Derivation of the build-variable set from a normalized version

use chrono::{DateTime, Utc};

use crate::actions::ActionsKit;
use crate::error::Result;
use crate::vars::OutputVar;
use crate::version;

/// UTC timestamp pattern used as a build qualifier, 14 ASCII digits.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// The full set of derived build variables for one invocation.
///
/// The four `docker_*` outputs are aliases of the four version renders and
/// carry no storage of their own, see [BuildVars::entries].
#[derive(Debug, Clone, PartialEq)]
pub struct BuildVars {
    pub original_version: String,
    pub version: String,
    pub sha_build_version: String,
    pub sha_build_version_build: String,
    pub timestamp_build_version: String,
    pub timestamp_build_version_build: String,
    pub timestamp_sha_build_version: String,
    pub timestamp_sha_build_version_build: String,
}

/// Formats an instant as a build-qualifier timestamp.
pub fn current_timestamp(now: DateTime<Utc>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Derives every build variable from the resolved version string.
///
/// Parses and normalizes `original`, then attaches the revision id, the
/// timestamp, and their `timestamp.sha` combination as build metadata.
/// Fails without partial results if the version does not parse or a
/// qualifier is not valid build metadata.
///
/// # Arguments
/// * `original` - Resolved version string (post `v`-strip, pre-parse)
/// * `sha` - Abbreviated revision identifier, used verbatim
/// * `timestamp` - Timestamp qualifier, used verbatim
pub fn derive_build_vars(original: &str, sha: &str, timestamp: &str) -> Result<BuildVars> {
    let normalized = version::normalize(&version::parse(original)?);
    let timestamp_and_sha = format!("{}.{}", timestamp, sha);

    Ok(BuildVars {
        original_version: original.to_string(),
        version: normalized.to_string(),
        sha_build_version: version::with_build(&normalized, sha)?.to_string(),
        sha_build_version_build: sha.to_string(),
        timestamp_build_version: version::with_build(&normalized, timestamp)?.to_string(),
        timestamp_build_version_build: timestamp.to_string(),
        timestamp_sha_build_version: version::with_build(&normalized, &timestamp_and_sha)?
            .to_string(),
        timestamp_sha_build_version_build: timestamp_and_sha,
    })
}

impl BuildVars {
    /// The twelve published entries, in emission order.
    pub fn entries(&self) -> [(OutputVar, &str); 12] {
        [
            (OutputVar::OriginalVersion, self.original_version.as_str()),
            (OutputVar::Version, self.version.as_str()),
            (OutputVar::ShaBuildVersion, self.sha_build_version.as_str()),
            (
                OutputVar::ShaBuildVersionBuild,
                self.sha_build_version_build.as_str(),
            ),
            (
                OutputVar::TimestampBuildVersion,
                self.timestamp_build_version.as_str(),
            ),
            (
                OutputVar::TimestampBuildVersionBuild,
                self.timestamp_build_version_build.as_str(),
            ),
            (
                OutputVar::TimestampShaBuildVersion,
                self.timestamp_sha_build_version.as_str(),
            ),
            (
                OutputVar::TimestampShaBuildVersionBuild,
                self.timestamp_sha_build_version_build.as_str(),
            ),
            (OutputVar::DockerTag, self.version.as_str()),
            (OutputVar::DockerShaBuildTag, self.sha_build_version.as_str()),
            (
                OutputVar::DockerTimestampBuildTag,
                self.timestamp_build_version.as_str(),
            ),
            (
                OutputVar::DockerTimestampShaBuildTag,
                self.timestamp_sha_build_version.as_str(),
            ),
        ]
    }
}

/// Publishes the derived variables to the pipeline, one `set_output` call
/// per entry, in emission order. Callers invoke this only after derivation
/// fully succeeded, so a failed invocation publishes nothing.
pub fn write_outputs(kit: &dyn ActionsKit, vars: &BuildVars) -> Result<()> {
    for (var, value) in vars.entries() {
        kit.set_output(var.key(), value)?;
    }
    Ok(())
}
