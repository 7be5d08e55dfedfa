use std::fmt;

/// Names of the derived pipeline outputs.
///
/// The keys are part of the external contract; downstream workflow steps
/// reference them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputVar {
    /// The resolved input version, before normalization
    OriginalVersion,
    /// The normalized release version
    Version,
    /// The version qualified with the revision id
    ShaBuildVersion,
    /// The revision id used as a qualifier
    ShaBuildVersionBuild,
    /// The version qualified with the timestamp
    TimestampBuildVersion,
    /// The timestamp used as a qualifier
    TimestampBuildVersionBuild,
    /// The version qualified with timestamp and revision id
    TimestampShaBuildVersion,
    /// The combined timestamp/revision qualifier
    TimestampShaBuildVersionBuild,
    /// Container tag mirroring `version`
    DockerTag,
    /// Container tag mirroring `sha_build_version`
    DockerShaBuildTag,
    /// Container tag mirroring `timestamp_build_version`
    DockerTimestampBuildTag,
    /// Container tag mirroring `timestamp_sha_build_version`
    DockerTimestampShaBuildTag,
}

impl OutputVar {
    /// All output variables, in emission order.
    pub const ALL: [OutputVar; 12] = [
        OutputVar::OriginalVersion,
        OutputVar::Version,
        OutputVar::ShaBuildVersion,
        OutputVar::ShaBuildVersionBuild,
        OutputVar::TimestampBuildVersion,
        OutputVar::TimestampBuildVersionBuild,
        OutputVar::TimestampShaBuildVersion,
        OutputVar::TimestampShaBuildVersionBuild,
        OutputVar::DockerTag,
        OutputVar::DockerShaBuildTag,
        OutputVar::DockerTimestampBuildTag,
        OutputVar::DockerTimestampShaBuildTag,
    ];

    /// The key under which the variable is published.
    pub fn key(&self) -> &'static str {
        match self {
            OutputVar::OriginalVersion => "original_version",
            OutputVar::Version => "version",
            OutputVar::ShaBuildVersion => "sha_build_version",
            OutputVar::ShaBuildVersionBuild => "sha_build_version_build",
            OutputVar::TimestampBuildVersion => "timestamp_build_version",
            OutputVar::TimestampBuildVersionBuild => "timestamp_build_version_build",
            OutputVar::TimestampShaBuildVersion => "timestamp_sha_build_version",
            OutputVar::TimestampShaBuildVersionBuild => "timestamp_sha_build_version_build",
            OutputVar::DockerTag => "docker_tag",
            OutputVar::DockerShaBuildTag => "docker_sha_build_tag",
            OutputVar::DockerTimestampBuildTag => "docker_timestamp_build_tag",
            OutputVar::DockerTimestampShaBuildTag => "docker_timestamp_sha_build_tag",
        }
    }
}

impl fmt::Display for OutputVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_contains_twelve_vars() {
        assert_eq!(OutputVar::ALL.len(), 12);
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<&str> = OutputVar::ALL.iter().map(|v| v.key()).collect();
        assert_eq!(keys.len(), OutputVar::ALL.len());
    }

    #[test]
    fn test_emission_order() {
        let keys: Vec<&str> = OutputVar::ALL.iter().map(|v| v.key()).collect();
        assert_eq!(
            keys,
            vec![
                "original_version",
                "version",
                "sha_build_version",
                "sha_build_version_build",
                "timestamp_build_version",
                "timestamp_build_version_build",
                "timestamp_sha_build_version",
                "timestamp_sha_build_version_build",
                "docker_tag",
                "docker_sha_build_tag",
                "docker_timestamp_build_tag",
                "docker_timestamp_sha_build_tag",
            ]
        );
    }

    #[test]
    fn test_display_matches_key() {
        assert_eq!(OutputVar::DockerTag.to_string(), "docker_tag");
    }
}
