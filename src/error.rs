use thiserror::Error;

/// Unified error type for build-variable derivation
#[derive(Error, Debug)]
pub enum SemverBuildError {
    #[error("Required input missing: {0}")]
    MissingInput(String),

    #[error("Invalid semantic version '{raw}': {source}")]
    InvalidVersion {
        raw: String,
        #[source]
        source: semver::Error,
    },

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid build metadata: {0}")]
    InvalidBuildMetadata(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in semver-build-vars
pub type Result<T> = std::result::Result<T, SemverBuildError>;

impl SemverBuildError {
    /// Create a missing-input error for a named pipeline input
    pub fn missing_input(name: impl Into<String>) -> Self {
        SemverBuildError::MissingInput(name.into())
    }

    /// Create an invalid-version error carrying the raw string and parse failure
    pub fn invalid_version(raw: impl Into<String>, source: semver::Error) -> Self {
        SemverBuildError::InvalidVersion {
            raw: raw.into(),
            source,
        }
    }

    /// Create an invalid-build-metadata error
    pub fn invalid_build_metadata(build: impl Into<String>) -> Self {
        SemverBuildError::InvalidBuildMetadata(build.into())
    }
}
