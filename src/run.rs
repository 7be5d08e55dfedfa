//! Single-invocation orchestration
//!
//! One invocation runs input resolution, normalization, and composition
//! strictly in sequence; any failure aborts before the first output write.

use chrono::Utc;

use crate::actions::ActionsKit;
use crate::compose::{self, BuildVars};
use crate::error::{Result, SemverBuildError};

/// Name of the single required pipeline input.
pub const PACKAGE_VERSION_INPUT: &str = "package_version";

/// Resolves the raw version string from the pipeline input.
///
/// Strips exactly one leading lowercase `v`; an uppercase prefix or a
/// second `v` is left in place. Absent or blank input is terminal.
pub fn resolve_package_version(kit: &dyn ActionsKit) -> Result<String> {
    let raw = kit
        .get_input(PACKAGE_VERSION_INPUT)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| SemverBuildError::missing_input(PACKAGE_VERSION_INPUT))?;

    Ok(match raw.strip_prefix('v') {
        Some(stripped) => stripped.to_string(),
        None => raw,
    })
}

/// Runs one derivation pass against the given pipeline kit.
///
/// Resolves the input, obtains the revision id and the current UTC
/// timestamp, derives the build variables, and publishes all twelve
/// outputs. Returns the derived set for display.
pub fn run(kit: &dyn ActionsKit) -> Result<BuildVars> {
    let package_version = resolve_package_version(kit)?;
    kit.debug(&format!("parameters: [package_version: {}]", package_version));

    let sha = kit.abbreviated_sha()?;
    let timestamp = compose::current_timestamp(Utc::now());

    let vars = compose::derive_build_vars(&package_version, &sha, &timestamp)?;
    compose::write_outputs(kit, &vars)?;
    Ok(vars)
}
