use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::actions::ActionsKit;
use crate::error::Result;

/// Length of an abbreviated revision identifier.
const ABBREVIATED_SHA_LEN: usize = 7;

/// Pipeline kit backed by the process environment.
///
/// Follows GitHub Actions runner conventions: inputs arrive as
/// `INPUT_<NAME>` variables, the revision as `GITHUB_SHA`, and outputs go
/// to the file named by `GITHUB_OUTPUT`. Outside a runner, outputs fall
/// back to the legacy `::set-output` workflow command on stdout and the
/// revision falls back to the local repository HEAD.
pub struct EnvKit {
    output_path: Option<PathBuf>,
}

impl EnvKit {
    /// Create a kit resolving the output destination from `GITHUB_OUTPUT`.
    pub fn new() -> Self {
        EnvKit {
            output_path: env::var_os("GITHUB_OUTPUT").map(PathBuf::from),
        }
    }

    /// Create a kit writing its outputs to an explicit file.
    pub fn with_output_path(path: PathBuf) -> Self {
        EnvKit {
            output_path: Some(path),
        }
    }
}

impl Default for EnvKit {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionsKit for EnvKit {
    fn get_input(&self, name: &str) -> Option<String> {
        let key = format!("INPUT_{}", name.to_ascii_uppercase().replace(' ', "_"));
        env::var(key).ok().filter(|v| !v.is_empty())
    }

    fn abbreviated_sha(&self) -> Result<String> {
        if let Ok(sha) = env::var("GITHUB_SHA") {
            if !sha.is_empty() {
                return Ok(abbreviate(&sha));
            }
        }

        // Outside a runner: resolve HEAD of the enclosing repository
        let repo = git2::Repository::discover(".")?;
        let head = repo.head()?.peel_to_commit()?;
        Ok(abbreviate(&head.id().to_string()))
    }

    fn set_output(&self, name: &str, value: &str) -> Result<()> {
        match &self.output_path {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                writeln!(file, "{}={}", name, value)?;
            }
            None => println!("::set-output name={}::{}", name, value),
        }
        Ok(())
    }

    fn debug(&self, message: &str) {
        println!("::debug::{}", message);
    }
}

fn abbreviate(sha: &str) -> String {
    sha.chars().take(ABBREVIATED_SHA_LEN).collect()
}
