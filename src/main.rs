use anyhow::Result;
use clap::Parser;

use semver_build_vars::actions::EnvKit;
use semver_build_vars::{run, ui};

#[derive(clap::Parser)]
#[command(
    name = "semver-build-vars",
    about = "Derive semver build variables and container tags for CI pipelines"
)]
struct Args {
    #[arg(
        short,
        long,
        help = "Write outputs to this file instead of $GITHUB_OUTPUT"
    )]
    output: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("semver-build-vars {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let kit = match args.output {
        Some(path) => EnvKit::with_output_path(path.into()),
        None => EnvKit::new(),
    };

    match run::run(&kit) {
        Ok(vars) => {
            let entries: Vec<(&str, &str)> = vars
                .entries()
                .iter()
                .map(|(var, value)| (var.key(), *value))
                .collect();
            ui::display_build_vars(&entries);
            ui::display_success(&format!("published {} build variables", entries.len()));
            Ok(())
        }
        Err(e) => {
            ui::display_error(&format!("Failed to derive build variables: {}", e));
            std::process::exit(1);
        }
    }
}
