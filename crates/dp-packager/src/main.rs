//! # DeployPilot Packager
//!
//! One-shot build/packaging pipeline for deployments. Copies the project
//! sources into a clean `build/` directory, trims the manifest down to its
//! production shape, stamps a build record, and archives the result into
//! `dist/` for the deploy workflow to pick up.
//!
//! ## Usage
//!
//! ```sh
//! dp-packager                 # Package the project in the current directory
//! dp-packager --root <dir>    # Package the project at <dir>
//! ```
//!
//! Release metadata is taken from `BUILD_TAG`, `APP_ENV`, `RELEASE_NOTE`,
//! and `GITHUB_SHA`, each with a documented default.

mod archive;
mod error;
mod fsops;
mod manifest;
mod options;
mod pipeline;
mod record;

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use options::BuildOptions;
use pipeline::Pipeline;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Step logs go to stderr; stdout carries only the final summary.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let root = parse_flags(&args[1..])?;

    tracing::info!("Starting build process...");

    let options = BuildOptions::from_env();
    match Pipeline::new(root, options).run() {
        Ok(summary) => {
            println!("Build process completed successfully!");
            println!("Build output: {}", summary.build_dir.display());
            println!("Build tag: {}", summary.build_tag);
            println!("Release note: {}", summary.release_note);
            Ok(())
        }
        Err(e) if e.is_archive_failure() => {
            // The only step whose failure is caught and converted to a
            // controlled exit; earlier steps propagate as faults.
            tracing::error!("Failed to create deployment package: {e}");
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

/// Parse `--root <dir>`; everything else is rejected.
fn parse_flags(args: &[String]) -> anyhow::Result<PathBuf> {
    let mut root = PathBuf::from(".");

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--root" => {
                i += 1;
                root = args
                    .get(i)
                    .map(PathBuf::from)
                    .ok_or_else(|| anyhow::anyhow!("--root requires a path"))?;
            }
            other => {
                anyhow::bail!("Unknown flag: {}", other);
            }
        }
        i += 1;
    }

    Ok(root)
}
