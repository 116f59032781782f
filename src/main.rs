#![forbid(unsafe_code)]
#![deny(warnings, clippy::all, clippy::pedantic)]

use clap::Parser;
use repo_export::{
    DefaultClock, DefaultFsOps, DefaultGitRunner, ExportOptions, ExportOutcome, GitLsFiles,
    run_export,
};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Concatenate every git-tracked file in the current directory into one timestamped transcript."
)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();

    let opts = match ExportOptions::from_current_dir() {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("Error determining working directory: {err}");
            return ExitCode::FAILURE;
        }
    };
    let git = DefaultGitRunner;
    let lister = GitLsFiles::new(&git);
    let fs = DefaultFsOps;
    let clock = DefaultClock;

    println!("Exporting tracked files from {}", opts.root.display());
    match run_export(&opts, &lister, &fs, &clock) {
        Ok(ExportOutcome::Written(summary)) => {
            println!(
                "Export complete: {} files exported ({} binary, {} not found, {} unreadable skipped).",
                summary.exported, summary.binary, summary.not_found, summary.read_errors
            );
            println!("Check '{}'.", summary.path.display());
            ExitCode::SUCCESS
        }
        Ok(ExportOutcome::NoTrackedFiles) => {
            println!("No tracked files found; nothing to export.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error listing or exporting Git files: {err}");
            ExitCode::FAILURE
        }
    }
}
