//! Camunda Deploy - Main Entry Point
//!
//! Parses arguments, loads the environment, runs one deployment and maps
//! the outcome to an exit code.

mod cli;
mod logging;
mod output;
mod run;

use std::process::ExitCode;

use anyhow::Context;
use camunda_deploy_infrastructure::ProcessEnvironment;
use clap::Parser;

use crate::cli::Args;
use crate::output::Reporter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    logging::init(args.verbose);

    let reporter = Reporter::from_flags(args.json, args.quiet, args.verbose);
    reporter.start();

    match execute(&args, reporter).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            reporter.failure(&error);
            ExitCode::FAILURE
        }
    }
}

async fn execute(args: &Args, reporter: Reporter) -> anyhow::Result<()> {
    args.check()?;

    let cwd = std::env::current_dir().context("failed to determine working directory")?;
    let env = ProcessEnvironment::load(&cwd)?;

    let summary = run::run(args, &cwd, &env, reporter).await?;
    reporter.result(summary.artifacts());

    Ok(())
}
