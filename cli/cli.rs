use modstrip_core::{CliArgs, ProcessedFileResult, RunSummary, collect_inputs, process_files};
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::process::ExitCode;

fn run(inputs: Vec<String>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Reading current directory")?;
    println!("Inputs: {:?}", inputs);

    let gathered = collect_inputs(&inputs);
    for r in &gathered.reports {
        report::print_input(r, &cwd);
    }

    if gathered.files.is_empty() {
        println!(
            "\n{} No .js files found. Check the paths and patterns.",
            style("Warning:").yellow()
        );
        return Ok(ExitCode::SUCCESS);
    }

    report::print_file_list(gathered.files.iter(), &cwd);

    let results: Vec<ProcessedFileResult> = process_files(gathered.files.into_vec());
    for r in &results {
        report::print_result(r, &cwd);
    }

    let summary: RunSummary = results.iter().collect();
    report::print_summary(&summary);
    log::debug!("{:?}", summary);

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli: CliArgs = CliArgs::parse();

    if cli.inputs.is_empty() {
        report::print_usage();
        return Ok(ExitCode::FAILURE);
    }

    let outcome = tokio::task::spawn_blocking(move || run(cli.inputs)).await;
    match outcome {
        Ok(Ok(code)) => Ok(code),
        Ok(Err(e)) => {
            eprintln!("{}", style(format!("Unexpected error: {:#}", e)).red());
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            eprintln!("{}", style(format!("Unexpected error: {}", e)).red());
            Ok(ExitCode::FAILURE)
        }
    }
}
