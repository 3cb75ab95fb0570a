// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use r3bl_matrix_gen::{common::try_initialize_logging,
                      matrix_gen::{CLIArg, Destination, GenerationOutput, format_generated,
                                   format_repo_root, format_shape, generating_message,
                                   run}};
use std::process;
use tracing_core::LevelFilter;

fn main() {
    if let Err(e) = run_cli() {
        eprintln!("{e:?}");
        process::exit(1);
    }
}

fn run_cli() -> miette::Result<()> {
    // If no args are passed, help is printed thanks to `arg_required_else_help(true)`.
    // Missing or non-numeric dimensions exit with clap's usage error (code 2).
    let cli_arg = CLIArg::parse();

    if cli_arg.enable_logging {
        try_initialize_logging(LevelFilter::DEBUG)?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let options = cli_arg.to_generate_options();
    // The preview goes to stdout, so it gets no announcement.
    let announce = options.verbose && matches!(options.destination, Destination::RepoFile { .. });
    if announce {
        println!("{}", generating_message(&options)?);
    }

    let report = run(&options)?;

    match &report.output {
        GenerationOutput::Preview { source } => print!("{source}"),
        GenerationOutput::Written { repo_root, path } => {
            if announce {
                println!("{}", format_repo_root(repo_root));
                println!(
                    "{}",
                    format_shape(report.dimensions.rows(), report.dimensions.columns())
                );
            }
            println!("{}", format_generated(path));
        }
    }

    if cli_arg.enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    Ok(())
}
