//! # Pass Scheduler
//!
//! Loads a pipeline description, schedules it and prints the result.
//!
//! ```bash
//! pass-scheduler pipelines/deferred.ron --external BlueNoise -v
//! ```

mod args;
mod report;

use std::process::ExitCode;

use clap::Parser;
use redlilium_graph::{LoadError, PipelineDescription};

use args::Args;
use report::Report;

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    log::info!(
        "RedLilium pass scheduler v{} ({})",
        redlilium_graph::VERSION,
        args.file.display()
    );

    match run(&args) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let LoadError::Schedule(graph_error) = &err {
                log::error!("Scheduling failed ({:?}): {graph_error}", graph_error.category());
            } else {
                log::error!("{err}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, LoadError> {
    let mut description = PipelineDescription::load(&args.file)?;
    description.config = args.apply(description.config);

    let compiled = description.schedule()?;
    Ok(Report::new(&compiled, &description.config).to_string())
}
