//! Command line arguments.
//!
//! Uses clap for CLI parsing with:
//! - Help text (`--help`)
//! - Validation and clear error messages

use std::path::PathBuf;

use clap::Parser;
use redlilium_graph::{RangeTracking, ScheduleConfig};

/// Pass scheduler arguments.
#[derive(Parser, Debug)]
#[command(
    name = "pass-scheduler",
    about = "Schedule the passes of a RedLilium pipeline description",
    long_about = "Loads a RON pipeline description, orders the passes that contribute to the \
        terminal resource and reports which transient textures can share memory.\n\n\
        Command line options override the `config` section of the file.\n\n\
        EXAMPLES:\n  \
          # Schedule with the configuration stored in the file\n  \
          pass-scheduler pipelines/deferred.ron\n\
        \n  \
          # Render into a different target and allow an externally provided texture\n  \
          pass-scheduler pipelines/deferred.ron --terminal ReflectionCapture --external BlueNoise",
    version
)]
pub struct Args {
    /// Pipeline description file (RON).
    pub file: PathBuf,

    /// Terminal resource whose writers root the schedule.
    #[arg(long, value_name = "NAME")]
    pub terminal: Option<String>,

    /// Resource provided from outside the graph. May be repeated.
    #[arg(long = "external", value_name = "NAME")]
    pub externals: Vec<String>,

    /// Track read and write ranges separately.
    #[arg(long)]
    pub split_ranges: bool,

    /// Enable debug logging (overridden by `RUST_LOG`).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Apply the command line overrides to the configuration from the file.
    pub fn apply(&self, mut config: ScheduleConfig) -> ScheduleConfig {
        if let Some(terminal) = &self.terminal {
            config.terminal_resource = terminal.clone();
        }
        for external in &self.externals {
            if !config.is_external(external) {
                config.external_resources.push(external.clone());
            }
        }
        if self.split_ranges {
            config.range_tracking = RangeTracking::Split;
        }
        config
    }

    /// Default log filter for this run.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
