//! StoryTeller CLI binary.
//!
//! Generates a story from a prompt, paints and narrates each sentence and
//! writes the captioned clips plus the concatenated video to the output
//! directory.

use clap::Parser;
use std::process::ExitCode;
use storyteller::cli::{Cli, run_story, summarize};
use storyteller::logging::{LoggingConfig, init_logging};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let logging = LoggingConfig::from_verbosity(cli.verbose).with_json_logs(cli.json_logs);
    if let Err(e) = init_logging(&logging) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run_story(&cli).await {
        Ok(report) => {
            println!("{}", summarize(&report));
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, fatal = e.is_fatal(), "StoryTeller failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
