//! Command-line interface.

mod args;
mod run;

pub use args::Cli;
pub use run::{run_story, summarize};
