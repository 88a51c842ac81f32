//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;
use storyteller_core::{ConfigOverrides, Seed, StoryRequest};

/// StoryTeller - turn a prompt into a narrated slideshow video
#[derive(Parser, Debug, Clone)]
#[command(name = "storyteller")]
#[command(about = "Multimodal AI story teller: text, images and narration in one video", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Prompt the story continues from
    #[arg(
        long,
        alias = "writer_prompt",
        default_value = "Once upon a time, unicorns roamed the Earth."
    )]
    pub writer_prompt: String,

    /// Prefix prepended to every sentence to form the image prompt
    #[arg(long, alias = "painter_prompt_prefix", default_value = "Beautiful painting")]
    pub painter_prompt_prefix: String,

    /// Maximum number of sentences (and images) in the video
    #[arg(long, alias = "num_images", default_value_t = 10)]
    pub num_images: usize,

    /// Directory receiving every artifact of the run
    #[arg(long, alias = "output_dir", default_value = "out")]
    pub output_dir: PathBuf,

    /// Seed for every sampling model
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// TOML configuration file (defaults to ./storyteller.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Language of the generated story, used for sentence splitting
    #[arg(long, default_value = "english")]
    pub language: String,

    /// Model configuration overrides
    #[command(flatten)]
    pub overrides: ConfigOverrides,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Run inputs described by the flags.
    pub fn request(&self) -> StoryRequest {
        StoryRequest::new(
            self.writer_prompt.clone(),
            self.painter_prompt_prefix.clone(),
            self.num_images,
            self.output_dir.clone(),
        )
    }

    /// Seed described by `--seed`.
    pub fn seed(&self) -> Seed {
        Seed::new(self.seed)
    }
}
