//! Story generation command handler.

use crate::cli::Cli;
use storyteller_core::{SegmentOutcome, Settings, StoryReport};
use storyteller_error::StoryTellerResult;
use storyteller_pipeline::StoryTeller;
use tracing::{info, instrument};

/// Load configuration, check preconditions, build the pipeline and run it.
///
/// # Errors
///
/// Returns fatal errors from setup and run-level errors from
/// [`StoryTeller::generate`]. Per-sentence failures are reported in the
/// returned [`StoryReport`].
#[instrument(skip_all, fields(output_dir = %cli.output_dir.display()))]
pub async fn run_story(cli: &Cli) -> StoryTellerResult<StoryReport> {
    let settings = Settings::load(cli.config.as_deref(), &cli.overrides)?;
    let teller = StoryTeller::load(&settings, cli.seed(), &cli.language)?;

    info!(
        prompt = %cli.writer_prompt,
        num_images = cli.num_images,
        seed = cli.seed,
        "Generating story"
    );

    teller.generate(&cli.request()).await
}

/// Human-readable account of a run.
pub fn summarize(report: &StoryReport) -> String {
    let mut lines = Vec::with_capacity(report.outcomes().len() + 3);
    lines.push(format!(
        "Story split into {} sentence(s); {} clip(s) produced, {} skipped.",
        report.sentences().len(),
        report.produced().count(),
        report.skipped().count()
    ));

    for outcome in report.outcomes() {
        match outcome {
            SegmentOutcome::Produced(segment) => lines.push(format!(
                "  [{}] {} -> {}",
                segment.index() + 1,
                segment.sentence(),
                segment.paths().video().display()
            )),
            SegmentOutcome::Skipped(skipped) => lines.push(format!(
                "  [{}] {} -> skipped: {}",
                skipped.index() + 1,
                skipped.sentence(),
                skipped.reason()
            )),
        }
    }

    lines.push(format!("Manifest: {}", report.manifest_path().display()));
    match report.final_video_path() {
        Some(path) => lines.push(format!("Video: {}", path.display())),
        None => lines.push("Video: none (no clips were produced)".to_string()),
    }

    lines.join("\n")
}
