//! Pipeline driver tests with mock collaborators.

mod test_utils;

use std::sync::Arc;
use storyteller_core::{Seed, SegmentOutcome, StoryRequest};
use storyteller_pipeline::{ModelFacade, SentenceSplitter, StoryTeller};
use test_utils::{
    FakeVideoTool, MockPainter, MockSpeaker, ScriptedWriter, SeededWriter, harness,
};

const FIVE_SENTENCES: &str =
    " The unicorn woke. It ran to the river. Dr. Moss waved. The sun set! Night came.";

fn request(dir: &std::path::Path, num_images: usize) -> StoryRequest {
    StoryRequest::builder()
        .writer_prompt("Once upon a time, unicorns roamed the Earth.")
        .painter_prompt_prefix("Beautiful painting")
        .num_images(num_images)
        .output_dir(dir)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_processes_at_most_num_images_sentences() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let h = harness(
        ScriptedWriter::new(FIVE_SENTENCES),
        MockPainter::default(),
        FakeVideoTool::default(),
    );

    let report = h.teller.generate(&request(dir.path(), 3)).await?;

    assert_eq!(
        report.sentences(),
        &vec![
            "The unicorn woke.".to_string(),
            "It ran to the river.".to_string(),
            "Dr. Moss waved.".to_string(),
        ]
    );
    assert_eq!(report.outcomes().len(), 3);
    assert_eq!(
        *h.speaker.texts.lock().unwrap(),
        vec!["The unicorn woke.", "It ran to the river.", "Dr. Moss waved."]
    );
    Ok(())
}

#[tokio::test]
async fn test_fewer_sentences_than_requested() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let h = harness(
        ScriptedWriter::new(FIVE_SENTENCES),
        MockPainter::default(),
        FakeVideoTool::default(),
    );

    let report = h.teller.generate(&request(dir.path(), 10)).await?;

    assert_eq!(report.sentences().len(), 5);
    assert_eq!(report.produced().count(), 5);
    Ok(())
}

#[tokio::test]
async fn test_writer_receives_prompt_budget_and_seed() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let h = harness(
        ScriptedWriter::new(FIVE_SENTENCES),
        MockPainter::default(),
        FakeVideoTool::default(),
    );

    h.teller.generate(&request(dir.path(), 1)).await?;

    let requests = h.writer.requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].prompt(),
        "Once upon a time, unicorns roamed the Earth."
    );
    assert_eq!(*requests[0].max_new_tokens(), 50);
    assert_eq!(*requests[0].seed(), Seed::new(42));
    Ok(())
}

#[tokio::test]
async fn test_painter_prompts_use_prefix_and_segment_seed() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let h = harness(
        ScriptedWriter::new(FIVE_SENTENCES),
        MockPainter::default(),
        FakeVideoTool::default(),
    );

    h.teller.generate(&request(dir.path(), 2)).await?;

    let requests = h.painter.requests.lock().unwrap();
    assert_eq!(requests[0].prompt(), "Beautiful painting: The unicorn woke.");
    assert_eq!(requests[0].seed().value(), 42);
    assert_eq!(
        requests[1].prompt(),
        "Beautiful painting: It ran to the river."
    );
    assert_eq!(requests[1].seed().value(), 43);
    Ok(())
}

#[tokio::test]
async fn test_segment_files_and_subtitle() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let h = harness(
        ScriptedWriter::new(FIVE_SENTENCES),
        MockPainter::default(),
        FakeVideoTool::default(),
    );

    let report = h.teller.generate(&request(dir.path(), 1)).await?;

    for name in ["0.png", "0.wav", "0.srt", "0.mp4", "files.txt", "out.mp4"] {
        assert!(dir.path().join(name).exists(), "missing {}", name);
    }
    let srt = std::fs::read_to_string(dir.path().join("0.srt"))?;
    // 1.5 s of narration rounds up to 2 s
    assert_eq!(srt, "1\n00:00:00,000 --> 00:00:02,000\nThe unicorn woke.\n");

    let segment = report.produced().next().unwrap();
    assert_eq!(*segment.timing().start(), 0.0);
    assert_eq!(*segment.timing().end(), 1.5);
    assert_eq!(
        *h.video.muxed.lock().unwrap(),
        vec![(dir.path().join("0.mp4"), 2)]
    );
    Ok(())
}

#[tokio::test]
async fn test_failed_sentence_is_skipped_and_order_kept() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let h = harness(
        ScriptedWriter::new(FIVE_SENTENCES),
        MockPainter::failing_on(&["river"]),
        FakeVideoTool::failing_mux_for(&[3]),
    );

    let report = h.teller.generate(&request(dir.path(), 5)).await?;

    let produced: Vec<usize> = report.produced().map(|s| *s.index()).collect();
    assert_eq!(produced, vec![0, 2, 4]);

    let skipped: Vec<usize> = report.skipped().map(|s| *s.index()).collect();
    assert_eq!(skipped, vec![1, 3]);
    assert!(report.skipped().next().unwrap().reason().contains("painter overloaded"));

    let indices: Vec<usize> = report.outcomes().iter().map(SegmentOutcome::index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);

    let manifest = std::fs::read_to_string(report.manifest_path())?;
    assert_eq!(manifest, "file 0.mp4\nfile 2.mp4\nfile 4.mp4\n");
    assert_eq!(
        report.final_video_path(),
        Some(dir.path().join("out.mp4").as_path())
    );
    Ok(())
}

#[tokio::test]
async fn test_all_sentences_failing_completes_without_video() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let h = harness(
        ScriptedWriter::new(FIVE_SENTENCES),
        MockPainter::failing_on(&["Beautiful painting"]),
        FakeVideoTool::default(),
    );

    let report = h.teller.generate(&request(dir.path(), 4)).await?;

    assert_eq!(report.produced().count(), 0);
    assert_eq!(report.skipped().count(), 4);
    assert!(report.final_video().is_none());
    assert_eq!(std::fs::read_to_string(report.manifest_path())?, "");
    assert!(h.video.concats.lock().unwrap().is_empty());
    assert!(!dir.path().join("out.mp4").exists());
    Ok(())
}

#[tokio::test]
async fn test_failed_rerun_removes_previous_video() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let first = harness(
        ScriptedWriter::new(FIVE_SENTENCES),
        MockPainter::default(),
        FakeVideoTool::default(),
    );
    let report = first.teller.generate(&request(dir.path(), 2)).await?;
    assert!(report.final_video().is_some());
    assert!(dir.path().join("out.mp4").exists());

    let second = harness(
        ScriptedWriter::new(FIVE_SENTENCES),
        MockPainter::failing_on(&["Beautiful painting"]),
        FakeVideoTool::default(),
    );
    let report = second.teller.generate(&request(dir.path(), 2)).await?;

    assert!(report.final_video().is_none());
    assert!(!dir.path().join("out.mp4").exists());
    assert_eq!(std::fs::read_to_string(report.manifest_path())?, "");
    Ok(())
}

#[tokio::test]
async fn test_concat_invoked_once_with_manifest() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let h = harness(
        ScriptedWriter::new(FIVE_SENTENCES),
        MockPainter::default(),
        FakeVideoTool::default(),
    );

    h.teller.generate(&request(dir.path(), 5)).await?;

    let concats = h.video.concats.lock().unwrap();
    assert_eq!(
        *concats,
        vec![(dir.path().join("files.txt"), dir.path().join("out.mp4"))]
    );
    let manifest = std::fs::read_to_string(dir.path().join("files.txt"))?;
    let lines: Vec<&str> = manifest.lines().collect();
    assert_eq!(
        lines,
        vec![
            "file 0.mp4",
            "file 1.mp4",
            "file 2.mp4",
            "file 3.mp4",
            "file 4.mp4"
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_zero_images_writes_empty_manifest() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let h = harness(
        ScriptedWriter::new(FIVE_SENTENCES),
        MockPainter::default(),
        FakeVideoTool::default(),
    );

    let report = h.teller.generate(&request(dir.path(), 0)).await?;

    assert!(report.outcomes().is_empty());
    assert_eq!(std::fs::read_to_string(report.manifest_path())?, "");
    assert!(h.painter.requests.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_output_directory_is_created() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let nested = dir.path().join("runs").join("first");
    let h = harness(
        ScriptedWriter::new(FIVE_SENTENCES),
        MockPainter::default(),
        FakeVideoTool::default(),
    );

    h.teller.generate(&request(&nested, 1)).await?;

    assert!(nested.join("0.mp4").exists());
    Ok(())
}

#[tokio::test]
async fn test_writer_failure_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let h = harness(
        ScriptedWriter::failing(),
        MockPainter::default(),
        FakeVideoTool::default(),
    );

    let err = h.teller.generate(&request(dir.path(), 3)).await.unwrap_err();

    assert!(err.to_string().contains("writer offline"));
    assert!(!err.is_fatal());
}

#[tokio::test]
async fn test_same_seed_same_story() -> anyhow::Result<()> {
    let story_for = |seed: u64| {
        let models = ModelFacade::new(
            Arc::new(SeededWriter),
            Arc::new(MockPainter::default()),
            Arc::new(MockSpeaker::default()),
            6,
            Seed::new(seed),
        );
        async move { models.write("Once upon a time").await }
    };

    let first = story_for(42).await?;
    let second = story_for(42).await?;
    let other = story_for(7).await?;

    assert_eq!(first, second);
    assert_ne!(first, other);
    Ok(())
}

#[tokio::test]
async fn test_seeded_story_splits_into_vocabulary_sentences() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let models = ModelFacade::new(
        Arc::new(SeededWriter),
        Arc::new(MockPainter::default()),
        Arc::new(MockSpeaker::default()),
        4,
        Seed::new(1),
    );
    let teller = StoryTeller::new(
        models,
        Arc::new(FakeVideoTool::default()),
        SentenceSplitter::default(),
    );

    let report = teller.generate(&request(dir.path(), 10)).await?;

    assert_eq!(report.sentences().len(), 4);
    assert_eq!(report.produced().count(), 4);
    Ok(())
}
