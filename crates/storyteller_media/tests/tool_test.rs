//! Tests for the external tool runner and the ffmpeg command lines.

use std::ffi::OsString;
use std::path::Path;
use storyteller_core::SegmentPaths;
use storyteller_error::{MediaErrorKind, PreconditionErrorKind};
use storyteller_media::{Ffmpeg, ToolCommand, require_tool};

fn args_of(cmd: &ToolCommand) -> Vec<String> {
    cmd.get_args()
        .iter()
        .map(|arg: &OsString| arg.to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_require_missing_tool_is_precondition_error() {
    let err = require_tool("storyteller-definitely-not-installed").unwrap_err();

    assert_eq!(
        err.kind(),
        &PreconditionErrorKind::ToolNotFound("storyteller-definitely-not-installed".to_string())
    );
    assert!(err.to_string().contains("Please install"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_successful_tool_run() {
    ToolCommand::new("sh")
        .args(["-c", "echo ignored"])
        .run()
        .await
        .unwrap();
}

#[cfg(unix)]
#[tokio::test]
async fn test_failed_tool_reports_code_and_stderr() {
    let err = ToolCommand::new("sh")
        .args(["-c", "echo first >&2; echo 'bad input' >&2; exit 3"])
        .run()
        .await
        .unwrap_err();

    match err.kind() {
        MediaErrorKind::ToolFailed { tool, code, stderr } => {
            assert_eq!(tool, "sh");
            assert_eq!(*code, Some(3));
            assert!(stderr.ends_with("bad input"), "{}", stderr);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn test_tokenizers_parallelism_is_disabled_for_children() {
    ToolCommand::new("sh")
        .args(["-c", "test \"$TOKENIZERS_PARALLELISM\" = false"])
        .run()
        .await
        .unwrap();
}

#[cfg(unix)]
#[tokio::test]
async fn test_tool_runs_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();

    ToolCommand::new("sh")
        .args(["-c", "touch marker"])
        .current_dir(dir.path())
        .run()
        .await
        .unwrap();

    assert!(dir.path().join("marker").exists());
}

#[tokio::test]
async fn test_missing_program_is_spawn_error() {
    let err = ToolCommand::new("storyteller-definitely-not-installed")
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), MediaErrorKind::ToolSpawn { .. }));
}

#[test]
fn test_mux_command_uses_bare_file_names() {
    let ffmpeg = Ffmpeg::with_program("ffmpeg");
    let paths = SegmentPaths::for_index("/tmp/story", 3);

    let cmd = ffmpeg.mux_command(&paths, 4).unwrap();

    assert_eq!(
        args_of(&cmd),
        vec![
            "-y",
            "-hide_banner",
            "-loglevel",
            "error",
            "-loop",
            "1",
            "-i",
            "3.png",
            "-i",
            "3.wav",
            "-vf",
            "subtitles=3.srt",
            "-c:v",
            "libx264",
            "-tune",
            "stillimage",
            "-pix_fmt",
            "yuv420p",
            "-c:a",
            "aac",
            "-b:a",
            "192k",
            "-t",
            "4",
            "-shortest",
            "3.mp4",
        ]
    );
}

#[test]
fn test_concat_command_reads_manifest_in_output_dir() {
    let ffmpeg = Ffmpeg::with_program("ffmpeg");

    let cmd = ffmpeg
        .concat_command(Path::new("/tmp/story/files.txt"), Path::new("/tmp/story/out.mp4"))
        .unwrap();

    assert_eq!(
        args_of(&cmd),
        vec![
            "-y",
            "-hide_banner",
            "-loglevel",
            "error",
            "-f",
            "concat",
            "-safe",
            "0",
            "-i",
            "files.txt",
            "-c",
            "copy",
            "out.mp4",
        ]
    );
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_real_ffmpeg_builds_a_clip() {
    use storyteller_core::{AudioClip, SubtitleTiming};
    use storyteller_interface::VideoTool;
    use storyteller_media::{SubtitleCue, write_png, write_srt, write_wav};

    let ffmpeg = Ffmpeg::locate().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let paths = SegmentPaths::for_index(dir.path(), 0);

    let image = image::DynamicImage::ImageRgb8(image::RgbImage::new(64, 64));
    write_png(paths.image(), &image).await.unwrap();
    write_wav(paths.audio(), &AudioClip::new(vec![0; 16_000], 16_000))
        .await
        .unwrap();
    write_srt(
        paths.subtitle(),
        &[SubtitleCue::new("Silence.", SubtitleTiming::covering(1.0))],
    )
    .await
    .unwrap();

    ffmpeg.mux_segment(&paths, 1).await.unwrap();
    assert!(paths.video().exists());
}
