//! Subtitle timestamp formatting.

/// Format elapsed seconds as an SRT timestamp with whole-second precision.
///
/// Fractional seconds are truncated and the millisecond field is always
/// `000`. Negative and non-finite inputs clamp to zero.
///
/// # Examples
///
/// ```
/// use storyteller_media::format_time;
///
/// assert_eq!(format_time(125.0), "00:02:05,000");
/// assert_eq!(format_time(3725.9), "01:02:05,000");
/// ```
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };

    let (minutes, secs) = (total / 60, total % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);

    format!("{:02}:{:02}:{:02},000", hours, minutes, secs)
}

/// The `start --> end` line of an SRT cue.
///
/// # Examples
///
/// ```
/// use storyteller_media::make_timeline_string;
///
/// assert_eq!(make_timeline_string(0.0, 4.0), "00:00:00,000 --> 00:00:04,000");
/// ```
pub fn make_timeline_string(start: f64, end: f64) -> String {
    format!("{} --> {}", format_time(start), format_time(end))
}
