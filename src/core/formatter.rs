use crate::core::{SelectionResult, TranscriptTrack, VideoId};

pub const SEPARATOR: &str = "---";

/// `[HH:MM:SS]` of the floored offset. Hours are not wrapped at 24.
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    format!("[{:02}:{:02}:{:02}]", hours, minutes, secs)
}

/// Header, separator, then one `[HH:MM:SS] text` line per entry in the
/// order they were fetched. No trailing newline.
pub fn format_transcript(selection: &SelectionResult) -> String {
    let mut lines = Vec::with_capacity(selection.entries.len() + 2);
    lines.push(format!("ℹ️  Retrieved transcript: {}", selection.description));
    lines.push(SEPARATOR.to_string());

    for entry in &selection.entries {
        lines.push(format!("{} {}", format_timestamp(entry.start), entry.text.trim()));
    }

    lines.join("\n")
}

pub fn format_language_list(video: &VideoId, tracks: &[TranscriptTrack]) -> String {
    let mut output = format!("Available transcripts for video {}:", video);
    for track in tracks {
        output.push_str(&format!("\n  - {}", track));
    }
    output
}
