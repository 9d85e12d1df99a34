use crate::core::{TranscriptTrack, VideoId};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranscriptError>;

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error(
        "Invalid YouTube URL or video ID: {0}\n\n\
         Supported formats:\n  \
         - https://www.youtube.com/watch?v=VIDEO_ID\n  \
         - https://youtu.be/VIDEO_ID\n  \
         - https://www.youtube.com/embed/VIDEO_ID\n  \
         - VIDEO_ID"
    )]
    InvalidReference(String),

    #[error("Transcripts are disabled for this video")]
    TranscriptsDisabled(VideoId),

    #[error("Video is private, deleted, or unavailable")]
    VideoUnavailable(VideoId),

    #[error(
        "Transcript not available in '{requested}'\n\nAvailable languages:\n{}",
        describe_tracks(.available)
    )]
    LanguageNotFound {
        requested: String,
        available: Vec<TranscriptTrack>,
    },

    #[error("No transcripts are available for video {0}")]
    NoTranscripts(VideoId),

    #[error("YouTube is blocking requests for video {0} (too many requests or bot check)")]
    RequestBlocked(VideoId),

    #[error("Video {0} is age restricted and requires signing in")]
    AgeRestricted(VideoId),

    #[error("Video {video} is unplayable: {reason}")]
    Unplayable { video: VideoId, reason: String },

    #[error("Video {0} requires a PO token to fetch transcripts")]
    PoTokenRequired(VideoId),

    #[error("Could not parse YouTube response for video {video}: {detail}")]
    Unparsable { video: VideoId, detail: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Permission denied writing to {}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write file: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(std::io::Error),

    #[error("Invalid config file {}: {detail}", .path.display())]
    Config { path: PathBuf, detail: String },
}

/// One `  - code (name) [origin]` line per track, in the order given.
pub fn describe_tracks(tracks: &[TranscriptTrack]) -> String {
    tracks
        .iter()
        .map(|track| format!("  - {}", track))
        .collect::<Vec<_>>()
        .join("\n")
}
