pub mod cli;
pub mod config;
pub mod core;
pub mod extractors;
pub mod utils;

pub use core::{
    format_transcript, select_transcript, SelectionResult, TranscriptError, TranscriptSource,
    VideoId,
};
pub use extractors::YouTubeTranscriptSource;
