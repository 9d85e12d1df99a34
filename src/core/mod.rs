pub mod error;
pub mod formatter;
pub mod selector;
pub mod source;
pub mod transcript;
pub mod video_id;

pub use error::{describe_tracks, Result, TranscriptError};
pub use formatter::{format_language_list, format_timestamp, format_transcript};
pub use selector::{find_track, select_transcript};
pub use source::TranscriptSource;
pub use transcript::{SelectionResult, TrackOrigin, TranscriptEntry, TranscriptTrack};
pub use video_id::VideoId;
