use crate::core::VideoId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackOrigin {
    Manual,
    AutoGenerated,
}

impl TrackOrigin {
    pub fn label(&self) -> &'static str {
        match self {
            TrackOrigin::Manual => "manual",
            TrackOrigin::AutoGenerated => "auto-generated",
        }
    }
}

impl fmt::Display for TrackOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One language/origin variant of a video's captions, as listed by a source.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptTrack {
    pub video: VideoId,
    pub language_code: String,
    pub language: String,
    pub origin: TrackOrigin,
    /// Where the source fetches this track's entries from.
    pub base_url: String,
}

impl TranscriptTrack {
    pub fn is_generated(&self) -> bool {
        self.origin == TrackOrigin::AutoGenerated
    }
}

impl fmt::Display for TranscriptTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.language_code, self.language, self.origin)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub start: f64,
    pub duration: f64,
    pub text: String,
}

/// The fetched entries of the chosen track plus a description of why it was chosen.
#[derive(Debug, Clone)]
pub struct SelectionResult {
    pub track: TranscriptTrack,
    pub entries: Vec<TranscriptEntry>,
    pub description: String,
}
