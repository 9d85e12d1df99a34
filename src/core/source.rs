use crate::core::{Result, TranscriptEntry, TranscriptTrack, VideoId};
use async_trait::async_trait;

/// Lists and fetches caption tracks for a video.
///
/// `list` yields tracks in the source's natural order; the selector relies on
/// that order when it falls back to "first available".
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    fn name(&self) -> &'static str;
    async fn list(&self, video: &VideoId) -> Result<Vec<TranscriptTrack>>;
    async fn fetch(&self, track: &TranscriptTrack) -> Result<Vec<TranscriptEntry>>;
}
