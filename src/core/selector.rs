use crate::core::{
    Result, SelectionResult, TranscriptError, TranscriptSource, TranscriptTrack, VideoId,
};
use tracing::{debug, info};

const DEFAULT_LANGUAGE: &str = "en";

/// Picks one track for `video` and fetches its entries.
///
/// With an explicit `language` the track must exist. Without one, English is
/// tried first and otherwise the first track the source listed is used.
pub async fn select_transcript(
    source: &dyn TranscriptSource,
    video: &VideoId,
    language: Option<&str>,
) -> Result<SelectionResult> {
    let tracks = source.list(video).await?;
    debug!("{} listed {} tracks for {}", source.name(), tracks.len(), video);

    let (track, description) = match language {
        Some(code) => {
            let track = find_track(&tracks, code).ok_or_else(|| {
                TranscriptError::LanguageNotFound {
                    requested: code.to_string(),
                    available: tracks.clone(),
                }
            })?;
            let description = format!("{} ({})", track.language, track.origin);
            (track, description)
        }
        None => match find_track(&tracks, DEFAULT_LANGUAGE) {
            Some(track) => (track, format!("English ({})", track.origin)),
            None => {
                // Order is whatever the source yields; no manual preference.
                let track = tracks
                    .first()
                    .ok_or_else(|| TranscriptError::NoTranscripts(video.clone()))?;
                let description =
                    format!("{} ({}, English unavailable)", track.language, track.origin);
                (track, description)
            }
        },
    };

    info!("Selected {} track for {}", track, video);
    let entries = source.fetch(track).await?;

    Ok(SelectionResult {
        track: track.clone(),
        entries,
        description,
    })
}

pub fn find_track<'a>(
    tracks: &'a [TranscriptTrack],
    language_code: &str,
) -> Option<&'a TranscriptTrack> {
    tracks.iter().find(|t| t.language_code == language_code)
}
