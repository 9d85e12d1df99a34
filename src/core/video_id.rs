use crate::core::{Result, TranscriptError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

const VIDEO_ID_PATTERN: &str = r"^[a-zA-Z0-9_-]{11}$";

// Searched in order, first match wins.
const URL_PATTERNS: [&str; 2] = [
    r"(?:youtube\.com/watch\?v=|youtu\.be/)([a-zA-Z0-9_-]{11})",
    r"youtube\.com/embed/([a-zA-Z0-9_-]{11})",
];

/// Canonical 11-character YouTube video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Normalizes a bare video ID or one of the supported URL shapes.
    ///
    /// Input that already looks like an ID is taken literally, so an
    /// 11-character string is never interpreted as a URL.
    pub fn extract(url_or_id: &str) -> Result<Self> {
        if let Ok(re) = Regex::new(VIDEO_ID_PATTERN) {
            if re.is_match(url_or_id) {
                return Ok(Self(url_or_id.to_string()));
            }
        }

        for pattern in &URL_PATTERNS {
            if let Ok(re) = Regex::new(pattern) {
                if let Some(id) = re.captures(url_or_id).and_then(|c| c.get(1)) {
                    tracing::debug!("Matched video ID {} with pattern {}", id.as_str(), pattern);
                    return Ok(Self(id.as_str().to_string()));
                }
            }
        }

        Err(TranscriptError::InvalidReference(url_or_id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VideoId {
    type Err = TranscriptError;

    fn from_str(s: &str) -> Result<Self> {
        Self::extract(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_ids_are_returned_unchanged() {
        for id in ["dQw4w9WgXcQ", "_NuH3D4SN-c", "-----------", "abcdefghijk", "ABC_123-xyz"] {
            assert_eq!(VideoId::extract(id).unwrap().as_str(), id);
        }
    }

    #[test]
    fn test_supported_url_shapes() {
        let test_cases = vec![
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=123",
            "youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?si=VSFea_rMwtaiR8Q7",
        ];

        for url in test_cases {
            assert_eq!(VideoId::extract(url).unwrap().as_str(), "dQw4w9WgXcQ", "{}", url);
        }
    }

    #[test]
    fn test_invalid_references() {
        for input in [
            "not a url",
            "",
            "dQw4w9WgXc",
            "dQw4w9WgXcQQ",
            "https://example.com",
            "https://vimeo.com/123456",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
        ] {
            let err = VideoId::extract(input).unwrap_err();
            assert!(matches!(err, TranscriptError::InvalidReference(ref s) if s == input));
        }
    }

    #[test]
    fn test_from_str_and_display() {
        let id: VideoId = "https://youtu.be/dQw4w9WgXcQ".parse().unwrap();
        assert_eq!(id.to_string(), "dQw4w9WgXcQ");
        assert_eq!(id.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }
}
