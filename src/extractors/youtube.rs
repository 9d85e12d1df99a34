use crate::config::Config;
use crate::core::{
    Result, TrackOrigin, TranscriptEntry, TranscriptError, TranscriptSource, TranscriptTrack,
    VideoId,
};
use crate::extractors::timedtext::parse_timedtext;
use async_trait::async_trait;
use regex::Regex;
use reqwest::cookie::Jar;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use serde_json::Value;
use std::sync::Arc;
use url::Url;

const INNERTUBE_PLAYER_URL: &str = "https://www.youtube.com/youtubei/v1/player";
const CONSENT_FORM_MARKER: &str = "action=\"https://consent.youtube.com/s\"";

/// Lists caption tracks through the InnerTube player API and fetches them as
/// timedtext XML.
pub struct YouTubeTranscriptSource {
    client: reqwest::Client,
    cookies: Arc<Jar>,
}

impl YouTubeTranscriptSource {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&config.accept_language) {
            headers.insert(ACCEPT_LANGUAGE, value);
        } else {
            tracing::warn!("Ignoring invalid Accept-Language {:?}", config.accept_language);
        }

        let cookies = Arc::new(Jar::default());
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(std::time::Duration::from_secs(config.timeout))
            .default_headers(headers)
            .cookie_provider(Arc::clone(&cookies))
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client, cookies })
    }

    async fn fetch_video_html(&self, video: &VideoId) -> Result<String> {
        let html = self.get_text(video, &video.watch_url()).await?;
        if !html.contains(CONSENT_FORM_MARKER) {
            return Ok(html);
        }

        tracing::debug!("Consent page served for {}, setting consent cookie", video);
        self.accept_consent(video, &html)?;

        let html = self.get_text(video, &video.watch_url()).await?;
        if html.contains(CONSENT_FORM_MARKER) {
            return Err(unparsable(video, "consent cookie was not accepted"));
        }
        Ok(html)
    }

    fn accept_consent(&self, video: &VideoId, html: &str) -> Result<()> {
        let value = Regex::new(r#"name="v" value="(.*?)""#)
            .ok()
            .and_then(|re| re.captures(html))
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| unparsable(video, "consent form has no value"))?;

        let url = Url::parse("https://www.youtube.com")
            .map_err(|e| unparsable(video, &e.to_string()))?;
        self.cookies
            .add_cookie_str(&format!("CONSENT=YES+{}; Domain=.youtube.com", value), &url);
        Ok(())
    }

    async fn fetch_player_response(&self, video: &VideoId, api_key: &str) -> Result<Value> {
        let body = serde_json::json!({
            "context": {
                "client": {
                    "clientName": "ANDROID",
                    "clientVersion": "20.10.38"
                }
            },
            "videoId": video.as_str()
        });

        let response = self
            .client
            .post(INNERTUBE_PLAYER_URL)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;
        let response = check_status(video, response)?;

        Ok(response.json().await?)
    }

    async fn get_text(&self, video: &VideoId, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let response = check_status(video, response)?;
        Ok(response.text().await?)
    }
}

#[async_trait]
impl TranscriptSource for YouTubeTranscriptSource {
    fn name(&self) -> &'static str {
        "YouTube"
    }

    async fn list(&self, video: &VideoId) -> Result<Vec<TranscriptTrack>> {
        // The watch page carries the InnerTube API key
        let html = self.fetch_video_html(video).await?;
        let api_key = extract_innertube_api_key(video, &html)?;

        // Caption tracks come from the player endpoint, not the page itself
        let player_response = self.fetch_player_response(video, &api_key).await?;

        // Private, removed or blocked videos fail here with a specific error
        assert_playability(video, &player_response)?;
        let tracks = parse_caption_tracks(video, &player_response)?;
        tracing::info!("Found {} caption tracks for {}", tracks.len(), video);
        Ok(tracks)
    }

    async fn fetch(&self, track: &TranscriptTrack) -> Result<Vec<TranscriptEntry>> {
        // These URLs only answer with a proof-of-origin token we cannot produce
        if track.base_url.contains("&exp=xpe") {
            return Err(TranscriptError::PoTokenRequired(track.video.clone()));
        }

        let xml = self.get_text(&track.video, &track.base_url).await?;
        parse_timedtext(&xml).map_err(|e| unparsable(&track.video, &e.to_string()))
    }
}

fn unparsable(video: &VideoId, detail: &str) -> TranscriptError {
    TranscriptError::Unparsable {
        video: video.clone(),
        detail: detail.to_string(),
    }
}

fn check_status(video: &VideoId, response: reqwest::Response) -> Result<reqwest::Response> {
    if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(TranscriptError::RequestBlocked(video.clone()));
    }
    Ok(response.error_for_status()?)
}

pub fn extract_innertube_api_key(video: &VideoId, html: &str) -> Result<String> {
    if html.contains("class=\"g-recaptcha\"") {
        return Err(TranscriptError::RequestBlocked(video.clone()));
    }

    Regex::new(r#""INNERTUBE_API_KEY":\s*"([a-zA-Z0-9_-]+)""#)
        .ok()
        .and_then(|re| re.captures(html))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| unparsable(video, "INNERTUBE_API_KEY not found in watch page"))
}

pub fn assert_playability(video: &VideoId, player_response: &Value) -> Result<()> {
    let Some(playability) = player_response.get("playabilityStatus") else {
        return Ok(());
    };

    let status = playability.get("status").and_then(|s| s.as_str()).unwrap_or("");
    if status == "OK" {
        return Ok(());
    }

    let reason = playability.get("reason").and_then(|r| r.as_str()).unwrap_or("");
    tracing::debug!("Playability status {} for {}: {}", status, video, reason);

    match status {
        "LOGIN_REQUIRED" if reason.contains("not a bot") => {
            Err(TranscriptError::RequestBlocked(video.clone()))
        }
        "LOGIN_REQUIRED" if reason.contains("inappropriate for some users") => {
            Err(TranscriptError::AgeRestricted(video.clone()))
        }
        "ERROR" if reason.contains("unavailable") => {
            Err(TranscriptError::VideoUnavailable(video.clone()))
        }
        _ => Err(TranscriptError::Unplayable {
            video: video.clone(),
            reason: reason.to_string(),
        }),
    }
}

/// Manual tracks first, then auto-generated ones, each in the order the
/// player response lists them.
pub fn parse_caption_tracks(
    video: &VideoId,
    player_response: &Value,
) -> Result<Vec<TranscriptTrack>> {
    let caption_tracks = player_response
        .get("captions")
        .and_then(|c| c.get("playerCaptionsTracklistRenderer"))
        .and_then(|r| r.get("captionTracks"))
        .and_then(|t| t.as_array())
        .ok_or_else(|| TranscriptError::TranscriptsDisabled(video.clone()))?;

    let (manual, generated): (Vec<_>, Vec<_>) = caption_tracks
        .iter()
        .filter_map(|caption| parse_caption_track(video, caption))
        .partition(|track| !track.is_generated());

    let tracks: Vec<TranscriptTrack> = manual.into_iter().chain(generated).collect();
    if tracks.is_empty() {
        return Err(TranscriptError::TranscriptsDisabled(video.clone()));
    }
    Ok(tracks)
}

fn parse_caption_track(video: &VideoId, caption: &Value) -> Option<TranscriptTrack> {
    let language_code = caption.get("languageCode")?.as_str()?.to_string();
    let base_url = caption.get("baseUrl")?.as_str()?.replace("&fmt=srv3", "");

    let name = caption.get("name");
    let language = name
        .and_then(|n| n.get("runs"))
        .and_then(|r| r.as_array())
        .and_then(|runs| runs.first())
        .and_then(|run| run.get("text"))
        .or_else(|| name.and_then(|n| n.get("simpleText")))
        .and_then(|t| t.as_str())
        .unwrap_or(language_code.as_str())
        .to_string();

    let origin = match caption.get("kind").and_then(|k| k.as_str()) {
        Some("asr") => TrackOrigin::AutoGenerated,
        _ => TrackOrigin::Manual,
    };

    Some(TranscriptTrack {
        video: video.clone(),
        language_code,
        language,
        origin,
        base_url,
    })
}
