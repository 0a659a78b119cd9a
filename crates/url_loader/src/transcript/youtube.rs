//! Transcript retrieval straight from YouTube's watch page.
//!
//! The watch page embeds a `ytInitialPlayerResponse` JSON object whose
//! `captions` subtree lists the available caption tracks. Each track carries a
//! `baseUrl` that serves the timed caption events; requesting it with
//! `fmt=json3` yields a JSON payload instead of XML.

use std::{ops::Deref, sync::LazyLock};

use regex::Regex;
use serde::Deserialize;

use super::{CaptionFragment, Transcript, TranscriptError, TranscriptProvider};

static PLAYER_RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)var\s+ytInitialPlayerResponse\s*=\s*(\{.*?\});").unwrap()
});

/// Raw HTML of a YouTube watch page.
pub struct WatchPage(String);

impl Deref for WatchPage {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<String> for WatchPage {
    fn from(value: String) -> Self {
        WatchPage(value)
    }
}

impl WatchPage {
    pub fn new(html: String) -> Self {
        WatchPage(html)
    }

    /// Extracts and deserializes the `ytInitialPlayerResponse` object.
    pub fn player_response(&self) -> Result<PlayerResponse, TranscriptError> {
        PLAYER_RESPONSE_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .and_then(|m| serde_json::from_str(m.as_str()).ok())
            .ok_or(TranscriptError::Parse(
                "Failed to extract ytInitialPlayerResponse from the page's script tag",
            ))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Captions {
    pub player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TracklistRenderer {
    #[serde(default)]
    pub caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    pub language_code: Option<String>,
    /// `"asr"` marks an auto-generated track.
    pub kind: Option<String>,
}

/// Picks the track to fetch: a manually-authored English track first, then an
/// auto-generated English one, then whatever is listed first.
fn select_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    let is_english = |track: &&CaptionTrack| {
        track
            .language_code
            .as_deref()
            .is_some_and(|code| code.starts_with("en"))
    };

    tracks
        .iter()
        .find(|track| is_english(track) && track.kind.as_deref() != Some("asr"))
        .or_else(|| tracks.iter().find(is_english))
        .or_else(|| tracks.first())
}

#[derive(Debug, Deserialize)]
struct Json3Transcript {
    #[serde(default)]
    events: Vec<Json3Event>,
}

#[derive(Debug, Deserialize)]
struct Json3Event {
    #[serde(rename = "tStartMs")]
    start_ms: Option<u64>,
    #[serde(rename = "dDurationMs")]
    duration_ms: Option<u64>,
    segs: Option<Vec<Json3Seg>>,
}

#[derive(Debug, Deserialize)]
struct Json3Seg {
    #[serde(default)]
    utf8: String,
}

fn fragments_from_json3(raw: Json3Transcript) -> Vec<CaptionFragment> {
    raw.events
        .into_iter()
        .filter_map(|event| {
            let text = event
                .segs?
                .iter()
                .map(|seg| seg.utf8.as_str())
                .collect::<String>();
            let text = text.trim();
            if text.is_empty() {
                return None;
            }
            Some(CaptionFragment {
                text: text.to_string(),
                start: event.start_ms.unwrap_or(0) as f64 / 1000.0,
                duration: event.duration_ms.unwrap_or(0) as f64 / 1000.0,
            })
        })
        .collect()
}

/// Fetches transcripts from YouTube over plain HTTP, no API key involved.
#[derive(Debug, Clone, Default)]
pub struct YtTranscriptClient {
    client: reqwest::Client,
}

impl YtTranscriptClient {
    const WATCH_URL: &str = "https://www.youtube.com/watch";

    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn fetch_watch_page(&self, video_id: &str) -> Result<WatchPage, TranscriptError> {
        let page = self
            .client
            .get(Self::WATCH_URL)
            .query(&[("v", video_id)])
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(page.into())
    }

    async fn fetch_caption_events(
        &self,
        track: &CaptionTrack,
    ) -> Result<Vec<CaptionFragment>, TranscriptError> {
        let separator = if track.base_url.contains('?') { '&' } else { '?' };
        let track_url = format!("{}{}fmt=json3", track.base_url, separator);

        let raw = self
            .client
            .get(&track_url)
            .send()
            .await?
            .error_for_status()?
            .json::<Json3Transcript>()
            .await?;

        Ok(fragments_from_json3(raw))
    }
}

impl TranscriptProvider for YtTranscriptClient {
    async fn fetch_transcript(&self, video_id: &str) -> Result<Transcript, TranscriptError> {
        let page = self
            .fetch_watch_page(video_id)
            .await
            .inspect_err(|e| tracing::error!(error = %e, video_id, "Failed to fetch watch page"))?;

        let tracks = page
            .player_response()?
            .captions
            .and_then(|captions| captions.player_captions_tracklist_renderer)
            .ok_or(TranscriptError::Disabled)?
            .caption_tracks;

        let track = select_track(&tracks).ok_or(TranscriptError::NotFound)?;

        let fragments = self
            .fetch_caption_events(track)
            .await
            .inspect_err(|e| tracing::error!(error = %e, video_id, "Failed to fetch caption track"))?;

        if fragments.is_empty() {
            return Err(TranscriptError::NotFound);
        }

        Ok(Transcript { fragments })
    }
}
