pub mod youtube;

use std::future::Future;

use crate::Document;

/// One timed caption entry, as returned by the transcript provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionFragment {
    pub text: String,
    /// Offset from the start of the video, in seconds.
    pub start: f64,
    /// Display duration, in seconds.
    pub duration: f64,
}

/// Ordered caption fragments for a single video.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    pub fragments: Vec<CaptionFragment>,
}

impl Transcript {
    /// Collapses the transcript into a single document: fragment texts in
    /// provider order, joined with one space. Timing is discarded.
    pub fn into_document(self) -> Document {
        let content = self
            .fragments
            .into_iter()
            .map(|fragment| fragment.text)
            .collect::<Vec<_>>()
            .join(" ");
        Document::new(content)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("transcripts are disabled for this video")]
    Disabled,
    #[error("no transcript could be found for this video")]
    NotFound,
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected player response: {0}")]
    Parse(&'static str),
}

impl TranscriptError {
    /// Whether this is an expected no-captions condition rather than a fault.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, TranscriptError::Disabled | TranscriptError::NotFound)
    }
}

pub trait TranscriptProvider {
    fn fetch_transcript(
        &self,
        video_id: &str,
    ) -> impl Future<Output = Result<Transcript, TranscriptError>> + Send;
}
