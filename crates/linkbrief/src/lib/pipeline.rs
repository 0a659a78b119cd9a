pub mod builder;

use url::Url;
use url_loader::{
    classify, extract_video_id, DocumentSet, PageFetcher, TranscriptProvider, UrlKind,
};

use crate::{error::SummarizeError, Summarizer, SummaryResponse};

// chars-per-token approximation used for the prompt size cap
const APPROX_CHARS_PER_TOKEN: usize = 4;

/// One user-initiated summarize action, both form fields carried explicitly.
#[derive(Debug, Clone)]
pub struct SummarizeRequest {
    pub api_key: String,
    pub url: String,
}

/// The request-synchronous summarize pipeline: validate, classify, extract,
/// summarize. Runs to completion within one user action; no background work,
/// no retries, no state shared across requests.
pub struct SummaryPipeline<T, P, S>
where
    T: TranscriptProvider + Send + Sync + 'static,
    P: PageFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    transcript_provider: T,
    page_fetcher: P,
    summarizer: S,
}

impl<T, P, S> SummaryPipeline<T, P, S>
where
    T: TranscriptProvider + Send + Sync + 'static,
    P: PageFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    #[tracing::instrument(skip_all, fields(url = %request.url))]
    pub async fn run(&self, request: &SummarizeRequest) -> Result<SummaryResponse, SummarizeError> {
        if request.api_key.trim().is_empty() || request.url.trim().is_empty() {
            return Err(SummarizeError::MissingInput);
        }

        let url = Url::parse(request.url.trim())
            .ok()
            .filter(Url::has_host)
            .ok_or(SummarizeError::InvalidUrl)?;

        let documents = match classify(&url) {
            UrlKind::YouTube => self.load_youtube_transcript(&url).await?,
            UrlKind::Generic => self.load_generic_page(&url).await?,
        };

        let content = self.bounded_content(documents);

        let response = self
            .summarizer
            .summarize(&content)
            .await
            .map_err(|e| SummarizeError::SummarizationFailed(anyhow::Error::new(e)))?;

        Ok(response)
    }

    /// YouTube path: video ID, then one document holding the whole transcript.
    async fn load_youtube_transcript(&self, url: &Url) -> Result<DocumentSet, SummarizeError> {
        let video_id = extract_video_id(url).ok_or(SummarizeError::VideoIdNotExtractable)?;

        let transcript = self
            .transcript_provider
            .fetch_transcript(&video_id)
            .await
            .inspect_err(|e| tracing::error!(error = %e, video_id, "Failed to load transcript"))?;

        Ok(transcript.into_document().into())
    }

    /// Generic path: fetch the single URL; zero documents is terminal.
    async fn load_generic_page(&self, url: &Url) -> Result<DocumentSet, SummarizeError> {
        let documents = self.page_fetcher.fetch(std::slice::from_ref(url)).await;

        if documents.is_empty() {
            return Err(SummarizeError::PageLoadFailed);
        }

        Ok(DocumentSet::new(documents))
    }

    /// Stuffs all documents into one prompt body, capped to the summarizer's
    /// context budget. Oversized content is truncated, not rejected.
    fn bounded_content(&self, documents: DocumentSet) -> String {
        let content = documents.stuff();
        let cap = S::CONTEXT_WINDOW_LIMIT * APPROX_CHARS_PER_TOKEN;

        if content.chars().count() > cap {
            tracing::warn!(cap, "Content exceeds the summarizer budget, truncating");
            content.chars().take(cap).collect()
        } else {
            content
        }
    }
}
