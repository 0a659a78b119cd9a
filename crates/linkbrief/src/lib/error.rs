use url_loader::TranscriptError;

/// Everything that can end a summarize request. All variants are terminal;
/// nothing is retried, and the rendered message is the only error channel.
#[derive(Debug, thiserror::Error)]
pub enum SummarizeError {
    #[error("Please enter both a URL and your Groq API key.")]
    MissingInput,
    #[error("Please enter a valid URL.")]
    InvalidUrl,
    #[error("Could not extract video ID. Please check the YouTube link.")]
    VideoIdNotExtractable,
    #[error("No transcript found for this YouTube video.")]
    NoTranscriptAvailable,
    #[error("Failed to load transcript: {0}")]
    TranscriptFetchFailed(#[source] TranscriptError),
    #[error("Failed to load content from the website.")]
    PageLoadFailed,
    #[error("Summarization failed: {0}")]
    SummarizationFailed(#[source] anyhow::Error),
}

impl From<TranscriptError> for SummarizeError {
    fn from(e: TranscriptError) -> Self {
        if e.is_unavailable() {
            SummarizeError::NoTranscriptAvailable
        } else {
            SummarizeError::TranscriptFetchFailed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_transcript_maps_to_user_facing_variant() {
        assert!(matches!(
            SummarizeError::from(TranscriptError::Disabled),
            SummarizeError::NoTranscriptAvailable
        ));
        assert!(matches!(
            SummarizeError::from(TranscriptError::NotFound),
            SummarizeError::NoTranscriptAvailable
        ));
    }

    #[test]
    fn test_provider_fault_keeps_its_cause() {
        let err = SummarizeError::from(TranscriptError::Parse("bad payload"));
        assert!(matches!(err, SummarizeError::TranscriptFetchFailed(_)));
        assert!(err.to_string().contains("bad payload"));
    }
}
