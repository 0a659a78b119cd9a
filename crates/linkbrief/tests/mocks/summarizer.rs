use std::sync::{Arc, Mutex};

use linkbrief::{Summarizer, SummaryResponse};

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct MockSummarizerError(pub String);

#[derive(Clone)]
pub struct MockSummarizer {
    pub summary: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockSummarizer {
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            summary: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

impl Summarizer for MockSummarizer {
    const SUMMARIZER_MODEL: &'static str = "mock-model";
    type Error = MockSummarizerError;

    async fn summarize(&self, content: &str) -> Result<SummaryResponse, Self::Error> {
        self.calls.lock().unwrap().push(content.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(MockSummarizerError(msg.clone()));
        }
        Ok(SummaryResponse {
            summary: self.summary.clone(),
        })
    }
}

/// Same recording behavior, but with a tiny context budget so truncation is
/// observable in tests.
#[derive(Clone)]
pub struct TinyWindowSummarizer(pub MockSummarizer);

impl Summarizer for TinyWindowSummarizer {
    const CONTEXT_WINDOW_LIMIT: usize = 8;
    const SUMMARIZER_MODEL: &'static str = "mock-model-tiny";
    type Error = MockSummarizerError;

    async fn summarize(&self, content: &str) -> Result<SummaryResponse, Self::Error> {
        self.0.summarize(content).await
    }
}
