use std::future::Future;

pub trait Summarizer {
    /// Approximate prompt budget, in model tokens.
    const CONTEXT_WINDOW_LIMIT: usize = 131_072 - 8_000;
    const SUMMARIZER_MODEL: &str;

    type Error: std::error::Error + Send + Sync + 'static;

    fn summarize(
        &self,
        content: &str,
    ) -> impl Future<Output = Result<SummaryResponse, Self::Error>> + Send;
}

#[derive(Debug, Clone)]
pub struct SummaryResponse {
    pub summary: String,
}
