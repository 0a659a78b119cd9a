use url_loader::{PageFetcher, TranscriptProvider};

use crate::{SummaryPipeline, Summarizer};

pub struct SummaryPipelineBuilder<T = (), P = (), S = ()> {
    transcript_provider: T,
    page_fetcher: P,
    summarizer: S,
}

impl SummaryPipelineBuilder {
    pub fn new() -> Self {
        Self {
            transcript_provider: (),
            page_fetcher: (),
            summarizer: (),
        }
    }
}

impl Default for SummaryPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P, S> SummaryPipelineBuilder<T, P, S> {
    pub fn transcript_provider<T2: TranscriptProvider + Send + Sync + 'static>(
        self,
        transcript_provider: T2,
    ) -> SummaryPipelineBuilder<T2, P, S> {
        SummaryPipelineBuilder {
            transcript_provider,
            page_fetcher: self.page_fetcher,
            summarizer: self.summarizer,
        }
    }

    pub fn page_fetcher<P2: PageFetcher + Send + Sync + 'static>(
        self,
        page_fetcher: P2,
    ) -> SummaryPipelineBuilder<T, P2, S> {
        SummaryPipelineBuilder {
            transcript_provider: self.transcript_provider,
            page_fetcher,
            summarizer: self.summarizer,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> SummaryPipelineBuilder<T, P, S2> {
        SummaryPipelineBuilder {
            transcript_provider: self.transcript_provider,
            page_fetcher: self.page_fetcher,
            summarizer,
        }
    }
}

impl<T, P, S> SummaryPipelineBuilder<T, P, S>
where
    T: TranscriptProvider + Send + Sync + 'static,
    P: PageFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    pub fn build(self) -> SummaryPipeline<T, P, S> {
        SummaryPipeline {
            transcript_provider: self.transcript_provider,
            page_fetcher: self.page_fetcher,
            summarizer: self.summarizer,
        }
    }
}
