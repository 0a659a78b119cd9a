pub mod extract;

use std::{future::Future, time::Duration};

use url::Url;

use crate::Document;

/// Fetches readable text for a batch of URLs.
///
/// Per-URL failures are not surfaced; a URL that cannot be fetched or yields
/// no text simply contributes no document. Total failure is an empty result.
pub trait PageFetcher {
    fn fetch(&self, urls: &[Url]) -> impl Future<Output = Vec<Document>> + Send;
}

/// Plain HTTP fetcher with HTML text extraction.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    /// Fixed desktop User-Agent; some sites refuse default library clients.
    pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64)";

    const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

    pub fn new() -> Result<Self, reqwest::Error> {
        // TLS verification intentionally skipped; target sites with broken
        // certs should still fetch
        let client = reqwest::Client::builder()
            .user_agent(Self::USER_AGENT)
            .danger_accept_invalid_certs(true)
            .timeout(Self::REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }

    async fn fetch_one(&self, url: &Url) -> Result<Option<Document>, reqwest::Error> {
        let html = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(extract::html_to_text(&html).map(Document::new))
    }
}

impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, urls: &[Url]) -> Vec<Document> {
        let mut documents = Vec::with_capacity(urls.len());

        for url in urls {
            match self.fetch_one(url).await {
                Ok(Some(document)) => documents.push(document),
                Ok(None) => tracing::warn!(%url, "Page yielded no extractable text"),
                Err(e) => tracing::warn!(error = %e, %url, "Failed to fetch page"),
            }
        }

        documents
    }
}
