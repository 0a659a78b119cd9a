use std::sync::{Arc, Mutex};

use url::Url;
use url_loader::{Document, PageFetcher};

#[derive(Clone, Default)]
pub struct MockPageFetcher {
    pub documents: Vec<Document>,
    pub calls: Arc<Mutex<Vec<Vec<String>>>>,
}

impl MockPageFetcher {
    pub fn returning(contents: &[&str]) -> Self {
        Self {
            documents: contents.iter().map(|content| Document::new(*content)).collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

impl PageFetcher for MockPageFetcher {
    async fn fetch(&self, urls: &[Url]) -> Vec<Document> {
        self.calls
            .lock()
            .unwrap()
            .push(urls.iter().map(Url::to_string).collect());
        self.documents.clone()
    }
}
