use std::sync::{Arc, Mutex};

use url_loader::{CaptionFragment, Transcript, TranscriptError, TranscriptProvider};

#[derive(Clone, Copy)]
pub enum MockFailure {
    Disabled,
    NotFound,
    Fault,
}

#[derive(Clone, Default)]
pub struct MockTranscriptProvider {
    pub fragments: Vec<CaptionFragment>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<MockFailure>,
}

impl MockTranscriptProvider {
    pub fn with_fragments(texts: &[&str]) -> Self {
        let fragments = texts
            .iter()
            .enumerate()
            .map(|(i, text)| CaptionFragment {
                text: text.to_string(),
                start: i as f64,
                duration: 1.0,
            })
            .collect();

        Self {
            fragments,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(failure: MockFailure) -> Self {
        Self {
            fail_with: Some(failure),
            ..Default::default()
        }
    }
}

impl TranscriptProvider for MockTranscriptProvider {
    async fn fetch_transcript(&self, video_id: &str) -> Result<Transcript, TranscriptError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        match self.fail_with {
            Some(MockFailure::Disabled) => Err(TranscriptError::Disabled),
            Some(MockFailure::NotFound) => Err(TranscriptError::NotFound),
            Some(MockFailure::Fault) => Err(TranscriptError::Parse("caption endpoint returned garbage")),
            None => Ok(Transcript {
                fragments: self.fragments.clone(),
            }),
        }
    }
}
