//! # URL Loader
//!
//! Classifies a user-supplied URL as a YouTube video or a generic website and
//! extracts its textual content as plain-text documents. YouTube URLs go
//! through a caption-track transcript fetch; everything else goes through a
//! plain HTML fetch-and-extract.

mod document;
pub mod fetcher;
pub mod router;
pub mod transcript;

pub use document::{Document, DocumentSet};
pub use fetcher::{HttpPageFetcher, PageFetcher};
pub use router::{classify, extract_video_id, UrlKind};
pub use transcript::{
    youtube::YtTranscriptClient, CaptionFragment, Transcript, TranscriptError, TranscriptProvider,
};
