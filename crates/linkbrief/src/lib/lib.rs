mod error;
mod llm;
mod pipeline;
pub mod server;
pub mod tracing;

pub use error::SummarizeError;
pub use llm::groq::{GroqClient, GroqError};
pub use llm::summarizer::{Summarizer, SummaryResponse};
pub use pipeline::{builder::SummaryPipelineBuilder, SummarizeRequest, SummaryPipeline};
