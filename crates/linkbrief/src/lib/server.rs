//! The single-screen web form: one page, one POST, the summary or the error
//! rendered inline. The page is the only output channel.

use axum::{extract::State, response::Html, routing::get, Form, Router};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use url_loader::{HttpPageFetcher, YtTranscriptClient};

use crate::{GroqClient, SummarizeRequest, SummaryPipelineBuilder};

/// Request-independent collaborators, shared across requests. The Groq client
/// is built per request from the submitted key.
#[derive(Clone)]
pub struct AppState {
    transcript_client: YtTranscriptClient,
    page_fetcher: HttpPageFetcher,
}

impl AppState {
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            transcript_client: YtTranscriptClient::new(),
            page_fetcher: HttpPageFetcher::new()?,
        })
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(summarize))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct SummarizeForm {
    #[serde(default)]
    api_key: String,
    #[serde(default)]
    url: String,
}

async fn index() -> Html<String> {
    Html(render_page("", None, None))
}

async fn summarize(
    State(state): State<AppState>,
    Form(form): Form<SummarizeForm>,
) -> Html<String> {
    let request = SummarizeRequest {
        api_key: form.api_key,
        url: form.url,
    };

    let pipeline = SummaryPipelineBuilder::new()
        .transcript_provider(state.transcript_client.clone())
        .page_fetcher(state.page_fetcher.clone())
        .summarizer(GroqClient::new(request.api_key.as_str()))
        .build();

    match pipeline.run(&request).await {
        Ok(response) => Html(render_page(&request.url, Some(&response.summary), None)),
        Err(e) => Html(render_page(&request.url, None, Some(&e.to_string()))),
    }
}

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>linkbrief</title>
  <style>
    body { font-family: sans-serif; max-width: 42rem; margin: 2rem auto; padding: 0 1rem; }
    input[type=text], input[type=password] { width: 100%; padding: 0.4rem; margin: 0.2rem 0 0.8rem; }
    .error { color: #b00020; }
    .summary { white-space: pre-wrap; background: #f6f6f6; padding: 1rem; }
  </style>
</head>
<body>
  <h1>linkbrief</h1>
  <p>Paste a YouTube or website URL below to generate a summary.</p>
  <form method="post" action="/">
    <label for="url">YouTube or website URL</label>
    <input type="text" id="url" name="url" value="{url}">
    <label for="api_key">Groq API key</label>
    <input type="password" id="api_key" name="api_key">
    <button type="submit">Summarize the content</button>
  </form>
  {result}
</body>
</html>
"#;

fn render_page(url_value: &str, summary: Option<&str>, error: Option<&str>) -> String {
    let result = match (summary, error) {
        (Some(summary), _) => format!(
            "<h2>Summary</h2>\n<div class=\"summary\">{}</div>",
            escape_html(summary)
        ),
        (None, Some(error)) => format!("<p class=\"error\">{}</p>", escape_html(error)),
        (None, None) => String::new(),
    };

    PAGE_TEMPLATE
        .replace("{url}", &escape_html(url_value))
        .replace("{result}", &result)
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
