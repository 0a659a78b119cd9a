//! HTML to plain text.

use scraper::{Html, Selector};

// likely article containers, tried before falling back to bare paragraphs
const CONTAINER_SELECTORS: [&str; 5] = ["article", "main", "[role=main]", "#content", ".post-content"];

const MIN_CONTAINER_TEXT_LEN: usize = 200;

/// Extracts readable text from an HTML document.
///
/// Tries common article containers first; a container only wins if it holds a
/// meaningful amount of text. Falls back to the page's paragraphs, then to the
/// whole body.
pub fn html_to_text(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);

    for selector in CONTAINER_SELECTORS {
        if let Some(text) = text_for_selector(&doc, selector) {
            if text.len() >= MIN_CONTAINER_TEXT_LEN {
                return Some(text);
            }
        }
    }

    let p_selector = Selector::parse("p").ok()?;
    let paragraphs: Vec<String> = doc
        .select(&p_selector)
        .map(|p| normalize(&p.text().collect::<String>()))
        .filter(|text| !text.is_empty())
        .collect();
    if !paragraphs.is_empty() {
        return Some(paragraphs.join("\n"));
    }

    let body_selector = Selector::parse("body").ok()?;
    let body_text = doc
        .select(&body_selector)
        .map(|body| normalize(&body.text().collect::<String>()))
        .find(|text| !text.is_empty());

    body_text
}

fn text_for_selector(doc: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let node = doc.select(&selector).next()?;
    let text = normalize(&node.text().collect::<String>());
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Collapses intra-line whitespace and drops blank lines.
fn normalize(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
