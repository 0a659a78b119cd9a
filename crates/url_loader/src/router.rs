//! URL classification and video-ID extraction.
//!
//! Classification is a substring check on the host, not an allow-list. A host
//! that merely embeds `youtube.com` or `youtu.be` will classify as YouTube;
//! that matches the upstream behavior this tool replaces.

use url::Url;

/// Which extraction path a URL resolves to. Every URL resolves to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    YouTube,
    Generic,
}

pub fn classify(url: &Url) -> UrlKind {
    let host = url.host_str().unwrap_or_default();
    if host.contains("youtu.be") || host.contains("youtube.com") {
        UrlKind::YouTube
    } else {
        UrlKind::Generic
    }
}

/// Pulls the video identifier out of a YouTube URL.
///
/// Short-link form (`youtu.be/<id>`) takes the first path segment; canonical
/// form (`youtube.com/watch?v=<id>`) takes the first `v` query parameter.
/// Returns `None` when neither shape yields an identifier — the caller must
/// treat that as a terminal failure for the request.
pub fn extract_video_id(url: &Url) -> Option<String> {
    let host = url.host_str()?;

    if host.contains("youtu.be") {
        return url
            .path_segments()
            .and_then(|mut segments| segments.next())
            .filter(|segment| !segment.is_empty())
            .map(str::to_string);
    }

    if host.contains("youtube.com") {
        return url
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned());
    }

    None
}
