//! Turns fetched content into an HTTP response.
//!
//! In `Negotiate` mode the gateway's content type picks the response shape:
//! html and plain text are served as text, images keep their original type,
//! everything else (or nothing) becomes `application/octet-stream`.
//! `Html` mode serves every body as html.

use std::fmt;
use std::str::FromStr;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use rns_core::constants::OCTET_STREAM;
use rns_core::types::FetchedContent;

const HTML_UTF8: &str = "text/html; charset=utf-8";
const PLAIN_UTF8: &str = "text/plain; charset=utf-8";

/// How the content type of a response is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Pick the response shape from the gateway's content type.
    #[default]
    Negotiate,
    /// Always answer with html.
    Html,
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "negotiate" => Ok(RenderMode::Negotiate),
            "html" => Ok(RenderMode::Html),
            other => Err(format!("unknown render mode '{}'", other)),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Negotiate => f.write_str("negotiate"),
            RenderMode::Html => f.write_str("html"),
        }
    }
}

/// Response shape for a piece of content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentKind {
    /// `text/html`
    Html,
    /// `text/plain`
    PlainText,
    /// `image/*`, carrying the original header value
    Image(String),
    /// Anything else
    Binary,
}

impl ContentKind {
    /// Classifies a content type. Parameters such as `charset` are ignored.
    pub fn classify(content_type: Option<&str>) -> Self {
        let Some(raw) = content_type else {
            return ContentKind::Binary;
        };

        let essence = raw
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "text/html" => ContentKind::Html,
            "text/plain" => ContentKind::PlainText,
            e if e.starts_with("image/") => ContentKind::Image(raw.trim().to_string()),
            _ => ContentKind::Binary,
        }
    }

    fn header_value(&self) -> HeaderValue {
        match self {
            ContentKind::Html => HeaderValue::from_static(HTML_UTF8),
            ContentKind::PlainText => HeaderValue::from_static(PLAIN_UTF8),
            ContentKind::Image(original) => HeaderValue::from_str(original)
                .unwrap_or_else(|_| HeaderValue::from_static(OCTET_STREAM)),
            ContentKind::Binary => HeaderValue::from_static(OCTET_STREAM),
        }
    }
}

/// Builds the 200 response for fetched content.
pub fn render(content: FetchedContent, mode: RenderMode) -> Response {
    let kind = match mode {
        RenderMode::Html => ContentKind::Html,
        RenderMode::Negotiate => ContentKind::classify(content.content_type.as_deref()),
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, kind.header_value())],
        content.body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_type_of(response: &Response) -> &str {
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[test]
    fn test_classify() {
        assert_eq!(ContentKind::classify(Some("text/html")), ContentKind::Html);
        assert_eq!(ContentKind::classify(Some("text/html; charset=utf-8")), ContentKind::Html);
        assert_eq!(ContentKind::classify(Some("TEXT/PLAIN")), ContentKind::PlainText);
        assert_eq!(
            ContentKind::classify(Some("image/png")),
            ContentKind::Image("image/png".into())
        );
        assert_eq!(
            ContentKind::classify(Some("image/svg+xml")),
            ContentKind::Image("image/svg+xml".into())
        );
        assert_eq!(ContentKind::classify(Some("application/json")), ContentKind::Binary);
        assert_eq!(ContentKind::classify(Some("")), ContentKind::Binary);
        assert_eq!(ContentKind::classify(None), ContentKind::Binary);
    }

    #[test]
    fn test_render_negotiate() {
        let cases = [
            (Some("text/html"), HTML_UTF8),
            (Some("text/plain"), PLAIN_UTF8),
            (Some("image/jpeg"), "image/jpeg"),
            (Some("video/mp4"), OCTET_STREAM),
            (None, OCTET_STREAM),
        ];

        for (content_type, expected) in cases {
            let content = FetchedContent::new(&b"body"[..], content_type.map(str::to_string));
            let response = render(content, RenderMode::Negotiate);
            assert_eq!(response.status(), StatusCode::OK);
            assert_eq!(content_type_of(&response), expected, "for {:?}", content_type);
        }
    }

    #[test]
    fn test_render_always_html() {
        let content = FetchedContent::new(&b"\x89PNG"[..], Some("image/png".into()));
        let response = render(content, RenderMode::Html);
        assert_eq!(content_type_of(&response), HTML_UTF8);
    }

    #[test]
    fn test_render_mode_parse() {
        assert_eq!("negotiate".parse::<RenderMode>().unwrap(), RenderMode::Negotiate);
        assert_eq!(" HTML ".parse::<RenderMode>().unwrap(), RenderMode::Html);
        assert!("always".parse::<RenderMode>().is_err());
        assert_eq!(RenderMode::Html.to_string(), "html");
    }
}
