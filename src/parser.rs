use serde::Deserialize;
use tracing::warn;

use crate::error::{FinderError, FinderResult};

/// One discussion thread returned by the search API, before scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Thread title as posted.
    pub title: String,
    /// Absolute URL of the thread.
    pub link: String,
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: ThreadData,
}

// title/url are optional so one incomplete child cannot fail the whole
// listing; such children are skipped in parse().
#[derive(Debug, Deserialize)]
struct ThreadData {
    title: Option<String>,
    url: Option<String>,
}

/// Parses a raw search API response body into candidates.
///
/// Expects the Reddit listing shape: `data.children[].data.{title,url}`.
/// Candidates come back in listing order. Children missing `title` or `url`
/// are skipped with a warning rather than failing the parse.
pub fn parse(raw: &str) -> FinderResult<Vec<Candidate>> {
    let listing: Listing = serde_json::from_str(raw)
        .map_err(|e| FinderError::ParseError(format!("Malformed search response: {}", e)))?;

    let candidates = listing
        .data
        .children
        .into_iter()
        .filter_map(|child| match (child.data.title, child.data.url) {
            (Some(title), Some(url)) => Some(Candidate { title, link: url }),
            (title, _) => {
                warn!(?title, "Skipping search result with missing title or url");
                None
            }
        })
        .collect();

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "kind": "Listing",
        "data": {
            "children": [
                {"kind": "t3", "data": {"title": "Monogatari Episode 5 Discussion", "url": "https://www.reddit.com/r/anime/comments/abc123/"}},
                {"kind": "t3", "data": {"title": "Monogatari Episode 4 Discussion", "url": "https://www.reddit.com/r/anime/comments/def456/"}}
            ]
        }
    }"#;

    #[test]
    fn test_parses_children_in_order() {
        let candidates = parse(SAMPLE).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].title, "Monogatari Episode 5 Discussion");
        assert_eq!(
            candidates[0].link,
            "https://www.reddit.com/r/anime/comments/abc123/"
        );
        assert_eq!(candidates[1].title, "Monogatari Episode 4 Discussion");
    }

    #[test]
    fn test_empty_children_gives_empty_list() {
        let candidates = parse(r#"{"data": {"children": []}}"#).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let result = parse("{not json");
        assert!(matches!(result, Err(FinderError::ParseError(_))));
    }

    #[test]
    fn test_missing_children_is_parse_error() {
        let result = parse(r#"{"data": {}}"#);
        assert!(matches!(result, Err(FinderError::ParseError(_))));
    }

    #[test]
    fn test_missing_data_is_parse_error() {
        let result = parse(r#"{"kind": "Listing"}"#);
        assert!(matches!(result, Err(FinderError::ParseError(_))));
    }

    #[test]
    fn test_child_without_url_is_skipped() {
        let raw = r#"{
            "data": {
                "children": [
                    {"data": {"title": "No link here"}},
                    {"data": {"title": "Complete", "url": "https://example.com/t/1"}}
                ]
            }
        }"#;
        let candidates = parse(raw).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].title, "Complete");
    }

    #[test]
    fn test_child_without_title_is_skipped() {
        let raw = r#"{
            "data": {
                "children": [
                    {"data": {"url": "https://example.com/t/1"}}
                ]
            }
        }"#;
        let candidates = parse(raw).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let first = parse(SAMPLE).unwrap();
        let second = parse(SAMPLE).unwrap();
        assert_eq!(first, second);
    }
}
