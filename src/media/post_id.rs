//! Post identifier extraction from Reddit links.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// `comments/<6 lowercase alphanumerics>/`. Anchoring on `comments/` keeps
/// six-character subreddit names from matching.
static POST_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"comments/([0-9a-z]{6})/").unwrap());

/// Identifier of a single post, e.g. `abc123`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostReference(String);

impl PostReference {
    /// Extract the post identifier from a comments link.
    ///
    /// Returns `None` when the link has no `comments/<id>/` segment.
    pub fn extract(url: &str) -> Option<Self> {
        POST_ID_PATTERN
            .captures(url)
            .and_then(|captures| captures.get(1))
            .map(|id| Self(id.as_str().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(url: &str) -> Option<String> {
        PostReference::extract(url).map(|id| id.as_str().to_string())
    }

    #[test]
    fn test_extract_from_comments_link() {
        assert_eq!(
            extract("https://www.reddit.com/r/videos/comments/abc123/some_title/").as_deref(),
            Some("abc123")
        );
        assert_eq!(
            extract("https://old.reddit.com/r/a/comments/9z8y7x/").as_deref(),
            Some("9z8y7x")
        );
        assert_eq!(extract("comments/000000/").as_deref(), Some("000000"));
    }

    #[test]
    fn test_extract_many_ids() {
        for id in ["aaaaaa", "zzzzzz", "a1b2c3", "123456", "q0w9e8"] {
            let url = format!("https://reddit.com/r/sub/comments/{}/title?utm=1", id);
            assert_eq!(extract(&url).as_deref(), Some(id), "url: {}", url);
        }
    }

    #[test]
    fn test_subreddit_name_not_selected() {
        // "videos" is six lowercase letters but not behind comments/
        let url = "https://www.reddit.com/r/videos/comments/k2x9ab/";
        assert_eq!(extract(url).as_deref(), Some("k2x9ab"));
    }

    #[test]
    fn test_first_match_wins() {
        let url = "https://reddit.com/comments/aaaaaa/x/comments/bbbbbb/";
        assert_eq!(extract(url).as_deref(), Some("aaaaaa"));
    }

    #[test]
    fn test_not_found() {
        assert_eq!(extract(""), None);
        assert_eq!(extract("https://v.redd.it/abc123"), None);
        assert_eq!(extract("https://www.reddit.com/r/videos/"), None);
        // missing trailing slash
        assert_eq!(extract("https://reddit.com/r/a/comments/abc123"), None);
        // uppercase is not part of the identifier alphabet
        assert_eq!(extract("https://reddit.com/r/a/comments/ABC123/"), None);
        // seven characters
        assert_eq!(extract("https://reddit.com/r/a/comments/abc1234/"), None);
        // five characters
        assert_eq!(extract("https://reddit.com/r/a/comments/abc12/"), None);
    }

    #[test]
    fn test_identifier_has_no_separators() {
        let id = PostReference::extract("https://reddit.com/comments/abcdef/").unwrap();
        assert_eq!(id.as_str().len(), 6);
        assert!(!id.as_str().contains('/'));
        assert_eq!(id.to_string(), "abcdef");
    }
}
