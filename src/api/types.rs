//! API response type definitions.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Listing wrapper returned by `/api/info`.
#[derive(Debug, Deserialize)]
pub struct Listing {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<Thing>,
}

/// A single listing entry (`t3` post).
#[derive(Debug, Deserialize)]
pub struct Thing {
    pub data: PostRecord,
}

/// The fields of a post record this tool relies on.
#[derive(Debug, Clone, Deserialize)]
pub struct PostRecord {
    pub domain: String,
    #[serde(default)]
    pub is_video: bool,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub secure_media: Option<SecureMedia>,
    /// Present on cross-posts; the first entry is the original post.
    #[serde(default)]
    pub crosspost_parent_list: Option<Vec<PostRecord>>,
}

/// Media block of a post.
#[derive(Debug, Clone, Deserialize)]
pub struct SecureMedia {
    #[serde(default)]
    pub reddit_video: Option<RedditVideo>,
}

/// Hosted video details.
#[derive(Debug, Clone, Deserialize)]
pub struct RedditVideo {
    #[serde(default)]
    pub dash_url: Option<String>,
}

/// Decoded metadata for one post.
#[derive(Debug, Clone)]
pub struct PostMetadata {
    pub record: PostRecord,
}

impl PostMetadata {
    /// Take the first post out of a metadata listing.
    pub fn from_listing(listing: Listing) -> Result<Self> {
        let record = listing
            .data
            .children
            .into_iter()
            .next()
            .ok_or_else(|| Error::Decode("metadata listing contains no posts".into()))?
            .data;

        Ok(Self { record })
    }

    /// The record that carries the media: the cross-post parent if there is
    /// one, otherwise the post itself.
    pub fn effective(&self) -> &PostRecord {
        self.record
            .crosspost_parent_list
            .as_deref()
            .and_then(|parents| parents.first())
            .unwrap_or(&self.record)
    }

    /// Whether this is a cross-post of another post.
    pub fn is_crosspost(&self) -> bool {
        self.record
            .crosspost_parent_list
            .as_ref()
            .is_some_and(|parents| !parents.is_empty())
    }

    /// A post is supported iff its effective record is a video hosted on
    /// `hosting_domain`.
    pub fn is_supported(&self, hosting_domain: &str) -> bool {
        let effective = self.effective();
        effective.domain == hosting_domain && effective.is_video
    }

    /// Title of the post as submitted (not the cross-post parent's).
    pub fn title(&self) -> &str {
        &self.record.title
    }
}
