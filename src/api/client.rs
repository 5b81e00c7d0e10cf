//! Reddit HTTP client.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{BoxStream, StreamExt};
use reqwest::{header, Client, StatusCode};

use crate::api::types::{Listing, PostMetadata};
use crate::config::HttpConfig;
use crate::error::{Error, Result};
use crate::media::{ManifestTree, ManifestUrl, PostReference};

/// Fullname prefix for link posts.
const POST_TYPE_PREFIX: &str = "t3_";

/// An open streaming response body.
pub struct StreamResponse {
    /// Value of the `content-length` header, if the server sent one.
    pub content_length: Option<u64>,
    pub body: BoxStream<'static, Result<Bytes>>,
}

/// GET-only transport. Any status other than 200 is an [`Error::HttpStatus`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch a whole response body as text.
    async fn get_text(&self, url: &str) -> Result<String>;

    /// Open a response body as a stream of chunks.
    async fn get_stream(&self, url: &str) -> Result<StreamResponse>;
}

/// reqwest-backed transport sending the identifying headers on every request.
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        let referer = header::HeaderValue::from_str(&config.referer).map_err(|e| {
            Error::ConfigValidation {
                field: "http.referer".to_string(),
                message: e.to_string(),
            }
        })?;
        headers.insert(header::REFERER, referer);

        // Connect and per-read timeouts; a total timeout would cut off long streams.
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .connect_timeout(config.timeout())
            .read_timeout(config.timeout())
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status != StatusCode::OK {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.get(url).await?;
        Ok(response.text().await?)
    }

    async fn get_stream(&self, url: &str) -> Result<StreamResponse> {
        let response = self.get(url).await?;
        let content_length = response.content_length();
        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(Error::from))
            .boxed();

        Ok(StreamResponse {
            content_length,
            body,
        })
    }
}

/// Reddit API client: metadata lookup, manifest retrieval and media streams.
#[derive(Clone)]
pub struct RedditApi {
    transport: Arc<dyn Transport>,
    metadata_base: String,
}

impl RedditApi {
    /// Create a client talking to the network.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let transport = HttpClient::new(config)?;
        Ok(Self::with_transport(
            Arc::new(transport),
            config.metadata_base.clone(),
        ))
    }

    /// Create a client over an arbitrary transport.
    pub fn with_transport(transport: Arc<dyn Transport>, metadata_base: String) -> Self {
        Self {
            transport,
            metadata_base,
        }
    }

    /// Metadata endpoint URL for a post.
    pub fn metadata_url(&self, post: &PostReference) -> String {
        format!("{}{}{}", self.metadata_base, POST_TYPE_PREFIX, post)
    }

    /// Fetch and decode the metadata of a post. No retries.
    pub async fn get_post_metadata(&self, post: &PostReference) -> Result<PostMetadata> {
        let url = self.metadata_url(post);
        let text = self.transport.get_text(&url).await?;
        tracing::debug!("Metadata response length: {} bytes", text.len());

        let listing: Listing = serde_json::from_str(&text).map_err(|e| {
            Error::Decode(format!(
                "Failed to parse post metadata: {} - Response: {}",
                e,
                text.chars().take(500).collect::<String>()
            ))
        })?;

        PostMetadata::from_listing(listing)
    }

    /// Fetch and parse a DASH manifest.
    pub async fn get_manifest(&self, url: &ManifestUrl) -> Result<ManifestTree> {
        let text = self.transport.get_text(url.as_str()).await?;
        tracing::debug!("Manifest response length: {} bytes", text.len());

        ManifestTree::parse(url, &text)
    }

    /// Open a media stream for download.
    pub async fn open_stream(&self, url: &str) -> Result<StreamResponse> {
        self.transport.get_stream(url).await
    }
}
