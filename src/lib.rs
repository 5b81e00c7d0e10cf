//! Reddit Video Downloader - download v.redd.it videos from Reddit posts.
//!
//! A post link is resolved into a playable file in a few steps:
//!
//! - Extract the post ID from the comments link
//! - Fetch the post metadata and check that it is a hosted video
//! - Locate and parse the DASH manifest
//! - Select the largest video representation and the audio, if any
//! - Download both streams and mux them with ffmpeg
//!
//! # Example
//!
//! ```no_run
//! use reddit_video_downloader::{
//!     Config, Console, DownloadRequest, Downloader, FfmpegMuxer, RedditApi,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let console = Console::new(false);
//!     let api = RedditApi::new(&config.http)?;
//!     let muxer = FfmpegMuxer::new(config.ffmpeg.clone());
//!
//!     let request = DownloadRequest {
//!         url: "https://www.reddit.com/r/videos/comments/abc123/title/".into(),
//!         outfile: None,
//!     };
//!     let outcome = Downloader::new(&api, &muxer, &config, &console)
//!         .run(&request)
//!         .await?;
//!     println!("Saved {}", outcome.output.display());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::{PostMetadata, RedditApi};
pub use config::{Config, OverwritePolicy};
pub use download::{DownloadOutcome, DownloadRequest, Downloader, FfmpegMuxer, Muxer};
pub use error::{Error, Result};
pub use media::{ManifestTree, ManifestUrl, PostReference, SelectedStreams};
pub use output::Console;
