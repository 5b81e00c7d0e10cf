//! Download module.
//!
//! This module provides:
//! - The post-to-file pipeline
//! - Streaming downloads with progress
//! - Scoped temporary files
//! - ffmpeg muxing

pub mod mux;
pub mod pipeline;
pub mod stream;
pub mod temp;

pub use mux::{FfmpegMuxer, MuxJob, Muxer};
pub use pipeline::{DownloadOutcome, DownloadRequest, Downloader};
pub use stream::fetch_to_file;
pub use temp::TempArtifact;
