//! Reddit API module.
//!
//! This module provides:
//! - HTTP transport with the fixed header and timeout discipline
//! - Post metadata lookup
//! - API response types

pub mod client;
pub mod types;

pub use client::{HttpClient, RedditApi, StreamResponse, Transport};
pub use types::*;
