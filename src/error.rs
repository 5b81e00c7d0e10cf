//! Error types for the reddit-video-downloader application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Input errors
    #[error("No post ID found in '{0}' (is it a Reddit comments link?)")]
    PostIdNotFound(String),

    #[error("Unsupported media source: domain '{domain}', is_video={is_video}")]
    UnsupportedMedia { domain: String, is_video: bool },

    // API errors
    #[error("HTTP {status} while fetching {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Unexpected response format: {0}")]
    Decode(String),

    #[error("Missing field in post metadata: {0}")]
    FieldMissing(String),

    #[error("Malformed DASH manifest: {0}")]
    Xml(#[from] quick_xml::DeError),

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    #[error("Aborted: {0}")]
    Aborted(String),

    #[error("Interrupted by user")]
    Interrupted,

    // External tool errors
    #[error("FFmpeg error: {0}")]
    FFmpeg(String),

    #[error("FFmpeg not found ('{0}'). Please install ffmpeg and ensure it's in your PATH.")]
    FFmpegNotFound(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Aborted(_) | Error::Interrupted => exit_codes::ABORT,
            Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::TomlParse(_)
            | Error::UrlParse(_) => exit_codes::CONFIG_ERROR,
            Error::PostIdNotFound(_) | Error::UnsupportedMedia { .. } => {
                exit_codes::UNSUPPORTED_INPUT
            }
            Error::HttpStatus { .. }
            | Error::Decode(_)
            | Error::FieldMissing(_)
            | Error::Xml(_) => exit_codes::API_ERROR,
            Error::Download(_)
            | Error::Http(_)
            | Error::Io(_)
            | Error::FFmpeg(_)
            | Error::FFmpegNotFound(_) => exit_codes::DOWNLOAD_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ABORT: i32 = 1;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const UNSUPPORTED_INPUT: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_family() {
        assert_eq!(
            Error::PostIdNotFound("x".into()).exit_code(),
            exit_codes::UNSUPPORTED_INPUT
        );
        assert_eq!(
            Error::HttpStatus {
                status: 404,
                url: "u".into()
            }
            .exit_code(),
            exit_codes::API_ERROR
        );
        assert_eq!(
            Error::FFmpegNotFound("ffmpeg".into()).exit_code(),
            exit_codes::DOWNLOAD_ERROR
        );
        assert_eq!(Error::Interrupted.exit_code(), exit_codes::ABORT);
    }
}
