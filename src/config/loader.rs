//! Configuration structures and loading logic.

use crate::config::policy::OverwritePolicy;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub ffmpeg: FfmpegConfig,
}

/// HTTP request settings shared by the metadata, manifest and stream fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Identifying user agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Referer header sent with every request.
    #[serde(default = "default_referer")]
    pub referer: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Metadata endpoint prefix; the `t3_<id>` fullname is appended.
    #[serde(default = "default_metadata_base")]
    pub metadata_base: String,

    /// The only media domain accepted as a downloadable video.
    #[serde(default = "default_hosting_domain")]
    pub hosting_domain: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            referer: default_referer(),
            timeout_secs: default_timeout_secs(),
            metadata_base: default_metadata_base(),
            hosting_domain: default_hosting_domain(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Output options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the finished videos are written to.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// What to do when the output file already exists.
    #[serde(default)]
    pub overwrite: OverwritePolicy,

    /// Suppress console output and progress bars.
    #[serde(default)]
    pub quiet: bool,

    /// Fetch the video and audio streams concurrently.
    #[serde(default = "default_true")]
    pub parallel_streams: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            overwrite: OverwritePolicy::default(),
            quiet: false,
            parallel_streams: true,
        }
    }
}

/// Settings for the ffmpeg mux step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FfmpegConfig {
    /// Path or name of the ffmpeg executable.
    #[serde(default = "default_executable")]
    pub executable: String,

    /// Value passed to `-loglevel`.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    /// Additional arguments, split on whitespace.
    #[serde(default)]
    pub extra_arguments: String,

    /// Comment written into the container metadata.
    #[serde(default = "default_comment")]
    pub comment: String,

    /// Codec the audio stream is re-encoded to.
    #[serde(default = "default_audio_codec")]
    pub audio_codec: String,

    /// Fail the run when ffmpeg exits with a non-zero status.
    #[serde(default = "default_true")]
    pub check_status: bool,
}

impl Default for FfmpegConfig {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            loglevel: default_loglevel(),
            extra_arguments: String::new(),
            comment: default_comment(),
            audio_codec: default_audio_codec(),
            check_status: true,
        }
    }
}

fn default_user_agent() -> String {
    "Reddit Video Downloader".to_string()
}

fn default_referer() -> String {
    "https://github.com/melvin2204/reddit-downloader".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_metadata_base() -> String {
    "https://api.reddit.com/api/info/?id=".to_string()
}

fn default_hosting_domain() -> String {
    "v.redd.it".to_string()
}

fn default_directory() -> PathBuf {
    PathBuf::from("downloaded")
}

fn default_executable() -> String {
    "ffmpeg".to_string()
}

fn default_loglevel() -> String {
    "fatal".to_string()
}

fn default_comment() -> String {
    "Downloaded with Reddit Downloader V2".to_string()
}

fn default_audio_codec() -> String {
    "aac".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
