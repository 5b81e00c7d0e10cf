//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Log levels accepted by ffmpeg's `-loglevel`.
const FFMPEG_LOGLEVELS: &[&str] = &[
    "quiet", "panic", "fatal", "error", "warning", "info", "verbose", "debug", "trace",
];

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_timeout(config.http.timeout_secs)?;
    validate_metadata_base(&config.http.metadata_base)?;
    validate_non_empty("http.hosting_domain", &config.http.hosting_domain)?;
    validate_non_empty("http.user_agent", &config.http.user_agent)?;
    validate_non_empty("ffmpeg.executable", &config.ffmpeg.executable)?;
    validate_non_empty("ffmpeg.audio_codec", &config.ffmpeg.audio_codec)?;
    validate_loglevel(&config.ffmpeg.loglevel)?;

    Ok(())
}

fn validate_timeout(timeout_secs: u64) -> Result<()> {
    if timeout_secs == 0 {
        return Err(Error::ConfigValidation {
            field: "http.timeout_secs".to_string(),
            message: "Timeout must be at least 1 second".to_string(),
        });
    }
    Ok(())
}

/// The metadata base must be an absolute http(s) URL.
pub fn validate_metadata_base(base: &str) -> Result<()> {
    let url = url::Url::parse(base)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "http.metadata_base".to_string(),
            message: format!("Unsupported URL scheme '{}'", url.scheme()),
        });
    }
    Ok(())
}

fn validate_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: "Value must not be empty".to_string(),
        });
    }
    Ok(())
}

/// Validate the ffmpeg log level.
pub fn validate_loglevel(level: &str) -> Result<()> {
    // ffmpeg also accepts numeric levels
    if level.parse::<i32>().is_ok() || FFMPEG_LOGLEVELS.contains(&level) {
        return Ok(());
    }

    Err(Error::ConfigValidation {
        field: "ffmpeg.loglevel".to_string(),
        message: format!(
            "Unknown log level '{}'. Expected one of: {}",
            level,
            FFMPEG_LOGLEVELS.join(", ")
        ),
    })
}
