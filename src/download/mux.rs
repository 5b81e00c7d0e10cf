//! Muxing the downloaded streams with ffmpeg.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::FfmpegConfig;
use crate::error::{Error, Result};

/// Inputs and output of one mux.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuxJob {
    pub video: PathBuf,
    pub audio: Option<PathBuf>,
    pub output: PathBuf,
}

/// Combines the downloaded elementary streams into the output container.
#[async_trait]
pub trait Muxer: Send + Sync {
    async fn mux(&self, job: &MuxJob) -> Result<()>;
}

/// Runs ffmpeg with an argument list; nothing goes through a shell.
#[derive(Debug, Clone)]
pub struct FfmpegMuxer {
    config: FfmpegConfig,
}

impl FfmpegMuxer {
    pub fn new(config: FfmpegConfig) -> Self {
        Self { config }
    }

    /// Arguments for a job: copy the video codec, re-encode audio if present.
    pub fn build_args(&self, job: &MuxJob) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-i".into(), job.video.clone().into()];

        if let Some(audio) = &job.audio {
            args.push("-i".into());
            args.push(audio.clone().into());
            args.push("-c:a".into());
            args.push(self.config.audio_codec.clone().into());
        }

        args.extend(
            [
                "-c:v",
                "copy",
                "-strict",
                "experimental",
                "-metadata",
            ]
            .map(OsString::from),
        );
        args.push(format!("comment={}", self.config.comment).into());
        args.extend(["-y", "-hide_banner", "-loglevel"].map(OsString::from));
        args.push(self.config.loglevel.clone().into());
        args.extend(
            self.config
                .extra_arguments
                .split_whitespace()
                .map(OsString::from),
        );
        args.push(job.output.clone().into());

        args
    }
}

#[async_trait]
impl Muxer for FfmpegMuxer {
    async fn mux(&self, job: &MuxJob) -> Result<()> {
        let args = self.build_args(job);
        tracing::debug!("Running {} {:?}", self.config.executable, args);

        let status = Command::new(&self.config.executable)
            .args(&args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::FFmpegNotFound(self.config.executable.clone())
                } else {
                    Error::FFmpeg(format!("Failed to run ffmpeg: {}", e))
                }
            })?;

        if !status.success() {
            if self.config.check_status {
                return Err(Error::FFmpeg(format!(
                    "ffmpeg exited with status: {}",
                    status
                )));
            }
            tracing::warn!("ffmpeg exited with status: {} (ignored)", status);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_of(muxer: &FfmpegMuxer, job: &MuxJob) -> Vec<String> {
        muxer
            .build_args(job)
            .into_iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    fn job(audio: bool) -> MuxJob {
        MuxJob {
            video: PathBuf::from("/tmp/rvd-video"),
            audio: audio.then(|| PathBuf::from("/tmp/rvd-audio")),
            output: PathBuf::from("downloaded/My clip; rm -rf ~.mp4"),
        }
    }

    #[test]
    fn test_args_with_audio() {
        let muxer = FfmpegMuxer::new(FfmpegConfig::default());
        let args = args_of(&muxer, &job(true));

        assert_eq!(
            args,
            vec![
                "-i",
                "/tmp/rvd-video",
                "-i",
                "/tmp/rvd-audio",
                "-c:a",
                "aac",
                "-c:v",
                "copy",
                "-strict",
                "experimental",
                "-metadata",
                "comment=Downloaded with Reddit Downloader V2",
                "-y",
                "-hide_banner",
                "-loglevel",
                "fatal",
                "downloaded/My clip; rm -rf ~.mp4",
            ]
        );
    }

    #[test]
    fn test_args_without_audio() {
        let muxer = FfmpegMuxer::new(FfmpegConfig::default());
        let args = args_of(&muxer, &job(false));

        assert_eq!(args.iter().filter(|a| *a == "-i").count(), 1);
        assert!(!args.contains(&"-c:a".to_string()));
        assert_eq!(args[..4], ["-i", "/tmp/rvd-video", "-c:v", "copy"]);
    }

    #[test]
    fn test_extra_arguments_and_loglevel() {
        let config = FfmpegConfig {
            loglevel: "error".to_string(),
            extra_arguments: "  -preset fast   -movflags +faststart ".to_string(),
            ..FfmpegConfig::default()
        };
        let muxer = FfmpegMuxer::new(config);
        let args = args_of(&muxer, &job(false));

        let tail = &args[args.len() - 6..];
        assert_eq!(
            tail,
            [
                "error",
                "-preset",
                "fast",
                "-movflags",
                "+faststart",
                "downloaded/My clip; rm -rf ~.mp4"
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_executable() {
        let config = FfmpegConfig {
            executable: "definitely-not-an-ffmpeg-binary".to_string(),
            ..FfmpegConfig::default()
        };
        let result = FfmpegMuxer::new(config).mux(&job(false)).await;
        assert!(matches!(result, Err(Error::FFmpegNotFound(_))));
    }

    #[tokio::test]
    async fn test_failed_exit_status_is_an_error() {
        let config = FfmpegConfig {
            executable: "false".to_string(),
            ..FfmpegConfig::default()
        };
        let result = FfmpegMuxer::new(config).mux(&job(true)).await;
        assert!(matches!(result, Err(Error::FFmpeg(_))));
    }

    #[tokio::test]
    async fn test_failed_exit_status_ignored_when_unchecked() {
        let config = FfmpegConfig {
            executable: "false".to_string(),
            check_status: false,
            ..FfmpegConfig::default()
        };
        let result = FfmpegMuxer::new(config).mux(&job(true)).await;
        assert!(result.is_ok());
    }
}
