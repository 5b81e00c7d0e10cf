//! Resolve a post link into a muxed video file.

use std::path::{Path, PathBuf};

use crate::api::RedditApi;
use crate::config::Config;
use crate::download::mux::{MuxJob, Muxer};
use crate::download::stream::fetch_to_file;
use crate::download::temp::TempArtifact;
use crate::error::{Error, Result};
use crate::fs::{check_overwrite, ensure_dir, output_path, output_stem};
use crate::media::{locate, PostReference, SelectedStreams};
use crate::output::Console;

/// What the user asked for.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    /// Reddit comments link.
    pub url: String,
    /// Output file stem; the post title is used when absent.
    pub outfile: Option<String>,
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct DownloadOutcome {
    pub post_id: PostReference,
    pub title: String,
    pub output: PathBuf,
    pub streams: SelectedStreams,
    pub bytes_downloaded: u64,
}

/// Runs the whole pipeline for one post.
pub struct Downloader<'a> {
    api: &'a RedditApi,
    muxer: &'a dyn Muxer,
    config: &'a Config,
    console: &'a Console,
    temp_dir: PathBuf,
}

impl<'a> Downloader<'a> {
    pub fn new(
        api: &'a RedditApi,
        muxer: &'a dyn Muxer,
        config: &'a Config,
        console: &'a Console,
    ) -> Self {
        Self {
            api,
            muxer,
            config,
            console,
            temp_dir: std::env::temp_dir(),
        }
    }

    /// Put temporary stream files somewhere other than the system temp dir.
    pub fn with_temp_dir(mut self, temp_dir: PathBuf) -> Self {
        self.temp_dir = temp_dir;
        self
    }

    /// Download one post. Stops at the first failure.
    pub async fn run(&self, request: &DownloadRequest) -> Result<DownloadOutcome> {
        let post_id = PostReference::extract(&request.url)
            .ok_or_else(|| Error::PostIdNotFound(request.url.clone()))?;
        self.console.info(&format!("Found post ID: {}", post_id));

        let meta = self.api.get_post_metadata(&post_id).await?;

        if !meta.is_supported(&self.config.http.hosting_domain) {
            let effective = meta.effective();
            return Err(Error::UnsupportedMedia {
                domain: effective.domain.clone(),
                is_video: effective.is_video,
            });
        }
        if meta.is_crosspost() {
            tracing::debug!("Post {} is a cross-post, using the original", post_id);
        }

        let directory = &self.config.output.directory;
        let stem = output_stem(request.outfile.as_deref(), meta.title(), post_id.as_str());
        ensure_dir(directory)?;
        let output = output_path(directory, &stem);

        let policy = self
            .config
            .output
            .overwrite
            .effective(self.console.is_quiet());
        check_overwrite(&output, policy, |path| {
            self.console
                .confirm(&format!("{} already exists, overwrite?", path.display()))
        })?;

        self.console
            .info(&format!("Downloading \"{}\"", meta.title()));

        let manifest_url = locate(&meta)?;
        let tree = self.api.get_manifest(&manifest_url).await?;
        let streams = SelectedStreams::from_manifest(&tree)?;

        self.console.info(&format!(
            "Video: {}x{} @ {} fps{}",
            streams.video.width,
            streams.video.height,
            streams.video.frame_rate,
            match &streams.audio {
                Some(audio) => match audio.sampling_rate {
                    Some(rate) => format!(", audio: {} Hz", rate),
                    None => ", audio".to_string(),
                },
                None => ", no audio".to_string(),
            }
        ));

        // Dropped on every exit path below, which removes the files.
        let video_file = TempArtifact::in_dir(&self.temp_dir);
        let audio_file = streams
            .audio
            .as_ref()
            .map(|_| TempArtifact::in_dir(&self.temp_dir));

        let bytes_downloaded = self
            .fetch_streams(&streams, video_file.path(), audio_file.as_ref().map(|f| f.path()))
            .await?;

        if streams.has_audio() {
            self.console.info("Combining audio and video...");
        } else {
            self.console.info("Converting video...");
        }

        let job = MuxJob {
            video: video_file.path().to_path_buf(),
            audio: audio_file.as_ref().map(|f| f.path().to_path_buf()),
            output: output.clone(),
        };
        self.muxer.mux(&job).await?;

        self.console.success(&format!(
            "Done. You can find your video in the \"{}\" folder",
            directory.display()
        ));

        Ok(DownloadOutcome {
            post_id,
            title: meta.title().to_string(),
            output,
            streams,
            bytes_downloaded,
        })
    }

    /// Fetch the video and, if selected, the audio stream.
    async fn fetch_streams(
        &self,
        streams: &SelectedStreams,
        video_path: &Path,
        audio_path: Option<&Path>,
    ) -> Result<u64> {
        let video = fetch_to_file(
            self.api,
            self.console,
            &streams.video.url,
            video_path,
            "video",
        );

        let (Some(audio), Some(audio_path)) = (&streams.audio, audio_path) else {
            return video.await;
        };
        let audio = fetch_to_file(self.api, self.console, &audio.url, audio_path, "audio");

        if self.config.output.parallel_streams {
            let (video_bytes, audio_bytes) = tokio::try_join!(video, audio)?;
            Ok(video_bytes + audio_bytes)
        } else {
            let video_bytes = video.await?;
            let audio_bytes = audio.await?;
            Ok(video_bytes + audio_bytes)
        }
    }
}
