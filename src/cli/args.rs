//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, OverwritePolicy};

/// Reddit video downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "reddit-video-downloader",
    version,
    about = "Download v.redd.it media via the command line",
    long_about = "Downloads the best available video (and audio) of a Reddit post and muxes them with ffmpeg.\n\n\
                  Only v.redd.it videos are supported. Pass a Reddit comments link."
)]
pub struct Args {
    /// URL of the post to download. Prompted for when omitted.
    #[arg(short, long)]
    pub post: Option<String>,

    /// Name of the output file (leave empty for post title).
    #[arg(short, long)]
    pub outfile: Option<String>,

    /// Don't print any output to the terminal. (Won't overwrite file if it exists)
    #[arg(short, long)]
    pub silent: bool,

    /// Overwrite output file if it already exists.
    #[arg(short = 'O', long)]
    pub overwrite: bool,

    /// Add custom arguments to the ffmpeg command used to generate the video.
    #[arg(long = "ffmpeg-add-arguments", allow_hyphen_values = true)]
    pub ffmpeg_add_arguments: Option<String>,

    /// Log level for ffmpeg (defaults to fatal).
    #[arg(short = 'l', long = "ffmpeg-loglevel")]
    pub ffmpeg_loglevel: Option<String>,

    /// Path to the ffmpeg executable.
    #[arg(long = "ffmpeg", env = "RVD_FFMPEG")]
    pub ffmpeg: Option<String>,

    /// Directory the videos are saved in.
    #[arg(short = 'd', long = "directory")]
    pub directory: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Download video and audio one after the other.
    #[arg(long)]
    pub sequential: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(dir) = &self.directory {
            config.output.directory = dir.clone();
        }

        if let Some(extra) = &self.ffmpeg_add_arguments {
            config.ffmpeg.extra_arguments = extra.clone();
        }

        if let Some(level) = &self.ffmpeg_loglevel {
            config.ffmpeg.loglevel = level.clone();
        }

        if let Some(executable) = &self.ffmpeg {
            config.ffmpeg.executable = executable.clone();
        }

        // Boolean flags (only override if set to non-default)
        if self.silent {
            config.output.quiet = true;
        }

        if self.overwrite {
            config.output.overwrite = OverwritePolicy::Always;
        }

        if self.sequential {
            config.output.parallel_streams = false;
        }
    }
}
