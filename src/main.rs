//! Reddit Video Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use reddit_video_downloader::{
    api::RedditApi,
    cli::Args,
    config::{validate_config, Config},
    download::{DownloadRequest, Downloader, FfmpegMuxer},
    error::{exit_codes, Error, Result},
    output::Console,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    let console = Console::new(args.silent);
    let result = match prepare(&args, &console) {
        Ok((config, request)) => {
            // Dropping the run on Ctrl-C releases its temporary files.
            tokio::select! {
                result = run(&config, &request) => result,
                _ = tokio::signal::ctrl_c() => Err(Error::Interrupted),
            }
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            console.error(&e.to_string());
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Load the configuration and work out what to download, prompting for
/// anything not given on the command line.
fn prepare(args: &Args, console: &Console) -> Result<(Config, DownloadRequest)> {
    let mut config = Config::load_or_default(&args.config)?;
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    let console = if config.output.quiet {
        Console::new(true)
    } else {
        console.clone()
    };
    console.banner();

    let request = match &args.post {
        Some(url) => DownloadRequest {
            url: url.clone(),
            outfile: args.outfile.clone(),
        },
        None => {
            let url = console.prompt("Reddit post URL: ")?;
            let outfile = console.prompt("Output file (leave empty for post title): ")?;
            DownloadRequest {
                url,
                outfile: Some(outfile).filter(|name| !name.is_empty()),
            }
        }
    };

    Ok((config, request))
}

async fn run(config: &Config, request: &DownloadRequest) -> Result<()> {
    let console = Console::new(config.output.quiet);
    let api = RedditApi::new(&config.http)?;
    let muxer = FfmpegMuxer::new(config.ffmpeg.clone());

    let outcome = Downloader::new(&api, &muxer, config, &console)
        .run(request)
        .await?;

    tracing::debug!(
        "Saved post {} ({} bytes downloaded) to {}",
        outcome.post_id,
        outcome.bytes_downloaded,
        outcome.output.display()
    );

    Ok(())
}
