//! Streaming media download to a local file.

use std::path::Path;

use bytes::Bytes;
use futures::stream::{Stream, StreamExt};
use indicatif::ProgressBar;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::api::RedditApi;
use crate::error::{Error, Result};
use crate::output::Console;

/// Write buffer size.
const CHUNK_SIZE: usize = 4096;

/// Download `url` into `destination`, reporting progress on the console.
///
/// Returns the number of bytes written. No retries: a failed transfer fails
/// the run.
pub async fn fetch_to_file(
    api: &RedditApi,
    console: &Console,
    url: &str,
    destination: &Path,
    label: &str,
) -> Result<u64> {
    let response = api.open_stream(url).await?;

    let progress = console.download_bar(response.content_length, label);
    let result = write_stream(response.body, destination, &progress).await;
    progress.finish_and_clear();

    let written = result?;
    tracing::debug!(
        "Downloaded {} bytes of {} into {}",
        written,
        label,
        destination.display()
    );

    Ok(written)
}

/// Copy a chunk stream into a new file, skipping empty keep-alive chunks.
pub async fn write_stream<S>(body: S, destination: &Path, progress: &ProgressBar) -> Result<u64>
where
    S: Stream<Item = Result<Bytes>>,
{
    // Synchronous create: no pending open may outlive a cancelled download.
    let file = File::from_std(std::fs::File::create(destination)?);
    let mut writer = BufWriter::with_capacity(CHUNK_SIZE, file);
    let mut written: u64 = 0;

    futures::pin_mut!(body);
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        if chunk.is_empty() {
            continue;
        }

        writer.write_all(&chunk).await?;
        written += chunk.len() as u64;
        progress.set_position(written);
    }

    writer.flush().await?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_write_stream_skips_empty_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        let chunks = vec![
            Ok(Bytes::from_static(b"hello ")),
            Ok(Bytes::new()),
            Ok(Bytes::from_static(b"world")),
        ];

        let written = assert_ok!(
            write_stream(stream::iter(chunks), &path, &ProgressBar::hidden()).await
        );

        assert_eq!(written, 11);
        assert_eq!(std::fs::read(&path).unwrap(), b"hello world");
    }

    #[tokio::test]
    async fn test_progress_tracks_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        let progress = ProgressBar::hidden();
        let chunks = vec![Ok(Bytes::from(vec![0u8; 5000])), Ok(Bytes::from(vec![1u8; 10]))];

        let written = write_stream(stream::iter(chunks), &path, &progress)
            .await
            .unwrap();

        assert_eq!(written, 5010);
        assert_eq!(progress.position(), 5010);
    }

    #[tokio::test]
    async fn test_error_mid_stream_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        let chunks = vec![
            Ok(Bytes::from_static(b"partial")),
            Err(Error::Download("connection reset".into())),
            Ok(Bytes::from_static(b"never written")),
        ];

        let result = write_stream(stream::iter(chunks), &path, &ProgressBar::hidden()).await;
        assert!(matches!(assert_err!(result), Error::Download(_)));
    }

    #[tokio::test]
    async fn test_unwritable_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.bin");
        let chunks = vec![Ok(Bytes::from_static(b"x"))];

        let result = write_stream(stream::iter(chunks), &path, &ProgressBar::hidden()).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
