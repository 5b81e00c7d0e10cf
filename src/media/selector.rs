//! Representation selection.

use crate::error::{Error, Result};
use crate::media::manifest::{AudioRepresentation, ManifestTree, VideoRepresentation};

/// The video stream chosen for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedVideo {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub frame_rate: u32,
}

/// The audio stream chosen for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedAudio {
    pub url: String,
    pub sampling_rate: Option<u32>,
}

/// Streams chosen for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedStreams {
    pub video: SelectedVideo,
    pub audio: Option<SelectedAudio>,
}

impl SelectedStreams {
    /// Pick the largest video and the best audio representation of a manifest.
    pub fn from_manifest(tree: &ManifestTree) -> Result<Self> {
        let video_reps = tree.video_representations();
        let best = select_best(&video_reps)
            .ok_or_else(|| Error::Decode("manifest has no video representations".into()))?;

        tracing::debug!(
            "Selected video {}x{}@{} ({:?}) out of {} representations",
            best.width,
            best.height,
            best.frame_rate,
            best.id,
            video_reps.len()
        );

        let video = SelectedVideo {
            url: tree.url.resolve(&best.media),
            width: best.width,
            height: best.height,
            frame_rate: best.frame_rate,
        };

        let audio = select_audio(&tree.audio_representations()).map(|rep| SelectedAudio {
            url: tree.url.resolve(&rep.media),
            sampling_rate: rep.sampling_rate,
        });

        Ok(Self { video, audio })
    }

    pub fn has_audio(&self) -> bool {
        self.audio.is_some()
    }
}

/// Representation with the largest pixel area.
///
/// Only a strictly larger area replaces the current best, so among equal
/// areas the earliest representation in manifest order wins.
pub fn select_best<'a>(reps: &[&'a VideoRepresentation]) -> Option<&'a VideoRepresentation> {
    let (first, rest) = reps.split_first()?;
    let mut best = *first;

    for &candidate in rest {
        if candidate.area() > best.area() {
            best = candidate;
        }
    }

    Some(best)
}

/// Audio representation with the highest bandwidth; earliest wins ties.
pub fn select_audio<'a>(reps: &[&'a AudioRepresentation]) -> Option<&'a AudioRepresentation> {
    let (first, rest) = reps.split_first()?;
    let mut best = *first;

    for &candidate in rest {
        if candidate.bandwidth.unwrap_or(0) > best.bandwidth.unwrap_or(0) {
            best = candidate;
        }
    }

    Some(best)
}
