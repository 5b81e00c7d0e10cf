//! DASH manifest location and parsing.
//!
//! Reddit has shipped several manifest layouts over time: the audio set has
//! appeared both before and after the video set, and older manifests carry no
//! `contentType` at all. Sets are therefore labeled by what they declare
//! (`contentType`, then `mimeType`) and only then by the shape of their
//! representations. Position is used for a lone unlabeled set only; anything
//! else that cannot be labeled is rejected rather than guessed.

use serde::Deserialize;

use crate::api::PostMetadata;
use crate::error::{Error, Result};

/// Manifest URL with any query string removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestUrl(String);

impl ManifestUrl {
    /// Strip the query string (everything from the first `?`) and validate.
    pub fn new(raw: &str) -> Result<Self> {
        let stripped = raw.split('?').next().unwrap_or_default().trim();

        url::Url::parse(stripped)
            .map_err(|e| Error::Decode(format!("Invalid manifest URL '{}': {}", stripped, e)))?;

        Ok(Self(stripped.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The manifest URL with its trailing file name removed, ending in `/`.
    pub fn base_url(&self) -> &str {
        match self.0.rfind('/') {
            Some(pos) => &self.0[..=pos],
            None => &self.0,
        }
    }

    /// Resolve a segment reference against the manifest location.
    pub fn resolve(&self, media: &str) -> String {
        if media.starts_with("http://") || media.starts_with("https://") {
            return media.to_string();
        }
        format!("{}{}", self.base_url(), media)
    }
}

/// Find the manifest URL in the effective record of a post.
pub fn locate(meta: &PostMetadata) -> Result<ManifestUrl> {
    let dash_url = meta
        .effective()
        .secure_media
        .as_ref()
        .ok_or_else(|| Error::FieldMissing("secure_media".into()))?
        .reddit_video
        .as_ref()
        .ok_or_else(|| Error::FieldMissing("secure_media.reddit_video".into()))?
        .dash_url
        .as_deref()
        .ok_or_else(|| Error::FieldMissing("secure_media.reddit_video.dash_url".into()))?;

    ManifestUrl::new(dash_url)
}

/// One video encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRepresentation {
    pub id: Option<String>,
    pub width: u32,
    pub height: u32,
    /// Frames per second, rounded to an integer.
    pub frame_rate: u32,
    /// Segment reference relative to the manifest base URL.
    pub media: String,
}

impl VideoRepresentation {
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// One audio encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioRepresentation {
    pub id: Option<String>,
    pub sampling_rate: Option<u32>,
    pub bandwidth: Option<u64>,
    pub media: String,
}

/// A labeled group of representations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepresentationSet {
    Video(Vec<VideoRepresentation>),
    Audio(Vec<AudioRepresentation>),
}

/// The first period of a manifest, reduced to its audio and video sets.
#[derive(Debug, Clone)]
pub struct ManifestTree {
    pub url: ManifestUrl,
    pub sets: Vec<RepresentationSet>,
}

impl ManifestTree {
    /// Parse a manifest body fetched from `url`.
    pub fn parse(url: &ManifestUrl, body: &str) -> Result<Self> {
        let mpd: MpdXml = quick_xml::de::from_str(body)?;

        let period = mpd
            .periods
            .into_iter()
            .next()
            .ok_or_else(|| Error::Decode("manifest contains no Period".into()))?;

        let only_set = period.adaptation_sets.len() == 1;
        let mut sets = Vec::with_capacity(period.adaptation_sets.len());

        for (index, set) in period.adaptation_sets.iter().enumerate() {
            let label = match set.label() {
                SetLabel::Unlabeled if only_set => {
                    tracing::debug!("Treating lone unlabeled set as video");
                    SetLabel::Video
                }
                label => label,
            };

            match label {
                SetLabel::Video => sets.push(RepresentationSet::Video(set.video_representations()?)),
                SetLabel::Audio => sets.push(RepresentationSet::Audio(set.audio_representations()?)),
                SetLabel::Other => {
                    tracing::debug!("Skipping non audio/video set {}", index);
                }
                SetLabel::Unlabeled => {
                    return Err(Error::Decode(format!(
                        "cannot tell whether representation set {} carries audio or video",
                        index
                    )));
                }
            }
        }

        Ok(Self {
            url: url.clone(),
            sets,
        })
    }

    /// All video representations, in manifest order.
    pub fn video_representations(&self) -> Vec<&VideoRepresentation> {
        self.sets
            .iter()
            .filter_map(|set| match set {
                RepresentationSet::Video(reps) => Some(reps.iter()),
                RepresentationSet::Audio(_) => None,
            })
            .flatten()
            .collect()
    }

    /// All audio representations, in manifest order.
    pub fn audio_representations(&self) -> Vec<&AudioRepresentation> {
        self.sets
            .iter()
            .filter_map(|set| match set {
                RepresentationSet::Audio(reps) => Some(reps.iter()),
                RepresentationSet::Video(_) => None,
            })
            .flatten()
            .collect()
    }

    /// Audio is present iff some audio set has at least one representation.
    pub fn has_audio(&self) -> bool {
        !self.audio_representations().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetLabel {
    Video,
    Audio,
    /// Explicitly something else, e.g. subtitles.
    Other,
    Unlabeled,
}

/// Label from a `contentType` (`video`) or `mimeType` (`video/mp4`) value.
fn label_from_type(value: &str) -> SetLabel {
    let major = value.split('/').next().unwrap_or_default().trim();
    if major.eq_ignore_ascii_case("video") {
        SetLabel::Video
    } else if major.eq_ignore_ascii_case("audio") {
        SetLabel::Audio
    } else if major.is_empty() {
        SetLabel::Unlabeled
    } else {
        SetLabel::Other
    }
}

/// Parse `30`, `29.97` or `30000/1001` into whole frames per second.
fn parse_frame_rate(value: &str) -> Option<u32> {
    let value = value.trim();
    let rate = match value.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse().ok()?;
            let den: f64 = den.trim().parse().ok()?;
            if den == 0.0 {
                return None;
            }
            num / den
        }
        None => value.parse().ok()?,
    };

    if !rate.is_finite() || rate <= 0.0 {
        return None;
    }
    Some(rate.round() as u32)
}

#[derive(Debug, Deserialize)]
struct MpdXml {
    #[serde(rename = "Period", default)]
    periods: Vec<PeriodXml>,
}

#[derive(Debug, Deserialize)]
struct PeriodXml {
    #[serde(rename = "AdaptationSet", default)]
    adaptation_sets: Vec<AdaptationSetXml>,
}

#[derive(Debug, Deserialize)]
struct AdaptationSetXml {
    #[serde(rename = "@contentType")]
    content_type: Option<String>,
    #[serde(rename = "@mimeType")]
    mime_type: Option<String>,
    #[serde(rename = "@frameRate")]
    frame_rate: Option<String>,
    #[serde(rename = "Representation", default)]
    representations: Vec<RepresentationXml>,
}

#[derive(Debug, Deserialize)]
struct RepresentationXml {
    #[serde(rename = "@id")]
    id: Option<String>,
    #[serde(rename = "@mimeType")]
    mime_type: Option<String>,
    #[serde(rename = "@width")]
    width: Option<u32>,
    #[serde(rename = "@height")]
    height: Option<u32>,
    #[serde(rename = "@frameRate")]
    frame_rate: Option<String>,
    #[serde(rename = "@bandwidth")]
    bandwidth: Option<u64>,
    #[serde(rename = "@audioSamplingRate")]
    audio_sampling_rate: Option<String>,
    #[serde(rename = "BaseURL")]
    base_url: Option<String>,
}

impl AdaptationSetXml {
    fn label(&self) -> SetLabel {
        let declared = [
            self.content_type.as_deref(),
            self.mime_type.as_deref(),
            self.representations
                .first()
                .and_then(|rep| rep.mime_type.as_deref()),
        ];

        for value in declared.into_iter().flatten() {
            match label_from_type(value) {
                SetLabel::Unlabeled => continue,
                label => return label,
            }
        }

        if self
            .representations
            .iter()
            .any(|rep| rep.width.is_some() && rep.height.is_some())
        {
            SetLabel::Video
        } else if self
            .representations
            .iter()
            .any(|rep| rep.audio_sampling_rate.is_some())
        {
            SetLabel::Audio
        } else {
            SetLabel::Unlabeled
        }
    }

    fn video_representations(&self) -> Result<Vec<VideoRepresentation>> {
        self.representations
            .iter()
            .map(|rep| {
                let name = rep.id.as_deref().unwrap_or("?");
                let missing = |what: &str| {
                    Error::Decode(format!("video representation {} has no {}", name, what))
                };

                let frame_rate = rep
                    .frame_rate
                    .as_deref()
                    .or(self.frame_rate.as_deref())
                    .ok_or_else(|| missing("frameRate"))?;

                Ok(VideoRepresentation {
                    id: rep.id.clone(),
                    width: rep.width.ok_or_else(|| missing("width"))?,
                    height: rep.height.ok_or_else(|| missing("height"))?,
                    frame_rate: parse_frame_rate(frame_rate).ok_or_else(|| {
                        Error::Decode(format!("invalid frame rate '{}'", frame_rate))
                    })?,
                    media: rep.media().ok_or_else(|| missing("BaseURL"))?,
                })
            })
            .collect()
    }

    fn audio_representations(&self) -> Result<Vec<AudioRepresentation>> {
        self.representations
            .iter()
            .map(|rep| {
                let media = rep.media().ok_or_else(|| {
                    Error::Decode(format!(
                        "audio representation {} has no BaseURL",
                        rep.id.as_deref().unwrap_or("?")
                    ))
                })?;

                Ok(AudioRepresentation {
                    id: rep.id.clone(),
                    sampling_rate: rep
                        .audio_sampling_rate
                        .as_deref()
                        .and_then(|rate| rate.trim().parse().ok()),
                    bandwidth: rep.bandwidth,
                    media,
                })
            })
            .collect()
    }
}

impl RepresentationXml {
    fn media(&self) -> Option<String> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|media| !media.is_empty())
            .map(str::to_string)
    }
}
