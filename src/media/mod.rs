//! Media module for post identification and stream selection.

pub mod manifest;
pub mod post_id;
pub mod selector;

pub use manifest::{
    locate, AudioRepresentation, ManifestTree, ManifestUrl, RepresentationSet,
    VideoRepresentation,
};
pub use post_id::PostReference;
pub use selector::{select_best, SelectedAudio, SelectedStreams, SelectedVideo};
