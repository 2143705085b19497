//! Result model shared by the resolvers, the orchestrator and the CLI.
//!
//! All values are built fresh per resolution and never mutated afterwards.

use serde::Serialize;

/// A single TikTok video with its soundtrack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoResult {
    pub author_handle: String,
    pub description: String,
    pub video_link: String,
    pub audio_link: String,
}

/// A TikTok photo slideshow. `image_links` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlideshowResult {
    pub author_handle: String,
    pub description: String,
    pub image_links: Vec<String>,
    pub audio_link: String,
}

/// Outcome of a TikTok resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TikTokMedia {
    Video(VideoResult),
    Slideshow(SlideshowResult),
}

/// One downloadable rendition, labelled with whatever quality text upstream gave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityLink {
    pub quality_label: String,
    pub link: String,
}

/// Ordered, non-empty list of links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkListResult {
    links: Vec<QualityLink>,
}

impl LinkListResult {
    /// Returns `None` for an empty list: zero links is a failure, not a result.
    pub fn new(links: Vec<QualityLink>) -> Option<Self> {
        if links.is_empty() {
            None
        } else {
            Some(Self { links })
        }
    }

    pub fn links(&self) -> &[QualityLink] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Always false for a constructed list.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Successful outcome of [`crate::orchestrator::Orchestrator::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "platform", content = "result", rename_all = "lowercase")]
pub enum MediaResult {
    TikTok(TikTokMedia),
    Facebook(LinkListResult),
}
