//! Supported platforms and local input validation.
//!
//! Validation never touches the network: an input is rejected when it is
//! blank or contains none of the platform's domain markers.

use serde::Serialize;
use std::fmt;

use crate::error::ResolveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    TikTok,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::TikTok, Platform::Facebook];

    /// Substrings one of which must appear in a URL for this platform.
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            Platform::TikTok => &["tiktok.com"],
            Platform::Facebook => &["facebook.com", "fb.watch"],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Platform::TikTok => "TikTok",
            Platform::Facebook => "Facebook",
        }
    }

    pub fn matches(self, input: &str) -> bool {
        self.markers().iter().any(|m| input.contains(m))
    }

    /// First platform whose marker appears in the trimmed input.
    pub fn detect(input: &str) -> Option<Platform> {
        let input = input.trim();
        Platform::ALL.into_iter().find(|p| p.matches(input))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A trimmed user-supplied URL that carries a marker for its platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrl {
    platform: Platform,
    raw: String,
}

impl MediaUrl {
    pub fn parse(platform: Platform, input: &str) -> Result<MediaUrl, ResolveError> {
        let raw = input.trim();
        if raw.is_empty() || !platform.matches(raw) {
            return Err(ResolveError::InvalidInput { platform });
        }
        Ok(MediaUrl {
            platform,
            raw: raw.to_string(),
        })
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for MediaUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
