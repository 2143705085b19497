//! Text and JSON rendering of resolution outcomes.

use serde_json::{json, Value};
use std::fmt::Write;
use unduh_core::error::{ErrorKind, UserFacingError};
use unduh_core::model::{MediaResult, TikTokMedia};
use unduh_core::platform::Platform;

/// Human-readable, one link per line.
pub fn text(result: &MediaResult) -> String {
    let mut out = String::new();
    match result {
        MediaResult::TikTok(TikTokMedia::Video(v)) => {
            let _ = writeln!(out, "TikTok video by {}", v.author_handle);
            if !v.description.is_empty() {
                let _ = writeln!(out, "  {}", v.description);
            }
            let _ = writeln!(out, "  video: {}", v.video_link);
            let _ = writeln!(out, "  audio: {}", v.audio_link);
        }
        MediaResult::TikTok(TikTokMedia::Slideshow(s)) => {
            let _ = writeln!(
                out,
                "TikTok slideshow by {} ({} images)",
                s.author_handle,
                s.image_links.len()
            );
            if !s.description.is_empty() {
                let _ = writeln!(out, "  {}", s.description);
            }
            for (i, link) in s.image_links.iter().enumerate() {
                let _ = writeln!(out, "  image {}: {}", i + 1, link);
            }
            let _ = writeln!(out, "  audio: {}", s.audio_link);
        }
        MediaResult::Facebook(list) => {
            let _ = writeln!(out, "Facebook video ({} links)", list.len());
            let width = list
                .links()
                .iter()
                .map(|l| l.quality_label.chars().count())
                .max()
                .unwrap_or(0);
            for l in list.links() {
                let _ = writeln!(out, "  {:<width$}  {}", l.quality_label, l.link, width = width);
            }
        }
    }
    out
}

pub fn json_ok(result: &MediaResult) -> Value {
    json!({ "ok": true, "media": result })
}

pub fn json_err(platform: Platform, err: &UserFacingError) -> Value {
    let kind = match err.kind {
        ErrorKind::Validation => "validation",
        ErrorKind::Network => "network",
        ErrorKind::UpstreamSemantic => "upstream",
    };
    json!({
        "ok": false,
        "platform": platform,
        "error": { "kind": kind, "message": err.message },
    })
}
