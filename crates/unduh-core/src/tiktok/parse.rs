//! tikwm JSON envelope and its mapping onto the result model.

use serde::Deserialize;

use crate::error::ResolveError;
use crate::model::{SlideshowResult, TikTokMedia, VideoResult};

#[derive(Debug, Deserialize)]
struct Envelope {
    code: i64,
    #[serde(default)]
    msg: String,
    /// Left untyped until `code` is checked: failure replies carry odd shapes here.
    #[serde(default)]
    data: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Author {
    #[serde(default)]
    pub nickname: Option<String>,
}

/// The subset of `data` the resolver reads.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct TikwmData {
    #[serde(default)]
    pub play: Option<String>,
    #[serde(default)]
    pub music: Option<String>,
    /// Upstream sometimes sends `null` for these.
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

/// Decodes the envelope and returns `data`, or the upstream failure.
pub(crate) fn decode(body: &[u8]) -> Result<TikwmData, ResolveError> {
    let envelope: Envelope =
        serde_json::from_slice(body).map_err(|e| ResolveError::Decode(e.to_string()))?;
    if envelope.code != 0 {
        return Err(ResolveError::Upstream {
            message: envelope.msg,
        });
    }
    let data = envelope
        .data
        .ok_or_else(|| ResolveError::Decode("missing data".to_string()))?;
    serde_json::from_value(data).map_err(|e| ResolveError::Decode(e.to_string()))
}

/// Prefix a host-relative path with `origin`, joining with exactly one `/`.
/// Absolute URLs pass through unchanged; an empty path stays empty.
pub(crate) fn qualify(origin: &str, path: &str) -> String {
    let path = path.trim();
    if path.is_empty() || path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TikwmData {
    fn author_handle(&mut self) -> String {
        self.author
            .take()
            .and_then(|a| a.nickname)
            .unwrap_or_default()
    }

    fn audio_link(&self, origin: &str) -> String {
        qualify(origin, self.music.as_deref().unwrap_or(""))
    }

    fn video_link(&self, origin: &str) -> Option<String> {
        non_empty(self.play.clone()).map(|p| qualify(origin, &p))
    }

    fn image_links(&self) -> Option<Vec<String>> {
        self.images.clone().filter(|images| !images.is_empty())
    }

    pub(crate) fn into_video(mut self, origin: &str) -> Result<VideoResult, ResolveError> {
        let video_link = self.video_link(origin).ok_or(ResolveError::NotVideo)?;
        Ok(VideoResult {
            audio_link: self.audio_link(origin),
            video_link,
            author_handle: self.author_handle(),
            description: self.title.unwrap_or_default(),
        })
    }

    pub(crate) fn into_slideshow(mut self, origin: &str) -> Result<SlideshowResult, ResolveError> {
        let image_links = self.image_links().ok_or(ResolveError::NotSlideshow)?;
        Ok(SlideshowResult {
            audio_link: self.audio_link(origin),
            image_links,
            author_handle: self.author_handle(),
            description: self.title.unwrap_or_default(),
        })
    }

    /// Video when `play` is present, otherwise slideshow when `images` is.
    pub(crate) fn into_media(self, origin: &str) -> Result<TikTokMedia, ResolveError> {
        if self.video_link(origin).is_some() {
            self.into_video(origin).map(TikTokMedia::Video)
        } else if self.image_links().is_some() {
            self.into_slideshow(origin).map(TikTokMedia::Slideshow)
        } else {
            Err(ResolveError::Unrecognized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://www.tikwm.com";

    #[test]
    fn qualify_joins_with_single_slash() {
        assert_eq!(qualify(ORIGIN, "/video.mp4"), "https://www.tikwm.com/video.mp4");
        assert_eq!(qualify("https://www.tikwm.com/", "/a.mp3"), "https://www.tikwm.com/a.mp3");
        assert_eq!(qualify(ORIGIN, "a.mp3"), "https://www.tikwm.com/a.mp3");
    }

    #[test]
    fn qualify_keeps_absolute_and_empty() {
        assert_eq!(
            qualify(ORIGIN, "https://sf16.tiktokcdn.com/m.mp3"),
            "https://sf16.tiktokcdn.com/m.mp3"
        );
        assert_eq!(qualify(ORIGIN, ""), "");
    }

    #[test]
    fn decode_nonzero_code_carries_msg() {
        let body = br#"{"code":-1,"msg":"Url parsing is failed! Please check url.","processed_time":0.01,"data":[]}"#;
        match decode(body) {
            Err(ResolveError::Upstream { message }) => {
                assert_eq!(message, "Url parsing is failed! Please check url.")
            }
            other => panic!("expected Upstream, got {:?}", other),
        }
    }

    #[test]
    fn decode_rejects_non_json() {
        assert!(matches!(
            decode(b"<html>rate limited</html>"),
            Err(ResolveError::Decode(_))
        ));
    }

    #[test]
    fn decode_missing_data() {
        assert!(matches!(
            decode(br#"{"code":0,"msg":"success"}"#),
            Err(ResolveError::Decode(_))
        ));
    }

    #[test]
    fn video_branch() {
        let data = decode(
            br#"{"code":0,"msg":"success","data":{"play":"/video.mp4","music":"/audio.mp3","author":{"nickname":"user"},"title":"desc"}}"#,
        )
        .unwrap();
        let media = data.into_media(ORIGIN).unwrap();
        assert_eq!(
            media,
            TikTokMedia::Video(VideoResult {
                author_handle: "user".to_string(),
                description: "desc".to_string(),
                video_link: "https://www.tikwm.com/video.mp4".to_string(),
                audio_link: "https://www.tikwm.com/audio.mp3".to_string(),
            })
        );
    }

    #[test]
    fn slideshow_branch_keeps_images_verbatim() {
        let data = decode(
            br#"{"code":0,"data":{"music":"/m.mp3","author":{"nickname":"cat"},"title":"pics","images":["https://p16.example.com/1.jpeg","https://p16.example.com/2.jpeg"]}}"#,
        )
        .unwrap();
        match data.into_media(ORIGIN).unwrap() {
            TikTokMedia::Slideshow(s) => {
                assert_eq!(
                    s.image_links,
                    vec![
                        "https://p16.example.com/1.jpeg".to_string(),
                        "https://p16.example.com/2.jpeg".to_string()
                    ]
                );
                assert_eq!(s.audio_link, "https://www.tikwm.com/m.mp3");
                assert_eq!(s.author_handle, "cat");
            }
            other => panic!("expected slideshow, got {:?}", other),
        }
    }

    #[test]
    fn both_fields_prefers_video() {
        let data = decode(
            br#"{"code":0,"data":{"play":"/v.mp4","music":"/m.mp3","author":{"nickname":"a"},"title":"t","images":["https://p.example.com/1.jpg"]}}"#,
        )
        .unwrap();
        assert!(matches!(data.into_media(ORIGIN), Ok(TikTokMedia::Video(_))));
    }

    #[test]
    fn null_author_and_title_still_resolve_video() {
        let data = decode(
            br#"{"code":0,"data":{"play":"/v.mp4","music":"/m.mp3","author":null,"title":null}}"#,
        )
        .unwrap();
        let video = data.into_video(ORIGIN).unwrap();
        assert_eq!(video.video_link, "https://www.tikwm.com/v.mp4");
        assert_eq!(video.author_handle, "");
        assert_eq!(video.description, "");
    }

    #[test]
    fn null_nickname_in_slideshow() {
        let data = decode(
            br#"{"code":0,"data":{"music":"/m.mp3","author":{"nickname":null},"images":["https://p.example.com/1.jpg"]}}"#,
        )
        .unwrap();
        let slides = data.into_slideshow(ORIGIN).unwrap();
        assert_eq!(slides.author_handle, "");
        assert_eq!(slides.image_links.len(), 1);
    }

    #[test]
    fn neither_field_is_unrecognized() {
        let data =
            decode(br#"{"code":0,"data":{"music":"/m.mp3","title":"t","images":[]}}"#).unwrap();
        assert!(matches!(data.into_media(ORIGIN), Err(ResolveError::Unrecognized)));
    }

    #[test]
    fn empty_play_is_not_video() {
        let data = decode(br#"{"code":0,"data":{"play":"","music":"/m.mp3"}}"#).unwrap();
        assert!(matches!(data.into_video(ORIGIN), Err(ResolveError::NotVideo)));
    }

    #[test]
    fn video_without_images_is_not_slideshow() {
        let data = decode(br#"{"code":0,"data":{"play":"/v.mp4","music":"/m.mp3"}}"#).unwrap();
        assert!(matches!(
            data.into_slideshow(ORIGIN),
            Err(ResolveError::NotSlideshow)
        ));
    }
}
