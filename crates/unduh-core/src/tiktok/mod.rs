//! TikTok resolver backed by the tikwm API.
//!
//! The upstream does not say up front whether a post is a video or a photo
//! slideshow, so both [`TikTokResolver::resolve_as_video`] and
//! [`TikTokResolver::resolve_as_slideshow`] issue the same request and branch
//! on the shape of the reply. The caller decides the order.

mod parse;

use std::sync::Arc;

use crate::config::TikTokConfig;
use crate::error::ResolveError;
use crate::http::{FormRequest, Transport};
use crate::model::{SlideshowResult, TikTokMedia, VideoResult};
use crate::platform::MediaUrl;

const ACCEPT: &str = "application/json, text/javascript, */*; q=0.01";
const CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";
const SEC_CH_UA: &str =
    "\"Chromium\";v=\"104\", \" Not A;Brand\";v=\"99\", \"Google Chrome\";v=\"104\"";

#[derive(Clone)]
pub struct TikTokResolver {
    transport: Arc<dyn Transport>,
    cfg: TikTokConfig,
}

impl TikTokResolver {
    pub fn new(transport: Arc<dyn Transport>, cfg: TikTokConfig) -> Self {
        Self { transport, cfg }
    }

    /// The form POST sent for `url`. Pagination and quality fields are fixed.
    pub fn request_for(&self, url: &MediaUrl) -> FormRequest {
        FormRequest::new(&self.cfg.api_url)
            .field("url", url.as_str())
            .field("count", "12")
            .field("cursor", "0")
            .field("web", "1")
            .field("hd", "1")
            .header("accept", ACCEPT)
            .header("content-type", CONTENT_TYPE)
            .header("sec-ch-ua", SEC_CH_UA)
    }

    fn fetch(&self, url: &MediaUrl) -> Result<parse::TikwmData, ResolveError> {
        let response = self.transport.post_form(&self.request_for(url))?;
        if !response.is_success() {
            return Err(ResolveError::HttpStatus {
                code: response.status,
            });
        }
        parse::decode(&response.body)
    }

    /// Succeeds only when the reply carries a playable video.
    pub fn resolve_as_video(&self, url: &MediaUrl) -> Result<VideoResult, ResolveError> {
        self.fetch(url)?.into_video(&self.cfg.origin)
    }

    /// Succeeds only when the reply carries a non-empty image set.
    pub fn resolve_as_slideshow(&self, url: &MediaUrl) -> Result<SlideshowResult, ResolveError> {
        self.fetch(url)?.into_slideshow(&self.cfg.origin)
    }

    /// Single request, classified as video first, then slideshow.
    pub fn resolve(&self, url: &MediaUrl) -> Result<TikTokMedia, ResolveError> {
        self.fetch(url)?.into_media(&self.cfg.origin)
    }
}
