//! Per-platform resolution: validate locally, then try each strategy of the
//! platform's plan in order and stop at the first success.
//!
//! Only the last failure is surfaced. For TikTok that means a video-path
//! error is dropped when the slideshow attempt also fails.

use std::sync::Arc;

use crate::config::UnduhConfig;
use crate::error::{ResolveError, UserFacingError};
use crate::facebook::FacebookResolver;
use crate::http::{CurlTransport, Transport};
use crate::model::{MediaResult, TikTokMedia};
use crate::platform::{MediaUrl, Platform};
use crate::tiktok::TikTokResolver;

/// One way of resolving a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    TikTokVideo,
    TikTokSlideshow,
    Facebook,
}

impl Strategy {
    /// Strategies tried for `platform`, in order. Video comes first because
    /// it is the common case.
    pub fn plan(platform: Platform) -> &'static [Strategy] {
        match platform {
            Platform::TikTok => &[Strategy::TikTokVideo, Strategy::TikTokSlideshow],
            Platform::Facebook => &[Strategy::Facebook],
        }
    }
}

#[derive(Clone)]
pub struct Orchestrator {
    tiktok: TikTokResolver,
    facebook: FacebookResolver,
}

impl Orchestrator {
    pub fn new(tiktok: TikTokResolver, facebook: FacebookResolver) -> Self {
        Self { tiktok, facebook }
    }

    /// Both resolvers sharing `transport`, endpoints from `cfg`.
    pub fn with_transport(transport: Arc<dyn Transport>, cfg: &UnduhConfig) -> Self {
        Self::new(
            TikTokResolver::new(Arc::clone(&transport), cfg.tiktok.clone()),
            FacebookResolver::new(transport, cfg.facebook.clone()),
        )
    }

    /// Production wiring over libcurl.
    pub fn from_config(cfg: &UnduhConfig) -> Self {
        Self::with_transport(Arc::new(CurlTransport::new(&cfg.http)), cfg)
    }

    fn run(&self, strategy: Strategy, url: &MediaUrl) -> Result<MediaResult, ResolveError> {
        match strategy {
            Strategy::TikTokVideo => self
                .tiktok
                .resolve_as_video(url)
                .map(|v| MediaResult::TikTok(TikTokMedia::Video(v))),
            Strategy::TikTokSlideshow => self
                .tiktok
                .resolve_as_slideshow(url)
                .map(|s| MediaResult::TikTok(TikTokMedia::Slideshow(s))),
            Strategy::Facebook => self.facebook.resolve(url).map(MediaResult::Facebook),
        }
    }

    /// Folds over the plan for `url`'s platform. Blocks on network I/O.
    pub fn run_plan(&self, url: &MediaUrl) -> Result<MediaResult, ResolveError> {
        let mut last_err = None;
        for &strategy in Strategy::plan(url.platform()) {
            match self.run(strategy, url) {
                Ok(result) => {
                    tracing::debug!("{:?} resolved {}", strategy, url);
                    return Ok(result);
                }
                Err(err) => {
                    tracing::debug!("{:?} failed for {}: {}", strategy, url, err);
                    last_err = Some(err);
                }
            }
        }
        Err(last_err.unwrap_or(ResolveError::Unrecognized))
    }

    /// Synchronous [`Orchestrator::resolve`], for callers without a runtime.
    pub fn resolve_blocking(
        &self,
        platform: Platform,
        input: &str,
    ) -> Result<MediaResult, UserFacingError> {
        let url = MediaUrl::parse(platform, input)
            .map_err(|e| UserFacingError::from_error(platform, &e))?;
        self.run_plan(&url).map_err(|e| user_facing(platform, &e))
    }

    /// Validates `input` for `platform` and resolves it.
    ///
    /// Invalid input is rejected before any request. The network work runs on
    /// the blocking pool; no cancellation reaches it once started.
    pub async fn resolve(
        &self,
        platform: Platform,
        input: &str,
    ) -> Result<MediaResult, UserFacingError> {
        let url = MediaUrl::parse(platform, input)
            .map_err(|e| UserFacingError::from_error(platform, &e))?;
        let this = self.clone();
        match tokio::task::spawn_blocking(move || this.run_plan(&url)).await {
            Ok(outcome) => outcome.map_err(|e| user_facing(platform, &e)),
            Err(join_err) => {
                tracing::warn!("{} resolution task failed: {}", platform, join_err);
                Err(UserFacingError::generic(platform))
            }
        }
    }
}

fn user_facing(platform: Platform, err: &ResolveError) -> UserFacingError {
    tracing::info!("{} resolution failed: {}", platform, err);
    UserFacingError::from_error(platform, err)
}
