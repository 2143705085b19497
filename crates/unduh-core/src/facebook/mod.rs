//! Facebook resolver backed by getmyfb.
//!
//! The upstream answers with an HTML fragment rather than JSON; extraction is
//! delegated to a [`LinkListSource`].

mod scrape;

pub use scrape::{HtmlLinkSource, LinkListSource, RESULT_ROW_SELECTOR};

use std::sync::Arc;

use crate::config::FacebookConfig;
use crate::error::ResolveError;
use crate::http::{FormRequest, Transport};
use crate::model::LinkListResult;
use crate::platform::MediaUrl;

const CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

#[derive(Clone)]
pub struct FacebookResolver {
    transport: Arc<dyn Transport>,
    source: Arc<dyn LinkListSource>,
    cfg: FacebookConfig,
}

impl FacebookResolver {
    /// Resolver scraping replies with [`HtmlLinkSource`].
    pub fn new(transport: Arc<dyn Transport>, cfg: FacebookConfig) -> Self {
        Self::with_source(transport, Arc::new(HtmlLinkSource), cfg)
    }

    pub fn with_source(
        transport: Arc<dyn Transport>,
        source: Arc<dyn LinkListSource>,
        cfg: FacebookConfig,
    ) -> Self {
        Self {
            transport,
            source,
            cfg,
        }
    }

    pub fn request_for(&self, url: &MediaUrl) -> FormRequest {
        FormRequest::new(&self.cfg.process_url)
            .field("id", url.as_str())
            .field("locale", &self.cfg.locale)
            .header("content-type", CONTENT_TYPE)
            .header("hx-request", "true")
    }

    pub fn resolve(&self, url: &MediaUrl) -> Result<LinkListResult, ResolveError> {
        let response = self.transport.post_form(&self.request_for(url))?;
        if !response.is_success() {
            return Err(ResolveError::HttpStatus {
                code: response.status,
            });
        }
        let links = self.source.extract_links(&response.text());
        tracing::debug!("facebook: {} link(s) for {}", links.len(), url);
        LinkListResult::new(links).ok_or(ResolveError::NoLinks)
    }
}
