//! libcurl-backed [`Transport`].

use std::time::Duration;

use super::{FormRequest, HttpResponse, Transport, TransportError};
use crate::config::HttpConfig;

/// Blocking transport built on the curl crate. Cheap to share: every request
/// uses a fresh `Easy` handle.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    user_agent: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl CurlTransport {
    pub fn new(cfg: &HttpConfig) -> Self {
        Self {
            user_agent: cfg.user_agent.clone(),
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        }
    }
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::new(&HttpConfig::default())
    }
}

impl Transport for CurlTransport {
    fn post_form(&self, request: &FormRequest) -> Result<HttpResponse, TransportError> {
        let mut body: Vec<u8> = Vec::new();
        let payload = request.encoded_body();

        let mut easy = curl::easy::Easy::new();
        easy.url(&request.url)?;
        easy.post(true)?;
        easy.post_fields_copy(payload.as_bytes())?;
        easy.follow_location(true)?;
        easy.max_redirections(5)?;
        // Empty string: accept every encoding libcurl was built with.
        easy.accept_encoding("")?;
        easy.useragent(&self.user_agent)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let mut list = curl::easy::List::new();
        for (k, v) in &request.headers {
            if k.eq_ignore_ascii_case("user-agent") {
                easy.useragent(v.trim())?;
                continue;
            }
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!(
            "POST {} -> HTTP {} ({} bytes)",
            request.url,
            status,
            body.len()
        );
        Ok(HttpResponse { status, body })
    }
}
