//! `unduh tiktok|facebook|resolve <url>` – resolve a single URL.

use anyhow::Result;
use unduh_core::config::UnduhConfig;
use unduh_core::orchestrator::Orchestrator;
use unduh_core::platform::Platform;

use crate::cli::render;

/// Resolves `url` for `platform`, or for the platform detected from its domain.
pub async fn run_resolve(
    cfg: &UnduhConfig,
    platform: Option<Platform>,
    url: &str,
    json: bool,
) -> Result<()> {
    let platform = match platform.or_else(|| Platform::detect(url)) {
        Some(p) => p,
        None => anyhow::bail!(
            "unsupported URL (expected a TikTok or Facebook link): {}",
            url.trim()
        ),
    };

    let orchestrator = Orchestrator::from_config(cfg);
    tracing::info!("resolving {} url={}", platform, url.trim());
    match orchestrator.resolve(platform, url).await {
        Ok(result) => {
            if json {
                let value = render::json_ok(&result);
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print!("{}", render::text(&result));
            }
            Ok(())
        }
        Err(err) => {
            if json {
                let value = render::json_err(platform, &err);
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            Err(anyhow::anyhow!(err.message))
        }
    }
}
