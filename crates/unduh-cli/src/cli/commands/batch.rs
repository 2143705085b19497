//! `unduh batch [file]` – resolve many URLs, one per line.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use unduh_core::config::UnduhConfig;
use unduh_core::orchestrator::Orchestrator;
use unduh_core::platform::Platform;
use unduh_core::session::{ResolutionSession, SessionState};

use crate::cli::render;

/// Non-blank lines that are not `#` comments, trimmed.
pub(crate) fn input_urls(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut urls = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        urls.push(line.to_string());
    }
    Ok(urls)
}

pub async fn run_batch(cfg: &UnduhConfig, path: Option<&Path>, json: bool) -> Result<()> {
    let urls = match path {
        Some(p) => {
            let file = std::fs::File::open(p)
                .with_context(|| format!("open batch file: {}", p.display()))?;
            input_urls(BufReader::new(file))?
        }
        None => input_urls(io::stdin().lock())?,
    };

    let orchestrator = Orchestrator::from_config(cfg);
    let mut sessions: HashMap<Platform, ResolutionSession> = HashMap::new();
    let mut failed = 0usize;

    for url in &urls {
        let Some(platform) = Platform::detect(url) else {
            failed += 1;
            if json {
                println!("{}", serde_json::json!({ "url": url, "error": "unsupported URL" }));
            } else {
                println!("{url}\n  error: unsupported URL");
            }
            continue;
        };

        let session = sessions
            .entry(platform)
            .or_insert_with(|| ResolutionSession::new(platform));
        let ticket = session.begin();
        let outcome = orchestrator.resolve(platform, url).await;
        session.finish(ticket, outcome);

        match session.state() {
            SessionState::Success(result) => {
                if json {
                    let mut value = render::json_ok(result);
                    value["url"] = serde_json::Value::String(url.clone());
                    println!("{}", value);
                } else {
                    print!("{url}\n{}", render::text(result));
                }
            }
            SessionState::Failed(message) => {
                failed += 1;
                if json {
                    println!("{}", serde_json::json!({ "url": url, "error": message }));
                } else {
                    println!("{url}\n  error: {message}");
                }
            }
            SessionState::Idle | SessionState::Resolving => {}
        }
    }

    tracing::info!("batch finished: {} url(s), {} failed", urls.len(), failed);
    if failed > 0 {
        anyhow::bail!("{} of {} URL(s) failed", failed, urls.len());
    }
    Ok(())
}
