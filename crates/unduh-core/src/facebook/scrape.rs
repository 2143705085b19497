//! Link extraction from the getmyfb HTML fragment.

use scraper::{Html, Selector};

use crate::model::QualityLink;

/// CSS class of one result row in the upstream markup.
pub const RESULT_ROW_SELECTOR: &str = ".results-list-item";

/// Turns an upstream response body into quality-labelled links.
///
/// Any change to the upstream markup is an interface break that surfaces
/// here as an empty list.
pub trait LinkListSource: Send + Sync {
    fn extract_links(&self, body: &str) -> Vec<QualityLink>;
}

/// [`LinkListSource`] over real HTML, using the `scraper` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlLinkSource;

impl LinkListSource for HtmlLinkSource {
    fn extract_links(&self, body: &str) -> Vec<QualityLink> {
        let (Some(row_selector), Some(anchor_selector)) = (
            Selector::parse(RESULT_ROW_SELECTOR).ok(),
            Selector::parse("a").ok(),
        ) else {
            return Vec::new();
        };

        let document = Html::parse_document(body);
        let mut links = Vec::new();
        for row in document.select(&row_selector) {
            let text: String = row.text().collect();
            let quality = first_line(&text);
            let href = row
                .select(&anchor_selector)
                .next()
                .and_then(|a| a.value().attr("href"))
                .unwrap_or("");
            if quality.is_empty() || href.trim().is_empty() {
                tracing::trace!("skipping incomplete result row");
                continue;
            }
            links.push(QualityLink {
                quality_label: quality.to_string(),
                link: href.to_string(),
            });
        }
        links
    }
}

fn first_line(text: &str) -> &str {
    text.trim().lines().next().unwrap_or("").trim()
}
