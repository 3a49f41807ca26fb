use std::sync::Arc;

use scraper::{Html, Selector};
use url::Url;
use watch_core::{normalize_text, Classification};
use watch_logging::{watch_debug, watch_info};

use crate::{FetchError, Fetcher};

/// What makes an anchor a signup link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierRules {
    /// Substring an href must contain.
    pub path_marker: String,
    /// Keyword the normalized anchor text must contain.
    pub keyword: String,
    /// Origin that relative hrefs are resolved against.
    pub site_origin: String,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            path_marker: "/experiences/".to_string(),
            keyword: "inscribite".to_string(),
            site_origin: "https://www.nike.com.ar".to_string(),
        }
    }
}

/// Absolute URLs of every anchor matching `rules`, in document order.
pub fn find_signup_links(html: &str, rules: &ClassifierRules) -> Vec<String> {
    let document = Html::parse_document(html);
    let Some(anchors) = Selector::parse("a[href]").ok() else {
        return Vec::new();
    };
    let origin = Url::parse(&rules.site_origin).ok();
    let keyword = normalize_text(&rules.keyword);

    let mut links = Vec::new();
    for anchor in document.select(&anchors) {
        let Some(href) = anchor.value().attr("href").map(str::trim) else {
            continue;
        };
        if !href.contains(&rules.path_marker) {
            continue;
        }
        let text = normalize_text(&anchor.text().collect::<String>());
        if !text.contains(&keyword) {
            continue;
        }
        match resolve_url(href, origin.as_ref()) {
            Some(url) => links.push(url.into()),
            None => watch_debug!("Skipping unresolvable signup href {href:?}"),
        }
    }
    links
}

fn resolve_url(reference: &str, origin: Option<&Url>) -> Option<Url> {
    if let Ok(url) = Url::parse(reference) {
        return Some(url);
    }
    origin.and_then(|origin| origin.join(reference).ok())
}

/// Fetches the target page and decides its availability.
pub struct StateClassifier {
    fetcher: Arc<dyn Fetcher>,
    target_url: String,
    rules: ClassifierRules,
}

impl StateClassifier {
    pub fn new(fetcher: Arc<dyn Fetcher>, target_url: impl Into<String>, rules: ClassifierRules) -> Self {
        Self {
            fetcher,
            target_url: target_url.into(),
            rules,
        }
    }

    pub async fn classify(&self) -> Result<Classification, FetchError> {
        let output = self.fetcher.fetch(&self.target_url).await?;
        let links = find_signup_links(&output.text(), &self.rules);
        let classification = Classification::from_links(links);
        watch_info!(
            "Current state: {} ({} signup link(s), {} bytes from {})",
            classification.availability,
            classification.signup_links.len(),
            output.metadata.byte_len,
            output.metadata.final_url
        );
        Ok(classification)
    }
}
