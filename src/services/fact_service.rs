use reqwest::Url;
use tracing::{debug, warn};

use crate::config::AppState;
use crate::types::external::WikiSummary;

pub const FACT_MAX_CHARS: usize = 300;
pub const NO_FACT: &str = "No fun facts available.";

pub async fn fetch_fact(state: &AppState, title: &str) -> String {
    let mut url = match Url::parse(&state.endpoints.facts) {
        Ok(u) => u,
        Err(e) => {
            warn!("bad FACTS_URL: {}", e);
            return NO_FACT.into();
        }
    };
    if let Ok(mut segs) = url.path_segments_mut() {
        segs.pop_if_empty().push(&title.replace(' ', "_"));
    }

    let resp = match state.http.get(url).send().await {
        Ok(r) if r.status().is_success() => r,
        Ok(r) => {
            debug!(title, status = %r.status(), "no summary page");
            return NO_FACT.into();
        }
        Err(e) => {
            warn!(title, "summary request failed: {}", e);
            return NO_FACT.into();
        }
    };

    match resp.json::<WikiSummary>().await {
        Ok(s) if s.kind != "not_found" => summarize(&s.extract),
        Ok(_) => NO_FACT.into(),
        Err(e) => {
            warn!(title, "could not parse summary: {}", e);
            NO_FACT.into()
        }
    }
}

fn summarize(extract: &str) -> String {
    let text = extract.trim();
    if text.is_empty() {
        return NO_FACT.into();
    }
    let cut: String = text.chars().take(FACT_MAX_CHARS).collect();
    format!("{cut}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundary() {
        let long = "é".repeat(400);
        let out = summarize(&long);
        assert_eq!(out.chars().count(), FACT_MAX_CHARS + 3);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn short_text_still_gets_ellipsis() {
        assert_eq!(summarize("Japan is an island country."), "Japan is an island country....");
    }

    #[test]
    fn empty_extract_has_placeholder() {
        assert_eq!(summarize("   "), NO_FACT);
    }
}
