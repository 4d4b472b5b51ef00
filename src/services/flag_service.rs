use std::path::PathBuf;
use tracing::{debug, warn};

use crate::config::AppState;
use crate::utils::image::save_thumbnail;

/// File-system friendly form of a country name.
pub fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        if ch.is_alphanumeric() {
            out.extend(ch.to_lowercase());
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}

pub fn flag_path(state: &AppState, name: &str) -> PathBuf {
    state.flag_cache_dir.join(format!("{}.png", slug(name)))
}

/// Downloads the flag at `url` and stores a thumbnail of it under the cache dir.
pub async fn cache_flag(state: &AppState, name: &str, url: &str) -> Option<PathBuf> {
    if url.is_empty() {
        return None;
    }
    let resp = match state.http.get(url).send().await {
        Ok(r) if r.status().is_success() => r,
        Ok(r) => {
            warn!(name, status = %r.status(), "flag download refused");
            return None;
        }
        Err(e) => {
            warn!(name, "flag download failed: {}", e);
            return None;
        }
    };
    let bytes = match resp.bytes().await {
        Ok(b) => b.to_vec(),
        Err(e) => {
            warn!(name, "flag body unreadable: {}", e);
            return None;
        }
    };

    let path = flag_path(state, name);
    if let Err(e) = save_thumbnail(bytes, &path).await {
        warn!(name, "flag thumbnail failed: {}", e);
        return None;
    }
    debug!(name, path = %path.display(), "flag cached");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs() {
        assert_eq!(slug("United Kingdom"), "united-kingdom");
        assert_eq!(slug("Côte d'Ivoire"), "côte-d-ivoire");
        assert_eq!(slug("  Korea, Republic of "), "korea-republic-of");
        assert_eq!(slug("../etc/passwd"), "etc-passwd");
    }
}
