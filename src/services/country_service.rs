use reqwest::Url;
use tracing::{debug, info};

use crate::config::AppState;
use crate::models::country::{Country, Currency, MISSING};
use crate::services::fact_service::fetch_fact;
use crate::services::normalize::{alpha2_for, normalize_country_name};
use crate::types::external::RcCountry;
use crate::utils::error::ApiError;

/// Looks up `input` and shapes the best candidate into a [`Country`].
/// `Ok(None)` means the country could not be found.
pub async fn fetch_country(state: &AppState, input: &str) -> Result<Option<Country>, ApiError> {
    let normalized = normalize_country_name(input);
    let query = normalized.trim();
    if query.is_empty() {
        return Ok(None);
    }

    let mut candidates = request_candidates(state, &["name", query]).await?;
    if candidates.is_none() {
        // ISO short names like "Korea, Republic of" are not always searchable by name
        if let Some(code) = alpha2_for(query) {
            debug!(query, code, "name lookup missed, retrying by code");
            candidates = request_candidates(state, &["alpha", code]).await?;
        }
    }
    let Some(candidates) = candidates else {
        info!(query, "country not found");
        return Ok(None);
    };

    let Some(chosen) = select_candidate(&candidates, query) else {
        return Ok(None);
    };

    let display_name = display_name(chosen, query);
    let fact = fetch_fact(state, &display_name).await;
    Ok(Some(shape(chosen, display_name, fact)))
}

async fn request_candidates(
    state: &AppState,
    segments: &[&str],
) -> Result<Option<Vec<RcCountry>>, ApiError> {
    let mut url = Url::parse(&state.endpoints.countries)
        .map_err(|e| ApiError::Internal(format!("bad COUNTRIES_URL: {}", e)))?;
    url.path_segments_mut()
        .map_err(|_| ApiError::Internal("COUNTRIES_URL cannot be a base".into()))?
        .pop_if_empty()
        .extend(segments);

    let resp = state
        .http
        .get(url)
        .send()
        .await
        .map_err(|e| ApiError::External(format!("Could not fetch data from restcountries: {}", e)))?;

    if !resp.status().is_success() {
        debug!(status = %resp.status(), "restcountries returned no match");
        return Ok(None);
    }

    let list: Vec<RcCountry> = resp
        .json()
        .await
        .map_err(|e| ApiError::External(format!("Could not parse countries: {}", e)))?;
    Ok((!list.is_empty()).then_some(list))
}

/// Prefers a candidate whose common/official name or alt spelling equals the
/// query, else the first one.
pub fn select_candidate<'a>(candidates: &'a [RcCountry], query: &str) -> Option<&'a RcCountry> {
    let q = query.to_lowercase();
    candidates
        .iter()
        .find(|c| {
            c.name.common.to_lowercase() == q
                || c.name.official.to_lowercase() == q
                || c.alt_spellings.iter().any(|s| s.to_lowercase() == q)
        })
        .or_else(|| candidates.first())
}

fn display_name(c: &RcCountry, query: &str) -> String {
    let common = c.name.common.trim();
    if common.is_empty() {
        query.to_string()
    } else {
        common.to_string()
    }
}

fn or_missing(v: Option<&String>) -> String {
    v.map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .unwrap_or(MISSING)
        .to_string()
}

fn first_currency(c: &RcCountry) -> Currency {
    let Some((code, details)) = c.currencies.iter().next() else {
        return Currency::missing();
    };
    let field = |key: &str| {
        details
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(MISSING)
            .to_string()
    };
    Currency {
        name: field("name"),
        code: code.clone(),
        symbol: field("symbol"),
    }
}

fn shape(c: &RcCountry, name: String, fun_fact: String) -> Country {
    Country {
        name,
        capital: or_missing(c.capital.first()),
        region: or_missing(c.region.as_ref()),
        population: c.population,
        area: c.area,
        currency: first_currency(c),
        timezone: or_missing(c.timezones.first()),
        flag_url: c.flags.png.clone().unwrap_or_default(),
        fun_fact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(v: serde_json::Value) -> Vec<RcCountry> {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn picks_exact_match_over_first() {
        let list = parse(json!([
            { "name": { "common": "United States Minor Outlying Islands", "official": "x" } },
            { "name": { "common": "United States", "official": "United States of America" },
              "altSpellings": ["US", "USA"] }
        ]));
        let chosen = select_candidate(&list, "United States").unwrap();
        assert_eq!(chosen.name.common, "United States");

        let by_alt = select_candidate(&list, "usa").unwrap();
        assert_eq!(by_alt.name.common, "United States");
    }

    #[test]
    fn falls_back_to_first_candidate() {
        let list = parse(json!([
            { "name": { "common": "Guinea", "official": "Republic of Guinea" } },
            { "name": { "common": "Guinea-Bissau", "official": "Republic of Guinea-Bissau" } }
        ]));
        assert_eq!(select_candidate(&list, "guin").unwrap().name.common, "Guinea");
        assert!(select_candidate(&[], "guin").is_none());
    }

    #[test]
    fn shapes_first_values_and_sentinels() {
        let list = parse(json!([{
            "name": { "common": "South Africa", "official": "Republic of South Africa" },
            "capital": ["Pretoria", "Bloemfontein", "Cape Town"],
            "population": 59308690,
            "currencies": { "ZAR": { "name": "South African rand", "symbol": "R" } },
            "timezones": ["UTC+02:00"],
            "flags": { "png": "https://flagcdn.com/w320/za.png" }
        }]));
        let c = shape(&list[0], display_name(&list[0], "South Africa"), "fact".into());
        assert_eq!(c.capital, "Pretoria");
        assert_eq!(c.region, MISSING);
        assert_eq!(c.area, None);
        assert_eq!(c.currency.to_string(), "South African rand (ZAR) R");
        assert_eq!(c.timezone, "UTC+02:00");
        assert_eq!(c.flag_url, "https://flagcdn.com/w320/za.png");
    }

    #[test]
    fn first_currency_follows_listing_order() {
        let list = parse(json!([{
            "name": { "common": "Panama" },
            "currencies": {
                "PAB": { "name": "Panamanian balboa", "symbol": "B/." },
                "USD": { "name": "United States dollar", "symbol": "$" }
            }
        }]));
        assert_eq!(first_currency(&list[0]).code, "PAB");

        let bare = parse(json!([{ "name": { "common": "Antarctica" } }]));
        assert_eq!(first_currency(&bare[0]), Currency::missing());
        assert_eq!(display_name(&bare[0], "x"), "Antarctica");
    }
}
