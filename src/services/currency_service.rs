use tracing::{error, warn};

use crate::config::AppState;
use crate::models::conversion::{ConversionTable, PIVOT_CURRENCY, TARGET_CURRENCIES};
use crate::types::external::ErConvert;

/// Converts one unit of `code` to USD, then that USD amount to each target.
/// `None` when the first leg fails; later legs are skipped individually.
pub async fn convert_currency(state: &AppState, code: &str) -> Option<ConversionTable> {
    let base = code.trim().to_ascii_uppercase();
    if base.len() != 3 || !base.chars().all(|c| c.is_ascii_alphabetic()) {
        warn!(code, "not a 3-letter currency code");
        return None;
    }

    let usd_amount = match convert(state, &base, PIVOT_CURRENCY, 1.0).await {
        Ok(v) => v,
        Err(e) => {
            error!(base = %base, "failed to convert base currency to USD: {}", e);
            return None;
        }
    };

    let mut table = ConversionTable::new(&base);
    table.push(PIVOT_CURRENCY, usd_amount);

    for target in TARGET_CURRENCIES {
        match convert(state, PIVOT_CURRENCY, target, usd_amount).await {
            Ok(v) => table.push(target, v),
            Err(e) => warn!(target, "failed to convert USD to {}: {}", target, e),
        }
    }

    Some(table)
}

async fn convert(state: &AppState, from: &str, to: &str, amount: f64) -> Result<f64, String> {
    let url = format!("{}/convert", state.endpoints.rates);
    let amount = amount.to_string();
    let body: ErConvert = state
        .http
        .get(&url)
        .query(&[
            ("access_key", state.currency_api_key.as_str()),
            ("from", from),
            ("to", to),
            ("amount", amount.as_str()),
        ])
        .send()
        .await
        .map_err(|e| format!("request failed: {}", e))?
        .json()
        .await
        .map_err(|e| format!("unreadable response: {}", e))?;

    if !body.success {
        return Err(body
            .error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "Unknown error".into()));
    }
    body.result.ok_or_else(|| "no 'result' field".into())
}
