use std::path::Path;
use tracing::info;

use crate::models::country::Country;
use crate::models::map_view::{MapStyle, MapView};
use crate::utils::error::ApiError;
use crate::utils::html::{escape, fill, js_string};

const MAP_TEMPLATE: &str = include_str!("../../assets/map.html");
const CARD_TEMPLATE: &str = include_str!("../../assets/popup_card.html");

/// Renders the map for `country` and overwrites the document at `path`.
pub async fn create_map(
    path: &Path,
    country_name: &str,
    latitude: f64,
    longitude: f64,
    country: &Country,
    style: MapStyle,
) -> Result<MapView, ApiError> {
    let view = MapView::new(country_name, latitude, longitude, style);
    let html = render_map(&view, country);

    tokio::fs::write(path, html.as_bytes())
        .await
        .map_err(|e| ApiError::Internal(format!("could not write {}: {}", path.display(), e)))?;

    info!(country = country_name, style = %style, path = %path.display(), "map written");
    Ok(view)
}

pub fn render_popup(country: &Country) -> String {
    let flag = if country.flag_url.is_empty() {
        String::new()
    } else {
        format!(
            r#"<img class="flag" src="{}" alt="Flag of {}">"#,
            escape(&country.flag_url),
            escape(&country.name)
        )
    };
    fill(
        CARD_TEMPLATE,
        &[
            ("FLAG", flag.as_str()),
            ("NAME", escape(&country.name).as_str()),
            ("CAPITAL", escape(&country.capital).as_str()),
            ("REGION", escape(&country.region).as_str()),
            ("POPULATION", escape(&country.population_label()).as_str()),
            ("AREA", escape(&country.area_label()).as_str()),
            ("CURRENCY", escape(&country.currency.to_string()).as_str()),
            ("TIMEZONE", escape(&country.timezone).as_str()),
            ("FACT", escape(&country.fun_fact).as_str()),
        ],
    )
}

pub fn render_map(view: &MapView, country: &Country) -> String {
    let style = view.style;
    fill(
        MAP_TEMPLATE,
        &[
            ("TITLE", escape(&format!("{} - Globe Explorer", view.country_name)).as_str()),
            ("LAT", view.latitude.to_string().as_str()),
            ("LON", view.longitude.to_string().as_str()),
            ("TILE_URL", js_string(style.tile_url()).as_str()),
            ("ATTRIBUTION", js_string(style.attribution()).as_str()),
            ("LAYER_NAME", js_string(&format!("{style} View")).as_str()),
            ("TOOLTIP", js_string(&format!("{} Info", country.name)).as_str()),
            ("POPUP", js_string(&render_popup(country)).as_str()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::country::Currency;
    use tempfile::TempDir;

    fn italy() -> Country {
        Country {
            name: "Italy".into(),
            capital: "Rome".into(),
            region: "Europe".into(),
            population: Some(60_000_000),
            area: Some(301_340.0),
            currency: Currency { name: "Euro".into(), code: "EUR".into(), symbol: "€".into() },
            timezone: "UTC+1".into(),
            flag_url: "https://flagcdn.com/it.png".into(),
            fun_fact: "Italy has many UNESCO sites.".into(),
        }
    }

    #[tokio::test]
    async fn writes_non_empty_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("map.html");
        let view = create_map(&path, "Italy", 41.9, 12.5, &italy(), MapStyle::Hybrid)
            .await
            .unwrap();

        assert_eq!(view, MapView::new("Italy", 41.9, 12.5, MapStyle::Hybrid));
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(!html.is_empty());
        assert!(html.contains("[41.9, 12.5]"));
        assert!(html.contains("lyrs=y"));
        assert!(html.contains("Italy Info"));
        assert!(!html.contains("%%"));
    }

    #[tokio::test]
    async fn overwrites_previous_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("map.html");
        std::fs::write(&path, "stale").unwrap();
        create_map(&path, "Italy", 41.9, 12.5, &italy(), MapStyle::Default)
            .await
            .unwrap();
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(!html.contains("stale"));
        assert!(html.contains("openstreetmap"));
    }

    #[test]
    fn popup_embeds_fields_and_fact_face() {
        let card = render_popup(&italy());
        assert!(card.contains("Rome"));
        assert!(card.contains("60,000,000"));
        assert!(card.contains("301,340 km²"));
        assert!(card.contains("Euro (EUR) €"));
        assert!(card.contains("flip-back"));
        assert!(card.contains("Italy has many UNESCO sites."));
        assert!(card.contains(r#"src="https://flagcdn.com/it.png""#));
    }

    #[test]
    fn popup_escapes_record_text() {
        let mut c = italy();
        c.fun_fact = "<script>alert(1)</script>".into();
        c.flag_url.clear();
        let card = render_popup(&c);
        assert!(card.contains("&lt;script&gt;"));
        assert!(!card.contains("<img"));

        let doc = render_map(&MapView::new("Italy", 0.0, 0.0, MapStyle::Roadmap), &c);
        assert!(!doc.contains("<script>alert"));
    }
}
