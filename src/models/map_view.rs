use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, str::FromStr};

use crate::utils::error::ApiError;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MapStyle {
    Roadmap,
    Satellite,
    #[default]
    Hybrid,
    Default,
}

impl MapStyle {
    pub const ALL: [MapStyle; 4] = [
        MapStyle::Roadmap,
        MapStyle::Satellite,
        MapStyle::Hybrid,
        MapStyle::Default,
    ];

    pub fn tile_url(self) -> &'static str {
        match self {
            MapStyle::Roadmap => "http://mt1.google.com/vt/lyrs=m&x={x}&y={y}&z={z}",
            MapStyle::Satellite => "http://mt1.google.com/vt/lyrs=s&x={x}&y={y}&z={z}",
            MapStyle::Hybrid => "http://mt1.google.com/vt/lyrs=y&x={x}&y={y}&z={z}",
            MapStyle::Default => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
        }
    }

    pub fn attribution(self) -> &'static str {
        match self {
            MapStyle::Default => "&copy; OpenStreetMap contributors",
            _ => "Google Maps",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MapStyle::Roadmap => "Roadmap",
            MapStyle::Satellite => "Satellite",
            MapStyle::Hybrid => "Hybrid",
            MapStyle::Default => "Default",
        }
    }
}

impl fmt::Display for MapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapStyle {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.is_empty() {
            return Ok(MapStyle::default());
        }
        MapStyle::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ApiError::Validation(
                    "view must be one of Roadmap, Satellite, Hybrid, Default".into(),
                )
            })
    }
}

/// The last map rendered; kept so it can be saved again later.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MapView {
    pub country_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub style: MapStyle,
}

impl MapView {
    pub fn new(country_name: impl Into<String>, latitude: f64, longitude: f64, style: MapStyle) -> Self {
        Self {
            country_name: country_name.into(),
            latitude,
            longitude,
            style,
        }
    }

    /// Copies the rendered document at `source` to `dest` byte for byte.
    pub async fn save_map_as(&self, source: &Path, dest: &Path) -> Result<u64, ApiError> {
        if !tokio::fs::try_exists(source).await.unwrap_or(false) {
            return Err(ApiError::SaveTarget(format!(
                "no rendered map at {}",
                source.display()
            )));
        }
        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ApiError::Internal(format!("could not create {}: {}", parent.display(), e)))?;
        }
        tokio::fs::copy(source, dest)
            .await
            .map_err(|e| ApiError::Internal(format!("could not save map: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn stores_attributes() {
        let mv = MapView::new("Brazil", -14.2, -51.9, MapStyle::Satellite);
        assert_eq!(mv.country_name, "Brazil");
        assert_eq!(mv.latitude, -14.2);
        assert_eq!(mv.style, MapStyle::Satellite);
    }

    #[test]
    fn parses_styles_case_insensitively() {
        assert_eq!("roadmap".parse::<MapStyle>().unwrap(), MapStyle::Roadmap);
        assert_eq!(" DEFAULT ".parse::<MapStyle>().unwrap(), MapStyle::Default);
        assert_eq!("".parse::<MapStyle>().unwrap(), MapStyle::Hybrid);
        assert!(matches!("terrain".parse::<MapStyle>(), Err(ApiError::Validation(_))));
    }

    #[test]
    fn default_style_uses_openstreetmap() {
        assert!(MapStyle::Default.tile_url().contains("openstreetmap"));
        assert!(MapStyle::Hybrid.tile_url().contains("lyrs=y"));
    }

    #[tokio::test]
    async fn save_copies_verbatim() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("map.html");
        std::fs::write(&source, "<html>Map</html>").unwrap();

        let dest = dir.path().join("out").join("output_map.html");
        let mv = MapView::new("Dummy", 0.0, 0.0, MapStyle::default());
        mv.save_map_as(&source, &dest).await.unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), b"<html>Map</html>");
    }

    #[tokio::test]
    async fn save_without_source_is_save_target_missing() {
        let dir = TempDir::new().unwrap();
        let mv = MapView::new("Dummy", 0.0, 0.0, MapStyle::default());
        let err = mv
            .save_map_as(&dir.path().join("missing.html"), &dir.path().join("x.html"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::SaveTarget(_)));
    }
}
