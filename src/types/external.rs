use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Deserialize, Default, Debug)]
pub struct RcName {
    #[serde(default)]
    pub common: String,
    #[serde(default)]
    pub official: String,
}

#[derive(Deserialize, Default, Debug)]
pub struct RcFlags {
    pub png: Option<String>,
}

/// One candidate from the restcountries v3.1 `/name/{name}` endpoint.
#[derive(Deserialize, Default, Debug)]
pub struct RcCountry {
    #[serde(default)]
    pub name: RcName,
    #[serde(default, rename = "altSpellings")]
    pub alt_spellings: Vec<String>,
    #[serde(default)]
    pub capital: Vec<String>,
    pub region: Option<String>,
    pub population: Option<u64>,
    pub area: Option<f64>,
    /// Keyed by currency code, in the order the API lists them.
    #[serde(default)]
    pub currencies: Map<String, Value>,
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default)]
    pub flags: RcFlags,
}

/// exchangerate.host `/convert` response.
#[derive(Deserialize, Debug)]
pub struct ErConvert {
    #[serde(default)]
    pub success: bool,
    pub result: Option<f64>,
    pub error: Option<Value>,
}

/// Wikipedia REST `page/summary` response.
#[derive(Deserialize, Debug)]
pub struct WikiSummary {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub extract: String,
}

/// Nominatim `search` hit; coordinates arrive as strings.
#[derive(Deserialize, Debug)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: String,
}
