use serde::Serialize;

pub const PIVOT_CURRENCY: &str = "USD";
pub const TARGET_CURRENCIES: [&str; 3] = ["GBP", "JPY", "EUR"];

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Rate {
    pub code: String,
    pub rate: f64,
}

/// What one unit of `base` is worth in each listed currency.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ConversionTable {
    pub base: String,
    pub rates: Vec<Rate>,
}

impl ConversionTable {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into(), rates: Vec::new() }
    }

    pub fn push(&mut self, code: &str, value: f64) {
        self.rates.push(Rate { code: code.into(), rate: round4(value) });
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.iter().find(|r| r.code == code).map(|r| r.rate)
    }
}

pub fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_four_places() {
        let mut t = ConversionTable::new("EUR");
        t.push("USD", 1.085_678_9);
        assert_eq!(t.get("USD"), Some(1.0857));
        assert_eq!(t.get("GBP"), None);
    }
}
