use serde::Serialize;
use std::fmt;

/// Placeholder for any field the upstream record leaves out.
pub const MISSING: &str = "N/A";

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Currency {
    pub name: String,
    pub code: String,
    pub symbol: String,
}

impl Currency {
    pub fn missing() -> Self {
        Self {
            name: MISSING.into(),
            code: MISSING.into(),
            symbol: MISSING.into(),
        }
    }

    /// Three-letter code usable for conversion, if the record carried one.
    pub fn iso_code(&self) -> Option<&str> {
        let code = self.code.as_str();
        (code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic())).then_some(code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.name, self.code, self.symbol)
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct Country {
    pub name: String,
    pub capital: String,
    pub region: String,
    pub population: Option<u64>,
    pub area: Option<f64>,
    pub currency: Currency,
    pub timezone: String,
    pub flag_url: String,
    pub fun_fact: String,
}

impl Country {
    pub fn population_label(&self) -> String {
        self.population
            .map(group_thousands)
            .unwrap_or_else(|| MISSING.into())
    }

    pub fn area_label(&self) -> String {
        match self.area {
            Some(a) if a.fract() == 0.0 => format!("{} km²", group_thousands(a as u64)),
            Some(a) => format!("{a} km²"),
            None => MISSING.into(),
        }
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn italy() -> Country {
        Country {
            name: "Italy".into(),
            capital: "Rome".into(),
            region: "Europe".into(),
            population: Some(59_554_023),
            area: Some(301_336.0),
            currency: Currency { name: "Euro".into(), code: "EUR".into(), symbol: "€".into() },
            timezone: "UTC+01:00".into(),
            flag_url: "https://flagcdn.com/w320/it.png".into(),
            fun_fact: "Italy has many UNESCO sites.".into(),
        }
    }

    #[test]
    fn currency_descriptor_format() {
        assert_eq!(italy().currency.to_string(), "Euro (EUR) €");
        assert_eq!(Currency::missing().to_string(), "N/A (N/A) N/A");
    }

    #[test]
    fn iso_code_only_for_three_letters() {
        assert_eq!(italy().currency.iso_code(), Some("EUR"));
        assert_eq!(Currency::missing().iso_code(), None);
    }

    #[test]
    fn labels() {
        let c = italy();
        assert_eq!(c.population_label(), "59,554,023");
        assert_eq!(c.area_label(), "301,336 km²");

        let mut bare = italy();
        bare.population = None;
        bare.area = None;
        assert_eq!(bare.population_label(), "N/A");
        assert_eq!(bare.area_label(), "N/A");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
    }
}
