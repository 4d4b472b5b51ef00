use crate::reference::countries::{CountryCode, COUNTRIES};

/// The one abbreviation users type that is not an ISO code.
const ALIASES: &[(&str, &str)] = &[("uk", "gb")];

fn find(input: &str) -> Option<&'static CountryCode> {
    let wanted = input.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    COUNTRIES.iter().find(|c| {
        wanted == c.alpha2.to_lowercase()
            || wanted == c.alpha3.to_lowercase()
            || wanted == c.name.to_lowercase()
            || c.common.is_some_and(|n| wanted == n.to_lowercase())
    })
}

/// Maps an ISO code or known name to the registry's canonical name.
/// Anything unrecognized comes back exactly as given.
pub fn normalize_country_name(input: &str) -> String {
    match find(input) {
        Some(c) => c.name.to_string(),
        None => input.to_string(),
    }
}

/// Alpha-2 code for a name or code the registry knows.
pub fn alpha2_for(input: &str) -> Option<&'static str> {
    find(input).map(|c| c.alpha2)
}

/// Replaces the ad hoc abbreviations listed in `ALIASES`; other input passes through.
pub fn apply_alias(input: &str) -> String {
    let trimmed = input.trim();
    ALIASES
        .iter()
        .find(|(from, _)| trimmed.eq_ignore_ascii_case(from))
        .map(|(_, to)| (*to).to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha2_code_normalizes_to_name() {
        assert_eq!(normalize_country_name("IN"), "India");
    }

    #[test]
    fn unknown_input_is_returned_unchanged() {
        assert_eq!(normalize_country_name("XYZLAND"), "XYZLAND");
        assert_eq!(normalize_country_name("  Atlantis "), "  Atlantis ");
        assert_eq!(normalize_country_name(""), "");
    }

    #[test]
    fn matches_codes_and_names_case_insensitively() {
        assert_eq!(normalize_country_name("usa"), "United States");
        assert_eq!(normalize_country_name(" jp "), "Japan");
        assert_eq!(normalize_country_name("fRaNcE"), "France");
        assert_eq!(normalize_country_name("Bolivia"), "Bolivia, Plurinational State of");
        assert_eq!(normalize_country_name("south korea"), "Korea, Republic of");
    }

    #[test]
    fn no_partial_matches() {
        assert_eq!(normalize_country_name("Indi"), "Indi");
        assert_eq!(normalize_country_name("Franc"), "Franc");
        assert_eq!(normalize_country_name("United"), "United");
    }

    #[test]
    fn uk_alias_resolves_to_united_kingdom() {
        assert_eq!(apply_alias("UK"), "gb");
        assert_eq!(apply_alias(" uk "), "gb");
        assert_eq!(apply_alias("Ukraine"), "Ukraine");
        assert_eq!(normalize_country_name(&apply_alias("uk")), "United Kingdom");
    }

    #[test]
    fn alpha2_lookup() {
        assert_eq!(alpha2_for("Korea, Republic of"), Some("KR"));
        assert_eq!(alpha2_for("deu"), Some("DE"));
        assert_eq!(alpha2_for("Narnia"), None);
    }
}
