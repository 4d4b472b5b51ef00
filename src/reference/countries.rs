// ISO 3166-1 country list.
//
// `name` is the ISO short name and is what lookups normalize to. `common`
// is the everyday form where it differs from the short name.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryCode {
    pub alpha2: &'static str,
    pub alpha3: &'static str,
    pub name: &'static str,
    pub common: Option<&'static str>,
}

const fn c(alpha2: &'static str, alpha3: &'static str, name: &'static str) -> CountryCode {
    CountryCode { alpha2, alpha3, name, common: None }
}

const fn cc(
    alpha2: &'static str,
    alpha3: &'static str,
    name: &'static str,
    common: &'static str,
) -> CountryCode {
    CountryCode { alpha2, alpha3, name, common: Some(common) }
}

pub const COUNTRIES: &[CountryCode] = &[
    c("AW", "ABW", "Aruba"),
    c("AF", "AFG", "Afghanistan"),
    c("AO", "AGO", "Angola"),
    c("AI", "AIA", "Anguilla"),
    c("AX", "ALA", "Åland Islands"),
    c("AL", "ALB", "Albania"),
    c("AD", "AND", "Andorra"),
    c("AE", "ARE", "United Arab Emirates"),
    c("AR", "ARG", "Argentina"),
    c("AM", "ARM", "Armenia"),
    c("AS", "ASM", "American Samoa"),
    c("AQ", "ATA", "Antarctica"),
    c("TF", "ATF", "French Southern Territories"),
    c("AG", "ATG", "Antigua and Barbuda"),
    c("AU", "AUS", "Australia"),
    c("AT", "AUT", "Austria"),
    c("AZ", "AZE", "Azerbaijan"),
    c("BI", "BDI", "Burundi"),
    c("BE", "BEL", "Belgium"),
    c("BJ", "BEN", "Benin"),
    c("BQ", "BES", "Bonaire, Sint Eustatius and Saba"),
    c("BF", "BFA", "Burkina Faso"),
    c("BD", "BGD", "Bangladesh"),
    c("BG", "BGR", "Bulgaria"),
    c("BH", "BHR", "Bahrain"),
    c("BS", "BHS", "Bahamas"),
    c("BA", "BIH", "Bosnia and Herzegovina"),
    c("BL", "BLM", "Saint Barthélemy"),
    c("BY", "BLR", "Belarus"),
    c("BZ", "BLZ", "Belize"),
    c("BM", "BMU", "Bermuda"),
    cc("BO", "BOL", "Bolivia, Plurinational State of", "Bolivia"),
    c("BR", "BRA", "Brazil"),
    c("BB", "BRB", "Barbados"),
    c("BN", "BRN", "Brunei Darussalam"),
    c("BT", "BTN", "Bhutan"),
    c("BV", "BVT", "Bouvet Island"),
    c("BW", "BWA", "Botswana"),
    c("CF", "CAF", "Central African Republic"),
    c("CA", "CAN", "Canada"),
    c("CC", "CCK", "Cocos (Keeling) Islands"),
    c("CH", "CHE", "Switzerland"),
    c("CL", "CHL", "Chile"),
    c("CN", "CHN", "China"),
    c("CI", "CIV", "Côte d'Ivoire"),
    c("CM", "CMR", "Cameroon"),
    c("CD", "COD", "Congo, The Democratic Republic of the"),
    c("CG", "COG", "Congo"),
    c("CK", "COK", "Cook Islands"),
    c("CO", "COL", "Colombia"),
    c("KM", "COM", "Comoros"),
    c("CV", "CPV", "Cabo Verde"),
    c("CR", "CRI", "Costa Rica"),
    c("CU", "CUB", "Cuba"),
    c("CW", "CUW", "Curaçao"),
    c("CX", "CXR", "Christmas Island"),
    c("KY", "CYM", "Cayman Islands"),
    c("CY", "CYP", "Cyprus"),
    c("CZ", "CZE", "Czechia"),
    c("DE", "DEU", "Germany"),
    c("DJ", "DJI", "Djibouti"),
    c("DM", "DMA", "Dominica"),
    c("DK", "DNK", "Denmark"),
    c("DO", "DOM", "Dominican Republic"),
    c("DZ", "DZA", "Algeria"),
    c("EC", "ECU", "Ecuador"),
    c("EG", "EGY", "Egypt"),
    c("ER", "ERI", "Eritrea"),
    c("EH", "ESH", "Western Sahara"),
    c("ES", "ESP", "Spain"),
    c("EE", "EST", "Estonia"),
    c("ET", "ETH", "Ethiopia"),
    c("FI", "FIN", "Finland"),
    c("FJ", "FJI", "Fiji"),
    c("FK", "FLK", "Falkland Islands (Malvinas)"),
    c("FR", "FRA", "France"),
    c("FO", "FRO", "Faroe Islands"),
    c("FM", "FSM", "Micronesia, Federated States of"),
    c("GA", "GAB", "Gabon"),
    c("GB", "GBR", "United Kingdom"),
    c("GE", "GEO", "Georgia"),
    c("GG", "GGY", "Guernsey"),
    c("GH", "GHA", "Ghana"),
    c("GI", "GIB", "Gibraltar"),
    c("GN", "GIN", "Guinea"),
    c("GP", "GLP", "Guadeloupe"),
    c("GM", "GMB", "Gambia"),
    c("GW", "GNB", "Guinea-Bissau"),
    c("GQ", "GNQ", "Equatorial Guinea"),
    c("GR", "GRC", "Greece"),
    c("GD", "GRD", "Grenada"),
    c("GL", "GRL", "Greenland"),
    c("GT", "GTM", "Guatemala"),
    c("GF", "GUF", "French Guiana"),
    c("GU", "GUM", "Guam"),
    c("GY", "GUY", "Guyana"),
    c("HK", "HKG", "Hong Kong"),
    c("HM", "HMD", "Heard Island and McDonald Islands"),
    c("HN", "HND", "Honduras"),
    c("HR", "HRV", "Croatia"),
    c("HT", "HTI", "Haiti"),
    c("HU", "HUN", "Hungary"),
    c("ID", "IDN", "Indonesia"),
    c("IM", "IMN", "Isle of Man"),
    c("IN", "IND", "India"),
    c("IO", "IOT", "British Indian Ocean Territory"),
    c("IE", "IRL", "Ireland"),
    cc("IR", "IRN", "Iran, Islamic Republic of", "Iran"),
    c("IQ", "IRQ", "Iraq"),
    c("IS", "ISL", "Iceland"),
    c("IL", "ISR", "Israel"),
    c("IT", "ITA", "Italy"),
    c("JM", "JAM", "Jamaica"),
    c("JE", "JEY", "Jersey"),
    c("JO", "JOR", "Jordan"),
    c("JP", "JPN", "Japan"),
    c("KZ", "KAZ", "Kazakhstan"),
    c("KE", "KEN", "Kenya"),
    c("KG", "KGZ", "Kyrgyzstan"),
    c("KH", "KHM", "Cambodia"),
    c("KI", "KIR", "Kiribati"),
    c("KN", "KNA", "Saint Kitts and Nevis"),
    cc("KR", "KOR", "Korea, Republic of", "South Korea"),
    c("KW", "KWT", "Kuwait"),
    cc("LA", "LAO", "Lao People's Democratic Republic", "Laos"),
    c("LB", "LBN", "Lebanon"),
    c("LR", "LBR", "Liberia"),
    c("LY", "LBY", "Libya"),
    c("LC", "LCA", "Saint Lucia"),
    c("LI", "LIE", "Liechtenstein"),
    c("LK", "LKA", "Sri Lanka"),
    c("LS", "LSO", "Lesotho"),
    c("LT", "LTU", "Lithuania"),
    c("LU", "LUX", "Luxembourg"),
    c("LV", "LVA", "Latvia"),
    c("MO", "MAC", "Macao"),
    c("MF", "MAF", "Saint Martin (French part)"),
    c("MA", "MAR", "Morocco"),
    c("MC", "MCO", "Monaco"),
    cc("MD", "MDA", "Moldova, Republic of", "Moldova"),
    c("MG", "MDG", "Madagascar"),
    c("MV", "MDV", "Maldives"),
    c("MX", "MEX", "Mexico"),
    c("MH", "MHL", "Marshall Islands"),
    c("MK", "MKD", "North Macedonia"),
    c("ML", "MLI", "Mali"),
    c("MT", "MLT", "Malta"),
    c("MM", "MMR", "Myanmar"),
    c("ME", "MNE", "Montenegro"),
    c("MN", "MNG", "Mongolia"),
    c("MP", "MNP", "Northern Mariana Islands"),
    c("MZ", "MOZ", "Mozambique"),
    c("MR", "MRT", "Mauritania"),
    c("MS", "MSR", "Montserrat"),
    c("MQ", "MTQ", "Martinique"),
    c("MU", "MUS", "Mauritius"),
    c("MW", "MWI", "Malawi"),
    c("MY", "MYS", "Malaysia"),
    c("YT", "MYT", "Mayotte"),
    c("NA", "NAM", "Namibia"),
    c("NC", "NCL", "New Caledonia"),
    c("NE", "NER", "Niger"),
    c("NF", "NFK", "Norfolk Island"),
    c("NG", "NGA", "Nigeria"),
    c("NI", "NIC", "Nicaragua"),
    c("NU", "NIU", "Niue"),
    c("NL", "NLD", "Netherlands"),
    c("NO", "NOR", "Norway"),
    c("NP", "NPL", "Nepal"),
    c("NR", "NRU", "Nauru"),
    c("NZ", "NZL", "New Zealand"),
    c("OM", "OMN", "Oman"),
    c("PK", "PAK", "Pakistan"),
    c("PA", "PAN", "Panama"),
    c("PN", "PCN", "Pitcairn"),
    c("PE", "PER", "Peru"),
    c("PH", "PHL", "Philippines"),
    c("PW", "PLW", "Palau"),
    c("PG", "PNG", "Papua New Guinea"),
    c("PL", "POL", "Poland"),
    c("PR", "PRI", "Puerto Rico"),
    cc("KP", "PRK", "Korea, Democratic People's Republic of", "North Korea"),
    c("PT", "PRT", "Portugal"),
    c("PY", "PRY", "Paraguay"),
    c("PS", "PSE", "Palestine, State of"),
    c("PF", "PYF", "French Polynesia"),
    c("QA", "QAT", "Qatar"),
    c("RE", "REU", "Réunion"),
    c("RO", "ROU", "Romania"),
    cc("RU", "RUS", "Russian Federation", "Russia"),
    c("RW", "RWA", "Rwanda"),
    c("SA", "SAU", "Saudi Arabia"),
    c("SD", "SDN", "Sudan"),
    c("SN", "SEN", "Senegal"),
    c("SG", "SGP", "Singapore"),
    c("GS", "SGS", "South Georgia and the South Sandwich Islands"),
    c("SH", "SHN", "Saint Helena, Ascension and Tristan da Cunha"),
    c("SJ", "SJM", "Svalbard and Jan Mayen"),
    c("SB", "SLB", "Solomon Islands"),
    c("SL", "SLE", "Sierra Leone"),
    c("SV", "SLV", "El Salvador"),
    c("SM", "SMR", "San Marino"),
    c("SO", "SOM", "Somalia"),
    c("PM", "SPM", "Saint Pierre and Miquelon"),
    c("RS", "SRB", "Serbia"),
    c("SS", "SSD", "South Sudan"),
    c("ST", "STP", "Sao Tome and Principe"),
    c("SR", "SUR", "Suriname"),
    c("SK", "SVK", "Slovakia"),
    c("SI", "SVN", "Slovenia"),
    c("SE", "SWE", "Sweden"),
    c("SZ", "SWZ", "Eswatini"),
    c("SX", "SXM", "Sint Maarten (Dutch part)"),
    c("SC", "SYC", "Seychelles"),
    cc("SY", "SYR", "Syrian Arab Republic", "Syria"),
    c("TC", "TCA", "Turks and Caicos Islands"),
    c("TD", "TCD", "Chad"),
    c("TG", "TGO", "Togo"),
    c("TH", "THA", "Thailand"),
    c("TJ", "TJK", "Tajikistan"),
    c("TK", "TKL", "Tokelau"),
    c("TM", "TKM", "Turkmenistan"),
    c("TL", "TLS", "Timor-Leste"),
    c("TO", "TON", "Tonga"),
    c("TT", "TTO", "Trinidad and Tobago"),
    c("TN", "TUN", "Tunisia"),
    cc("TR", "TUR", "Türkiye", "Turkey"),
    c("TV", "TUV", "Tuvalu"),
    cc("TW", "TWN", "Taiwan, Province of China", "Taiwan"),
    cc("TZ", "TZA", "Tanzania, United Republic of", "Tanzania"),
    c("UG", "UGA", "Uganda"),
    c("UA", "UKR", "Ukraine"),
    c("UM", "UMI", "United States Minor Outlying Islands"),
    c("UY", "URY", "Uruguay"),
    c("US", "USA", "United States"),
    c("UZ", "UZB", "Uzbekistan"),
    c("VA", "VAT", "Holy See (Vatican City State)"),
    c("VC", "VCT", "Saint Vincent and the Grenadines"),
    cc("VE", "VEN", "Venezuela, Bolivarian Republic of", "Venezuela"),
    c("VG", "VGB", "Virgin Islands, British"),
    c("VI", "VIR", "Virgin Islands, U.S."),
    cc("VN", "VNM", "Viet Nam", "Vietnam"),
    c("VU", "VUT", "Vanuatu"),
    c("WF", "WLF", "Wallis and Futuna"),
    c("WS", "WSM", "Samoa"),
    c("YE", "YEM", "Yemen"),
    c("ZA", "ZAF", "South Africa"),
    c("ZM", "ZMB", "Zambia"),
    c("ZW", "ZWE", "Zimbabwe"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique_and_well_formed() {
        let mut a2 = HashSet::new();
        let mut a3 = HashSet::new();
        for entry in COUNTRIES {
            assert_eq!(entry.alpha2.len(), 2, "{}", entry.name);
            assert_eq!(entry.alpha3.len(), 3, "{}", entry.name);
            assert!(a2.insert(entry.alpha2), "duplicate {}", entry.alpha2);
            assert!(a3.insert(entry.alpha3), "duplicate {}", entry.alpha3);
        }
        assert_eq!(COUNTRIES.len(), 249);
    }
}
