//! Static reference tables for country and US state canonicalization.
//!
//! Country codes follow ISO 3166 (two-letter alpha-2 to three-letter alpha-3).
//! Name lookups are exact: the tables carry the spellings seen in CRM data,
//! including a few local-language and colloquial aliases.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

// ============================================================================
// COUNTRY CODES
// ============================================================================

/// ISO 3166 alpha-2 -> alpha-3. Keys are upper-case.
pub static COUNTRY_CODES_TWO_TO_THREE: Lazy<FxHashMap<&str, &str>> = Lazy::new(|| {
    let mut m = FxHashMap::default();
    m.insert("AD", "AND");
    m.insert("AE", "ARE");
    m.insert("AF", "AFG");
    m.insert("AG", "ATG");
    m.insert("AI", "AIA");
    m.insert("AL", "ALB");
    m.insert("AM", "ARM");
    m.insert("AO", "AGO");
    m.insert("AQ", "ATA");
    m.insert("AR", "ARG");
    m.insert("AS", "ASM");
    m.insert("AT", "AUT");
    m.insert("AU", "AUS");
    m.insert("AW", "ABW");
    m.insert("AX", "ALA");
    m.insert("AZ", "AZE");
    m.insert("BA", "BIH");
    m.insert("BB", "BRB");
    m.insert("BD", "BGD");
    m.insert("BE", "BEL");
    m.insert("BF", "BFA");
    m.insert("BG", "BGR");
    m.insert("BH", "BHR");
    m.insert("BI", "BDI");
    m.insert("BJ", "BEN");
    m.insert("BL", "BLM");
    m.insert("BM", "BMU");
    m.insert("BN", "BRN");
    m.insert("BO", "BOL");
    m.insert("BQ", "BES");
    m.insert("BR", "BRA");
    m.insert("BS", "BHS");
    m.insert("BT", "BTN");
    m.insert("BV", "BVT");
    m.insert("BW", "BWA");
    m.insert("BY", "BLR");
    m.insert("BZ", "BLZ");
    m.insert("CA", "CAN");
    m.insert("CC", "CCK");
    m.insert("CD", "COD");
    m.insert("CF", "CAF");
    m.insert("CG", "COG");
    m.insert("CH", "CHE");
    m.insert("CI", "CIV");
    m.insert("CK", "COK");
    m.insert("CL", "CHL");
    m.insert("CM", "CMR");
    m.insert("CN", "CHN");
    m.insert("CO", "COL");
    m.insert("CR", "CRI");
    m.insert("CU", "CUB");
    m.insert("CV", "CPV");
    m.insert("CW", "CUW");
    m.insert("CX", "CXR");
    m.insert("CY", "CYP");
    m.insert("CZ", "CZE");
    m.insert("DE", "DEU");
    m.insert("DJ", "DJI");
    m.insert("DK", "DNK");
    m.insert("DM", "DMA");
    m.insert("DO", "DOM");
    m.insert("DZ", "DZA");
    m.insert("EC", "ECU");
    m.insert("EE", "EST");
    m.insert("EG", "EGY");
    m.insert("EH", "ESH");
    m.insert("ER", "ERI");
    m.insert("ES", "ESP");
    m.insert("ET", "ETH");
    m.insert("FI", "FIN");
    m.insert("FJ", "FJI");
    m.insert("FK", "FLK");
    m.insert("FM", "FSM");
    m.insert("FO", "FRO");
    m.insert("FR", "FRA");
    m.insert("GA", "GAB");
    m.insert("GB", "GBR");
    m.insert("GD", "GRD");
    m.insert("GE", "GEO");
    m.insert("GF", "GUF");
    m.insert("GG", "GGY");
    m.insert("GH", "GHA");
    m.insert("GI", "GIB");
    m.insert("GL", "GRL");
    m.insert("GM", "GMB");
    m.insert("GN", "GIN");
    m.insert("GP", "GLP");
    m.insert("GQ", "GNQ");
    m.insert("GR", "GRC");
    m.insert("GS", "SGS");
    m.insert("GT", "GTM");
    m.insert("GU", "GUM");
    m.insert("GW", "GNB");
    m.insert("GY", "GUY");
    m.insert("HK", "HKG");
    m.insert("HM", "HMD");
    m.insert("HN", "HND");
    m.insert("HR", "HRV");
    m.insert("HT", "HTI");
    m.insert("HU", "HUN");
    m.insert("ID", "IDN");
    m.insert("IE", "IRL");
    m.insert("IL", "ISR");
    m.insert("IM", "IMN");
    m.insert("IN", "IND");
    m.insert("IO", "IOT");
    m.insert("IQ", "IRQ");
    m.insert("IR", "IRN");
    m.insert("IS", "ISL");
    m.insert("IT", "ITA");
    m.insert("JE", "JEY");
    m.insert("JM", "JAM");
    m.insert("JO", "JOR");
    m.insert("JP", "JPN");
    m.insert("KE", "KEN");
    m.insert("KG", "KGZ");
    m.insert("KH", "KHM");
    m.insert("KI", "KIR");
    m.insert("KM", "COM");
    m.insert("KN", "KNA");
    m.insert("KP", "PRK");
    m.insert("KR", "KOR");
    m.insert("KW", "KWT");
    m.insert("KY", "CYM");
    m.insert("KZ", "KAZ");
    m.insert("LA", "LAO");
    m.insert("LB", "LBN");
    m.insert("LC", "LCA");
    m.insert("LI", "LIE");
    m.insert("LK", "LKA");
    m.insert("LR", "LBR");
    m.insert("LS", "LSO");
    m.insert("LT", "LTU");
    m.insert("LU", "LUX");
    m.insert("LV", "LVA");
    m.insert("LY", "LBY");
    m.insert("MA", "MAR");
    m.insert("MC", "MCO");
    m.insert("MD", "MDA");
    m.insert("ME", "MNE");
    m.insert("MF", "MAF");
    m.insert("MG", "MDG");
    m.insert("MH", "MHL");
    m.insert("MK", "MKD");
    m.insert("ML", "MLI");
    m.insert("MM", "MMR");
    m.insert("MN", "MNG");
    m.insert("MO", "MAC");
    m.insert("MP", "MNP");
    m.insert("MQ", "MTQ");
    m.insert("MR", "MRT");
    m.insert("MS", "MSR");
    m.insert("MT", "MLT");
    m.insert("MU", "MUS");
    m.insert("MV", "MDV");
    m.insert("MW", "MWI");
    m.insert("MX", "MEX");
    m.insert("MY", "MYS");
    m.insert("MZ", "MOZ");
    m.insert("NA", "NAM");
    m.insert("NC", "NCL");
    m.insert("NE", "NER");
    m.insert("NF", "NFK");
    m.insert("NG", "NGA");
    m.insert("NI", "NIC");
    m.insert("NL", "NLD");
    m.insert("NO", "NOR");
    m.insert("NP", "NPL");
    m.insert("NR", "NRU");
    m.insert("NU", "NIU");
    m.insert("NZ", "NZL");
    m.insert("OM", "OMN");
    m.insert("PA", "PAN");
    m.insert("PE", "PER");
    m.insert("PF", "PYF");
    m.insert("PG", "PNG");
    m.insert("PH", "PHL");
    m.insert("PK", "PAK");
    m.insert("PL", "POL");
    m.insert("PM", "SPM");
    m.insert("PN", "PCN");
    m.insert("PR", "PRI");
    m.insert("PS", "PSE");
    m.insert("PT", "PRT");
    m.insert("PW", "PLW");
    m.insert("PY", "PRY");
    m.insert("QA", "QAT");
    m.insert("RE", "REU");
    m.insert("RO", "ROU");
    m.insert("RS", "SRB");
    m.insert("RU", "RUS");
    m.insert("RW", "RWA");
    m.insert("SA", "SAU");
    m.insert("SB", "SLB");
    m.insert("SC", "SYC");
    m.insert("SD", "SDN");
    m.insert("SE", "SWE");
    m.insert("SG", "SGP");
    m.insert("SH", "SHN");
    m.insert("SI", "SVN");
    m.insert("SJ", "SJM");
    m.insert("SK", "SVK");
    m.insert("SL", "SLE");
    m.insert("SM", "SMR");
    m.insert("SN", "SEN");
    m.insert("SO", "SOM");
    m.insert("SR", "SUR");
    m.insert("SS", "SSD");
    m.insert("ST", "STP");
    m.insert("SV", "SLV");
    m.insert("SX", "SXM");
    m.insert("SY", "SYR");
    m.insert("SZ", "SWZ");
    m.insert("TC", "TCA");
    m.insert("TD", "TCD");
    m.insert("TF", "ATF");
    m.insert("TG", "TGO");
    m.insert("TH", "THA");
    m.insert("TJ", "TJK");
    m.insert("TK", "TKL");
    m.insert("TL", "TLS");
    m.insert("TM", "TKM");
    m.insert("TN", "TUN");
    m.insert("TO", "TON");
    m.insert("TR", "TUR");
    m.insert("TT", "TTO");
    m.insert("TV", "TUV");
    m.insert("TW", "TWN");
    m.insert("TZ", "TZA");
    m.insert("UA", "UKR");
    m.insert("UK", "GBR");
    m.insert("UG", "UGA");
    m.insert("UM", "UMI");
    m.insert("US", "USA");
    m.insert("UY", "URY");
    m.insert("UZ", "UZB");
    m.insert("VA", "VAT");
    m.insert("VC", "VCT");
    m.insert("VE", "VEN");
    m.insert("VG", "VGB");
    m.insert("VI", "VIR");
    m.insert("VN", "VNM");
    m.insert("VU", "VUT");
    m.insert("WF", "WLF");
    m.insert("WS", "WSM");
    m.insert("YE", "YEM");
    m.insert("YT", "MYT");
    m.insert("ZA", "ZAF");
    m.insert("ZM", "ZMB");
    m.insert("ZW", "ZWE");
    m
});

/// Full country name -> ISO 3166 alpha-3.
pub static COUNTRY_NAMES_TO_THREE: Lazy<FxHashMap<&str, &str>> = Lazy::new(|| {
    let mut m = FxHashMap::default();
    m.insert("Afghanistan", "AFG");
    m.insert("Åland Islands", "ALA");
    m.insert("Albania", "ALB");
    m.insert("Algeria", "DZA");
    m.insert("American Samoa", "ASM");
    m.insert("Andorra", "AND");
    m.insert("Angola", "AGO");
    m.insert("Anguilla", "AIA");
    m.insert("Antarctica", "ATA");
    m.insert("Antigua and Barbuda", "ATG");
    m.insert("Argentina", "ARG");
    m.insert("Armenia", "ARM");
    m.insert("Aruba", "ABW");
    m.insert("Australia", "AUS");
    m.insert("Austria", "AUT");
    m.insert("Azerbaijan", "AZE");
    m.insert("Bahamas", "BHS");
    m.insert("Bahrain", "BHR");
    m.insert("Bangladesh", "BGD");
    m.insert("Barbados", "BRB");
    m.insert("Belarus", "BLR");
    m.insert("Belgium", "BEL");
    m.insert("Belize", "BLZ");
    m.insert("Benin", "BEN");
    m.insert("Bermuda", "BMU");
    m.insert("Bhutan", "BTN");
    m.insert("Bolivia", "BOL");
    m.insert("Bolivia (Plurinational State of)", "BOL");
    m.insert("Bonaire, Sint Eustatius and Saba", "BES");
    m.insert("Bosnia and Herzegovina", "BIH");
    m.insert("Botswana", "BWA");
    m.insert("Bouvet Island", "BVT");
    m.insert("Brazil", "BRA");
    m.insert("British Indian Ocean Territory", "IOT");
    m.insert("Brunei Darussalam", "BRN");
    m.insert("Bulgaria", "BGR");
    m.insert("Burkina Faso", "BFA");
    m.insert("Burundi", "BDI");
    m.insert("Cabo Verde", "CPV");
    m.insert("Cambodia", "KHM");
    m.insert("Cameroon", "CMR");
    m.insert("Canada", "CAN");
    m.insert("Cayman Islands", "CYM");
    m.insert("Central African Republic", "CAF");
    m.insert("Chad", "TCD");
    m.insert("Chile", "CHL");
    m.insert("China", "CHN");
    m.insert("Christmas Island", "CXR");
    m.insert("Cocos (Keeling) Islands", "CCK");
    m.insert("Colombia", "COL");
    m.insert("Comoros", "COM");
    m.insert("Congo", "COG");
    m.insert("Congo, Democratic Republic of the", "COD");
    m.insert("Cook Islands", "COK");
    m.insert("Costa Rica", "CRI");
    m.insert("Croatia", "HRV");
    m.insert("Cuba", "CUB");
    m.insert("Curaçao", "CUW");
    m.insert("Cyprus", "CYP");
    m.insert("Czechia", "CZE");
    m.insert("Czech Republic", "CZE");
    m.insert("Côte d'Ivoire", "CIV");
    m.insert("Danmark", "DNK");
    m.insert("Denmark", "DNK");
    m.insert("Djibouti", "DJI");
    m.insert("Dominica", "DMA");
    m.insert("Dominican Republic", "DOM");
    m.insert("Ecuador", "ECU");
    m.insert("Egypt", "EGY");
    m.insert("El Salvador", "SLV");
    m.insert("Equatorial Guinea", "GNQ");
    m.insert("Eritrea", "ERI");
    m.insert("Estonia", "EST");
    m.insert("Eswatini", "SWZ");
    m.insert("Ethiopia", "ETH");
    m.insert("Falkland Islands (Malvinas)", "FLK");
    m.insert("Faroe Islands", "FRO");
    m.insert("Fiji", "FJI");
    m.insert("Finland", "FIN");
    m.insert("France", "FRA");
    m.insert("French Guiana", "GUF");
    m.insert("French Polynesia", "PYF");
    m.insert("French Southern Territories", "ATF");
    m.insert("Gabon", "GAB");
    m.insert("Gambia", "GMB");
    m.insert("Georgia", "GEO");
    m.insert("Germany", "DEU");
    m.insert("Deutschland", "DEU");
    m.insert("Ghana", "GHA");
    m.insert("Gibraltar", "GIB");
    m.insert("Greece", "GRC");
    m.insert("Greenland", "GRL");
    m.insert("Grenada", "GRD");
    m.insert("Guadeloupe", "GLP");
    m.insert("Guam", "GUM");
    m.insert("Guatemala", "GTM");
    m.insert("Guernsey", "GGY");
    m.insert("Guinea", "GIN");
    m.insert("Guinea-Bissau", "GNB");
    m.insert("Guyana", "GUY");
    m.insert("Haiti", "HTI");
    m.insert("Heard Island and McDonald Islands", "HMD");
    m.insert("Holy See", "VAT");
    m.insert("Honduras", "HND");
    m.insert("Hong Kong", "HKG");
    m.insert("Hungary", "HUN");
    m.insert("Iceland", "ISL");
    m.insert("India", "IND");
    m.insert("Indonesia", "IDN");
    m.insert("Iran", "IRN");
    m.insert("Iran (Islamic Republic of)", "IRN");
    m.insert("Iraq", "IRQ");
    m.insert("Ireland", "IRL");
    m.insert("Isle of Man", "IMN");
    m.insert("Israel", "ISR");
    m.insert("Italy", "ITA");
    m.insert("Jamaica", "JAM");
    m.insert("Japan", "JPN");
    m.insert("Jersey", "JEY");
    m.insert("Jordan", "JOR");
    m.insert("Kazakhstan", "KAZ");
    m.insert("Kenya", "KEN");
    m.insert("Kiribati", "KIR");
    m.insert("Korea (Democratic People's Republic of)", "PRK");
    m.insert("Korea, Republic of", "KOR");
    m.insert("South Korea", "KOR");
    m.insert("Kuwait", "KWT");
    m.insert("Kyrgyzstan", "KGZ");
    m.insert("Lao People's Democratic Republic", "LAO");
    m.insert("Latvia", "LVA");
    m.insert("Lebanon", "LBN");
    m.insert("Lesotho", "LSO");
    m.insert("Liberia", "LBR");
    m.insert("Libya", "LBY");
    m.insert("Liechtenstein", "LIE");
    m.insert("Lithuania", "LTU");
    m.insert("Luxembourg", "LUX");
    m.insert("Macao", "MAC");
    m.insert("Madagascar", "MDG");
    m.insert("Malawi", "MWI");
    m.insert("Malaysia", "MYS");
    m.insert("Maldives", "MDV");
    m.insert("Mali", "MLI");
    m.insert("Malta", "MLT");
    m.insert("Marshall Islands", "MHL");
    m.insert("Martinique", "MTQ");
    m.insert("Mauritania", "MRT");
    m.insert("Mauritius", "MUS");
    m.insert("Mayotte", "MYT");
    m.insert("Mexico", "MEX");
    m.insert("México", "MEX");
    m.insert("Micronesia (Federated States of)", "FSM");
    m.insert("Moldova, Republic of", "MDA");
    m.insert("Monaco", "MCO");
    m.insert("Mongolia", "MNG");
    m.insert("Montenegro", "MNE");
    m.insert("Montserrat", "MSR");
    m.insert("Morocco", "MAR");
    m.insert("Mozambique", "MOZ");
    m.insert("Myanmar", "MMR");
    m.insert("Namibia", "NAM");
    m.insert("Nauru", "NRU");
    m.insert("Nepal", "NPL");
    m.insert("Netherlands", "NLD");
    m.insert("The Netherlands", "NLD");
    m.insert("New Caledonia", "NCL");
    m.insert("New Zealand", "NZL");
    m.insert("Nicaragua", "NIC");
    m.insert("Niger", "NER");
    m.insert("Nigeria", "NGA");
    m.insert("Niue", "NIU");
    m.insert("Norfolk Island", "NFK");
    m.insert("North Macedonia", "MKD");
    m.insert("Northern Mariana Islands", "MNP");
    m.insert("Norway", "NOR");
    m.insert("Oman", "OMN");
    m.insert("Pakistan", "PAK");
    m.insert("Palau", "PLW");
    m.insert("Palestine, State of", "PSE");
    m.insert("Panama", "PAN");
    m.insert("Papua New Guinea", "PNG");
    m.insert("Paraguay", "PRY");
    m.insert("Peru", "PER");
    m.insert("Philippines", "PHL");
    m.insert("Pitcairn", "PCN");
    m.insert("Poland", "POL");
    m.insert("Portugal", "PRT");
    m.insert("Puerto Rico", "PRI");
    m.insert("Qatar", "QAT");
    m.insert("Réunion", "REU");
    m.insert("Romania", "ROU");
    m.insert("Russia", "RUS");
    m.insert("Russian Federation", "RUS");
    m.insert("Rwanda", "RWA");
    m.insert("Saint Barthélemy", "BLM");
    m.insert("Saint Helena, Ascension and Tristan da Cunha", "SHN");
    m.insert("Saint Kitts and Nevis", "KNA");
    m.insert("Saint Lucia", "LCA");
    m.insert("Saint Martin (French part)", "MAF");
    m.insert("Saint Pierre and Miquelon", "SPM");
    m.insert("Saint Vincent and the Grenadines", "VCT");
    m.insert("Samoa", "WSM");
    m.insert("San Marino", "SMR");
    m.insert("Sao Tome and Principe", "STP");
    m.insert("Saudi Arabia", "SAU");
    m.insert("Senegal", "SEN");
    m.insert("Serbia", "SRB");
    m.insert("Seychelles", "SYC");
    m.insert("Sierra Leone", "SLE");
    m.insert("Singapore", "SGP");
    m.insert("Sint Maarten (Dutch part)", "SXM");
    m.insert("Slovakia", "SVK");
    m.insert("Slovenia", "SVN");
    m.insert("Solomon Islands", "SLB");
    m.insert("Somalia", "SOM");
    m.insert("South Africa", "ZAF");
    m.insert("South Georgia and the South Sandwich Islands", "SGS");
    m.insert("South Sudan", "SSD");
    m.insert("Spain", "ESP");
    m.insert("España", "ESP");
    m.insert("Sri Lanka", "LKA");
    m.insert("Sudan", "SDN");
    m.insert("Suriname", "SUR");
    m.insert("Svalbard and Jan Mayen", "SJM");
    m.insert("Sweden", "SWE");
    m.insert("Switzerland", "CHE");
    m.insert("Syrian Arab Republic", "SYR");
    m.insert("Taiwan", "TWN");
    m.insert("Taiwan, Province of China", "TWN");
    m.insert("Tajikistan", "TJK");
    m.insert("Tanzania, United Republic of", "TZA");
    m.insert("Thailand", "THA");
    m.insert("Timor-Leste", "TLS");
    m.insert("Togo", "TGO");
    m.insert("Tokelau", "TKL");
    m.insert("Tonga", "TON");
    m.insert("Trinidad and Tobago", "TTO");
    m.insert("Tunisia", "TUN");
    m.insert("Türkiye", "TUR");
    m.insert("Turkey", "TUR");
    m.insert("Turkmenistan", "TKM");
    m.insert("Turks and Caicos Islands", "TCA");
    m.insert("Tuvalu", "TUV");
    m.insert("Uganda", "UGA");
    m.insert("Ukraine", "UKR");
    m.insert("United Arab Emirates", "ARE");
    m.insert("United Kingdom", "GBR");
    m.insert("United Kingdom of Great Britain and Northern Ireland", "GBR");
    m.insert("United States", "USA");
    m.insert("United States of America", "USA");
    m.insert("United States Minor Outlying Islands", "UMI");
    m.insert("Uruguay", "URY");
    m.insert("Uzbekistan", "UZB");
    m.insert("Vanuatu", "VUT");
    m.insert("Venezuela", "VEN");
    m.insert("Venezuela (Bolivarian Republic of)", "VEN");
    m.insert("Viet Nam", "VNM");
    m.insert("Vietnam", "VNM");
    m.insert("Virgin Islands (British)", "VGB");
    m.insert("Virgin Islands (U.S.)", "VIR");
    m.insert("Wallis and Futuna", "WLF");
    m.insert("Western Sahara", "ESH");
    m.insert("Yemen", "YEM");
    m.insert("Zambia", "ZMB");
    m.insert("Zimbabwe", "ZWE");

    m
});

// ============================================================================
// US STATES
// ============================================================================

/// US state, district and territory names -> USPS two-letter code.
pub static US_STATES_TO_CODES: Lazy<FxHashMap<&str, &str>> = Lazy::new(|| {
    let mut m = FxHashMap::default();

    m.insert("Alabama", "AL");
    m.insert("Alaska", "AK");
    m.insert("Arizona", "AZ");
    m.insert("Arkansas", "AR");
    m.insert("California", "CA");
    m.insert("Colorado", "CO");
    m.insert("Connecticut", "CT");
    m.insert("Delaware", "DE");
    m.insert("Florida", "FL");
    m.insert("Georgia", "GA");
    m.insert("Hawaii", "HI");
    m.insert("Idaho", "ID");
    m.insert("Illinois", "IL");
    m.insert("Indiana", "IN");
    m.insert("Iowa", "IA");
    m.insert("Kansas", "KS");
    m.insert("Kentucky", "KY");
    m.insert("Louisiana", "LA");
    m.insert("Maine", "ME");
    m.insert("Maryland", "MD");
    m.insert("Massachusetts", "MA");
    m.insert("Michigan", "MI");
    m.insert("Minnesota", "MN");
    m.insert("Mississippi", "MS");
    m.insert("Missouri", "MO");
    m.insert("Montana", "MT");
    m.insert("Nebraska", "NE");
    m.insert("Nevada", "NV");
    m.insert("New Hampshire", "NH");
    m.insert("New Jersey", "NJ");
    m.insert("New Mexico", "NM");
    m.insert("New York", "NY");
    m.insert("North Carolina", "NC");
    m.insert("North Dakota", "ND");
    m.insert("Ohio", "OH");
    m.insert("Oklahoma", "OK");
    m.insert("Oregon", "OR");
    m.insert("Pennsylvania", "PA");
    m.insert("Rhode Island", "RI");
    m.insert("South Carolina", "SC");
    m.insert("South Dakota", "SD");
    m.insert("Tennessee", "TN");
    m.insert("Texas", "TX");
    m.insert("Utah", "UT");
    m.insert("Vermont", "VT");
    m.insert("Virginia", "VA");
    m.insert("Washington", "WA");
    m.insert("West Virginia", "WV");
    m.insert("Wisconsin", "WI");
    m.insert("Wyoming", "WY");
    // District and territories
    m.insert("District of Columbia", "DC");
    m.insert("Washington, D.C.", "DC");
    m.insert("Washington DC", "DC");
    m.insert("American Samoa", "AS");
    m.insert("Guam", "GU");
    m.insert("Northern Mariana Islands", "MP");
    m.insert("Puerto Rico", "PR");
    m.insert("United States Virgin Islands", "VI");
    m.insert("U.S. Virgin Islands", "VI");

    m
});

// ============================================================================
// LOOKUPS
// ============================================================================

/// Three-letter code for a two-letter code, compared case-insensitively.
pub fn country_code_for_two_letter(code: &str) -> Option<&'static str> {
    COUNTRY_CODES_TWO_TO_THREE
        .get(code.to_uppercase().as_str())
        .copied()
}

pub fn country_code_for_name(name: &str) -> Option<&'static str> {
    COUNTRY_NAMES_TO_THREE.get(name).copied()
}

pub fn state_code_for_name(name: &str) -> Option<&'static str> {
    US_STATES_TO_CODES.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_letter_lookup_is_case_insensitive() {
        assert_eq!(country_code_for_two_letter("US"), Some("USA"));
        assert_eq!(country_code_for_two_letter("us"), Some("USA"));
        assert_eq!(country_code_for_two_letter("mx"), Some("MEX"));
        assert_eq!(country_code_for_two_letter("UK"), Some("GBR"));
        assert_eq!(country_code_for_two_letter("ZZ"), None);
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(country_code_for_name("United States"), Some("USA"));
        assert_eq!(country_code_for_name("Côte d'Ivoire"), Some("CIV"));
        assert_eq!(country_code_for_name("Atlantis"), None);
    }

    #[test]
    fn test_every_code_is_three_upper_letters() {
        for code in COUNTRY_CODES_TWO_TO_THREE
            .values()
            .chain(COUNTRY_NAMES_TO_THREE.values())
        {
            assert_eq!(code.len(), 3, "{}", code);
            assert!(code.chars().all(|c| c.is_ascii_uppercase()), "{}", code);
        }
    }

    #[test]
    fn test_state_lookup() {
        assert_eq!(state_code_for_name("Arizona"), Some("AZ"));
        assert_eq!(state_code_for_name("District of Columbia"), Some("DC"));
        assert_eq!(state_code_for_name("Ontario"), None);
        for code in US_STATES_TO_CODES.values() {
            assert_eq!(code.len(), 2);
        }
    }
}
