//! Canonical-form normalization for address records.
//!
//! Normalization only rewrites data already present on the record. It never
//! consults a lookup service and never fills an empty field.
//!
//! Step order matters: state and zip rules key off the canonical country
//! code produced by the first step.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::codes::{country_code_for_name, country_code_for_two_letter, state_code_for_name};
use crate::error::NormalizeError;
use crate::models::AddressRecord;

// ============================================================================
// REGEX PATTERNS
// ============================================================================

/// A run of letters. Title casing restarts after anything that is not a
/// letter, so "ST. PAUL" and "WINSTON-SALEM" keep their punctuation.
pub static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Alphabetic}+").unwrap());

/// Separator between a five-digit zip and its extension.
pub const ZIP_SEPARATOR: char = '-';

pub const ZIP_LENGTH: usize = 5;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// True when the text has at least one cased letter and no lower-case ones.
pub fn is_all_upper(s: &str) -> bool {
    let mut has_cased = false;
    for c in s.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// Upper-case the first letter of every word, lower-case the rest.
/// e.g., "ST. PAUL" → "St. Paul", "O'FALLON" → "O'Fallon"
pub fn title_case(s: &str) -> String {
    WORD.replace_all(s, |caps: &Captures| {
        let mut chars = caps[0].chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    })
    .into_owned()
}

// ============================================================================
// NORMALIZATION STEPS
// ============================================================================

/// Resolve a country value to its three-letter code.
///
/// Two-letter codes and long-form names must resolve. Three-letter values are
/// accepted verbatim, as are single characters.
pub fn canonical_country(uid: &str, country: &str) -> Result<Option<&'static str>, NormalizeError> {
    let unrecognized = || NormalizeError::UnrecognizedCountry {
        uid: uid.to_string(),
        country: country.to_string(),
    };
    match country.chars().count() {
        2 => country_code_for_two_letter(country).map(Some).ok_or_else(unrecognized),
        n if n > 3 => country_code_for_name(country).map(Some).ok_or_else(unrecognized),
        _ => Ok(None),
    }
}

fn normalize_country(record: &mut AddressRecord) -> Result<(), NormalizeError> {
    if record.country.is_empty() {
        return Ok(());
    }
    if let Some(code) = canonical_country(record.uid(), &record.country)? {
        record.country = code.to_string();
    }
    Ok(())
}

fn normalize_state(record: &mut AddressRecord) -> Result<(), NormalizeError> {
    if !record.is_usa() || record.state.chars().count() <= 2 {
        return Ok(());
    }
    let code = state_code_for_name(&record.state).ok_or_else(|| NormalizeError::UnrecognizedState {
        uid: record.uid().to_string(),
        state: record.state.clone(),
    })?;
    record.state = code.to_string();
    Ok(())
}

fn normalize_city(record: &mut AddressRecord) {
    if is_all_upper(&record.city) {
        record.city = title_case(&record.city);
    }
}

fn normalize_zip(record: &mut AddressRecord) -> Result<(), NormalizeError> {
    if !record.is_usa() || record.zipcode.chars().count() <= ZIP_LENGTH {
        return Ok(());
    }
    if record.zipcode.chars().nth(ZIP_LENGTH) != Some(ZIP_SEPARATOR) {
        return Err(NormalizeError::MalformedZip {
            uid: record.uid().to_string(),
            zipcode: record.zipcode.clone(),
        });
    }
    record.zipcode = record.zipcode.chars().take(ZIP_LENGTH).collect();
    Ok(())
}

/// Put country, state, city and zip into canonical form. Idempotent.
///
/// On error the record may be partially normalized; callers drop it.
pub fn normalize(record: &mut AddressRecord) -> Result<(), NormalizeError> {
    normalize_country(record)?;
    normalize_state(record)?;
    normalize_city(record);
    normalize_zip(record)?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, state: &str, city: &str, zipcode: &str) -> AddressRecord {
        let mut r = AddressRecord::new("003A", "someone@example.org");
        r.country = country.to_string();
        r.state = state.to_string();
        r.city = city.to_string();
        r.zipcode = zipcode.to_string();
        r
    }

    fn normalized(mut r: AddressRecord) -> AddressRecord {
        normalize(&mut r).unwrap();
        r
    }

    #[test]
    fn test_normalize_usa_country() {
        for input in ["US", "us", "United States", "USA"] {
            assert_eq!(normalized(record(input, "", "", "")).country, "USA", "{}", input);
        }
        assert_eq!(normalized(record("MEX", "", "", "")).country, "MEX");
        assert_eq!(normalized(record("Germany", "", "", "")).country, "DEU");
        assert_eq!(normalized(record("", "", "", "")).country, "");
    }

    #[test]
    fn test_unrecognized_country() {
        for input in ["ZZ", "Atlantis"] {
            let mut r = record(input, "", "", "");
            assert_eq!(
                normalize(&mut r),
                Err(NormalizeError::UnrecognizedCountry {
                    uid: "003A".to_string(),
                    country: input.to_string(),
                })
            );
        }
    }

    #[test]
    fn test_three_letter_country_passes_through() {
        assert_eq!(normalized(record("XYZ", "", "", "")).country, "XYZ");
    }

    #[test]
    fn test_normalize_state() {
        assert_eq!(normalized(record("USA", "Arizona", "", "")).state, "AZ");
        assert_eq!(normalized(record("USA", "AZ", "", "")).state, "AZ");
        assert_eq!(normalized(record("MEX", "Arizona", "", "")).state, "Arizona");
        assert_eq!(normalized(record("US", "New York", "", "")).state, "NY");
    }

    #[test]
    fn test_every_known_state_name_maps() {
        for (name, code) in crate::codes::US_STATES_TO_CODES.iter() {
            assert_eq!(normalized(record("USA", name, "", "")).state, *code);
        }
    }

    #[test]
    fn test_unrecognized_state() {
        let mut r = record("USA", "Ontario", "", "");
        assert!(matches!(
            normalize(&mut r),
            Err(NormalizeError::UnrecognizedState { ref state, .. }) if state == "Ontario"
        ));
        // Non-US states are never checked
        assert!(normalize(&mut record("CAN", "Ontario", "", "")).is_ok());
    }

    #[test]
    fn test_normalize_city_capitalization() {
        assert_eq!(normalized(record("", "", "ST. PAUL", "")).city, "St. Paul");
        assert_eq!(normalized(record("", "", "St. Paul", "")).city, "St. Paul");
        assert_eq!(normalized(record("", "", "WINSTON-SALEM", "")).city, "Winston-Salem");
        assert_eq!(normalized(record("", "", "McAllen", "")).city, "McAllen");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("O'FALLON"), "O'Fallon");
        assert_eq!(title_case("SÃO PAULO"), "São Paulo");
        assert_eq!(title_case("29 PALMS"), "29 Palms");
    }

    #[test]
    fn test_is_all_upper() {
        assert!(is_all_upper("NEW YORK"));
        assert!(is_all_upper("ST. PAUL"));
        assert!(!is_all_upper("New York"));
        assert!(!is_all_upper("123"));
        assert!(!is_all_upper(""));
    }

    #[test]
    fn test_normalize_zip_code_length() {
        assert_eq!(normalized(record("USA", "", "", "11370-2314")).zipcode, "11370");
        assert_eq!(normalized(record("USA", "", "", "11370")).zipcode, "11370");
        assert_eq!(normalized(record("USA", "", "", "")).zipcode, "");
        assert_eq!(normalized(record("MEX", "", "", "11370-2314")).zipcode, "11370-2314");
        assert_eq!(normalized(record("USA", "", "", "02134-")).zipcode, "02134");
    }

    #[test]
    fn test_malformed_zip() {
        let mut r = record("USA", "", "", "113702314");
        assert_eq!(
            normalize(&mut r),
            Err(NormalizeError::MalformedZip {
                uid: "003A".to_string(),
                zipcode: "113702314".to_string(),
            })
        );
        // Non-US postal codes are left alone
        assert!(normalize(&mut record("GBR", "", "", "SW1A 1AA")).is_ok());
    }

    #[test]
    fn test_normalize_full_record() {
        let r = normalized(record("US", "Arizona", "ST. PAUL", "11370-2314"));
        assert_eq!(r.country, "USA");
        assert_eq!(r.state, "AZ");
        assert_eq!(r.city, "St. Paul");
        assert_eq!(r.zipcode, "11370");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            record("US", "Arizona", "ST. PAUL", "11370-2314"),
            record("United States", "New York", "NEW YORK", "10001"),
            record("mx", "Jalisco", "GUADALAJARA", "44100-000"),
            record("", "", "A B", ""),
        ];
        for input in inputs {
            let once = normalized(input);
            let twice = normalized(once.clone());
            assert_eq!(once, twice);
        }
    }
}
