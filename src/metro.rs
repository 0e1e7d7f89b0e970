//! Zip-code gap filling and metro-area classification for US records.
//!
//! Both steps run after normalization, so they see the canonical `USA`
//! country code and five-digit zips.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::LookupError;
use crate::models::{AddressRecord, ZipInfo};
use crate::reconcile::assign_if_empty;
use crate::tables::ReferenceTables;

/// Zip-code database. Unknown zips are `Ok(None)`.
pub trait ZipDatabase: Sync {
    fn lookup(&self, zipcode: &str) -> Result<Option<ZipInfo>, LookupError>;
}

impl ZipDatabase for FxHashMap<String, ZipInfo> {
    fn lookup(&self, zipcode: &str) -> Result<Option<ZipInfo>, LookupError> {
        Ok(self.get(zipcode).cloned())
    }
}

/// Fill an empty state and/or city from the zip database.
///
/// Returns whether any field was filled. At most one lookup is made.
pub fn fill_via_zip(record: &mut AddressRecord, zip_db: &dyn ZipDatabase) -> Result<bool, LookupError> {
    if !record.is_usa() || record.zipcode.is_empty() {
        return Ok(false);
    }
    if !record.state.is_empty() && !record.city.is_empty() {
        return Ok(false);
    }
    let Some(info) = zip_db.lookup(&record.zipcode)? else {
        debug!(uid = record.uid(), zipcode = %record.zipcode, "unknown zip");
        return Ok(false);
    };
    let filled_state = assign_if_empty(&mut record.state, &info.state);
    let filled_city = assign_if_empty(&mut record.city, &info.major_city);
    Ok(filled_state || filled_city)
}

/// Recompute `metro` from the zip, or from (city, state) when there is no zip.
///
/// Any previous value is discarded: a record outside the US, or one whose
/// key is missing from the tables, ends up with an empty metro.
pub fn classify_metro(record: &mut AddressRecord, tables: &ReferenceTables) {
    let metro = if !record.is_usa() {
        None
    } else if !record.zipcode.is_empty() {
        tables.metro_for_zip(&record.zipcode)
    } else if !record.city.is_empty() && !record.state.is_empty() {
        tables.metro_for_city_state(&record.city, &record.state)
    } else {
        None
    };
    record.metro = metro.unwrap_or_default().to_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zip_db() -> FxHashMap<String, ZipInfo> {
        let mut db = FxHashMap::default();
        db.insert(
            "11370".to_string(),
            ZipInfo {
                state: "NY".to_string(),
                major_city: "East Elmhurst".to_string(),
            },
        );
        db
    }

    fn tables() -> ReferenceTables {
        let mut tables = ReferenceTables::default();
        tables
            .zip_to_metro
            .insert("11370".to_string(), "My Metro".to_string());
        tables.city_state_to_metro.insert(
            ("St. Paul".to_string(), "MN".to_string()),
            "Minneapolis-St. Paul".to_string(),
        );
        tables
    }

    fn record(country: &str, zipcode: &str) -> AddressRecord {
        let mut r = AddressRecord::new("003A", "someone@example.org");
        r.country = country.to_string();
        r.zipcode = zipcode.to_string();
        r
    }

    #[test]
    fn test_fill_via_zip() {
        let mut r = record("USA", "11370");
        assert!(fill_via_zip(&mut r, &zip_db()).unwrap());
        assert_eq!(r.state, "NY");
        assert_eq!(r.city, "East Elmhurst");

        let mut r = record("MEX", "11370");
        assert!(!fill_via_zip(&mut r, &zip_db()).unwrap());
        assert_eq!(r.state, "");
        assert_eq!(r.city, "");
    }

    #[test]
    fn test_fill_via_zip_keeps_existing_values() {
        let mut r = record("USA", "11370");
        r.city = "Queens".to_string();
        assert!(fill_via_zip(&mut r, &zip_db()).unwrap());
        assert_eq!(r.state, "NY");
        assert_eq!(r.city, "Queens");

        let mut r = record("USA", "11370");
        r.city = "Queens".to_string();
        r.state = "NY".to_string();
        assert!(!fill_via_zip(&mut r, &zip_db()).unwrap());
        assert_eq!(r.city, "Queens");
    }

    #[test]
    fn test_fill_via_unknown_zip_is_noop() {
        let mut r = record("USA", "99999");
        assert!(!fill_via_zip(&mut r, &zip_db()).unwrap());
        assert_eq!(r.state, "");

        let mut r = record("USA", "");
        assert!(!fill_via_zip(&mut r, &zip_db()).unwrap());
    }

    #[test]
    fn test_populate_metro_area() {
        let cases = [
            ("USA", "11370", "My Metro"),
            ("USA", "99999", ""),
            ("USA", "", ""),
            ("MEX", "11370", ""),
        ];
        for (country, zipcode, expected) in cases {
            let mut r = record(country, zipcode);
            classify_metro(&mut r, &tables());
            assert_eq!(r.metro, expected, "{} {}", country, zipcode);
        }
    }

    #[test]
    fn test_metro_via_city_and_state() {
        let mut r = record("USA", "");
        r.city = "St. Paul".to_string();
        r.state = "MN".to_string();
        classify_metro(&mut r, &tables());
        assert_eq!(r.metro, "Minneapolis-St. Paul");

        // The zip wins whenever it is present, even if unknown
        r.zipcode = "99999".to_string();
        classify_metro(&mut r, &tables());
        assert_eq!(r.metro, "");
    }

    #[test]
    fn test_metro_overwrites_stale_value() {
        let mut r = record("CAN", "");
        r.metro = "Old Metro".to_string();
        classify_metro(&mut r, &tables());
        assert_eq!(r.metro, "");

        let mut r = record("USA", "");
        r.city = "Austin".to_string();
        r.metro = "Old Metro".to_string();
        classify_metro(&mut r, &tables());
        assert_eq!(r.metro, "");
    }
}
