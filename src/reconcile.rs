//! Reconciliation of a CRM record against its mailing-list entry.
//!
//! Runs before normalization, so values pulled in here still go through the
//! canonicalization rules (e.g. a geocoder's "us" becomes "USA").
//!
//! Precedence between sources:
//! - The address-label and city/state/country strategies only fill fields that
//!   are currently empty.
//! - The coordinate strategy overwrites the whole address, because a resolved
//!   address must not be blended with a stale one.

use tracing::debug;

use crate::error::LookupError;
use crate::models::{AddressRecord, GeocodedAddress, MailingListEntry, MailingListSource};
use crate::tables::AddressBook;

// ============================================================================
// Collaborator
// ============================================================================

/// Reverse-geocoding service.
///
/// `query` is `"{latitude}, {longitude}"`. An address without a postcode is a
/// valid "no match" answer; `Err` is reserved for transport failures.
pub trait ReverseGeocoder: Sync {
    fn reverse(&self, query: &str) -> Result<GeocodedAddress, LookupError>;
}

// ============================================================================
// Outcome
// ============================================================================

/// What reconciliation did to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// No mailing-list entry for this email.
    NoEntry,
    /// Zip, or city and country, already present; the entry was not consulted.
    MetroComputable,
    AddressLabel,
    Coordinates,
    CityStateCountry,
    /// The entry was consulted but yielded nothing usable.
    NoMatch,
}

// ============================================================================
// Helpers
// ============================================================================

/// Set `field` to `value` only if `field` is empty. Returns whether it changed.
pub fn assign_if_empty(field: &mut String, value: &str) -> bool {
    if field.is_empty() && !value.is_empty() {
        *field = value.to_string();
        true
    } else {
        false
    }
}

/// A metro area can be derived once a zip, or both city and country, are known.
pub fn metro_computable(record: &AddressRecord) -> bool {
    !record.zipcode.is_empty() || (!record.city.is_empty() && !record.country.is_empty())
}

/// Split "City, State, Country" into its three trimmed parts.
pub fn split_city_state_country(text: &str) -> Option<(&str, &str, &str)> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [city, state, country] => Some((*city, *state, *country)),
        _ => None,
    }
}

// ============================================================================
// Strategies
// ============================================================================

fn apply_address_label(record: &mut AddressRecord, label: &str, addresses: &AddressBook) -> bool {
    let Some(address) = addresses.get(label) else {
        debug!(uid = record.uid(), label, "unknown address label");
        return false;
    };
    assign_if_empty(&mut record.country, &address.country);
    assign_if_empty(&mut record.state, &address.state);
    assign_if_empty(&mut record.city, &address.city);
    assign_if_empty(&mut record.zipcode, &address.zipcode);
    assign_if_empty(&mut record.street, &address.street);
    true
}

fn apply_coordinates(
    record: &mut AddressRecord,
    latitude: &str,
    longitude: &str,
    geocoder: &dyn ReverseGeocoder,
) -> Result<bool, LookupError> {
    let address = geocoder.reverse(&format!("{}, {}", latitude, longitude))?;
    let postcode = match address.postcode.as_deref() {
        Some(postcode) if !postcode.is_empty() => postcode.to_string(),
        _ => {
            debug!(uid = record.uid(), latitude, longitude, "no geocode match");
            return Ok(false);
        }
    };

    record.latitude = latitude.to_string();
    record.longitude = longitude.to_string();
    record.zipcode = postcode;
    record.street.clear();
    record.country = address
        .country_code
        .map(|code| code.to_uppercase())
        .unwrap_or_default();
    record.state = address.state.unwrap_or_default();
    record.city = address.city.unwrap_or_default();
    Ok(true)
}

fn apply_city_state_country(record: &mut AddressRecord, text: &str) -> bool {
    let Some((city, state, country)) = split_city_state_country(text) else {
        debug!(uid = record.uid(), text, "unparseable city/state/country");
        return false;
    };
    assign_if_empty(&mut record.city, city);
    assign_if_empty(&mut record.state, state);
    assign_if_empty(&mut record.country, country);
    true
}

/// Pull missing address data for `record` from its mailing-list entry.
///
/// At most one reverse-geocode call is made.
pub fn reconcile(
    record: &mut AddressRecord,
    entry: Option<&MailingListEntry>,
    geocoder: &dyn ReverseGeocoder,
    addresses: &AddressBook,
) -> Result<Reconciliation, LookupError> {
    let Some(entry) = entry else {
        return Ok(Reconciliation::NoEntry);
    };
    if metro_computable(record) {
        return Ok(Reconciliation::MetroComputable);
    }

    let applied = match &entry.source {
        MailingListSource::AddressLabel(label) => {
            apply_address_label(record, label, addresses).then_some(Reconciliation::AddressLabel)
        }
        MailingListSource::Coordinates { latitude, longitude } => {
            apply_coordinates(record, latitude, longitude, geocoder)?
                .then_some(Reconciliation::Coordinates)
        }
        MailingListSource::CityStateCountry(text) => {
            apply_city_state_country(record, text).then_some(Reconciliation::CityStateCountry)
        }
        MailingListSource::Empty => None,
    };
    Ok(applied.unwrap_or(Reconciliation::NoMatch))
}
