//! Core data models for address enrichment.
//!
//! This module contains the record being enriched, the secondary-source
//! entries it is reconciled against, the shapes returned by lookup
//! collaborators, and the output/statistics models.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// Minimal write-back payload: CRM field name -> new value.
/// A BTreeMap keeps the field order stable in every output.
pub type ChangeSet = BTreeMap<&'static str, String>;

/// CRM field names in row order. These are the CSV headers of a CRM export and
/// the keys of a [`ChangeSet`].
pub const CRM_FIELDS: [&str; 10] = [
    "Id",
    "Email",
    "MailingCity",
    "MailingCountry",
    "MailingLatitude",
    "MailingLongitude",
    "MailingPostalCode",
    "MailingState",
    "MailingStreet",
    "Metro_Area__c",
];

/// The canonical country code for the United States. Zip, state and metro
/// rules only apply to records carrying exactly this value.
pub const USA: &str = "USA";

/// CRM exports write missing values as null; the pipeline treats them as empty.
fn empty_if_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// CRM Record
// ============================================================================

/// One contact's postal address, as read from the CRM.
///
/// `uid` and `email` are fixed at construction. Every address field is free
/// text where empty means "unknown". `metro` is derived and recomputed on
/// every run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    #[serde(rename = "Id")]
    uid: String,
    #[serde(rename = "Email", default, deserialize_with = "empty_if_null")]
    email: String,
    #[serde(rename = "MailingCity", default, deserialize_with = "empty_if_null")]
    pub city: String,
    #[serde(rename = "MailingCountry", default, deserialize_with = "empty_if_null")]
    pub country: String,
    #[serde(rename = "MailingLatitude", default, deserialize_with = "empty_if_null")]
    pub latitude: String,
    #[serde(rename = "MailingLongitude", default, deserialize_with = "empty_if_null")]
    pub longitude: String,
    #[serde(rename = "MailingPostalCode", default, deserialize_with = "empty_if_null")]
    pub zipcode: String,
    #[serde(rename = "MailingState", default, deserialize_with = "empty_if_null")]
    pub state: String,
    #[serde(rename = "MailingStreet", default, deserialize_with = "empty_if_null")]
    pub street: String,
    #[serde(rename = "Metro_Area__c", default, deserialize_with = "empty_if_null")]
    pub metro: String,
}

impl AddressRecord {
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_usa(&self) -> bool {
        self.country == USA
    }

    /// Serialized row form, paired with the CRM field names.
    pub fn fields(&self) -> [(&'static str, &str); 10] {
        [
            (CRM_FIELDS[0], self.uid.as_str()),
            (CRM_FIELDS[1], self.email.as_str()),
            (CRM_FIELDS[2], self.city.as_str()),
            (CRM_FIELDS[3], self.country.as_str()),
            (CRM_FIELDS[4], self.latitude.as_str()),
            (CRM_FIELDS[5], self.longitude.as_str()),
            (CRM_FIELDS[6], self.zipcode.as_str()),
            (CRM_FIELDS[7], self.state.as_str()),
            (CRM_FIELDS[8], self.street.as_str()),
            (CRM_FIELDS[9], self.metro.as_str()),
        ]
    }

    /// Fields whose value differs from `original`, keyed by CRM field name.
    pub fn diff(&self, original: &AddressRecord) -> ChangeSet {
        self.fields()
            .into_iter()
            .zip(original.fields())
            .filter(|((_, new), (_, old))| new != old)
            .map(|((name, new), _)| (name, new.to_string()))
            .collect()
    }
}

// ============================================================================
// Mailing-List Models
// ============================================================================

/// Raw mailing-list export row.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MailingListRow {
    #[serde(rename = "Email Address")]
    pub email: String,
    #[serde(rename = "Address", default)]
    pub address: Option<String>,
    #[serde(rename = "LATITUDE", default)]
    pub latitude: Option<String>,
    #[serde(rename = "LONGITUDE", default)]
    pub longitude: Option<String>,
    #[serde(rename = "City State Country", default)]
    pub city_state_country: Option<String>,
}

/// The single address representation a mailing-list entry contributes.
/// Variants are listed in priority order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MailingListSource {
    /// Free-text label resolved through the static address table.
    AddressLabel(String),
    /// Coordinates to reverse-geocode, quote artifacts already stripped.
    Coordinates { latitude: String, longitude: String },
    /// "City, State, Country" free text.
    CityStateCountry(String),
    Empty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailingListEntry {
    pub email: String,
    pub source: MailingListSource,
}

/// Spreadsheet exports prefix numbers with `'` to keep them as text.
pub fn strip_quote_artifact(value: &str) -> &str {
    value.trim().trim_start_matches('\'')
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl From<MailingListRow> for MailingListEntry {
    fn from(row: MailingListRow) -> Self {
        let latitude = non_empty(row.latitude.as_deref().map(strip_quote_artifact));
        let longitude = non_empty(row.longitude.as_deref().map(strip_quote_artifact));

        let source = if let Some(label) = non_empty(row.address.as_deref()) {
            MailingListSource::AddressLabel(label.to_string())
        } else if let (Some(latitude), Some(longitude)) = (latitude, longitude) {
            MailingListSource::Coordinates {
                latitude: latitude.to_string(),
                longitude: longitude.to_string(),
            }
        } else if let Some(text) = non_empty(row.city_state_country.as_deref()) {
            MailingListSource::CityStateCountry(text.to_string())
        } else {
            MailingListSource::Empty
        };

        MailingListEntry {
            email: row.email,
            source,
        }
    }
}

// ============================================================================
// Lookup Results
// ============================================================================

/// Structured address returned by a reverse-geocoding lookup.
/// No `postcode` means "no match".
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GeocodedAddress {
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
}

/// Zip database answer for a known zip code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZipInfo {
    pub state: String,
    pub major_city: String,
}

/// Entry of the static address-label table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PostalAddress {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub country: String,
}

// ============================================================================
// Output Models
// ============================================================================

/// Write-back payload for one CRM record.
#[derive(Clone, Debug, Serialize)]
pub struct RecordUpdate {
    #[serde(rename = "Id")]
    pub uid: String,
    pub changes: ChangeSet,
}

/// A record excluded from write-back, with the reason.
#[derive(Clone, Debug, Serialize)]
pub struct RecordFailure {
    #[serde(rename = "Id")]
    pub uid: String,
    pub reason: String,
}

/// Everything a batch run hands back to the CRM collaborator.
#[derive(Clone, Debug, Default, Serialize)]
pub struct EnrichmentReport {
    pub updates: Vec<RecordUpdate>,
    pub failures: Vec<RecordFailure>,
    #[serde(skip)]
    pub records: Vec<AddressRecord>,
}

// ============================================================================
// Statistics (Instrumentation)
// ============================================================================

/// Per-stage counters for one batch run.
#[derive(Default, Debug, Clone, PartialEq, Serialize)]
pub struct EnrichStats {
    pub total_records: usize,

    // Reconciliation
    pub no_mailing_entry: usize,
    pub skipped_metro_computable: usize,
    pub via_address_label: usize,
    pub via_coordinates: usize,
    pub via_city_state_country: usize,
    pub unmatched_mailing_entries: usize,

    // Zip/metro
    pub zip_fills: usize,
    pub metro_assigned: usize,

    // Final totals
    pub records_changed: usize,
    pub failures: usize,

    pub elapsed_seconds: f64,
}

impl EnrichStats {
    /// Share of records that produced a non-empty change-set, as a percentage.
    pub fn change_rate(&self) -> f64 {
        if self.total_records == 0 {
            0.0
        } else {
            100.0 * self.records_changed as f64 / self.total_records as f64
        }
    }

    pub fn merge(&mut self, other: &EnrichStats) {
        self.total_records += other.total_records;
        self.no_mailing_entry += other.no_mailing_entry;
        self.skipped_metro_computable += other.skipped_metro_computable;
        self.via_address_label += other.via_address_label;
        self.via_coordinates += other.via_coordinates;
        self.via_city_state_country += other.via_city_state_country;
        self.unmatched_mailing_entries += other.unmatched_mailing_entries;
        self.zip_fills += other.zip_fills;
        self.metro_assigned += other.metro_assigned;
        self.records_changed += other.records_changed;
        self.failures += other.failures;
    }

    /// Log stats in JSON format
    pub fn log_summary(&self, phase: &str) {
        if let Ok(json) = serde_json::to_string_pretty(self) {
            tracing::info!(phase = phase, "stats\n{}", json);
        }
    }

    /// Write stats to a JSON file
    pub fn write_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
