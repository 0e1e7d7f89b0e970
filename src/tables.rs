//! Loaded reference tables: metro-area mappings and the address-label book.
//!
//! These are read once before any record is processed and shared read-only
//! across workers.

use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use crate::models::PostalAddress;

/// US zip code -> metro-area name.
pub type ZipToMetro = FxHashMap<String, String>;

/// (US city, two-letter state) -> metro-area name.
pub type CityStateToMetro = FxHashMap<(String, String), String>;

/// Exact address label -> postal address.
pub type AddressBook = FxHashMap<String, PostalAddress>;

#[derive(Clone, Debug, Default)]
pub struct ReferenceTables {
    pub zip_to_metro: ZipToMetro,
    pub city_state_to_metro: CityStateToMetro,
    pub addresses: AddressBook,
}

impl ReferenceTables {
    pub fn metro_for_zip(&self, zipcode: &str) -> Option<&str> {
        self.zip_to_metro.get(zipcode).map(String::as_str)
    }

    pub fn metro_for_city_state(&self, city: &str, state: &str) -> Option<&str> {
        self.city_state_to_metro
            .get(&(city.to_string(), state.to_string()))
            .map(String::as_str)
    }
}

// ============================================================================
// CSV Loaders
// ============================================================================

#[derive(Deserialize)]
struct ZipMetroRow {
    #[serde(rename = "Zip Code")]
    zipcode: String,
    #[serde(rename = "Primary CBSA Name", default)]
    metro: String,
}

#[derive(Deserialize)]
struct CityMetroRow {
    city: String,
    state: String,
    metro: String,
}

#[derive(Deserialize)]
struct AddressLabelRow {
    label: String,
    #[serde(default)]
    street: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    zipcode: String,
    #[serde(default)]
    country: String,
}

impl From<AddressLabelRow> for (String, PostalAddress) {
    fn from(row: AddressLabelRow) -> Self {
        let address = PostalAddress {
            street: row.street,
            city: row.city,
            state: row.state,
            zipcode: row.zipcode,
            country: row.country,
        };
        (row.label, address)
    }
}

/// Zips without a primary metro are left out: they classify as "no metro".
pub fn read_zip_to_metro<R: Read>(reader: R) -> Result<ZipToMetro> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut table = ZipToMetro::default();
    for row in rdr.deserialize() {
        let row: ZipMetroRow = row.context("Invalid zip-to-metro row")?;
        if !row.metro.is_empty() {
            table.insert(row.zipcode, row.metro);
        }
    }
    Ok(table)
}

pub fn read_city_state_to_metro<R: Read>(reader: R) -> Result<CityStateToMetro> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut table = CityStateToMetro::default();
    for row in rdr.deserialize() {
        let row: CityMetroRow = row.context("Invalid city-to-metro row")?;
        table.insert((row.city, row.state), row.metro);
    }
    Ok(table)
}

pub fn read_address_book<R: Read>(reader: R) -> Result<AddressBook> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut table = AddressBook::default();
    for row in rdr.deserialize() {
        let row: AddressLabelRow = row.context("Invalid address-label row")?;
        let (label, address) = row.into();
        table.insert(label, address);
    }
    Ok(table)
}

fn open(path: &Path) -> Result<std::fs::File> {
    std::fs::File::open(path).with_context(|| format!("Failed to open {}", path.display()))
}

/// Paths of the reference files. Any table without a path loads empty.
#[derive(Clone, Debug, Default)]
pub struct ReferencePaths<'a> {
    pub zip_to_metro: Option<&'a Path>,
    pub city_state_to_metro: Option<&'a Path>,
    pub addresses: Option<&'a Path>,
}

impl ReferenceTables {
    pub fn load(paths: &ReferencePaths<'_>) -> Result<Self> {
        let mut tables = ReferenceTables::default();
        if let Some(path) = paths.zip_to_metro {
            tables.zip_to_metro = read_zip_to_metro(open(path)?)
                .with_context(|| format!("Failed to read {}", path.display()))?;
        }
        if let Some(path) = paths.city_state_to_metro {
            tables.city_state_to_metro = read_city_state_to_metro(open(path)?)
                .with_context(|| format!("Failed to read {}", path.display()))?;
        }
        if let Some(path) = paths.addresses {
            tables.addresses = read_address_book(open(path)?)
                .with_context(|| format!("Failed to read {}", path.display()))?;
        }
        tracing::info!(
            zips = tables.zip_to_metro.len(),
            cities = tables.city_state_to_metro.len(),
            labels = tables.addresses.len(),
            "loaded reference tables"
        );
        Ok(tables)
    }
}
