//! Reverse-geocoding collaborators.

use reqwest::blocking::Client;
use serde::Deserialize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::error::LookupError;
use crate::models::GeocodedAddress;
use crate::reconcile::ReverseGeocoder;

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// Settings for [`NominatimGeocoder`].
#[derive(Clone, Debug)]
pub struct GeocoderConfig {
    pub base_url: String,
    /// Nominatim rejects requests without an identifying user agent.
    pub user_agent: String,
    pub timeout: Duration,
    /// Minimum spacing between two requests, shared by all workers.
    pub min_interval: Duration,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NOMINATIM_URL.to_string(),
            user_agent: concat!("address-enrich/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(10),
            min_interval: Duration::from_secs(1),
        }
    }
}

/// Nominatim `/reverse` response. Failed lookups carry `error` instead of
/// `address`.
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    address: Option<GeocodedAddress>,
    #[serde(default)]
    error: Option<String>,
}

/// Parse `"{latitude}, {longitude}"`.
pub fn parse_query(query: &str) -> Result<(f64, f64), LookupError> {
    let invalid = || LookupError::Geocoder(format!("invalid coordinates '{}'", query));
    let (lat, lon) = query.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;
    Ok((lat, lon))
}

/// Blocking client for a Nominatim reverse-geocoding endpoint.
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl NominatimGeocoder {
    pub fn new(config: GeocoderConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            min_interval: config.min_interval,
            last_request: Mutex::new(None),
        })
    }

    /// Block until `min_interval` has passed since the previous request.
    fn throttle(&self) {
        let mut last = self
            .last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                std::thread::sleep(self.min_interval - elapsed);
            }
        }
        *last = Some(Instant::now());
    }
}

impl ReverseGeocoder for NominatimGeocoder {
    fn reverse(&self, query: &str) -> Result<GeocodedAddress, LookupError> {
        // Bad coordinates are a miss, not a service failure
        let (lat, lon) = match parse_query(query) {
            Ok(coordinates) => coordinates,
            Err(err) => {
                tracing::debug!(query, error = %err, "skipping unparseable coordinates");
                return Ok(GeocodedAddress::default());
            }
        };
        self.throttle();

        let url = format!("{}/reverse", self.base_url);
        let response: ReverseResponse = self
            .client
            .get(&url)
            .query(&[
                ("format", "jsonv2".to_string()),
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("addressdetails", "1".to_string()),
            ])
            .send()?
            .error_for_status()?
            .json()?;

        if let Some(error) = response.error {
            tracing::debug!(query, error = %error, "geocoder returned no result");
        }
        Ok(response.address.unwrap_or_default())
    }
}

/// Geocoder for offline runs: every lookup is a miss.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoGeocoder;

impl ReverseGeocoder for NoGeocoder {
    fn reverse(&self, _query: &str) -> Result<GeocodedAddress, LookupError> {
        Ok(GeocodedAddress::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        assert_eq!(parse_query("1.1, 4.2").unwrap(), (1.1, 4.2));
        assert_eq!(parse_query("40.7128,-74.006").unwrap(), (40.7128, -74.006));
        assert!(parse_query("1.1").is_err());
        assert!(parse_query("north, west").is_err());
    }

    #[test]
    fn test_reverse_response_with_address() {
        let body = r#"{
            "place_id": 1,
            "display_name": "East Elmhurst, Queens, New York, 11370, United States",
            "address": {
                "city": "New York",
                "state": "New York",
                "postcode": "11370",
                "country": "United States",
                "country_code": "us"
            }
        }"#;
        let response: ReverseResponse = serde_json::from_str(body).unwrap();
        let address = response.address.unwrap();
        assert_eq!(address.country_code.as_deref(), Some("us"));
        assert_eq!(address.city.as_deref(), Some("New York"));
        assert_eq!(address.postcode.as_deref(), Some("11370"));
    }

    #[test]
    fn test_reverse_response_error() {
        let body = r#"{"error": "Unable to geocode"}"#;
        let response: ReverseResponse = serde_json::from_str(body).unwrap();
        assert!(response.address.is_none());
        assert_eq!(response.error.as_deref(), Some("Unable to geocode"));
    }

    #[test]
    fn test_no_geocoder_never_matches() {
        let address = NoGeocoder.reverse("1.1, 4.2").unwrap();
        assert!(address.postcode.is_none());
    }

    #[test]
    fn test_unparseable_coordinates_are_a_miss() {
        let geocoder = NominatimGeocoder::new(GeocoderConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            ..GeocoderConfig::default()
        })
        .unwrap();
        // Never reaches the network
        let address = geocoder.reverse("N/A, N/A").unwrap();
        assert_eq!(address, GeocodedAddress::default());
    }

    #[test]
    fn test_config_default() {
        let config = GeocoderConfig::default();
        assert_eq!(config.base_url, DEFAULT_NOMINATIM_URL);
        assert!(config.user_agent.starts_with("address-enrich/"));
        assert!(NominatimGeocoder::new(config).is_ok());
    }
}
