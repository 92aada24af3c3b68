//! Provides a client for interacting with the NY Times Districts API.
//!
//! This module defines the `DistrictClient` struct and its method for
//! resolving a coordinate pair into the electoral districts containing it.

use crate::error::{DistrictApiError, Result};
use crate::models::{District, DistrictMap, DistrictRecord, LatLng};
use reqwest::Client;
use tracing::{debug, error, info};

const BASE_URL: &str = "https://api.nytimes.com/svc/politics/v2";

/// An asynchronous client for the NY Times Districts API.
///
/// Holds the API key for the lifetime of the process; construct once and
/// reuse for every lookup.
pub struct DistrictClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl DistrictClient {
    /// Creates a new `DistrictClient` with the provided API key.
    ///
    /// Uses the default Districts API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`DistrictApiError::EmptyApiKey`] if the key is empty or all
    /// whitespace. Validation happens here, not on the first request.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Creates a new `DistrictClient` pointed at a custom base URL.
    ///
    /// Used mostly for testing against a mock server, but public because
    /// the endpoint is not under this crate's control.
    ///
    /// # Errors
    ///
    /// Returns [`DistrictApiError::EmptyApiKey`] if the key is empty or all
    /// whitespace.
    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(DistrictApiError::EmptyApiKey);
        }

        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Looks up the districts containing the given location.
    ///
    /// Corresponds to the `districts.json` endpoint of the Districts API.
    /// Issues a single GET request with the coordinates and API key as query
    /// parameters; there is no retry, caching, or call-site timeout, so the
    /// call may block for as long as the transport does.
    ///
    /// Returns the districts keyed by category label (e.g. "State Senate"),
    /// one entry per record in the response. An empty response array yields
    /// an empty map. Should the service ever repeat a label, later records
    /// overwrite earlier ones.
    ///
    /// # Errors
    ///
    /// [`DistrictApiError::Network`] when the transport fails,
    /// [`DistrictApiError::Http`] when the service answers with a non-success
    /// status, and [`DistrictApiError::Parse`] when the body is not the
    /// expected JSON array of records.
    pub async fn get_districts(&self, lat_lng: impl Into<LatLng>) -> Result<DistrictMap> {
        let LatLng { latitude, longitude } = lat_lng.into();

        info!("Fetching districts for ({}, {})", latitude, longitude);

        let url = format!("{}/districts.json", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lng", longitude.to_string()),
                ("api-key", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!(
                    "Error requesting districts for ({}, {}): {}",
                    latitude, longitude, e
                );
                DistrictApiError::from(e)
            })?;

        // Check HTTP status before touching the body. The body of an error
        // response is not parsed for detail.
        let status = response.status();
        if !status.is_success() {
            error!("Districts API request to {} failed with status {}", url, status);
            return Err(DistrictApiError::Http { status });
        }

        // Read the body in full first, so transport failures stay Network
        // errors and only decoding failures become Parse errors.
        let body = response.text().await.map_err(DistrictApiError::from)?;
        let records: Vec<DistrictRecord> = serde_json::from_str(&body).map_err(|e| {
            error!("Error parsing districts response JSON: {}", e);
            DistrictApiError::from(e)
        })?;

        debug!("Received {} district records", records.len());

        Ok(records
            .into_iter()
            .map(|record| (record.level.clone(), District::from(record)))
            .collect())
    }
}
