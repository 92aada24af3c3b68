//! Data structures for the Districts API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A latitude/longitude pair identifying the location to look up.
///
/// Convertible from a plain `(f64, f64)` tuple so call sites can pass a bare
/// pair. Latitude is expected in [-90, 90] and longitude in [-180, 180], but
/// range checking is left to the remote service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<(f64, f64)> for LatLng {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self { latitude, longitude }
    }
}

/// One element of the response array, as returned by the service.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DistrictRecord {
    /// Which political body this district elects to (e.g. "State Senate").
    pub level: String,
    /// The name or number of the district. Often numeric-looking, but
    /// treated as opaque text.
    pub district: String,
    /// URL of a KML file describing the district's boundaries.
    pub kml_url: String,
}

/// A district as exposed to callers: identifier plus boundary-file URL.
///
/// The category label is not repeated here; it is the key under which the
/// district is stored in a [`DistrictMap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct District {
    /// The name or number of the district.
    pub district: String,
    /// URL of a KML file describing the district's boundaries.
    pub kml_url: String,
}

impl From<DistrictRecord> for District {
    fn from(record: DistrictRecord) -> Self {
        Self {
            district: record.district,
            kml_url: record.kml_url,
        }
    }
}

/// Districts keyed by their category label (the record's `level` field).
pub type DistrictMap = HashMap<String, District>;
