//! Provides the client for the NY Times Districts API.
//!
//! Includes:
//! - `districts`: the `DistrictClient` and its lookup method.

mod districts;

pub use districts::*;
