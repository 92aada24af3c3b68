//! Client library for the NY Times Districts API.
//!
//! The Districts API maps a latitude/longitude pair to the electoral
//! districts containing it (City Council, State Senate, and so on). This
//! crate wraps that lookup behind a single client type: construct a
//! [`DistrictClient`] with your API key, call
//! [`get_districts`](DistrictClient::get_districts) with a coordinate pair,
//! and receive the districts keyed by their category label.
//!
//! ```no_run
//! use district_api::DistrictClient;
//!
//! # async fn example() -> district_api::Result<()> {
//! let client = DistrictClient::new("my-api-key")?;
//! let districts = client.get_districts((40.606031, -74.082686)).await?;
//!
//! if let Some(senate) = districts.get("State Senate") {
//!     println!("State Senate district {} ({})", senate.district, senate.kml_url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! A call either succeeds with the complete mapping or fails with one of
//! the [`DistrictApiError`] variants. There is no retry policy and no
//! partial result; a failed call surfaces immediately to the caller.

pub mod api;
pub mod error;
pub mod models;

pub use api::DistrictClient;
pub use error::{DistrictApiError, Result};
pub use models::{District, DistrictMap, LatLng};
