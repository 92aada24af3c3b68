//! Defines the data structures used throughout the library.
//!
//! This includes the wire-format struct deserialized from Districts API
//! responses and the value objects handed back to callers.

mod districts;

pub use districts::*;
