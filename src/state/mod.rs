//! Typed shapes exchanged with the GUI frontend.
//!
//! The backend serializes these shapes to JSON for the bridge layer; the
//! frontend-facing hydrator in [`crate::hydrate`] rebuilds them from raw
//! payloads. Everything here is a plain value: constructed per response,
//! read by the UI, then dropped.

pub mod types;

pub use types::{ActionResponse, BrewData, BrewPackage, ServiceInfo};
