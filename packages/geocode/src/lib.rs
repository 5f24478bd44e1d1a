#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geocoding gateway contract and single-outstanding-request client.
//!
//! [`GeocodingGateway`] is the boundary to whatever actually resolves
//! addresses and coordinates (a platform service, an HTTP provider, a
//! test stub); this crate deliberately ships no transport of its own.
//! [`client::LookupClient`] wraps a gateway and enforces the one rule the
//! picker screens rely on: at most one outstanding lookup, where issuing
//! a new one cancels the previous.

pub mod client;

use async_trait::async_trait;
use geopicker_models::{Coordinate, Place};
use thiserror::Error;

/// Errors surfaced by geocoding lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeocodeError {
    /// The lookup completed but matched nothing.
    #[error("no places were found")]
    NoResult,
    /// The lookup was cancelled, typically because a newer one replaced it.
    #[error("lookup was cancelled")]
    Cancelled,
    /// The provider returned only a partial match set.
    #[error("lookup returned a partial result")]
    PartialResult,
    /// Any other provider failure.
    #[error("lookup failed: {0}")]
    Other(String),
}

/// An optional hint area narrowing a forward lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasRegion {
    /// Center of the hint area.
    pub center: Coordinate,
    /// Radius of the hint area in meters.
    pub radius_meters: f64,
}

impl BiasRegion {
    /// Default hint radius: 50 km.
    pub const DEFAULT_RADIUS_METERS: f64 = 50_000.0;

    /// Creates a hint region around `center` with the default radius.
    #[must_use]
    pub const fn new(center: Coordinate) -> Self {
        Self {
            center,
            radius_meters: Self::DEFAULT_RADIUS_METERS,
        }
    }
}

/// The external geocoding capability.
///
/// Implementations resolve lookups however they like, but an empty match
/// set must surface as [`GeocodeError::NoResult`] rather than an empty
/// `Vec`, so callers have a single "nothing found" path.
#[async_trait]
pub trait GeocodingGateway: Send + Sync {
    /// Resolves free-form text to places, best match first.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] when the lookup fails or matches nothing.
    async fn forward_lookup(
        &self,
        query: &str,
        bias: Option<&BiasRegion>,
    ) -> Result<Vec<Place>, GeocodeError>;

    /// Resolves a coordinate to the places containing or nearest to it.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError`] when the lookup fails or matches nothing.
    async fn reverse_lookup(&self, coordinate: Coordinate) -> Result<Vec<Place>, GeocodeError>;
}
