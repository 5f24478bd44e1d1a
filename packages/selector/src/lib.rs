#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Place selection state machine, address formatting and distance.
//!
//! [`PlaceSelector`] tracks which place a user currently has picked: none,
//! one entry from a list of search results, or "wherever the device is
//! right now". A UI layer owns a selector per picker screen, feeds it
//! events (results arrived, row tapped, position arrived) and reads back
//! the derived coordinate and display name to draw rows and labels. The
//! selector itself never talks to a geocoder or a location source; those
//! live in `geopicker_geocode` and `geopicker_location`.
//!
//! The [`format`] and [`distance`] modules hold the pure helpers the
//! screens share: mailing-address layout, the `φ/λ` coordinate label and
//! great-circle distance.

pub mod distance;
pub mod format;

use chrono::{DateTime, TimeDelta, Utc};
use geopicker_models::{Coordinate, Place};
use thiserror::Error;

/// Display name used while a current-location selection is active.
pub const CURRENT_LOCATION_NAME: &str = "Current Location";

/// Placeholder display name while nothing is selected.
pub const PLACEHOLDER_NAME: &str = "Select a Place";

/// Maximum age of a position sample before it is discarded, in seconds.
///
/// Measured against the clock at delivery time, so a good sample that sat
/// in a queue for longer than this is dropped too.
pub const MAX_SAMPLE_AGE_SECS: i64 = 30;

/// Which kind of selection is currently active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionKind {
    /// Nothing picked yet, or the previous pick was invalidated.
    #[default]
    Unselected,
    /// One entry of the current search-result list.
    FromSearchResults,
    /// The device's own position.
    FromCurrentLocation,
}

/// Errors from selection operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// The index does not address an entry of the current result list.
    #[error("search result index {index} out of range ({len} results)")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Length of the result list at the time of the call.
        len: usize,
    },
}

/// State machine for "which place has the user picked".
///
/// Starts out [`SelectionKind::Unselected`] and transitions on external
/// events only. Not internally synchronized: the owning screen serializes
/// access and marshals async completions onto its own context before
/// applying them here.
#[derive(Debug, Clone, Default)]
pub struct PlaceSelector {
    kind: SelectionKind,
    search_results: Vec<Place>,
    chosen_index: Option<usize>,
    current_location: Coordinate,
}

impl PlaceSelector {
    /// Creates a selector with no results and nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active selection kind.
    #[must_use]
    pub const fn kind(&self) -> SelectionKind {
        self.kind
    }

    /// The current search-result list, in gateway response order.
    #[must_use]
    pub fn search_results(&self) -> &[Place] {
        &self.search_results
    }

    /// Index of the chosen search result, when one is chosen.
    #[must_use]
    pub const fn chosen_index(&self) -> Option<usize> {
        self.chosen_index
    }

    /// Replaces the search-result list with a fresh gateway response.
    ///
    /// Any selection made from the old list no longer points at anything
    /// meaningful, so a `FromSearchResults` selection reverts to
    /// `Unselected`. A current-location selection is unaffected.
    pub fn set_search_results(&mut self, results: Vec<Place>) {
        if self.kind == SelectionKind::FromSearchResults {
            log::debug!("search results replaced, dropping stale selection");
            self.kind = SelectionKind::Unselected;
        }
        self.chosen_index = None;
        self.search_results = results;
    }

    /// Selects the search result at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::OutOfRange`] when `index` does not address
    /// an entry of the current result list. Out-of-range indices are
    /// rejected rather than clamped; clamping would silently pick the
    /// wrong place.
    pub fn choose_search_result(&mut self, index: usize) -> Result<(), SelectorError> {
        if index >= self.search_results.len() {
            return Err(SelectorError::OutOfRange {
                index,
                len: self.search_results.len(),
            });
        }
        self.kind = SelectionKind::FromSearchResults;
        self.chosen_index = Some(index);
        Ok(())
    }

    /// Selects "current location".
    ///
    /// The stored coordinate resets to the invalid sentinel until a
    /// position arrives; the caller is responsible for starting its
    /// location source.
    pub fn choose_current_location(&mut self) {
        self.kind = SelectionKind::FromCurrentLocation;
        self.current_location = Coordinate::INVALID;
    }

    /// Applies a position update from the location source.
    ///
    /// Ignored unless a current-location selection is active. Samples
    /// whose timestamp differs from `now` by more than
    /// [`MAX_SAMPLE_AGE_SECS`] are silently dropped; staleness is not an
    /// error.
    pub fn receive_current_location(
        &mut self,
        coordinate: Coordinate,
        timestamp: DateTime<Utc>,
        now: DateTime<Utc>,
    ) {
        if self.kind != SelectionKind::FromCurrentLocation {
            return;
        }
        if (now - timestamp).abs() > TimeDelta::seconds(MAX_SAMPLE_AGE_SECS) {
            log::debug!("dropping stale position sample from {timestamp}");
            return;
        }
        self.current_location = coordinate;
    }

    /// Records that the current-location lookup failed.
    ///
    /// The selection reverts to `Unselected` and the stored coordinate to
    /// the invalid sentinel. The search-result list is kept so the screen
    /// can still offer it.
    pub fn location_lookup_failed(&mut self) {
        self.kind = SelectionKind::Unselected;
        self.chosen_index = None;
        self.current_location = Coordinate::INVALID;
    }

    /// Resets the selector to its initial state.
    pub fn clear(&mut self) {
        self.kind = SelectionKind::Unselected;
        self.search_results.clear();
        self.chosen_index = None;
        self.current_location = Coordinate::INVALID;
    }

    /// The coordinate of the active selection.
    ///
    /// [`Coordinate::INVALID`] when nothing is selected, when the chosen
    /// place carries no coordinate, or while a current-location fix is
    /// still pending.
    #[must_use]
    pub fn selected_coordinate(&self) -> Coordinate {
        match self.kind {
            SelectionKind::Unselected => Coordinate::INVALID,
            SelectionKind::FromSearchResults => self
                .chosen_place()
                .and_then(|place| place.coordinate)
                .unwrap_or(Coordinate::INVALID),
            SelectionKind::FromCurrentLocation => self.current_location,
        }
    }

    /// A display name for the active selection.
    ///
    /// The chosen place's formatted postal address, the fixed
    /// [`CURRENT_LOCATION_NAME`] string, or the [`PLACEHOLDER_NAME`]
    /// placeholder when nothing is selected.
    #[must_use]
    pub fn selected_display_name(&self) -> String {
        match self.kind {
            SelectionKind::Unselected => PLACEHOLDER_NAME.to_string(),
            SelectionKind::FromCurrentLocation => CURRENT_LOCATION_NAME.to_string(),
            SelectionKind::FromSearchResults => self
                .chosen_place()
                .map_or_else(|| PLACEHOLDER_NAME.to_string(), format::postal_address),
        }
    }

    /// Whether the active selection resolves to a real coordinate.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.selected_coordinate().is_valid()
    }

    fn chosen_place(&self) -> Option<&Place> {
        self.chosen_index
            .and_then(|index| self.search_results.get(index))
    }
}
