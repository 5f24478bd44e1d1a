#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Location source contract and position update types.
//!
//! A [`LocationSource`] streams the device's position to an observer
//! channel: either [`LocationEvent::Position`] updates or a single
//! [`LocationEvent::Failure`]. Requesting platform permission is the
//! caller's concern; a missing grant arrives through the same failure
//! channel as any other problem.
//!
//! [`ScriptedLocationSource`] is the deterministic in-process
//! implementation used by tests and demos.

use chrono::{DateTime, Utc};
use geopicker_models::Coordinate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;

/// One position sample from a source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionUpdate {
    /// Sampled position.
    pub coordinate: Coordinate,
    /// When the sample was taken, not when it was delivered.
    pub timestamp: DateTime<Utc>,
}

/// Failures a location source can deliver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The platform refused access to the device position.
    #[error("location permission denied")]
    PermissionDenied,
    /// The position could not be determined.
    #[error("position unavailable: {0}")]
    Unavailable(String),
}

/// What a location source sends to its observer.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEvent {
    /// A position sample.
    Position(PositionUpdate),
    /// A failure; the stream is dead until restarted.
    Failure(LocationError),
}

/// The external "current device position" capability.
pub trait LocationSource: Send {
    /// Begins streaming events to `observer`.
    ///
    /// Calling `start` while already streaming restarts the stream on the
    /// new observer.
    fn start(&mut self, observer: UnboundedSender<LocationEvent>);

    /// Halts streaming. Idempotent, and safe to call when never started.
    fn stop(&mut self);
}

/// Replays a fixed script of events to the observer on `start`.
///
/// Stands in for the platform position service in tests and demos; the
/// whole script is delivered synchronously, stamped with the wall clock
/// at delivery.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLocationSource {
    script: Vec<LocationEvent>,
    streaming: bool,
}

impl ScriptedLocationSource {
    /// Creates a source that replays `script` on every `start`.
    #[must_use]
    pub fn new(script: Vec<LocationEvent>) -> Self {
        Self {
            script,
            streaming: false,
        }
    }

    /// Creates a source that delivers a single fresh position sample.
    #[must_use]
    pub fn with_position(coordinate: Coordinate) -> Self {
        Self::new(vec![LocationEvent::Position(PositionUpdate {
            coordinate,
            timestamp: Utc::now(),
        })])
    }

    /// Creates a source that fails immediately.
    #[must_use]
    pub fn with_failure(error: LocationError) -> Self {
        Self::new(vec![LocationEvent::Failure(error)])
    }

    /// Whether the source is currently streaming.
    #[must_use]
    pub const fn is_streaming(&self) -> bool {
        self.streaming
    }
}

impl LocationSource for ScriptedLocationSource {
    fn start(&mut self, observer: UnboundedSender<LocationEvent>) {
        self.streaming = true;
        for event in &self.script {
            // the observer may already be gone; nothing left to deliver to
            if observer.send(event.clone()).is_err() {
                log::debug!("location observer dropped, halting delivery");
                break;
            }
        }
    }

    fn stop(&mut self) {
        self.streaming = false;
    }
}
