// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Station catalog and distance-ranked view.
//!
//! The catalog owns the station/slot dataset for the session. Stations are
//! fetched once from a [`StationProvider`]; the user location comes from a
//! [`LocationProvider`] that may fail or never answer. The ranked view is
//! usable as soon as stations are loaded, whether or not a location ever
//! arrives.

use std::future::Future;
use std::time::Duration;

use evision_domain::{
    Coordinate, DomainError, RankedStation, Station, rank_stations, recommend_nearest,
};
use tracing::{debug, info, warn};

use crate::error::CoreError;

/// How long to wait for a location before falling back to the unranked view.
pub const DEFAULT_LOCATE_TIMEOUT: Duration = Duration::from_secs(3);

/// Source of the station dataset.
pub trait StationProvider {
    /// Fetches every station in a single round trip.
    fn fetch(&self) -> impl Future<Output = Result<Vec<Station>, CoreError>> + Send;
}

/// Source of the device location.
///
/// Implementations report denial or lack of support as
/// `DomainError::LocationUnavailable`. They may also never complete.
pub trait LocationProvider {
    /// Requests the current coordinate.
    fn request(&self) -> impl Future<Output = Result<Coordinate, DomainError>> + Send;
}

/// Progress of the location request.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationState {
    /// Requested, no answer yet.
    Pending,
    /// The provider answered with a coordinate.
    Resolved(Coordinate),
    /// The provider refused or failed.
    Rejected(DomainError),
    /// No answer within the allotted time.
    TimedOut,
}

impl LocationState {
    /// The resolved coordinate, if any.
    #[must_use]
    pub const fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Self::Resolved(coordinate) => Some(*coordinate),
            Self::Pending | Self::Rejected(_) | Self::TimedOut => None,
        }
    }

    /// Returns true once the request has settled one way or another.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Requests a location, giving up after `timeout`.
///
/// A provider that never answers yields [`LocationState::TimedOut`] rather
/// than leaving the caller waiting.
pub async fn locate_with_timeout<L: LocationProvider>(
    provider: &L,
    timeout: Duration,
) -> LocationState {
    match tokio::time::timeout(timeout, provider.request()).await {
        Ok(Ok(coordinate)) => {
            debug!(
                latitude = coordinate.latitude,
                longitude = coordinate.longitude,
                "Location resolved"
            );
            LocationState::Resolved(coordinate)
        }
        Ok(Err(err)) => {
            warn!(error = %err, "Location rejected");
            LocationState::Rejected(err)
        }
        Err(_) => {
            warn!(timeout = ?timeout, "Location request timed out");
            LocationState::TimedOut
        }
    }
}

/// The station dataset plus the user location it is ranked against.
#[derive(Debug, Clone)]
pub struct StationCatalog {
    stations: Vec<Station>,
    loaded: bool,
    location: LocationState,
}

impl Default for StationCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl StationCatalog {
    /// Creates an empty catalog with nothing loaded and location pending.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stations: Vec::new(),
            loaded: false,
            location: LocationState::Pending,
        }
    }

    /// Creates a catalog over an already-fetched dataset.
    #[must_use]
    pub const fn from_stations(stations: Vec<Station>) -> Self {
        Self {
            stations,
            loaded: true,
            location: LocationState::Pending,
        }
    }

    /// Loads the station dataset from `provider`.
    ///
    /// # Returns
    ///
    /// The number of stations loaded.
    ///
    /// # Errors
    ///
    /// Returns the provider's error. The catalog is left unchanged.
    pub async fn load<P: StationProvider>(&mut self, provider: &P) -> Result<usize, CoreError> {
        let stations: Vec<Station> = provider.fetch().await?;
        info!(count = stations.len(), "Stations loaded");
        self.stations = stations;
        self.loaded = true;
        Ok(self.stations.len())
    }

    /// Requests the user location and records the outcome.
    ///
    /// Rejection and timeout both leave the catalog in the unranked view.
    pub async fn locate<L: LocationProvider>(
        &mut self,
        provider: &L,
        timeout: Duration,
    ) -> &LocationState {
        self.location = LocationState::Pending;
        let state: LocationState = locate_with_timeout(provider, timeout).await;
        self.set_location(state);
        &self.location
    }

    /// Records a location outcome obtained elsewhere.
    pub fn set_location(&mut self, state: LocationState) {
        self.location = state;
    }

    /// The current location state.
    #[must_use]
    pub const fn location(&self) -> &LocationState {
        &self.location
    }

    /// Returns true once the dataset has been loaded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The stations in provider order.
    #[must_use]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Looks up a station by id.
    #[must_use]
    pub fn station(&self, station_id: u32) -> Option<&Station> {
        self.stations.iter().find(|station| station.id == station_id)
    }

    pub(crate) fn station_mut(&mut self, station_id: u32) -> Option<&mut Station> {
        self.stations
            .iter_mut()
            .find(|station| station.id == station_id)
    }

    /// The distance-ranked view.
    ///
    /// Empty until stations are loaded. Without a resolved location the
    /// stations keep provider order and carry the unknown-distance sentinel.
    #[must_use]
    pub fn ranked(&self) -> Vec<RankedStation> {
        if !self.loaded {
            return Vec::new();
        }
        rank_stations(&self.stations, self.location.coordinate())
    }

    /// The nearest station to recommend when the battery is at or below
    /// `threshold`.
    #[must_use]
    pub fn recommend(&self, battery_pct: u8, threshold: u8) -> Option<RankedStation> {
        let ranked: Vec<RankedStation> = self.ranked();
        recommend_nearest(&ranked, battery_pct, threshold).cloned()
    }
}
