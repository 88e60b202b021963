// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Distance ranking of charging stations.
//!
//! Ranking is a pure function of the station list and an optional user
//! location. Without a location every station carries the unknown-distance
//! sentinel and keeps its original position.

use crate::types::{Coordinate, Station};
use serde::{Deserialize, Serialize};

/// Mean earth radius used by the haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Battery percentage at or below which the nearest station is recommended.
pub const LOW_CHARGE_THRESHOLD: u8 = 30;

/// Value a [`Distance::Unknown`] serializes to.
pub const UNKNOWN_DISTANCE_SENTINEL: f64 = -1.0;

/// Great-circle distance between two coordinates, in kilometers.
#[must_use]
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let d_lat: f64 = (to.latitude - from.latitude).to_radians();
    let d_lon: f64 = (to.longitude - from.longitude).to_radians();
    let lat1: f64 = from.latitude.to_radians();
    let lat2: f64 = to.latitude.to_radians();

    let a: f64 = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Distance from the user to a station.
///
/// Serializes as kilometers, or as `-1` when unknown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "f64", from = "f64")]
pub enum Distance {
    /// Computed distance in kilometers.
    Known(f64),
    /// The user location is unavailable.
    Unknown,
}

impl Distance {
    /// Returns the distance in kilometers if known.
    #[must_use]
    pub const fn km(&self) -> Option<f64> {
        match self {
            Self::Known(km) => Some(*km),
            Self::Unknown => None,
        }
    }

    /// Returns true if the distance was computed.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl From<Distance> for f64 {
    fn from(distance: Distance) -> Self {
        distance.km().unwrap_or(UNKNOWN_DISTANCE_SENTINEL)
    }
}

impl From<f64> for Distance {
    fn from(km: f64) -> Self {
        if km.is_finite() && km >= 0.0 {
            Self::Known(km)
        } else {
            Self::Unknown
        }
    }
}

/// A station annotated with its distance from the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStation {
    #[serde(flatten)]
    pub station: Station,
    pub distance: Distance,
}

/// Ranks stations by distance from `location`.
///
/// With a location, results are sorted ascending by haversine distance,
/// ties broken by station id ascending. Without one, the original order is
/// kept and every entry carries [`Distance::Unknown`].
#[must_use]
pub fn rank_stations(stations: &[Station], location: Option<Coordinate>) -> Vec<RankedStation> {
    let Some(location) = location else {
        return stations
            .iter()
            .map(|station| RankedStation {
                station: station.clone(),
                distance: Distance::Unknown,
            })
            .collect();
    };

    let mut ranked: Vec<(f64, RankedStation)> = stations
        .iter()
        .map(|station| {
            let km: f64 = haversine_km(location, station.coordinate);
            (
                km,
                RankedStation {
                    station: station.clone(),
                    distance: Distance::Known(km),
                },
            )
        })
        .collect();

    ranked.sort_by(|(a_km, a), (b_km, b)| {
        a_km.total_cmp(b_km)
            .then_with(|| a.station.id.cmp(&b.station.id))
    });

    ranked.into_iter().map(|(_, entry)| entry).collect()
}

/// Recommends the closest station when the battery is low.
///
/// Returns `None` when `battery_pct` is above `threshold`, or when no entry
/// has a known distance. Entries with an unknown distance are never
/// recommended, whatever their position in the list.
#[must_use]
pub fn recommend_nearest(
    ranked: &[RankedStation],
    battery_pct: u8,
    threshold: u8,
) -> Option<&RankedStation> {
    if battery_pct > threshold {
        return None;
    }

    ranked
        .iter()
        .filter_map(|entry| entry.distance.km().map(|km| (km, entry)))
        .min_by(|(a_km, a), (b_km, b)| {
            a_km.total_cmp(b_km)
                .then_with(|| a.station.id.cmp(&b.station.id))
        })
        .map(|(_, entry)| entry)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;
    use crate::types::{Slot, SlotStatus};

    fn station(id: u32, latitude: f64, longitude: f64) -> Station {
        Station::new(
            id,
            &format!("Station {id}"),
            "Somewhere",
            Coordinate::new(latitude, longitude),
            2,
            vec![Slot::new("14:00", SlotStatus::Available)],
        )
        .unwrap_or_else(|e| panic!("station fixture: {e}"))
    }

    #[test]
    fn test_haversine_is_zero_for_same_point() {
        let point: Coordinate = Coordinate::new(12.9352, 77.6245);
        assert_eq!(haversine_km(point, point), 0.0);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let a: Coordinate = Coordinate::new(12.93, 77.62);
        let b: Coordinate = Coordinate::new(13.0239, 77.5529);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_one_degree_of_latitude() {
        let a: Coordinate = Coordinate::new(0.0, 0.0);
        let b: Coordinate = Coordinate::new(1.0, 0.0);
        // 2 * pi * 6371 / 360
        assert!((haversine_km(a, b) - 111.194_926_6).abs() < 1e-3);
    }

    #[test]
    fn test_rank_sorts_nearest_first() {
        let stations: Vec<Station> = vec![station(1, 12.93, 77.62), station(2, 12.97, 77.64)];
        let ranked = rank_stations(&stations, Some(Coordinate::new(12.94, 77.63)));

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].station.id, 1);
        assert_eq!(ranked[1].station.id, 2);
        assert!(ranked.iter().all(|r| r.distance.is_known()));
    }

    #[test]
    fn test_rank_orders_by_distance_not_input() {
        let stations: Vec<Station> = vec![station(1, 13.5, 77.6), station(2, 12.95, 77.6)];
        let ranked = rank_stations(&stations, Some(Coordinate::new(12.94, 77.6)));
        assert_eq!(ranked[0].station.id, 2);
    }

    #[test]
    fn test_rank_breaks_ties_by_id() {
        let stations: Vec<Station> = vec![station(7, 12.95, 77.6), station(3, 12.95, 77.6)];
        let ranked = rank_stations(&stations, Some(Coordinate::new(12.0, 77.0)));
        assert_eq!(ranked[0].station.id, 3);
        assert_eq!(ranked[1].station.id, 7);
    }

    #[test]
    fn test_rank_without_location_keeps_order_and_sentinel() {
        let stations: Vec<Station> = vec![station(2, 12.97, 77.64), station(1, 12.93, 77.62)];
        let ranked = rank_stations(&stations, None);

        let ids: Vec<u32> = ranked.iter().map(|r| r.station.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(ranked.iter().all(|r| r.distance == Distance::Unknown));
        assert!(
            ranked
                .iter()
                .all(|r| f64::from(r.distance) == UNKNOWN_DISTANCE_SENTINEL)
        );
    }

    #[test]
    fn test_recommend_only_when_low() {
        let stations: Vec<Station> = vec![station(1, 12.93, 77.62)];
        let ranked = rank_stations(&stations, Some(Coordinate::new(12.94, 77.63)));

        assert!(recommend_nearest(&ranked, 31, LOW_CHARGE_THRESHOLD).is_none());
        assert!(recommend_nearest(&ranked, 30, LOW_CHARGE_THRESHOLD).is_some());
        assert!(recommend_nearest(&ranked, 5, LOW_CHARGE_THRESHOLD).is_some());
    }

    #[test]
    fn test_recommend_never_returns_unknown_distance() {
        let stations: Vec<Station> = vec![station(1, 12.93, 77.62), station(2, 12.97, 77.64)];
        let ranked = rank_stations(&stations, None);
        assert!(recommend_nearest(&ranked, 10, LOW_CHARGE_THRESHOLD).is_none());
    }

    #[test]
    fn test_recommend_skips_sentinel_entry_in_front() {
        let mut ranked = rank_stations(&[station(1, 12.93, 77.62)], None);
        ranked.push(RankedStation {
            station: station(2, 12.97, 77.64),
            distance: Distance::Known(4.2),
        });

        let recommended = recommend_nearest(&ranked, 10, LOW_CHARGE_THRESHOLD);
        assert_eq!(recommended.map(|r| r.station.id), Some(2));
    }

    #[test]
    fn test_distance_serializes_as_sentinel() {
        let unknown = serde_json::to_string(&Distance::Unknown).unwrap_or_default();
        assert_eq!(unknown, "-1.0");
        let known = serde_json::to_string(&Distance::Known(2.5)).unwrap_or_default();
        assert_eq!(known, "2.5");
    }

    #[test]
    fn test_non_finite_distance_reads_as_unknown() {
        assert_eq!(Distance::from(f64::NAN), Distance::Unknown);
        assert_eq!(Distance::from(f64::INFINITY), Distance::Unknown);
        assert_eq!(Distance::from(-1.0), Distance::Unknown);
        assert_eq!(Distance::from(0.0), Distance::Known(0.0));
    }
}
