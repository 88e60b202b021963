// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::future::Future;

use evision_domain::{Coordinate, Role, Slot, SlotStatus, Station, User};

use crate::seed::{self, EV_USER_EMAIL, MECHANIC_EMAIL, OPERATOR_EMAIL};
use crate::{CoreError, Session, StationCatalog, StationProvider};

/// Koramangala, close to station 1.
pub const KORAMANGALA: Coordinate = Coordinate::new(12.935, 77.624);

pub fn create_ev_user() -> User {
    seed::user(EV_USER_EMAIL).unwrap()
}

pub fn create_mechanic() -> User {
    seed::user(MECHANIC_EMAIL).unwrap()
}

pub fn create_operator() -> User {
    seed::user(OPERATOR_EMAIL).unwrap()
}

pub fn create_session(role: Role) -> Session {
    let user: User = match role {
        Role::EvUser => create_ev_user(),
        Role::Mechanic => create_mechanic(),
        Role::StationOperator => create_operator(),
    };
    Session::new(user)
}

pub fn create_seeded_catalog() -> StationCatalog {
    StationCatalog::from_stations(seed::stations().unwrap())
}

/// A one-station catalog with a booked, an available and a peak slot.
pub fn create_small_catalog() -> StationCatalog {
    let station: Station = Station::new(
        1,
        "A",
        "1 Test Rd",
        Coordinate::new(0.0, 0.0),
        3,
        vec![
            Slot::new("14:00", SlotStatus::Booked),
            Slot::new("14:30", SlotStatus::Available),
            Slot::new("15:00", SlotStatus::Peak),
        ],
    )
    .unwrap();
    StationCatalog::from_stations(vec![station])
}

pub const fn fixed_clock() -> u64 {
    1_000
}

/// A station source that is never reachable.
pub struct UnreachableStationProvider;

impl StationProvider for UnreachableStationProvider {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Station>, CoreError>> + Send {
        std::future::ready(Err(CoreError::ProviderFailure {
            provider: String::from("stations"),
            message: String::from("connection refused"),
        }))
    }
}
