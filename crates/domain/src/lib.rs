// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod appointment_status;
mod error;
mod operator;
mod ranking;
mod telemetry;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use appointment_status::AppointmentStatus;
pub use error::DomainError;
pub use operator::{OperatorBooking, OperatorBookingStatus, OperatorConsole};
pub use ranking::{
    Distance, EARTH_RADIUS_KM, LOW_CHARGE_THRESHOLD, RankedStation, UNKNOWN_DISTANCE_SENTINEL,
    haversine_km, rank_stations, recommend_nearest,
};
pub use telemetry::{ChargeBand, EvStatus, HIGH_CHARGE_THRESHOLD, MaintenanceAlert, Severity};
pub use types::{
    Appointment, CommunityPost, Coordinate, PostId, Role, Slot, SlotStatus, Station, User,
};
pub use validation::{validate_post_content, validate_slot_times_unique};
