// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::PostId;

/// Errors that can occur while applying domain rules.
///
/// Every variant is recoverable and reported to the caller as a typed
/// outcome. None of them indicate a fatal condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The email is unknown or the password does not match.
    InvalidCredentials,
    /// The device location could not be obtained.
    LocationUnavailable {
        /// Why the location is unavailable (e.g. "denied", "unsupported").
        reason: String,
    },
    /// Post or reply content was blank after trimming, or no author was present.
    RejectedEmpty,
    /// A slot that is not bookable was selected.
    InvalidSlotSelection {
        /// The station the slot belongs to.
        station_id: u32,
        /// The slot time label.
        time: String,
    },
    /// The slot was booked between selection and confirmation.
    SlotAlreadyBooked {
        /// The station the slot belongs to.
        station_id: u32,
        /// The slot time label.
        time: String,
    },
    /// No slot with the given time label exists at the station.
    SlotNotFound {
        /// The station that was searched.
        station_id: u32,
        /// The slot time label.
        time: String,
    },
    /// Station does not exist in the catalog.
    StationNotFound(u32),
    /// Two slots at one station share a time label.
    DuplicateSlotTime {
        /// The station carrying the duplicate.
        station_id: u32,
        /// The duplicated time label.
        time: String,
    },
    /// An appointment status change outside the permitted lifecycle.
    InvalidTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },
    /// Community post does not exist.
    PostNotFound(PostId),
    /// Appointment does not exist.
    AppointmentNotFound(u32),
    /// Role string is not one of the known roles.
    InvalidRole(String),
    /// Slot status string is not one of the known statuses.
    InvalidSlotStatus(String),
    /// Appointment status string is not one of the known statuses.
    InvalidAppointmentStatus(String),
    /// Battery percentage above 100.
    InvalidBatteryPercentage(u8),
    /// No post id above the last issued one remains.
    PostIdsExhausted,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "Invalid email or password"),
            Self::LocationUnavailable { reason } => {
                write!(f, "Location unavailable: {reason}")
            }
            Self::RejectedEmpty => write!(f, "Content must not be empty"),
            Self::InvalidSlotSelection { station_id, time } => {
                write!(
                    f,
                    "Slot '{time}' at station {station_id} is not available for selection"
                )
            }
            Self::SlotAlreadyBooked { station_id, time } => {
                write!(f, "Slot '{time}' at station {station_id} is already booked")
            }
            Self::SlotNotFound { station_id, time } => {
                write!(f, "Slot '{time}' not found at station {station_id}")
            }
            Self::StationNotFound(id) => write!(f, "Station {id} not found"),
            Self::DuplicateSlotTime { station_id, time } => {
                write!(
                    f,
                    "Slot time '{time}' appears more than once at station {station_id}"
                )
            }
            Self::InvalidTransition { from, to } => {
                write!(f, "Invalid appointment transition from {from} to {to}")
            }
            Self::PostNotFound(id) => write!(f, "Post {} not found", id.value()),
            Self::AppointmentNotFound(id) => write!(f, "Appointment {id} not found"),
            Self::InvalidRole(role) => write!(f, "Invalid role: {role}"),
            Self::InvalidSlotStatus(status) => write!(f, "Invalid slot status: {status}"),
            Self::InvalidAppointmentStatus(status) => {
                write!(f, "Invalid appointment status: {status}")
            }
            Self::InvalidBatteryPercentage(pct) => {
                write!(
                    f,
                    "Invalid battery percentage: {pct}. Must be between 0 and 100"
                )
            }
            Self::PostIdsExhausted => write!(f, "No post ids remain"),
        }
    }
}

impl std::error::Error for DomainError {}
